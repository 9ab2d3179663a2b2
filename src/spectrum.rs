//! Direct discrete Fourier transform.
//!
//! The transforms here are the textbook O(N²) sums, computed without an FFT:
//!
//! ```text
//! forward:  X[k] = Σ x[n] · e^{-2πi·k·n/N}
//! inverse:  x[n] = (1/N) · Σ X[k] · e^{+2πi·k·n/N}
//! ```
//!
//! [`Spectrum::inverse`] rounds each reconstructed sample to the nearest
//! integer and drops the imaginary part. That reproduces integer-valued
//! signals exactly but throws away the fractional part of real-valued ones;
//! use [`Spectrum::inverse_complex`] when the unrounded samples are needed.

use crate::error::{Error, Result};
use num_complex::Complex64;
use std::f64::consts::TAU;

/// Direction of a transform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Time domain to frequency domain
    Forward,
    /// Frequency domain to time domain, including the `1/N` normalisation
    Inverse,
}

/// Runs the direct transform over complex input in the given direction.
///
/// # Errors
///
/// Returns [`Error::InvalidValue`] if `input` is empty.
pub fn transform(input: &[Complex64], direction: Direction) -> Result<Vec<Complex64>> {
    if input.is_empty() {
        return Err(Error::invalid("cannot transform an empty sequence"));
    }

    let n = input.len();
    let sign = match direction {
        Direction::Forward => -1.0,
        Direction::Inverse => 1.0,
    };

    let mut output: Vec<Complex64> = (0..n)
        .map(|k| {
            input
                .iter()
                .enumerate()
                .map(|(t, &x)| {
                    // Reduce k·t mod N first to keep the angle small
                    let turn = ((k * t) % n) as f64 / n as f64;
                    x * Complex64::from_polar(1.0, sign * TAU * turn)
                })
                .sum::<Complex64>()
        })
        .collect();

    if direction == Direction::Inverse {
        let scale = 1.0 / n as f64;
        for value in &mut output {
            *value *= scale;
        }
    }

    tracing::trace!(samples = n, ?direction, "direct dft");
    Ok(output)
}

/// Computes the spectrum of a real-valued sequence.
///
/// # Errors
///
/// Returns [`Error::InvalidValue`] if `values` is empty.
///
/// # Examples
///
/// ```
/// use ripple::dft;
///
/// let spectrum = dft(&[1.0, 0.0, 0.0, 0.0]).unwrap();
/// assert!(spectrum.magnitudes().iter().all(|&m| (m - 1.0).abs() < 1e-12));
/// assert_eq!(spectrum.inverse(), vec![1.0, 0.0, 0.0, 0.0]);
/// ```
pub fn dft(values: &[f64]) -> Result<Spectrum> {
    let input: Vec<Complex64> = values.iter().map(|&v| Complex64::new(v, 0.0)).collect();
    transform(&input, Direction::Forward).map(|bins| Spectrum { bins })
}

/// Reconstructs a time-domain sequence from DFT bins, rounding each sample.
///
/// Free-function form of [`Spectrum::inverse`].
///
/// # Errors
///
/// Returns [`Error::InvalidValue`] if `bins` is empty.
pub fn idft(bins: &[Complex64]) -> Result<Vec<f64>> {
    let samples = transform(bins, Direction::Inverse)?;
    Ok(samples.iter().map(|c| c.re.round()).collect())
}

/// DFT bins of a signal, indexed `0..N`.
#[derive(Debug, Clone, PartialEq)]
pub struct Spectrum {
    bins: Vec<Complex64>,
}

impl Spectrum {
    /// Wraps existing bins, for example a spectrum edited by the caller.
    pub fn from_bins(bins: Vec<Complex64>) -> Self {
        Self { bins }
    }

    /// The complex bins.
    pub fn bins(&self) -> &[Complex64] {
        &self.bins
    }

    /// Number of bins, equal to the length of the transformed signal.
    pub fn len(&self) -> usize {
        self.bins.len()
    }

    /// Returns true if there are no bins.
    pub fn is_empty(&self) -> bool {
        self.bins.is_empty()
    }

    /// `|X[k]|` for each bin.
    pub fn magnitudes(&self) -> Vec<f64> {
        self.bins.iter().map(|c| c.norm()).collect()
    }

    /// `atan2(Im, Re)` for each bin, or 0 where the bin is exactly zero.
    pub fn phases(&self) -> Vec<f64> {
        self.bins
            .iter()
            .map(|c| if c.re == 0.0 && c.im == 0.0 { 0.0 } else { c.arg() })
            .collect()
    }

    /// Frequency axis `f[k] = k · fs / N` for a sampling frequency `fs`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidValue`] unless `fs` is positive and finite.
    ///
    /// # Examples
    ///
    /// ```
    /// use ripple::dft;
    ///
    /// let spectrum = dft(&[0.0; 4]).unwrap();
    /// assert_eq!(spectrum.frequencies(8.0).unwrap(), vec![0.0, 2.0, 4.0, 6.0]);
    /// ```
    pub fn frequencies(&self, sampling_frequency: f64) -> Result<Vec<f64>> {
        if !(sampling_frequency.is_finite() && sampling_frequency > 0.0) {
            return Err(Error::invalid(format!(
                "sampling frequency must be positive, got {sampling_frequency}"
            )));
        }
        let n = self.bins.len() as f64;
        Ok((0..self.bins.len())
            .map(|k| k as f64 * sampling_frequency / n)
            .collect())
    }

    /// Inverse transform, keeping the rounded real part of each sample.
    ///
    /// Returns an empty vector for an empty spectrum.
    pub fn inverse(&self) -> Vec<f64> {
        self.inverse_complex()
            .iter()
            .map(|c| c.re.round())
            .collect()
    }

    /// Inverse transform without rounding or discarding the imaginary part.
    pub fn inverse_complex(&self) -> Vec<Complex64> {
        transform(&self.bins, Direction::Inverse).unwrap_or_default()
    }
}
