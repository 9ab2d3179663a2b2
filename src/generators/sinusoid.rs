//! Sampled sinusoid generator.

use super::Waveform;
use crate::Signal;
use crate::error::{Error, Result};
use std::f64::consts::PI;

/// Number of samples produced when the caller does not ask for a length.
pub const DEFAULT_SAMPLES: usize = 100;

/// A sampled sine or cosine wave.
///
/// Sample `n` is `A · sin(2π·(F/Fs)·n + θ)` (or `cos` for
/// [`Waveform::Cosine`]). The generator is an iterator over samples and never
/// ends on its own; use [`Sinusoid::signal`] to collect a fixed length.
///
/// # Examples
///
/// ```
/// use ripple::{Sinusoid, Waveform};
///
/// let wave = Sinusoid::new(Waveform::Cosine, 2.0, 1.0, 4.0, 0.0).unwrap();
/// let signal = wave.signal(4);
/// assert_eq!(signal.indices(), &[0, 1, 2, 3]);
/// assert!((signal.values()[0] - 2.0).abs() < 1e-12);
/// assert!((signal.values()[2] + 2.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Sinusoid {
    waveform: Waveform,
    amplitude: f64,
    analog_frequency: f64,
    sampling_frequency: f64,
    phase: f64,
    /// Index of the next sample to emit
    position: u64,
}

impl Sinusoid {
    /// Creates a generator after checking the sampling parameters.
    ///
    /// # Arguments
    ///
    /// * `waveform` - Sine or cosine
    /// * `amplitude` - Peak amplitude `A`
    /// * `analog_frequency` - Analog frequency `F` in Hz
    /// * `sampling_frequency` - Sampling frequency `Fs` in Hz
    /// * `phase` - Phase shift `θ` in radians
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidValue`] if any parameter is not finite, if
    /// `Fs <= 0` or `F < 0`, or if `Fs < 2F` (the Nyquist condition).
    pub fn new(
        waveform: Waveform,
        amplitude: f64,
        analog_frequency: f64,
        sampling_frequency: f64,
        phase: f64,
    ) -> Result<Self> {
        let all_finite = [amplitude, analog_frequency, sampling_frequency, phase]
            .iter()
            .all(|v| v.is_finite());
        if !all_finite {
            return Err(Error::invalid("sinusoid parameters must be finite"));
        }
        if sampling_frequency <= 0.0 {
            return Err(Error::invalid(format!(
                "sampling frequency must be positive, got {sampling_frequency} Hz"
            )));
        }
        if analog_frequency < 0.0 {
            return Err(Error::invalid(format!(
                "analog frequency must not be negative, got {analog_frequency} Hz"
            )));
        }
        if sampling_frequency < 2.0 * analog_frequency {
            return Err(Error::invalid(format!(
                "sampling frequency ({sampling_frequency} Hz) must be at least twice \
                 the analog frequency ({analog_frequency} Hz)"
            )));
        }

        Ok(Self {
            waveform,
            amplitude,
            analog_frequency,
            sampling_frequency,
            phase,
            position: 0,
        })
    }

    /// The waveform shape.
    pub fn waveform(&self) -> Waveform {
        self.waveform
    }

    /// `F / Fs`, in cycles per sample.
    pub fn normalized_frequency(&self) -> f64 {
        self.analog_frequency / self.sampling_frequency
    }

    /// Value of sample `n`.
    pub fn sample_at(&self, n: u64) -> f64 {
        let angle = 2.0 * PI * self.normalized_frequency() * n as f64 + self.phase;
        let unit = match self.waveform {
            Waveform::Sine => angle.sin(),
            Waveform::Cosine => angle.cos(),
        };
        self.amplitude * unit
    }

    /// Rewinds the generator to sample 0.
    pub fn reset(&mut self) {
        self.position = 0;
    }

    /// Collects samples `0..num_samples` into a zero-based signal.
    pub fn signal(&self, num_samples: usize) -> Signal {
        Signal::from_values((0..num_samples as u64).map(|n| self.sample_at(n)).collect())
    }
}

impl Iterator for Sinusoid {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        let sample = self.sample_at(self.position);
        self.position += 1;
        Some(sample)
    }
}
