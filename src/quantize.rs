//! Uniform mid-rise quantization.
//!
//! The value range `[min, max]` of the input is split into `L` equal steps.
//! Each sample is coded by the step it falls in and reconstructed at the
//! midpoint of that step, so a reconstruction never lands exactly on a range
//! boundary.

use crate::error::{Error, Result};

/// Largest accepted bit count; `2^31` levels still fit a `u32` code.
pub const MAX_BITS: u32 = 31;

/// How many quantization levels to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantizerSpec {
    /// An explicit level count, which must be greater than 1.
    Levels(u32),
    /// A bit count `b` in `1..=31`, giving `2^b` levels.
    Bits(u32),
}

impl QuantizerSpec {
    /// Resolves the request to a level count.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidValue`] for fewer than two levels or a bit
    /// count outside `1..=31`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ripple::QuantizerSpec;
    ///
    /// assert_eq!(QuantizerSpec::Bits(3).levels().unwrap(), 8);
    /// assert_eq!(QuantizerSpec::Levels(5).levels().unwrap(), 5);
    /// assert!(QuantizerSpec::Levels(1).levels().is_err());
    /// ```
    pub fn levels(self) -> Result<u32> {
        match self {
            QuantizerSpec::Levels(levels) if levels > 1 => Ok(levels),
            QuantizerSpec::Levels(levels) => Err(Error::invalid(format!(
                "levels must be greater than 1, got {levels}"
            ))),
            QuantizerSpec::Bits(bits) if (1..=MAX_BITS).contains(&bits) => Ok(1 << bits),
            QuantizerSpec::Bits(bits) => Err(Error::invalid(format!(
                "bits must be between 1 and {MAX_BITS}, got {bits}"
            ))),
        }
    }

    /// The bit count, when the quantizer was configured in bits.
    pub fn bits(self) -> Option<u32> {
        match self {
            QuantizerSpec::Bits(bits) => Some(bits),
            QuantizerSpec::Levels(_) => None,
        }
    }
}

/// Output of a quantization pass.
///
/// All three sequences run parallel to the input samples.
#[derive(Debug, Clone, PartialEq)]
pub struct Quantization {
    /// Reconstructed sample values
    pub reconstructed: Vec<f64>,
    /// `original - reconstructed` for each sample
    pub errors: Vec<f64>,
    /// Integer level code of each sample, in `0..levels`
    pub codes: Vec<u32>,
    /// Number of quantization levels used
    pub levels: u32,
    /// Width of one level, `(max - min) / levels`; 0 for a constant input
    pub step: f64,
    /// Bit count, when the levels were requested in bits
    pub bits: Option<u32>,
}

/// Quantizes `values` uniformly over their own range.
///
/// With `step = (max - min) / L`, each sample gets
/// `code = clamp(floor((x - min) / step), 0, L - 1)` and is reconstructed at
/// `min + (code + 0.5) * step`. When every sample is equal the range is
/// degenerate: all codes are 0 and the samples reconstruct exactly.
///
/// # Errors
///
/// Returns [`Error::EmptyState`] for an empty input and
/// [`Error::InvalidValue`] for an invalid level or bit count or non-finite samples.
///
/// # Examples
///
/// ```
/// use ripple::{QuantizerSpec, quantize};
///
/// let q = quantize(&[0.0, 1.0, 2.0, 8.0], QuantizerSpec::Levels(4)).unwrap();
/// assert_eq!(q.codes, vec![0, 0, 1, 3]);
/// assert_eq!(q.reconstructed, vec![1.0, 1.0, 3.0, 7.0]);
/// assert_eq!(q.errors, vec![-1.0, 0.0, -1.0, 1.0]);
/// ```
pub fn quantize(values: &[f64], spec: QuantizerSpec) -> Result<Quantization> {
    let levels = spec.levels()?;
    if values.is_empty() {
        return Err(Error::EmptyState("quantize"));
    }
    if values.iter().any(|v| !v.is_finite()) {
        return Err(Error::invalid("cannot quantize non-finite samples"));
    }

    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    let mut reconstructed = Vec::with_capacity(values.len());
    let mut errors = Vec::with_capacity(values.len());
    let mut codes = Vec::with_capacity(values.len());

    let step = (max - min) / f64::from(levels);
    if max == min {
        reconstructed.extend_from_slice(values);
        errors.resize(values.len(), 0.0);
        codes.resize(values.len(), 0);
    } else {
        let top = f64::from(levels - 1);
        for &x in values {
            let code = ((x - min) / step).floor().clamp(0.0, top);
            let recon = min + (code + 0.5) * step;
            reconstructed.push(recon);
            errors.push(x - recon);
            codes.push(code as u32);
        }
    }

    tracing::debug!(samples = values.len(), levels, min, max, "quantized");

    Ok(Quantization {
        reconstructed,
        errors,
        codes,
        levels,
        step,
        bits: spec.bits(),
    })
}
