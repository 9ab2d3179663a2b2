//! Direct linear convolution.

use crate::Signal;
use crate::error::{Error, Result};

/// Linear convolution of two sample sequences.
///
/// `y[n] = Σ a[k]·b[n-k]` over the `k` for which both operands exist. The
/// output has `a.len() + b.len() - 1` samples.
///
/// # Errors
///
/// Returns [`Error::InvalidValue`] if either input is empty.
///
/// # Examples
///
/// ```
/// use ripple::transforms::convolve;
///
/// assert_eq!(convolve(&[1.0, 1.0], &[1.0, 1.0]).unwrap(), vec![1.0, 2.0, 1.0]);
/// ```
pub fn convolve(a: &[f64], b: &[f64]) -> Result<Vec<f64>> {
    if a.is_empty() || b.is_empty() {
        return Err(Error::invalid("cannot convolve an empty sequence"));
    }

    let n_a = a.len();
    let n_b = b.len();
    let output_len = n_a + n_b - 1;

    let mut output = Vec::with_capacity(output_len);
    for n in 0..output_len {
        let start = (n + 1).saturating_sub(n_b);
        let end = n.min(n_a - 1);
        let sum: f64 = (start..=end).map(|k| a[k] * b[n - k]).sum();
        output.push(sum);
    }

    tracing::trace!(a = n_a, b = n_b, output = output_len, "convolved");
    Ok(output)
}

/// Convolves the values of two signals.
///
/// The result is placed on a fresh zero-based index range `0..=N+M-2`; the
/// input indices are not carried over.
pub fn convolve_signals(a: &Signal, b: &Signal) -> Result<Signal> {
    convolve(a.values(), b.values()).map(Signal::from_values)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_samples() {
        assert_eq!(convolve(&[1.0], &[5.0]).unwrap(), vec![5.0]);
    }

    #[test]
    fn test_box_with_box() {
        assert_eq!(convolve(&[1.0, 1.0], &[1.0, 1.0]).unwrap(), vec![1.0, 2.0, 1.0]);
    }

    #[test]
    fn test_uneven_lengths() {
        let y = convolve(&[1.0, 2.0, 3.0], &[0.0, 1.0]).unwrap();
        assert_eq!(y, vec![0.0, 1.0, 2.0, 3.0]);

        let y = convolve(&[0.0, 1.0], &[1.0, 2.0, 3.0]).unwrap();
        assert_eq!(y, vec![0.0, 1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_output_length() {
        let y = convolve(&[1.0; 7], &[1.0; 4]).unwrap();
        assert_eq!(y.len(), 7 + 4 - 1);
        assert_eq!(y, vec![1.0, 2.0, 3.0, 4.0, 4.0, 4.0, 4.0, 3.0, 2.0, 1.0]);
    }

    #[test]
    fn test_empty_input() {
        assert!(matches!(convolve(&[], &[1.0]), Err(Error::InvalidValue(_))));
        assert!(matches!(convolve(&[1.0], &[]), Err(Error::InvalidValue(_))));
    }

    #[test]
    fn test_signals_get_zero_based_indices() {
        let a = Signal::from_pairs(vec![-5, -4], vec![1.0, 1.0]).unwrap();
        let b = Signal::from_pairs(vec![10, 11], vec![1.0, 1.0]).unwrap();
        let y = convolve_signals(&a, &b).unwrap();
        assert_eq!(y.indices(), &[0, 1, 2]);
        assert_eq!(y.values(), &[1.0, 2.0, 1.0]);
    }
}
