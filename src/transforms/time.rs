//! Time-domain transforms that rewrite a signal in place.
//!
//! All four operations mutate the signal they are given and return nothing on
//! success. Shifts validate the whole index range before touching anything,
//! so an overflowing shift leaves the signal unchanged.

use crate::Signal;
use crate::error::{Error, Result};

/// Shifts every index up by `k` samples.
///
/// # Errors
///
/// Returns [`Error::InvalidValue`] if an index would leave the `i64` range.
///
/// # Examples
///
/// ```
/// use ripple::{Signal, transforms::advance};
///
/// let mut signal = Signal::from_values(vec![1.0, 2.0]);
/// advance(&mut signal, 3).unwrap();
/// assert_eq!(signal.indices(), &[3, 4]);
/// ```
pub fn advance(signal: &mut Signal, k: u32) -> Result<()> {
    shift_by(signal, i64::from(k))
}

/// Shifts every index down by `k` samples.
///
/// # Errors
///
/// Returns [`Error::InvalidValue`] if an index would leave the `i64` range.
pub fn delay(signal: &mut Signal, k: u32) -> Result<()> {
    shift_by(signal, -i64::from(k))
}

fn shift_by(signal: &mut Signal, offset: i64) -> Result<()> {
    // Indices are sorted, so only the extremes can overflow
    let fits = |index: Option<i64>| index.is_none_or(|i| i.checked_add(offset).is_some());
    if !fits(signal.first_index()) || !fits(signal.last_index()) {
        return Err(Error::invalid(format!(
            "shifting by {offset} moves an index out of range"
        )));
    }

    for index in signal.indices_mut().iter_mut() {
        *index += offset;
    }
    tracing::trace!(offset, samples = signal.len(), "shifted signal");
    Ok(())
}

/// Time-reverses a signal: every index `n` becomes `-n`.
///
/// Values travel with their indices. The storage order is reversed as well,
/// so the folded signal is still sorted ascending and can be merged directly.
///
/// # Errors
///
/// Returns [`Error::InvalidValue`] if the signal contains `i64::MIN`, which
/// has no positive counterpart.
///
/// # Examples
///
/// ```
/// use ripple::{Signal, transforms::fold};
///
/// let mut signal = Signal::from_pairs(vec![-1, 0, 2], vec![1.0, 2.0, 3.0]).unwrap();
/// fold(&mut signal).unwrap();
/// assert_eq!(signal.indices(), &[-2, 0, 1]);
/// assert_eq!(signal.values(), &[3.0, 2.0, 1.0]);
/// ```
pub fn fold(signal: &mut Signal) -> Result<()> {
    if signal.first_index() == Some(i64::MIN) {
        return Err(Error::invalid("cannot fold index i64::MIN"));
    }

    for index in signal.indices_mut().iter_mut() {
        *index = -*index;
    }
    signal.reverse();
    Ok(())
}

/// Multiplies every value by `factor`.
pub fn scale(signal: &mut Signal, factor: f64) {
    for value in signal.values_mut() {
        *value *= factor;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn signal(indices: &[i64], values: &[f64]) -> Signal {
        Signal::from_pairs(indices.to_vec(), values.to_vec()).unwrap()
    }

    #[test]
    fn test_advance() {
        let mut s = signal(&[-2, 0, 5], &[1.0, 2.0, 3.0]);
        advance(&mut s, 2).unwrap();
        assert_eq!(s.indices(), &[0, 2, 7]);
        assert_eq!(s.values(), &[1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_delay() {
        let mut s = signal(&[-2, 0, 5], &[1.0, 2.0, 3.0]);
        delay(&mut s, 2).unwrap();
        assert_eq!(s.indices(), &[-4, -2, 3]);
    }

    #[test]
    fn test_shift_by_zero() {
        let original = signal(&[1, 2], &[1.0, 2.0]);
        let mut s = original.clone();
        advance(&mut s, 0).unwrap();
        delay(&mut s, 0).unwrap();
        assert_eq!(s, original);
    }

    #[test]
    fn test_shift_overflow_leaves_signal_untouched() {
        let original = signal(&[0, i64::MAX - 1], &[1.0, 2.0]);
        let mut s = original.clone();
        assert!(matches!(advance(&mut s, 5), Err(Error::InvalidValue(_))));
        assert_eq!(s, original);

        let original = signal(&[i64::MIN + 1, 0], &[1.0, 2.0]);
        let mut s = original.clone();
        assert!(delay(&mut s, 2).is_err());
        assert_eq!(s, original);
    }

    #[test]
    fn test_fold_keeps_order() {
        let mut s = signal(&[0, 1, 2, 3], &[1.0, 2.0, 3.0, 4.0]);
        fold(&mut s).unwrap();
        assert_eq!(s.indices(), &[-3, -2, -1, 0]);
        assert_eq!(s.values(), &[4.0, 3.0, 2.0, 1.0]);
    }

    #[test]
    fn test_fold_empty() {
        let mut s = Signal::new();
        fold(&mut s).unwrap();
        assert!(s.is_empty());
    }

    #[test]
    fn test_fold_min_index() {
        let mut s = signal(&[i64::MIN], &[1.0]);
        assert!(fold(&mut s).is_err());
        assert_eq!(s.indices(), &[i64::MIN]);
    }

    #[test]
    fn test_scale() {
        let mut s = signal(&[0, 1], &[2.0, -4.0]);
        scale(&mut s, 0.5);
        assert_eq!(s.values(), &[1.0, -2.0]);
        assert_eq!(s.indices(), &[0, 1]);
    }
}
