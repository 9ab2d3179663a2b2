//! The accumulated "current signal" of a session.

use crate::Signal;
use crate::arithmetic::{add_signals, negate};
use crate::error::{Error, Result};
use crate::quantize::{Quantization, QuantizerSpec, quantize};
use crate::transforms;

/// A session's running superposition of signals.
///
/// The accumulator starts empty and grows as signals are added or
/// subtracted. Shifting, folding and scaling rewrite it in place. Every
/// operation either completes or returns an error before changing anything,
/// so a failed call never leaves the accumulator half-updated.
///
/// # Examples
///
/// ```
/// use ripple::{Accumulator, Signal};
///
/// let mut acc = Accumulator::new();
/// acc.add(&Signal::from_pairs(vec![0, 1], vec![2.0, 3.0]).unwrap());
/// acc.add(&Signal::from_pairs(vec![1, 2], vec![10.0, 20.0]).unwrap());
///
/// assert_eq!(acc.signal().indices(), &[0, 1, 2]);
/// assert_eq!(acc.signal().values(), &[2.0, 13.0, 20.0]);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Accumulator {
    current: Signal,
}

impl Accumulator {
    /// Creates an empty accumulator.
    pub fn new() -> Self {
        Self::default()
    }

    /// The accumulated signal.
    pub fn signal(&self) -> &Signal {
        &self.current
    }

    /// Returns true if nothing has been accumulated.
    pub fn is_empty(&self) -> bool {
        self.current.is_empty()
    }

    /// Number of samples in the accumulated signal.
    pub fn len(&self) -> usize {
        self.current.len()
    }

    /// Consumes the accumulator, returning the accumulated signal.
    pub fn into_signal(self) -> Signal {
        self.current
    }

    /// Superposes `signal` onto the accumulator.
    ///
    /// An empty accumulator simply takes a copy of `signal`.
    pub fn add(&mut self, signal: &Signal) {
        if self.current.is_empty() {
            self.current = signal.clone();
        } else {
            self.current = add_signals(&self.current, signal);
        }
        tracing::debug!(added = signal.len(), samples = self.current.len(), "accumulated signal");
    }

    /// Subtracts `signal` from the accumulator.
    pub fn subtract(&mut self, signal: &Signal) {
        self.add(&negate(signal));
    }

    /// Shifts the accumulated signal's indices up by `k`.
    pub fn advance(&mut self, k: u32) -> Result<()> {
        transforms::advance(&mut self.current, k)?;
        tracing::debug!(k, "advanced accumulator");
        Ok(())
    }

    /// Shifts the accumulated signal's indices down by `k`.
    pub fn delay(&mut self, k: u32) -> Result<()> {
        transforms::delay(&mut self.current, k)?;
        tracing::debug!(k, "delayed accumulator");
        Ok(())
    }

    /// Time-reverses the accumulated signal.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyState`] if nothing has been accumulated.
    pub fn fold(&mut self) -> Result<()> {
        if self.current.is_empty() {
            return Err(Error::EmptyState("fold"));
        }
        transforms::fold(&mut self.current)?;
        tracing::debug!(samples = self.current.len(), "folded accumulator");
        Ok(())
    }

    /// Multiplies every accumulated value by `factor`.
    pub fn scale(&mut self, factor: f64) {
        transforms::scale(&mut self.current, factor);
        tracing::debug!(factor, "scaled accumulator");
    }

    /// Quantizes the accumulated values without modifying them.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyState`] if nothing has been accumulated, or
    /// [`Error::InvalidValue`] for an invalid spec.
    pub fn quantize(&self, spec: QuantizerSpec) -> Result<Quantization> {
        if self.current.is_empty() {
            return Err(Error::EmptyState("quantize"));
        }
        quantize(self.current.values(), spec)
    }

    /// Clears the accumulator.
    pub fn reset(&mut self) {
        self.current.clear();
        tracing::debug!("reset accumulator");
    }
}

impl From<Signal> for Accumulator {
    fn from(signal: Signal) -> Self {
        Self { current: signal }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn signal(indices: &[i64], values: &[f64]) -> Signal {
        Signal::from_pairs(indices.to_vec(), values.to_vec()).unwrap()
    }

    #[test]
    fn test_starts_empty() {
        let acc = Accumulator::new();
        assert!(acc.is_empty());
        assert_eq!(acc.len(), 0);
    }

    #[test]
    fn test_first_add_copies() {
        let mut acc = Accumulator::new();
        let s = signal(&[-1, 3], &[1.0, 2.0]);
        acc.add(&s);
        assert_eq!(acc.signal(), &s);
    }

    #[test]
    fn test_add_merges() {
        let mut acc = Accumulator::new();
        acc.add(&signal(&[0, 1], &[2.0, 3.0]));
        acc.add(&signal(&[1, 2], &[10.0, 20.0]));
        assert_eq!(acc.signal().indices(), &[0, 1, 2]);
        assert_eq!(acc.signal().values(), &[2.0, 13.0, 20.0]);
    }

    #[test]
    fn test_subtract_into_empty() {
        let mut acc = Accumulator::new();
        acc.subtract(&signal(&[0, 1], &[2.0, -3.0]));
        assert_eq!(acc.signal().values(), &[-2.0, 3.0]);
    }

    #[test]
    fn test_subtract_restores() {
        let base = signal(&[0, 1, 2], &[1.0, 2.0, 3.0]);
        let other = signal(&[1, 2, 3], &[5.0, 6.0, 7.0]);
        let mut acc = Accumulator::from(base.clone());
        acc.add(&other);
        acc.subtract(&other);
        for (index, value) in base.iter() {
            assert_eq!(acc.signal().value_at(index), Some(value));
        }
        assert_eq!(acc.signal().value_at(3), Some(0.0));
    }

    #[test]
    fn test_shifts() {
        let mut acc = Accumulator::from(signal(&[0, 1], &[1.0, 2.0]));
        acc.advance(3).unwrap();
        assert_eq!(acc.signal().indices(), &[3, 4]);
        acc.delay(5).unwrap();
        assert_eq!(acc.signal().indices(), &[-2, -1]);
    }

    #[test]
    fn test_shift_empty_is_noop() {
        let mut acc = Accumulator::new();
        acc.advance(4).unwrap();
        acc.delay(4).unwrap();
        acc.scale(2.0);
        assert!(acc.is_empty());
    }

    #[test]
    fn test_fold() {
        let mut acc = Accumulator::from(signal(&[1, 2, 4], &[1.0, 2.0, 4.0]));
        acc.fold().unwrap();
        assert_eq!(acc.signal().indices(), &[-4, -2, -1]);
        assert_eq!(acc.signal().values(), &[4.0, 2.0, 1.0]);

        // The folded signal merges without re-sorting
        acc.add(&signal(&[-3, -2], &[3.0, 3.0]));
        assert_eq!(acc.signal().indices(), &[-4, -3, -2, -1]);
        assert_eq!(acc.signal().values(), &[4.0, 3.0, 5.0, 1.0]);
    }

    #[test]
    fn test_fold_empty_fails() {
        let mut acc = Accumulator::new();
        assert!(matches!(acc.fold(), Err(Error::EmptyState("fold"))));
    }

    #[test]
    fn test_scale() {
        let mut acc = Accumulator::from(signal(&[0, 1], &[1.0, -2.0]));
        acc.scale(-3.0);
        assert_eq!(acc.signal().values(), &[-3.0, 6.0]);
    }

    #[test]
    fn test_quantize_does_not_mutate() {
        let acc = Accumulator::from(signal(&[0, 1, 2], &[0.0, 4.0, 8.0]));
        let before = acc.clone();
        let q = acc.quantize(QuantizerSpec::Levels(2)).unwrap();
        assert_eq!(q.codes, vec![0, 1, 1]);
        assert_eq!(acc, before);
    }

    #[test]
    fn test_quantize_empty_fails() {
        let acc = Accumulator::new();
        assert!(matches!(
            acc.quantize(QuantizerSpec::Bits(4)),
            Err(Error::EmptyState(_))
        ));
    }

    #[test]
    fn test_failed_shift_keeps_state() {
        let mut acc = Accumulator::from(signal(&[i64::MAX], &[1.0]));
        let before = acc.clone();
        assert!(acc.advance(1).is_err());
        assert_eq!(acc, before);
    }

    #[test]
    fn test_reset() {
        let mut acc = Accumulator::from(signal(&[0], &[1.0]));
        acc.reset();
        assert!(acc.is_empty());
        acc.add(&signal(&[7], &[7.0]));
        assert_eq!(acc.signal().indices(), &[7]);
    }
}
