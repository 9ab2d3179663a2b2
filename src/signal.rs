//! Core discrete signal type.
//!
//! This module provides the `Signal` type: a sparse, integer-indexed sequence
//! of real-valued samples. Every operation in the crate consumes or produces
//! signals through this type.

use crate::error::{Error, Result};

/// A discrete-time signal stored as parallel index/value sequences.
///
/// Indices are sample positions and may be negative. The type keeps them
/// unique and strictly ascending, so two signals can always be merged
/// sample-by-sample without re-sorting.
///
/// # Examples
///
/// ```
/// use ripple::Signal;
///
/// // Pairs may arrive in any order; they are re-paired and sorted by index.
/// let signal = Signal::from_pairs(vec![2, -1, 0], vec![7.0, 3.0, 5.0]).unwrap();
/// assert_eq!(signal.indices(), &[-1, 0, 2]);
/// assert_eq!(signal.values(), &[3.0, 5.0, 7.0]);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Signal {
    indices: Vec<i64>,
    values: Vec<f64>,
}

impl Signal {
    /// Creates an empty signal.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a signal from index/value sequences in any order.
    ///
    /// Values are re-paired with their indices and sorted ascending by index.
    ///
    /// # Arguments
    ///
    /// * `indices` - Sample positions
    /// * `values` - Sample values, one per index
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidValue`] if the sequences differ in length or an
    /// index appears more than once.
    pub fn from_pairs(indices: Vec<i64>, values: Vec<f64>) -> Result<Self> {
        if indices.len() != values.len() {
            return Err(Error::invalid(format!(
                "{} indices but {} values",
                indices.len(),
                values.len()
            )));
        }

        let mut paired: Vec<(i64, f64)> = indices.into_iter().zip(values).collect();
        paired.sort_by_key(|&(index, _)| index);

        if let Some(pair) = paired.windows(2).find(|pair| pair[0].0 == pair[1].0) {
            return Err(Error::invalid(format!("duplicate index {}", pair[0].0)));
        }

        Ok(Self::from_sorted_pairs(paired))
    }

    /// Creates a signal on the zero-based index range `0..values.len()`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ripple::Signal;
    ///
    /// let signal = Signal::from_values(vec![1.0, 2.0, 3.0]);
    /// assert_eq!(signal.indices(), &[0, 1, 2]);
    /// ```
    pub fn from_values(values: Vec<f64>) -> Self {
        let indices = (0..values.len() as i64).collect();
        Self { indices, values }
    }

    /// Creates a signal from sequences already sorted strictly ascending by index.
    ///
    /// This is the constructor emitted by the `signal!` macro, which sorts at
    /// compile time. Use [`Signal::from_pairs`] for unsorted input.
    ///
    /// # Panics
    ///
    /// Panics if the sequences differ in length or the indices are not
    /// strictly ascending.
    #[doc(hidden)]
    pub fn from_sorted(indices: Vec<i64>, values: Vec<f64>) -> Self {
        assert_eq!(indices.len(), values.len(), "one value per index");
        assert!(
            indices.windows(2).all(|w| w[0] < w[1]),
            "indices must be unique and ascending"
        );
        Self { indices, values }
    }

    /// Collects pairs the caller already produced in strictly ascending index order.
    pub(crate) fn from_sorted_pairs(pairs: impl IntoIterator<Item = (i64, f64)>) -> Self {
        let (indices, values): (Vec<i64>, Vec<f64>) = pairs.into_iter().unzip();
        debug_assert!(indices.windows(2).all(|w| w[0] < w[1]));
        Self { indices, values }
    }

    /// Sample positions, ascending.
    pub fn indices(&self) -> &[i64] {
        &self.indices
    }

    /// Sample values, in index order.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// Returns true if the signal holds no samples.
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Smallest index, if any.
    pub fn first_index(&self) -> Option<i64> {
        self.indices.first().copied()
    }

    /// Largest index, if any.
    pub fn last_index(&self) -> Option<i64> {
        self.indices.last().copied()
    }

    /// Looks up the value stored at `index`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ripple::Signal;
    ///
    /// let signal = Signal::from_pairs(vec![-3, 4], vec![1.5, 2.5]).unwrap();
    /// assert_eq!(signal.value_at(4), Some(2.5));
    /// assert_eq!(signal.value_at(0), None);
    /// ```
    pub fn value_at(&self, index: i64) -> Option<f64> {
        self.indices
            .binary_search(&index)
            .ok()
            .map(|position| self.values[position])
    }

    /// Iterates over `(index, value)` pairs in ascending index order.
    pub fn iter(&self) -> impl Iterator<Item = (i64, f64)> + '_ {
        self.indices.iter().copied().zip(self.values.iter().copied())
    }

    /// Splits the signal into its index and value sequences.
    pub fn into_parts(self) -> (Vec<i64>, Vec<f64>) {
        (self.indices, self.values)
    }

    /// Removes every sample.
    pub fn clear(&mut self) {
        self.indices.clear();
        self.values.clear();
    }

    pub(crate) fn indices_mut(&mut self) -> &mut Vec<i64> {
        &mut self.indices
    }

    pub(crate) fn values_mut(&mut self) -> &mut [f64] {
        &mut self.values
    }

    pub(crate) fn reverse(&mut self) {
        self.indices.reverse();
        self.values.reverse();
    }

    pub(crate) fn push(&mut self, index: i64, value: f64) {
        debug_assert!(self.indices.last().is_none_or(|&last| last < index));
        self.indices.push(index);
        self.values.push(value);
    }
}

/// Builds a signal from `(index, value)` pairs in any order.
///
/// Fails with [`Error::InvalidValue`] if an index appears more than once.
impl TryFrom<Vec<(i64, f64)>> for Signal {
    type Error = Error;

    fn try_from(pairs: Vec<(i64, f64)>) -> Result<Self> {
        let (indices, values) = pairs.into_iter().unzip();
        Self::from_pairs(indices, values)
    }
}
