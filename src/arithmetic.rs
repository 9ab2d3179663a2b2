//! Sample-wise arithmetic between signals.
//!
//! Signals are sparse: each one defines values only at its own indices. Adding
//! two signals merges their index sets. Where only one signal defines an index
//! its value passes through unchanged, and where both define it the values
//! are summed.

use crate::Signal;
use std::cmp::Ordering;

/// Adds two signals by merging them on index.
///
/// Both inputs are walked with one cursor each. The merge stops as soon as
/// either cursor reaches the end of its signal, and the remaining tail of the
/// other signal is appended as-is.
///
/// # Examples
///
/// ```
/// use ripple::{Signal, arithmetic::add_signals};
///
/// let a = Signal::from_pairs(vec![0, 1], vec![2.0, 3.0]).unwrap();
/// let b = Signal::from_pairs(vec![1, 2], vec![10.0, 20.0]).unwrap();
///
/// let sum = add_signals(&a, &b);
/// assert_eq!(sum.indices(), &[0, 1, 2]);
/// assert_eq!(sum.values(), &[2.0, 13.0, 20.0]);
/// ```
pub fn add_signals(a: &Signal, b: &Signal) -> Signal {
    let (a_idx, a_val) = (a.indices(), a.values());
    let (b_idx, b_val) = (b.indices(), b.values());

    let mut result = Signal::new();
    let mut i = 0;
    let mut j = 0;

    while i < a_idx.len() && j < b_idx.len() {
        match a_idx[i].cmp(&b_idx[j]) {
            Ordering::Less => {
                result.push(a_idx[i], a_val[i]);
                i += 1;
            }
            Ordering::Greater => {
                result.push(b_idx[j], b_val[j]);
                j += 1;
            }
            Ordering::Equal => {
                result.push(a_idx[i], a_val[i] + b_val[j]);
                i += 1;
                j += 1;
            }
        }
    }

    for (&index, &value) in a_idx[i..].iter().zip(&a_val[i..]) {
        result.push(index, value);
    }
    for (&index, &value) in b_idx[j..].iter().zip(&b_val[j..]) {
        result.push(index, value);
    }

    result
}

/// Returns a copy of `signal` with every value negated.
pub fn negate(signal: &Signal) -> Signal {
    Signal::from_sorted_pairs(signal.iter().map(|(index, value)| (index, -value)))
}

/// Subtracts `b` from `a`: equivalent to adding the negation of `b`.
pub fn subtract_signals(a: &Signal, b: &Signal) -> Signal {
    add_signals(a, &negate(b))
}
