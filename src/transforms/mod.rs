//! Signal transforms.
//!
//! This module provides the elementary transforms of the signal core:
//! - Time-domain shifts, folding and scaling (in place on a `Signal`)
//! - First and second finite-difference derivatives
//! - Causal moving average
//! - Direct linear convolution
//!
//! Apart from the time-domain transforms, every function here is pure and
//! returns a new sequence.

mod average;
mod convolution;
mod difference;
mod time;

pub use average::{moving_average, moving_average_signal};
pub use convolution::{convolve, convolve_signals};
pub use difference::{
    first_derivative, first_derivative_signal, second_derivative, second_derivative_signal,
};
pub use time::{advance, delay, fold, scale};
