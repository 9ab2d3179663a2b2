//! Finite-difference derivatives.

use crate::Signal;
use crate::error::{Error, Result};

/// First backward difference: `y[n] = x[n] - x[n-1]` for `n` in `1..len`.
///
/// The output is one sample shorter than the input.
///
/// # Errors
///
/// Returns [`Error::InvalidValue`] if fewer than two samples are given.
///
/// # Examples
///
/// ```
/// use ripple::transforms::first_derivative;
///
/// let dx = first_derivative(&[1.0, 4.0, 9.0, 16.0]).unwrap();
/// assert_eq!(dx, vec![3.0, 5.0, 7.0]);
/// ```
pub fn first_derivative(values: &[f64]) -> Result<Vec<f64>> {
    if values.len() < 2 {
        return Err(Error::invalid(format!(
            "first derivative needs at least 2 samples, got {}",
            values.len()
        )));
    }
    Ok(values.windows(2).map(|w| w[1] - w[0]).collect())
}

/// Central second difference: `y[n] = x[n+1] - 2x[n] + x[n-1]` for `n` in `1..len-1`.
///
/// The output is two samples shorter than the input.
///
/// # Errors
///
/// Returns [`Error::InvalidValue`] if fewer than three samples are given.
///
/// # Examples
///
/// ```
/// use ripple::transforms::second_derivative;
///
/// let ddx = second_derivative(&[1.0, 4.0, 9.0, 16.0]).unwrap();
/// assert_eq!(ddx, vec![2.0, 2.0]);
/// ```
pub fn second_derivative(values: &[f64]) -> Result<Vec<f64>> {
    if values.len() < 3 {
        return Err(Error::invalid(format!(
            "second derivative needs at least 3 samples, got {}",
            values.len()
        )));
    }
    Ok(values
        .windows(3)
        .map(|w| w[2] - 2.0 * w[1] + w[0])
        .collect())
}

/// First derivative of a signal, placed on the indices `indices[1..]`.
pub fn first_derivative_signal(signal: &Signal) -> Result<Signal> {
    let values = first_derivative(signal.values())?;
    Ok(Signal::from_sorted_pairs(
        signal.indices()[1..].iter().copied().zip(values),
    ))
}

/// Second derivative of a signal, placed on the indices `indices[1..len-1]`.
pub fn second_derivative_signal(signal: &Signal) -> Result<Signal> {
    let values = second_derivative(signal.values())?;
    let end = signal.len() - 1;
    Ok(Signal::from_sorted_pairs(
        signal.indices()[1..end].iter().copied().zip(values),
    ))
}
