//! Causal moving average.

use crate::Signal;
use crate::error::{Error, Result};

/// Averages each sample with up to `window - 1` samples before it.
///
/// Position `i` averages `values[max(0, i - window + 1) ..= i]`, so the first
/// `window - 1` outputs use a shorter leading window rather than padding.
///
/// # Errors
///
/// Returns [`Error::InvalidValue`] unless `0 < window <= values.len()`.
///
/// # Examples
///
/// ```
/// use ripple::transforms::moving_average;
///
/// let smoothed = moving_average(&[2.0, 4.0, 6.0, 8.0], 2).unwrap();
/// assert_eq!(smoothed, vec![2.0, 3.0, 5.0, 7.0]);
/// ```
pub fn moving_average(values: &[f64], window: usize) -> Result<Vec<f64>> {
    if window == 0 || window > values.len() {
        return Err(Error::invalid(format!(
            "window must be between 1 and {}, got {}",
            values.len(),
            window
        )));
    }

    let averages = (0..values.len())
        .map(|i| {
            let start = (i + 1).saturating_sub(window);
            let span = &values[start..=i];
            span.iter().sum::<f64>() / span.len() as f64
        })
        .collect();

    Ok(averages)
}

/// Moving average of a signal; the index sequence is kept as-is.
pub fn moving_average_signal(signal: &Signal, window: usize) -> Result<Signal> {
    let values = moving_average(signal.values(), window)?;
    Ok(Signal::from_sorted_pairs(
        signal.indices().iter().copied().zip(values),
    ))
}
