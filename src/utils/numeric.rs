//! Numeric helpers for scalar division and windowed averages

use crate::error::MathError;

/// Divide, returning `0.0` when the denominator is exactly zero
pub fn safe_divide(numerator: f64, denominator: f64) -> f64 {
    if denominator != 0.0 {
        numerator / denominator
    } else {
        0.0
    }
}

/// Mean of every contiguous window of `window_size` elements
///
/// # Examples
/// ```
/// use common_utils::utils::numeric::moving_average;
///
/// let averages = moving_average(&[1.0, 2.0, 3.0, 4.0], 2).unwrap();
/// assert_eq!(averages, vec![1.5, 2.5, 3.5]);
/// ```
///
/// # Errors
/// Returns [`MathError::ZeroWindow`] when `window_size` is 0
pub fn moving_average(data: &[f64], window_size: usize) -> Result<Vec<f64>, MathError> {
    if window_size == 0 {
        return Err(MathError::ZeroWindow);
    }

    let divisor = window_size as f64;
    Ok(data
        .windows(window_size)
        .map(|window| window.iter().sum::<f64>() / divisor)
        .collect())
}
