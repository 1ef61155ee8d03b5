/*
MIT License

Copyright (c) 2025 scatter-rs developers
*/

//! Numerical integration of sampled functions
//!
//! The correlation pipelines integrate radially sampled kernels; the only
//! capability needed is a definite integral over a regular grid.

use super::errors::{Result, UtilsError};
use ndarray::ArrayView1;

/// Definite integral of a sampled function by composite Simpson's rule
///
/// The samples are assumed to lie on a regular grid; when the number of
/// intervals is odd the final interval is closed with the trapezoidal
/// rule.
///
/// # Arguments
///
/// * `y` - Sampled function values
/// * `x` - Sample positions, uniformly spaced, same length as `y`
///
/// # Returns
///
/// The approximate value of `∫ y dx`, or an error when the arrays are
/// mismatched or carry fewer than two samples.
pub fn simpson(y: ArrayView1<'_, f64>, x: ArrayView1<'_, f64>) -> Result<f64> {
    let n = y.len();
    if n != x.len() {
        return Err(UtilsError::Math(format!(
            "sample arrays must have equal length, got {} and {}",
            n,
            x.len()
        )));
    }
    if n < 2 {
        return Err(UtilsError::Math(
            "integration requires at least two samples".to_string(),
        ));
    }

    let h = x[1] - x[0];
    let intervals = n - 1;
    // Largest even interval count covered by Simpson; a leftover interval
    // is handled below.
    let simpson_intervals = intervals - intervals % 2;

    let mut sum = 0.0;
    if simpson_intervals > 0 {
        sum += y[0] + y[simpson_intervals];
        for i in (1..simpson_intervals).step_by(2) {
            sum += 4.0 * y[i];
        }
        for i in (2..simpson_intervals).step_by(2) {
            sum += 2.0 * y[i];
        }
        sum *= h / 3.0;
    }

    if intervals % 2 == 1 {
        sum += 0.5 * h * (y[n - 2] + y[n - 1]);
    }

    Ok(sum)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use ndarray::Array1;

    fn grid(n: usize, a: f64, b: f64) -> Array1<f64> {
        Array1::from_iter((0..n).map(|i| a + (b - a) * i as f64 / (n - 1) as f64))
    }

    #[test]
    fn test_simpson_polynomial_is_exact() {
        // Simpson's rule is exact for cubics
        let x = grid(101, 0.0, 2.0);
        let y = x.mapv(|v| v.powi(3) - 2.0 * v);
        let integral = simpson(y.view(), x.view()).unwrap();
        assert_relative_eq!(integral, 0.0, epsilon = 1e-10);
    }

    #[test]
    fn test_simpson_sine() {
        let x = grid(1001, 0.0, std::f64::consts::PI);
        let y = x.mapv(f64::sin);
        let integral = simpson(y.view(), x.view()).unwrap();
        assert_relative_eq!(integral, 2.0, epsilon = 1e-8);
    }

    #[test]
    fn test_simpson_odd_interval_count() {
        // Even sample count forces a trapezoid closure
        let x = grid(100, 0.0, 1.0);
        let y = x.mapv(|v| v * v);
        let integral = simpson(y.view(), x.view()).unwrap();
        assert_relative_eq!(integral, 1.0 / 3.0, epsilon = 1e-4);
    }

    #[test]
    fn test_simpson_rejects_bad_input() {
        let x = grid(10, 0.0, 1.0);
        let y = grid(9, 0.0, 1.0);
        assert!(simpson(y.view(), x.view()).is_err());

        let single = Array1::from(vec![1.0]);
        assert!(simpson(single.view(), single.view()).is_err());
    }
}
