//! Data Processor Module
//! Savitzky-Golay smoothing of measurement series.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SmoothError {
    #[error("Invalid smoothing parameters: window={window}, degree={degree}, len={len} ({reason})")]
    InvalidParameter {
        window: usize,
        degree: usize,
        len: usize,
        reason: &'static str,
    },
}

/// Handles series transformations.
pub struct DataProcessor;

impl DataProcessor {
    /// Savitzky-Golay filter.
    ///
    /// Every interior point is replaced by the centre value of the degree-`degree`
    /// least-squares polynomial fitted over the `window` points around it. The
    /// first and last `window / 2` points are evaluated on the polynomial fitted
    /// to the first and last full window respectively.
    pub fn smooth(values: &[f64], window: usize, degree: usize) -> Result<Vec<f64>, SmoothError> {
        let invalid = |reason| SmoothError::InvalidParameter {
            window,
            degree,
            len: values.len(),
            reason,
        };
        if window == 0 {
            return Err(invalid("window must be positive"));
        }
        if window % 2 == 0 {
            return Err(invalid("window must be odd"));
        }
        if degree >= window {
            return Err(invalid("degree must be less than window"));
        }
        if window > values.len() {
            return Err(invalid("window exceeds series length"));
        }

        let n = values.len();
        let half = window / 2;
        let offsets: Vec<f64> = (0..window).map(|j| j as f64 - half as f64).collect();
        let centre = Self::centre_weights(&offsets, degree);

        let mut smoothed = Vec::with_capacity(n);

        let head = Self::fit_polynomial(&offsets, &values[..window], degree);
        smoothed.extend(offsets[..half].iter().map(|&t| Self::eval_polynomial(&head, t)));

        smoothed.extend(values.windows(window).map(|w| {
            w.iter()
                .zip(&centre)
                .map(|(value, weight)| value * weight)
                .sum::<f64>()
        }));

        let tail = Self::fit_polynomial(&offsets, &values[n - window..], degree);
        smoothed.extend(offsets[half + 1..].iter().map(|&t| Self::eval_polynomial(&tail, t)));

        debug_assert_eq!(smoothed.len(), n);
        Ok(smoothed)
    }

    /// Convolution weights yielding the fitted value at offset 0.
    fn centre_weights(offsets: &[f64], degree: usize) -> Vec<f64> {
        let normal = Self::normal_matrix(offsets, degree);
        let mut unit = vec![0.0; degree + 1];
        unit[0] = 1.0;
        let a = Self::solve(normal, unit);
        offsets
            .iter()
            .map(|&t| Self::eval_polynomial(&a, t))
            .collect()
    }

    /// Least-squares polynomial coefficients (constant term first).
    fn fit_polynomial(offsets: &[f64], values: &[f64], degree: usize) -> Vec<f64> {
        let normal = Self::normal_matrix(offsets, degree);
        let rhs = (0..=degree)
            .map(|k| {
                offsets
                    .iter()
                    .zip(values)
                    .map(|(&t, &y)| t.powi(k as i32) * y)
                    .sum()
            })
            .collect();
        Self::solve(normal, rhs)
    }

    /// Vandermonde normal matrix `VᵀV` for the given offsets.
    fn normal_matrix(offsets: &[f64], degree: usize) -> Vec<Vec<f64>> {
        (0..=degree)
            .map(|r| {
                (0..=degree)
                    .map(|c| offsets.iter().map(|&t| t.powi((r + c) as i32)).sum())
                    .collect()
            })
            .collect()
    }

    fn eval_polynomial(coefficients: &[f64], t: f64) -> f64 {
        coefficients.iter().rev().fold(0.0, |acc, &c| acc * t + c)
    }

    /// Gaussian elimination with partial pivoting.
    ///
    /// The normal matrix of distinct offsets with `degree < window` is positive
    /// definite, so a pivot is never zero.
    fn solve(mut a: Vec<Vec<f64>>, mut b: Vec<f64>) -> Vec<f64> {
        let n = b.len();
        for col in 0..n {
            let pivot = (col..n)
                .max_by(|&i, &j| a[i][col].abs().total_cmp(&a[j][col].abs()))
                .unwrap_or(col);
            a.swap(col, pivot);
            b.swap(col, pivot);

            for row in col + 1..n {
                let factor = a[row][col] / a[col][col];
                for k in col..n {
                    a[row][k] -= factor * a[col][k];
                }
                b[row] -= factor * b[col];
            }
        }

        let mut x = vec![0.0; n];
        for row in (0..n).rev() {
            let tail: f64 = (row + 1..n).map(|k| a[row][k] * x[k]).sum();
            x[row] = (b[row] - tail) / a[row][row];
        }
        x
    }
}
