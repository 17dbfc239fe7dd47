//! Dataset statistics used to derive scale parameters.

use serde::{Deserialize, Serialize};

use crate::{Result, ScalingError};

/// Denominator used when estimating a standard deviation from data.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StdDevEstimator {
    /// Divide by `n`.
    #[default]
    Population,
    /// Divide by `n - 1` (Bessel's correction).
    Sample,
}

/// Minimum and maximum of `data` in a single pass.
///
/// NaN observations are skipped by the comparison; a dataset made only of
/// NaN yields `(inf, -inf)`.
pub fn bounds(data: &[f64]) -> Result<(f64, f64)> {
    if data.is_empty() {
        return Err(ScalingError::EmptyData(
            "cannot compute bounds of an empty dataset".into(),
        ));
    }

    Ok(data
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
            (lo.min(v), hi.max(v))
        }))
}

/// Arithmetic average of `data`.
///
/// Accumulated as a running mean so that finite data near `f64::MAX` does
/// not overflow the way a plain sum would.
pub fn mean(data: &[f64]) -> Result<f64> {
    if data.is_empty() {
        return Err(ScalingError::EmptyData(
            "cannot average an empty dataset".into(),
        ));
    }

    Ok(data.iter().enumerate().fold(0.0, |m, (i, &v)| {
        let k = (i + 1) as f64;
        m + (v / k - m / k)
    }))
}

/// Standard deviation of `data` around its mean.
pub fn std_dev(data: &[f64], estimator: StdDevEstimator) -> Result<f64> {
    let m = mean(data)?;
    let n = data.len();

    let denominator = match estimator {
        StdDevEstimator::Population => n as f64,
        StdDevEstimator::Sample => {
            if n < 2 {
                return Err(ScalingError::InsufficientData(format!(
                    "sample standard deviation requires at least 2 observations, got {n}"
                )));
            }
            (n - 1) as f64
        }
    };

    if !m.is_finite() {
        return Ok(f64::NAN);
    }

    // Halved deviations are finite for finite data; dividing by the largest
    // keeps the squares in range.
    let half_dev = |v: f64| 0.5 * v - 0.5 * m;
    let spread = data.iter().map(|&v| half_dev(v).abs()).fold(0.0, f64::max);
    if spread == 0.0 {
        return Ok(0.0);
    }

    let sum_sq = data
        .iter()
        .map(|&v| (half_dev(v) / spread).powi(2))
        .sum::<f64>();
    Ok(2.0 * spread * (sum_sq / denominator).sqrt())
}
