use common::{stats, Result, ScalingError, StdDevEstimator};
use tracing::debug;

use crate::{ensure_finite, Normalizer};

/// Z-score normalizer: `(v - mean) / std_dev`.
///
/// When fitted from data with the population estimator, the scaled data has
/// zero mean and unit variance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZScoreNormalizer {
    mean: f64,
    std_dev: f64,
}

impl ZScoreNormalizer {
    pub fn new(mean: f64, std_dev: f64) -> Result<Self> {
        ensure_finite("mean", mean)?;
        ensure_finite("std_dev", std_dev)?;
        if std_dev <= 0.0 {
            return Err(ScalingError::InvalidParameters(format!(
                "std_dev must be positive, got {std_dev}"
            )));
        }
        Ok(Self { mean, std_dev })
    }

    /// Fit the mean and standard deviation of `data`.
    ///
    /// A constant dataset has zero spread and is rejected.
    pub fn from_data(data: &[f64], estimator: StdDevEstimator) -> Result<Self> {
        let mean = stats::mean(data)?;
        let std_dev = stats::std_dev(data, estimator)?;
        debug!(
            mean = mean,
            std_dev = std_dev,
            estimator = ?estimator,
            count = data.len(),
            "Fitted z-score normalizer"
        );
        Self::new(mean, std_dev)
    }

    pub fn mean(&self) -> f64 {
        self.mean
    }

    pub fn std_dev(&self) -> f64 {
        self.std_dev
    }
}

impl Normalizer for ZScoreNormalizer {
    fn scale(&self, value: f64) -> f64 {
        (value - self.mean) / self.std_dev
    }

    fn unscale(&self, value: f64) -> f64 {
        value * self.std_dev + self.mean
    }
}
