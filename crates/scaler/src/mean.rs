use common::{stats, Result};
use tracing::debug;

use crate::{ensure_finite, ensure_nonzero_range, Normalizer};

/// Mean normalizer: `(v - mean) / (max - min)`.
///
/// Centers on the mean and divides by the full range, so fitted data lands
/// in an interval of width 1 containing zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeanNormalizer {
    min: f64,
    max: f64,
    mean: f64,
}

impl MeanNormalizer {
    /// `mean` is not required to lie inside `[min, max]`.
    pub fn new(min: f64, max: f64, mean: f64) -> Result<Self> {
        ensure_finite("min", min)?;
        ensure_finite("max", max)?;
        ensure_finite("mean", mean)?;
        ensure_nonzero_range(min, max)?;
        Ok(Self { min, max, mean })
    }

    /// Fit the bounds and average of `data`.
    pub fn from_data(data: &[f64]) -> Result<Self> {
        let (min, max) = stats::bounds(data)?;
        let mean = stats::mean(data)?;
        debug!(
            min = min,
            max = max,
            mean = mean,
            count = data.len(),
            "Fitted mean normalizer"
        );
        Self::new(min, max, mean)
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    pub fn mean(&self) -> f64 {
        self.mean
    }
}

impl Normalizer for MeanNormalizer {
    fn scale(&self, value: f64) -> f64 {
        (value - self.mean) / (self.max - self.min)
    }

    fn unscale(&self, value: f64) -> f64 {
        value * (self.max - self.min) + self.mean
    }
}
