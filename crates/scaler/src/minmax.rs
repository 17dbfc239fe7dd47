use common::{stats, Result};
use tracing::debug;

use crate::{ensure_finite, ensure_nonzero_range, Normalizer};

/// Min-max normalizer: `(v - min) / (max - min)`.
///
/// Observations inside the fitted bounds land in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MinMaxNormalizer {
    min: f64,
    max: f64,
}

impl MinMaxNormalizer {
    pub fn new(min: f64, max: f64) -> Result<Self> {
        ensure_finite("min", min)?;
        ensure_finite("max", max)?;
        ensure_nonzero_range(min, max)?;
        Ok(Self { min, max })
    }

    /// Fit the bounds of `data`.
    pub fn from_data(data: &[f64]) -> Result<Self> {
        let (min, max) = stats::bounds(data)?;
        debug!(min = min, max = max, count = data.len(), "Fitted min-max normalizer");
        Self::new(min, max)
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }
}

impl Normalizer for MinMaxNormalizer {
    fn scale(&self, value: f64) -> f64 {
        (value - self.min) / (self.max - self.min)
    }

    fn unscale(&self, value: f64) -> f64 {
        value * (self.max - self.min) + self.min
    }
}
