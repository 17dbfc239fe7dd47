mod any;
mod mean;
mod minmax;
mod zscore;

pub use any::{AnyNormalizer, Normalizers};
pub use mean::MeanNormalizer;
pub use minmax::MinMaxNormalizer;
pub use zscore::ZScoreNormalizer;

pub use common::{NormalizerKind, Result, ScalingConfig, ScalingError, StdDevEstimator};

/// Trait for value scaling/normalization with fixed parameters.
///
/// Implementors supply `scale` and its inverse `unscale`; the slice
/// operations are derived from them and preserve length and order.
pub trait Normalizer: Send + Sync {
    /// Map a raw value into normalized space.
    fn scale(&self, value: f64) -> f64;

    /// Map a normalized value back to original units.
    fn unscale(&self, value: f64) -> f64;

    /// Scale every element of `values` in place.
    ///
    /// This is the only operation that writes to caller storage, so it is the
    /// only one that needs exclusive access to it.
    fn rescale_slice(&self, values: &mut [f64]) {
        for v in values.iter_mut() {
            *v = self.scale(*v);
        }
    }

    /// Scaled copy of `values`.
    fn scaled_slice(&self, values: &[f64]) -> Vec<f64> {
        values.iter().map(|&v| self.scale(v)).collect()
    }

    /// Unscaled copy of `values`.
    fn unscaled_slice(&self, values: &[f64]) -> Vec<f64> {
        values.iter().map(|&v| self.unscale(v)).collect()
    }
}

fn ensure_finite(name: &str, value: f64) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ScalingError::InvalidParameters(format!(
            "{name} must be finite, got {value}"
        )))
    }
}

fn ensure_nonzero_range(min: f64, max: f64) -> Result<()> {
    if max == min {
        return Err(ScalingError::InvalidParameters(format!(
            "max and min must differ, both are {min}"
        )));
    }
    if !(max - min).is_finite() {
        return Err(ScalingError::InvalidParameters(format!(
            "range between {min} and {max} is not representable"
        )));
    }
    Ok(())
}
