use common::{NormalizerKind, Result, ScalingConfig, StdDevEstimator};
use tracing::info;

use crate::{MeanNormalizer, MinMaxNormalizer, Normalizer, ZScoreNormalizer};

/// Any one of the supported normalizers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AnyNormalizer {
    MinMax(MinMaxNormalizer),
    Mean(MeanNormalizer),
    ZScore(ZScoreNormalizer),
}

/// Ordered collection of normalizers, typically one per feature column.
///
/// Nothing ties an entry to a particular column; keeping them aligned is up
/// to the caller.
pub type Normalizers = Vec<AnyNormalizer>;

impl AnyNormalizer {
    /// Fit a normalizer of the given kind to `data`.
    ///
    /// `estimator` is only used for [`NormalizerKind::ZScore`].
    pub fn from_data(
        kind: NormalizerKind,
        data: &[f64],
        estimator: StdDevEstimator,
    ) -> Result<Self> {
        info!(kind = ?kind, count = data.len(), "Fitting normalizer");

        Ok(match kind {
            NormalizerKind::MinMax => Self::MinMax(MinMaxNormalizer::from_data(data)?),
            NormalizerKind::Mean => Self::Mean(MeanNormalizer::from_data(data)?),
            NormalizerKind::ZScore => Self::ZScore(ZScoreNormalizer::from_data(data, estimator)?),
        })
    }

    pub fn from_config(config: &ScalingConfig, data: &[f64]) -> Result<Self> {
        Self::from_data(config.kind, data, config.std_dev_estimator)
    }

    pub fn kind(&self) -> NormalizerKind {
        match self {
            Self::MinMax(_) => NormalizerKind::MinMax,
            Self::Mean(_) => NormalizerKind::Mean,
            Self::ZScore(_) => NormalizerKind::ZScore,
        }
    }
}

impl Normalizer for AnyNormalizer {
    fn scale(&self, value: f64) -> f64 {
        match self {
            Self::MinMax(n) => n.scale(value),
            Self::Mean(n) => n.scale(value),
            Self::ZScore(n) => n.scale(value),
        }
    }

    fn unscale(&self, value: f64) -> f64 {
        match self {
            Self::MinMax(n) => n.unscale(value),
            Self::Mean(n) => n.unscale(value),
            Self::ZScore(n) => n.unscale(value),
        }
    }
}

impl From<MinMaxNormalizer> for AnyNormalizer {
    fn from(n: MinMaxNormalizer) -> Self {
        Self::MinMax(n)
    }
}

impl From<MeanNormalizer> for AnyNormalizer {
    fn from(n: MeanNormalizer) -> Self {
        Self::Mean(n)
    }
}

impl From<ZScoreNormalizer> for AnyNormalizer {
    fn from(n: ZScoreNormalizer) -> Self {
        Self::ZScore(n)
    }
}
