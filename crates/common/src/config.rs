use serde::{Deserialize, Serialize};

use crate::stats::StdDevEstimator;
use crate::Result;

/// Scaling strategy a normalizer is fitted with.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NormalizerKind {
    /// `(v - min) / (max - min)`
    #[default]
    MinMax,
    /// `(v - mean) / (max - min)`
    Mean,
    /// `(v - mean) / std_dev`
    ZScore,
}

/// Controls how normalizers are derived from data.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScalingConfig {
    #[serde(default)]
    pub kind: NormalizerKind,

    /// Only consulted for [`NormalizerKind::ZScore`].
    #[serde(default)]
    pub std_dev_estimator: StdDevEstimator,
}

impl ScalingConfig {
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ScalingError;

    #[test]
    fn test_defaults() {
        let config = ScalingConfig::default();
        assert_eq!(config.kind, NormalizerKind::MinMax);
        assert_eq!(config.std_dev_estimator, StdDevEstimator::Population);
    }

    #[test]
    fn test_from_json_empty_object_uses_defaults() {
        let config = ScalingConfig::from_json("{}").unwrap();
        assert_eq!(config, ScalingConfig::default());
    }

    #[test]
    fn test_from_json() {
        let config =
            ScalingConfig::from_json(r#"{"kind": "z_score", "std_dev_estimator": "sample"}"#)
                .unwrap();
        assert_eq!(config.kind, NormalizerKind::ZScore);
        assert_eq!(config.std_dev_estimator, StdDevEstimator::Sample);
    }

    #[test]
    fn test_from_json_unknown_kind() {
        let result = ScalingConfig::from_json(r#"{"kind": "robust"}"#);
        assert!(matches!(result, Err(ScalingError::Serde(_))));
    }
}
