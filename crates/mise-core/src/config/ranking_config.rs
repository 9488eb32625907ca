use serde::{Deserialize, Serialize};

use super::defaults;
use crate::errors::ConfigError;

/// Ranking subsystem configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RankingConfig {
    /// Use-count cap for the frequency component.
    pub max_use_count: u32,
    /// Weight of the frequency component.
    pub frequency_weight: f64,
    /// Weight of the recency component.
    pub recency_weight: f64,
    /// Cap applied when a request carries no explicit limit.
    pub default_limit: Option<usize>,
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self {
            max_use_count: defaults::max_use_count(),
            frequency_weight: defaults::frequency_weight(),
            recency_weight: defaults::recency_weight(),
            default_limit: None,
        }
    }
}

impl RankingConfig {
    /// Reject weights the scorer cannot blend meaningfully.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, w) in [
            ("frequency_weight", self.frequency_weight),
            ("recency_weight", self.recency_weight),
        ] {
            if !w.is_finite() {
                return Err(ConfigError::InvalidWeights {
                    detail: format!("{name} must be finite, got {w}"),
                });
            }
            if w < 0.0 {
                return Err(ConfigError::InvalidWeights {
                    detail: format!("{name} must be non-negative, got {w}"),
                });
            }
        }
        if self.frequency_weight == 0.0 && self.recency_weight == 0.0 {
            return Err(ConfigError::InvalidWeights {
                detail: "frequency_weight and recency_weight cannot both be zero".to_string(),
            });
        }
        Ok(())
    }
}
