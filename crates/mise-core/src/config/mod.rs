mod defaults;
mod ranking_config;

pub use ranking_config::RankingConfig;

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

/// Top-level configuration for the suggestion system.
///
/// Every field has a default; a config file only needs to name what it
/// overrides.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SuggestConfig {
    pub ranking: RankingConfig,
}

impl SuggestConfig {
    /// Parse a TOML document and validate it.
    pub fn from_toml(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate all sections.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.ranking.validate()
    }
}
