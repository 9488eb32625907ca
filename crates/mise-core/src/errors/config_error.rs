/// Config subsystem errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid ranking weights: {detail}")]
    InvalidWeights { detail: String },
}
