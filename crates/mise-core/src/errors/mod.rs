pub mod config_error;
pub mod suggest_error;

pub use config_error::ConfigError;
pub use suggest_error::SuggestError;

/// Umbrella error for the Mise workspace.
///
/// The scoring/ranking core itself never errors — nulls coerce to neutral
/// defaults. Errors come from the seams: candidate sources and config loading.
#[derive(Debug, thiserror::Error)]
pub enum MiseError {
    #[error(transparent)]
    Suggest(#[from] SuggestError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result alias used across the workspace.
pub type MiseResult<T> = Result<T, MiseError>;
