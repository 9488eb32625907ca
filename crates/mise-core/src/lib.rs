//! # mise-core
//!
//! Foundation crate for the Mise prep-list suggestion system.
//! Defines all types, traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod suggestion;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::SuggestConfig;
pub use errors::{MiseError, MiseResult};
pub use models::{PrepItem, Shift, SuggestionContext};
pub use suggestion::{RankedSuggestion, Score, SuggestionCandidate};
