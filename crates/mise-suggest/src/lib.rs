//! # mise-suggest
//!
//! Suggestion ranking for the prep-item autocomplete: banded recency scoring,
//! capped-frequency blending, exclusion filtering, and stable descending sort.
//!
//! The scoring core is pure and synchronous — no I/O, no shared state. The
//! [`engine::SuggestionEngine`] is the only piece that touches a collaborator
//! (the candidate source) or the clock.

pub mod display;
pub mod engine;
pub mod ranking;
pub mod scoring;

pub use engine::SuggestionEngine;
pub use ranking::RankingPipeline;
pub use scoring::weighted::RankerWeights;
