use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::candidate::SuggestionCandidate;
use super::score::Score;

/// A candidate after scoring, ready for display.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RankedSuggestion {
    pub candidate: SuggestionCandidate,
    /// Freshness signal in [0.2, 1.0], banded by days since last use.
    pub recency_score: f64,
    /// Final ranking key: frequency and recency blended.
    pub weighted_score: Score,
    /// Always `false` in engine output — dismissed candidates are filtered
    /// out entirely. The flag is kept on the record so the display layer
    /// renders ranked and dismissed rows with one shape.
    pub dismissed: bool,
}

impl RankedSuggestion {
    pub fn new(candidate: SuggestionCandidate, recency_score: f64, weighted_score: Score) -> Self {
        Self {
            candidate,
            recency_score,
            weighted_score,
            dismissed: false,
        }
    }
}
