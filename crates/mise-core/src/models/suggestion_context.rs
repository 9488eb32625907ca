use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::prep_item::PrepItem;
use super::shift::Shift;

/// Per-request input for suggestion ranking, supplied by the UI-bound caller.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SuggestionContext {
    /// Station whose history backs the suggestions.
    pub station_id: String,
    /// Shift the history is scoped to.
    pub shift: Shift,
    /// Session-local dismissals. Candidates with these ids never surface.
    #[serde(default)]
    pub dismissed_ids: Vec<String>,
    /// Items already on today's list, suppressed from the suggestions.
    #[serde(default)]
    pub current_items: Vec<PrepItem>,
    /// Display cap. `None` returns every qualifying candidate.
    #[serde(default)]
    pub limit: Option<usize>,
}
