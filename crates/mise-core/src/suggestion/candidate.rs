use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// One historical usage record for a station+shift, eligible for suggestion.
///
/// Rows come straight from storage; missing fields coerce to neutral values.
/// A missing description compares as the empty string, a missing use count
/// scores as 0, and a missing last-used date scores at the recency floor.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SuggestionCandidate {
    /// Opaque unique identifier.
    pub id: String,
    /// Free-text item name.
    #[serde(default)]
    pub description: Option<String>,
    /// Historical use count.
    #[serde(default)]
    pub use_count: Option<u32>,
    /// Calendar date of the most recent use. `None` means never used / unknown.
    #[serde(default)]
    pub last_used: Option<NaiveDate>,
    /// Last-entered quantity, carried for display only.
    #[serde(default)]
    pub quantity: Option<f64>,
    /// Last-entered unit, carried for display only.
    #[serde(default)]
    pub unit: Option<String>,
}

impl SuggestionCandidate {
    /// Case-folded description used for duplicate suppression.
    /// A missing description folds to the empty string.
    pub fn description_key(&self) -> String {
        self.description.as_deref().unwrap_or("").to_lowercase()
    }
}
