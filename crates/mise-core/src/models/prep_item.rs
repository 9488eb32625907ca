use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// An entry already on today's active prep list.
///
/// Used as the "current items" exclusion input: a candidate whose description
/// case-insensitively equals a current item's description is suppressed.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PrepItem {
    pub id: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub quantity: Option<f64>,
    #[serde(default)]
    pub unit: Option<String>,
    #[serde(default)]
    pub completed: bool,
}

impl PrepItem {
    /// Case-folded description used for duplicate suppression.
    /// A missing description folds to the empty string.
    pub fn description_key(&self) -> String {
        self.description.as_deref().unwrap_or("").to_lowercase()
    }
}
