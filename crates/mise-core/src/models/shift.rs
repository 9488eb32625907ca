use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

/// Service shift a station's prep history is scoped to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum Shift {
    Breakfast,
    Lunch,
    Dinner,
}

impl fmt::Display for Shift {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Shift::Breakfast => "breakfast",
            Shift::Lunch => "lunch",
            Shift::Dinner => "dinner",
        };
        write!(f, "{s}")
    }
}
