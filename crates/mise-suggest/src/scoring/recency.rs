use chrono::NaiveDate;

/// Used today.
pub const SCORE_TODAY: f64 = 1.0;
/// Used yesterday.
pub const SCORE_YESTERDAY: f64 = 0.8;
/// Used within the last week (2–7 days ago).
pub const SCORE_PAST_WEEK: f64 = 0.5;
/// Used more than 7 days ago.
pub const SCORE_STALE: f64 = 0.2;
/// Never used / unknown. Low-but-nonzero so history-less items are not
/// force-ranked to the bottom on recency alone.
pub const SCORE_UNKNOWN: f64 = 0.2;

/// Banded recency score from days since last use.
///
/// Range: the fixed set {1.0, 0.8, 0.5, 0.2}.
/// Day differences are whole calendar days; negative differences
/// (future-dated rows) are clamped to 0.
pub fn calculate(last_used: Option<NaiveDate>, today: NaiveDate) -> f64 {
    let Some(date) = last_used else {
        return SCORE_UNKNOWN;
    };

    let days = (today - date).num_days().max(0);

    match days {
        0 => SCORE_TODAY,
        1 => SCORE_YESTERDAY,
        2..=7 => SCORE_PAST_WEEK,
        _ => SCORE_STALE,
    }
}
