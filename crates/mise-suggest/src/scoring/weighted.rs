use mise_core::constants::{
    DEFAULT_FREQUENCY_WEIGHT, DEFAULT_MAX_USE_COUNT, DEFAULT_RECENCY_WEIGHT,
};

/// Weights for the two scoring factors.
#[derive(Debug, Clone)]
pub struct RankerWeights {
    pub frequency: f64,
    pub recency: f64,
}

impl Default for RankerWeights {
    fn default() -> Self {
        Self {
            frequency: DEFAULT_FREQUENCY_WEIGHT,
            recency: DEFAULT_RECENCY_WEIGHT,
        }
    }
}

/// Blend usage frequency and recency into one comparable score.
///
/// The frequency component is `min(use_count, max_use_count) / max_use_count`,
/// so a single outlier count cannot dominate. A missing `use_count` counts
/// as 0 — unlike display quantities, 0 here is a real, countable value.
/// A `max_use_count` of 0 falls back to the default cap.
///
/// Range at default weights: [0.12, 1.0], given the recency floor of 0.2.
pub fn calculate(
    use_count: Option<u32>,
    recency_score: f64,
    max_use_count: u32,
    weights: &RankerWeights,
) -> f64 {
    let cap = if max_use_count == 0 {
        DEFAULT_MAX_USE_COUNT
    } else {
        max_use_count
    };

    let count = use_count.unwrap_or(0).min(cap);
    let frequency = f64::from(count) / f64::from(cap);

    frequency * weights.frequency + recency_score * weights.recency
}
