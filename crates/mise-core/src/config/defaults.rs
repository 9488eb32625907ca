use crate::constants;

pub fn max_use_count() -> u32 {
    constants::DEFAULT_MAX_USE_COUNT
}

pub fn frequency_weight() -> f64 {
    constants::DEFAULT_FREQUENCY_WEIGHT
}

pub fn recency_weight() -> f64 {
    constants::DEFAULT_RECENCY_WEIGHT
}
