/// Mise system version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Use-count cap for the frequency component. Counts above this score the same.
pub const DEFAULT_MAX_USE_COUNT: u32 = 50;

/// Default weight of the frequency component in the blended score.
pub const DEFAULT_FREQUENCY_WEIGHT: f64 = 0.4;

/// Default weight of the recency component in the blended score.
pub const DEFAULT_RECENCY_WEIGHT: f64 = 0.6;
