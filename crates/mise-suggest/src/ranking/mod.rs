//! RankingPipeline: filter → score → sort → truncate.

pub mod exclusions;

use std::cmp::Ordering;

use chrono::NaiveDate;
use mise_core::config::RankingConfig;
use mise_core::models::PrepItem;
use mise_core::suggestion::{RankedSuggestion, Score, SuggestionCandidate};

use crate::scoring::{self, RankerWeights};

/// Full ranking pipeline: exclusion filtering → two-factor scoring →
/// stable descending sort → truncation.
pub struct RankingPipeline {
    weights: RankerWeights,
    max_use_count: u32,
}

impl RankingPipeline {
    pub fn new() -> Self {
        Self {
            weights: RankerWeights::default(),
            max_use_count: mise_core::constants::DEFAULT_MAX_USE_COUNT,
        }
    }

    /// Build a pipeline from ranking config.
    pub fn from_config(config: &RankingConfig) -> Self {
        Self {
            weights: RankerWeights {
                frequency: config.frequency_weight,
                recency: config.recency_weight,
            },
            max_use_count: config.max_use_count,
        }
    }

    /// Rank candidates for display.
    ///
    /// `today` is stamped once by the caller so repeated invocations within a
    /// request see one consistent date. Ties keep candidate input order —
    /// the sort is stable and there is no secondary key.
    pub fn rank(
        &self,
        candidates: Vec<SuggestionCandidate>,
        dismissed_ids: &[String],
        current_items: &[PrepItem],
        limit: Option<usize>,
        today: NaiveDate,
    ) -> Vec<RankedSuggestion> {
        // Stage 1: drop dismissed ids and current-item duplicates.
        let surviving = exclusions::filter(candidates, dismissed_ids, current_items);

        // Stage 2: score survivors.
        let mut ranked: Vec<RankedSuggestion> = surviving
            .into_iter()
            .map(|candidate| {
                let recency = scoring::recency::calculate(candidate.last_used, today);
                let weighted = scoring::weighted::calculate(
                    candidate.use_count,
                    recency,
                    self.max_use_count,
                    &self.weights,
                );
                RankedSuggestion::new(candidate, recency, Score::new(weighted))
            })
            .collect();

        // Stage 3: sort by weighted score descending (stable).
        ranked.sort_by(|a, b| {
            b.weighted_score
                .partial_cmp(&a.weighted_score)
                .unwrap_or(Ordering::Equal)
        });

        // Stage 4: apply the display cap.
        if let Some(limit) = limit {
            ranked.truncate(limit);
        }

        ranked
    }
}

impl Default for RankingPipeline {
    fn default() -> Self {
        Self::new()
    }
}
