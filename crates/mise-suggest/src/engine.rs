//! SuggestionEngine: implements ISuggester, orchestrates fetch → rank.

use chrono::Utc;
use tracing::{debug, info};

use mise_core::config::SuggestConfig;
use mise_core::errors::MiseResult;
use mise_core::models::SuggestionContext;
use mise_core::suggestion::RankedSuggestion;
use mise_core::traits::{ISuggester, ISuggestionSource};

use crate::ranking::RankingPipeline;

/// The main suggestion engine. Fetches candidates for the context's
/// station+shift, stamps "today" once, and delegates to the ranking pipeline.
pub struct SuggestionEngine<'a> {
    source: &'a dyn ISuggestionSource,
    pipeline: RankingPipeline,
    default_limit: Option<usize>,
}

impl<'a> SuggestionEngine<'a> {
    pub fn new(source: &'a dyn ISuggestionSource) -> Self {
        Self {
            source,
            pipeline: RankingPipeline::new(),
            default_limit: None,
        }
    }

    /// Build an engine from config.
    pub fn with_config(source: &'a dyn ISuggestionSource, config: &SuggestConfig) -> Self {
        Self {
            source,
            pipeline: RankingPipeline::from_config(&config.ranking),
            default_limit: config.ranking.default_limit,
        }
    }
}

impl ISuggester for SuggestionEngine<'_> {
    fn suggest(&self, context: &SuggestionContext) -> MiseResult<Vec<RankedSuggestion>> {
        let candidates = self
            .source
            .fetch_candidates(&context.station_id, context.shift)?;

        debug!(
            station = %context.station_id,
            shift = %context.shift,
            candidates = candidates.len(),
            "fetched suggestion candidates"
        );

        let today = Utc::now().date_naive();
        let limit = context.limit.or(self.default_limit);

        let ranked = self.pipeline.rank(
            candidates,
            &context.dismissed_ids,
            &context.current_items,
            limit,
            today,
        );

        info!(
            station = %context.station_id,
            ranked = ranked.len(),
            ?limit,
            "suggestion ranking complete"
        );

        Ok(ranked)
    }
}
