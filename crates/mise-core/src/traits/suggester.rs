use crate::errors::MiseResult;
use crate::models::SuggestionContext;
use crate::suggestion::RankedSuggestion;

/// Produces the ordered, filtered suggestion list for display.
pub trait ISuggester {
    fn suggest(&self, context: &SuggestionContext) -> MiseResult<Vec<RankedSuggestion>>;
}
