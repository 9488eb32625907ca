pub mod candidate;
pub mod ranked;
pub mod score;

pub use candidate::SuggestionCandidate;
pub use ranked::RankedSuggestion;
pub use score::Score;
