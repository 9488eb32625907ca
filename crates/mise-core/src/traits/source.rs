use crate::errors::MiseResult;
use crate::models::Shift;
use crate::suggestion::SuggestionCandidate;

/// Supplies suggestion candidates for a station+shift.
///
/// Implemented outside this workspace by the storage adapter. Candidates are
/// produced fresh on every call; any storage-native ordering is irrelevant
/// because the ranking pipeline re-sorts regardless.
pub trait ISuggestionSource {
    fn fetch_candidates(
        &self,
        station_id: &str,
        shift: Shift,
    ) -> MiseResult<Vec<SuggestionCandidate>>;
}
