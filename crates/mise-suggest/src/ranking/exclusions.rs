//! Exclusion filters: session dismissals and current-list duplicates.

use std::collections::HashSet;

use mise_core::models::PrepItem;
use mise_core::suggestion::SuggestionCandidate;

/// Drop candidates the session dismissed or that duplicate a current item.
///
/// Duplicate detection is exact case-insensitive description equality.
/// Missing descriptions fold to the empty string on both sides, so a
/// description-less current item suppresses description-less candidates.
pub fn filter(
    candidates: Vec<SuggestionCandidate>,
    dismissed_ids: &[String],
    current_items: &[PrepItem],
) -> Vec<SuggestionCandidate> {
    let dismissed: HashSet<&str> = dismissed_ids.iter().map(String::as_str).collect();
    let current: HashSet<String> = current_items
        .iter()
        .map(PrepItem::description_key)
        .collect();

    candidates
        .into_iter()
        .filter(|c| !dismissed.contains(c.id.as_str()))
        .filter(|c| !current.contains(&c.description_key()))
        .collect()
}
