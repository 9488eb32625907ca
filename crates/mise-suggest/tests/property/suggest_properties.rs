use chrono::{Duration, NaiveDate};
use mise_core::models::PrepItem;
use mise_core::suggestion::SuggestionCandidate;
use mise_suggest::scoring::{recency, weighted, RankerWeights};
use mise_suggest::RankingPipeline;
use proptest::prelude::*;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 8, 6).unwrap()
}

static RECENCY_BANDS: [f64; 4] = [1.0, 0.8, 0.5, 0.2];

fn arb_days_ago() -> impl Strategy<Value = Option<i64>> {
    prop_oneof![Just(None), (0i64..3650).prop_map(Some)]
}

prop_compose! {
    fn arb_candidate()(
        description in prop_oneof![Just(None), "[a-z ]{1,16}".prop_map(Some)],
        use_count in prop_oneof![Just(None), (0u32..200).prop_map(Some)],
        days_ago in arb_days_ago(),
    ) -> SuggestionCandidate {
        SuggestionCandidate {
            id: uuid::Uuid::new_v4().to_string(),
            description,
            use_count,
            last_used: days_ago.map(|d| today() - Duration::days(d)),
            quantity: None,
            unit: None,
        }
    }
}

// ── Recency: fixed band set ──────────────────────────────────────────────

proptest! {
    #[test]
    fn recency_always_in_band_set(days_ago in arb_days_ago()) {
        let last_used = days_ago.map(|d| today() - Duration::days(d));
        let score = recency::calculate(last_used, today());
        prop_assert!(
            RECENCY_BANDS.contains(&score),
            "score {} not in the documented band set",
            score
        );
    }
}

proptest! {
    #[test]
    fn recency_stale_beyond_a_week_regardless_of_distance(days in 8i64..100_000) {
        let last_used = Some(today() - Duration::days(days));
        prop_assert_eq!(recency::calculate(last_used, today()), 0.2);
    }
}

// ── Weighted: bounded and monotone ───────────────────────────────────────

proptest! {
    #[test]
    fn weighted_bounded_zero_to_one(
        use_count in prop_oneof![Just(None), (0u32..1_000_000).prop_map(Some)],
        recency_score in prop::sample::select(&RECENCY_BANDS[..]),
    ) {
        let w = RankerWeights::default();
        let score = weighted::calculate(use_count, recency_score, 50, &w);
        prop_assert!(
            (0.0..=1.0).contains(&score),
            "Out of bounds: {}",
            score
        );
    }
}

proptest! {
    #[test]
    fn weighted_monotone_in_use_count(
        lower in 0u32..500,
        delta in 0u32..500,
        recency_score in prop::sample::select(&RECENCY_BANDS[..]),
    ) {
        let w = RankerWeights::default();
        let a = weighted::calculate(Some(lower), recency_score, 50, &w);
        let b = weighted::calculate(Some(lower + delta), recency_score, 50, &w);
        prop_assert!(
            b >= a,
            "score decreased as use_count grew: {} < {}",
            b,
            a
        );
    }
}

proptest! {
    #[test]
    fn weighted_monotone_in_recency(
        use_count in 0u32..200,
        lo in 0usize..4,
        hi in 0usize..4,
    ) {
        // Bands are listed best-first, so a lower index is a fresher score.
        let (lo, hi) = if lo < hi { (hi, lo) } else { (lo, hi) };
        let w = RankerWeights::default();
        let a = weighted::calculate(Some(use_count), RECENCY_BANDS[lo], 50, &w);
        let b = weighted::calculate(Some(use_count), RECENCY_BANDS[hi], 50, &w);
        prop_assert!(b >= a, "fresher recency scored lower: {} < {}", b, a);
    }
}

proptest! {
    #[test]
    fn weighted_capped_at_max_use_count(
        overflow in 0u32..1_000_000,
        recency_score in prop::sample::select(&RECENCY_BANDS[..]),
        max in 1u32..500,
    ) {
        let w = RankerWeights::default();
        let at_cap = weighted::calculate(Some(max), recency_score, max, &w);
        let above = weighted::calculate(Some(max.saturating_add(overflow)), recency_score, max, &w);
        prop_assert_eq!(at_cap, above, "counts past the cap must score the same");
    }
}

// ── Ranking: exclusion, ordering, truncation invariants ──────────────────

proptest! {
    #[test]
    fn ranking_invariants_hold(
        candidates in prop::collection::vec(arb_candidate(), 0..40),
        dismiss_mask in prop::collection::vec(any::<bool>(), 0..40),
        current_mask in prop::collection::vec(any::<bool>(), 0..40),
        limit in prop_oneof![Just(None), (0usize..50).prop_map(Some)],
    ) {
        let dismissed: Vec<String> = candidates
            .iter()
            .zip(dismiss_mask.iter())
            .filter(|(_, &d)| d)
            .map(|(c, _)| c.id.clone())
            .collect();

        // Current items reuse candidate descriptions, upper-cased to
        // exercise case-folding.
        let current_items: Vec<PrepItem> = candidates
            .iter()
            .zip(current_mask.iter())
            .filter(|(_, &d)| d)
            .map(|(c, _)| PrepItem {
                id: uuid::Uuid::new_v4().to_string(),
                description: c.description.as_ref().map(|d| d.to_uppercase()),
                quantity: None,
                unit: None,
                completed: false,
            })
            .collect();

        let current_keys: Vec<String> =
            current_items.iter().map(PrepItem::description_key).collect();
        let qualifying = candidates
            .iter()
            .filter(|c| !dismissed.contains(&c.id))
            .filter(|c| !current_keys.contains(&c.description_key()))
            .count();

        let ranked = RankingPipeline::new().rank(
            candidates,
            &dismissed,
            &current_items,
            limit,
            today(),
        );

        // Exclusions never leak.
        for r in &ranked {
            prop_assert!(!dismissed.contains(&r.candidate.id));
            prop_assert!(!current_keys.contains(&r.candidate.description_key()));
            prop_assert!(!r.dismissed);
        }

        // Sorted descending on every adjacent pair.
        for pair in ranked.windows(2) {
            prop_assert!(
                pair[0].weighted_score.value() >= pair[1].weighted_score.value()
            );
        }

        // Truncation keeps min(limit, qualifying); no limit keeps all.
        let expected_len = match limit {
            Some(n) => n.min(qualifying),
            None => qualifying,
        };
        prop_assert_eq!(ranked.len(), expected_len);
    }
}

proptest! {
    #[test]
    fn ranking_without_exclusions_preserves_length(
        candidates in prop::collection::vec(arb_candidate(), 0..40),
    ) {
        let expected = candidates.len();
        let ranked = RankingPipeline::new().rank(candidates, &[], &[], None, today());
        prop_assert_eq!(ranked.len(), expected, "no silent drops");
    }
}
