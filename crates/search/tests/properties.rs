//! Property-based tests for similarity scoring and ranking.

use proptest::prelude::*;
use staffdir_search::{rank, rank_scored, score_record, string_similarity, Employee, MIN_SCORE};

// ============================================================================
// STRATEGIES
// ============================================================================

/// Short text over a tiny alphabet so matches and ties are common.
fn text_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-cA-C ]{0,6}").unwrap()
}

fn query_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex(" ?[a-cA-C]{1,4} ?").unwrap()
}

/// Employees whose id is their position in the collection.
fn staff_strategy() -> impl Strategy<Value = Vec<Employee>> {
    prop::collection::vec(
        (
            text_strategy(),
            text_strategy(),
            text_strategy(),
            text_strategy(),
            text_strategy(),
            text_strategy(),
        ),
        0..12,
    )
    .prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(i, (first, last, email, role, department, status))| {
                Employee::new(i as u64, first, last)
                    .with_email(email)
                    .with_role(role)
                    .with_department(department)
                    .with_status(status)
            })
            .collect()
    })
}

fn best_score(employee: &Employee, query: &str) -> f64 {
    score_record(employee, query.trim()).score
}

// ============================================================================
// SIMILARITY
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Property: scores always lie in [0, 1], including for empty strings.
    #[test]
    fn prop_similarity_bounded(query in "\\PC{0,10}", target in "\\PC{0,10}") {
        let score = string_similarity(&query, &target);
        prop_assert!(score.is_finite());
        prop_assert!((0.0..=1.0).contains(&score), "score {} out of range", score);
    }

    /// Property: a non-empty string matches itself exactly.
    #[test]
    fn prop_similarity_reflexive(text in "\\PC{1,12}") {
        prop_assert_eq!(string_similarity(&text, &text), 1.0);
    }

    /// Property: case never changes the score for ASCII input.
    #[test]
    fn prop_similarity_case_insensitive(query in "[a-zA-Z]{0,8}", target in "[a-zA-Z]{0,8}") {
        prop_assert_eq!(
            string_similarity(&query, &target),
            string_similarity(&query.to_uppercase(), &target.to_lowercase())
        );
    }

    /// Property: identical inputs always produce identical scores.
    #[test]
    fn prop_similarity_deterministic(query in "\\PC{0,8}", target in "\\PC{0,8}") {
        prop_assert_eq!(string_similarity(&query, &target), string_similarity(&query, &target));
    }
}

// ============================================================================
// RANKING
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Property: a blank query returns the input unchanged.
    #[test]
    fn prop_blank_query_passes_through(staff in staff_strategy(), blank in "[ \t]{0,3}") {
        let ranked: Vec<u64> = rank(&staff, &blank).iter().filter_map(|e| e.id.as_u64()).collect();
        let original: Vec<u64> = staff.iter().filter_map(|e| e.id.as_u64()).collect();
        prop_assert_eq!(ranked, original);
    }

    /// Property: nothing below the threshold is returned, and nothing at or
    /// above it is left out.
    #[test]
    fn prop_threshold_exact(staff in staff_strategy(), query in query_strategy()) {
        let ranked = rank(&staff, &query);
        for employee in &ranked {
            prop_assert!(best_score(employee, &query) >= MIN_SCORE);
        }
        let expected = staff.iter().filter(|e| best_score(e, &query) >= MIN_SCORE).count();
        prop_assert_eq!(ranked.len(), expected);
    }

    /// Property: output is sorted by descending score, input order on ties.
    #[test]
    fn prop_sorted_and_stable(staff in staff_strategy(), query in query_strategy()) {
        let ranked = rank(&staff, &query);
        for pair in ranked.windows(2) {
            let (a, b) = (best_score(pair[0], &query), best_score(pair[1], &query));
            prop_assert!(a >= b, "not descending: {} then {}", a, b);
            if a == b {
                prop_assert!(pair[0].id.as_u64() < pair[1].id.as_u64(), "tie broke input order");
            }
        }
    }

    /// Property: re-ranking ranked output with the same query changes nothing.
    #[test]
    fn prop_rank_idempotent(staff in staff_strategy(), query in query_strategy()) {
        let once: Vec<Employee> = rank(&staff, &query).into_iter().cloned().collect();
        let twice: Vec<Employee> = rank(&once, &query).into_iter().cloned().collect();
        prop_assert_eq!(once, twice);
    }

    /// Property: scored and unscored ranking agree.
    #[test]
    fn prop_scored_matches_rank(staff in staff_strategy(), query in query_strategy()) {
        let plain: Vec<u64> = rank(&staff, &query).iter().filter_map(|e| e.id.as_u64()).collect();
        let scored: Vec<u64> = rank_scored(&staff, &query).iter().filter_map(|s| s.record.id.as_u64()).collect();
        prop_assert_eq!(plain, scored);
    }
}
