//! Tiered string similarity.
//!
//! A query is compared against a target by walking an ordered list of tiers.
//! The first tier that fires decides the score; later tiers never override it.

use crate::fuzzy::{levenshtein_distance, subsequence_match};
use serde::Serialize;

/// Score for a case-insensitive exact match.
pub const EXACT_SCORE: f64 = 1.0;
/// Score when the target contains the query.
pub const SUBSTRING_SCORE: f64 = 0.9;
/// Score when either string is a prefix of the other.
pub const PREFIX_SCORE: f64 = 0.85;

const SUBSEQUENCE_FLOOR: f64 = 0.5;
const SUBSEQUENCE_SPAN: f64 = 0.3;
const EDIT_SIMILARITY_CUTOFF: f64 = 0.4;
const EDIT_WEIGHT: f64 = 0.7;

/// Which tier produced a similarity score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchTier {
    /// Lowercased strings are equal
    Exact,
    /// Target contains query
    Substring,
    /// One string starts with the other
    Prefix,
    /// Query characters appear in target in order
    Subsequence,
    /// Levenshtein similarity above the cutoff
    EditDistance,
    /// No tier fired
    None,
}

impl MatchTier {
    /// Short lowercase name, used in CLI and browser output.
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchTier::Exact => "exact",
            MatchTier::Substring => "substring",
            MatchTier::Prefix => "prefix",
            MatchTier::Subsequence => "subsequence",
            MatchTier::EditDistance => "edit_distance",
            MatchTier::None => "none",
        }
    }
}

impl std::fmt::Display for MatchTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A similarity score together with the tier that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SimilarityMatch {
    pub tier: MatchTier,
    /// Score in `[0, 1]`
    pub score: f64,
}

impl SimilarityMatch {
    const NONE: Self = Self {
        tier: MatchTier::None,
        score: 0.0,
    };

    fn new(tier: MatchTier, score: f64) -> Self {
        Self { tier, score }
    }
}

/// Score how well `query` matches `target`, in `[0, 1]`.
///
/// Comparison is case-insensitive; no other normalization is applied.
///
/// # Example
/// ```
/// use staffdir_search::string_similarity;
///
/// assert_eq!(string_similarity("Jon", "jon"), 1.0);
/// assert_eq!(string_similarity("eng", "Engineering"), 0.9);
/// assert_eq!(string_similarity("xyz123", "manager"), 0.0);
/// ```
pub fn string_similarity(query: &str, target: &str) -> f64 {
    similarity_match(query, target).score
}

/// Like [`string_similarity`], but also reports which tier fired.
pub fn similarity_match(query: &str, target: &str) -> SimilarityMatch {
    let query = query.to_lowercase();
    let target = target.to_lowercase();

    if query == target {
        return SimilarityMatch::new(MatchTier::Exact, EXACT_SCORE);
    }

    // An empty target would otherwise be a prefix of every query.
    if !target.is_empty() {
        if target.contains(&query) {
            return SimilarityMatch::new(MatchTier::Substring, SUBSTRING_SCORE);
        }

        if target.starts_with(&query) || query.starts_with(&target) {
            return SimilarityMatch::new(MatchTier::Prefix, PREFIX_SCORE);
        }

        if let Some(score) = subsequence_score(&query, &target) {
            return SimilarityMatch::new(MatchTier::Subsequence, score);
        }
    }

    edit_distance_score(&query, &target)
        .map(|score| SimilarityMatch::new(MatchTier::EditDistance, score))
        .unwrap_or(SimilarityMatch::NONE)
}

/// Score in `(0.5, 0.8]` when `query` is an ordered subsequence of `target`.
fn subsequence_score(query: &str, target: &str) -> Option<f64> {
    let found = subsequence_match(target, query)?;

    let query_len = query.chars().count();
    let target_len = target.chars().count();
    if query_len == 0 || target_len == 0 {
        return None;
    }

    let base = found.matched as f64 / target_len as f64;
    let consecutive_bonus = found.longest_run as f64 / query_len as f64;
    let combined = (base + consecutive_bonus) / 2.0;

    (combined > 0.0).then(|| SUBSEQUENCE_FLOOR + combined * SUBSEQUENCE_SPAN)
}

/// Weighted Levenshtein similarity, or `None` at or below the cutoff.
fn edit_distance_score(query: &str, target: &str) -> Option<f64> {
    let max_len = query.chars().count().max(target.chars().count());
    if max_len == 0 {
        return None;
    }

    let distance = levenshtein_distance(query, target);
    let similarity = 1.0 - distance as f64 / max_len as f64;

    (similarity > EDIT_SIMILARITY_CUTOFF).then(|| similarity * EDIT_WEIGHT)
}
