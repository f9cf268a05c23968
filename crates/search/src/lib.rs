//! Fuzzy matching and relevance ranking for the staff directory.
//!
//! This crate provides:
//! - Tiered string similarity (exact, substring, prefix, subsequence, edit distance)
//! - Best-field scoring of employee records
//! - Stable relevance ranking with a fixed minimum score
//! - WASM bindings for browser usage
//!
//! Everything here is pure: no I/O and no state kept between calls.
//!
//! # Example
//!
//! ```
//! use staffdir_search::{rank, string_similarity, Employee};
//!
//! assert_eq!(string_similarity("ENG", "engineering"), 0.9);
//!
//! let staff = vec![
//!     Employee::new(1, "Ada", "Lovelace").with_department("Engineering"),
//!     Employee::new(2, "Grace", "Hopper").with_department("Research"),
//! ];
//! let ranked = rank(&staff, "engr");
//! assert_eq!(ranked.len(), 1);
//! assert_eq!(ranked[0].first_name, "Ada");
//! ```

mod error;
mod fuzzy;
pub mod ranker;
mod record;
mod similarity;

#[cfg(feature = "wasm")]
mod wasm;

pub use error::{Result, SearchError, SearchErrorCode};
pub use fuzzy::{levenshtein_distance, subsequence_match, SubsequenceMatch};
pub use ranker::{rank, rank_json, rank_scored, score_record, FieldScore, ScoredRecord, MIN_SCORE};
pub use record::{Employee, Field, RecordId, Searchable};
pub use similarity::{
    similarity_match, string_similarity, MatchTier, SimilarityMatch, EXACT_SCORE, PREFIX_SCORE,
    SUBSTRING_SCORE,
};
