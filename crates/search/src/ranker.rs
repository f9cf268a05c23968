//! Relevance ranking of record collections.
//!
//! Each record is scored by its best-matching field. Records under
//! [`MIN_SCORE`] are dropped and the rest are ordered by descending score,
//! keeping input order among equal scores.

use crate::record::{Employee, Field, Searchable};
use crate::similarity::string_similarity;
use crate::{Result, SearchError};
use serde::Serialize;
use std::cmp::Ordering;
use tracing::{debug, trace};

/// Minimum best-field score for a record to be kept.
pub const MIN_SCORE: f64 = 0.3;

/// Best-matching field of a record and its score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FieldScore {
    /// `None` when no field scored above zero
    pub field: Option<Field>,
    pub score: f64,
}

/// A record paired with its relevance score.
#[derive(Debug, Clone, Serialize)]
pub struct ScoredRecord<'a, R> {
    pub record: &'a R,
    pub score: f64,
    pub field: Option<Field>,
}

/// Score a record against a query using its best field.
///
/// The query is used as given; [`rank`] trims it before calling this.
pub fn score_record<R: Searchable + ?Sized>(record: &R, query: &str) -> FieldScore {
    Field::ALL.iter().fold(
        FieldScore {
            field: None,
            score: 0.0,
        },
        |best, &field| {
            let score = string_similarity(query, &record.field(field));
            if score > best.score {
                FieldScore {
                    field: Some(field),
                    score,
                }
            } else {
                best
            }
        },
    )
}

/// Filter and order records by relevance to `query`.
///
/// A blank query returns every record in its original order.
///
/// `R: Sync` holds in every build, not only with the `parallel` feature, so
/// turning the feature on never changes which record types can be ranked.
///
/// # Example
/// ```
/// use staffdir_search::{rank, Employee};
///
/// let staff = vec![
///     Employee::new(1, "John", "Smith"),
///     Employee::new(2, "Jon", "Jones"),
///     Employee::new(3, "Mary", "Major"),
/// ];
///
/// let ranked = rank(&staff, "jon");
/// let ids: Vec<u64> = ranked.iter().filter_map(|e| e.id.as_u64()).collect();
/// assert_eq!(ids, vec![2, 1]);
/// ```
pub fn rank<'a, R: Searchable + Sync>(records: &'a [R], query: &str) -> Vec<&'a R> {
    if query.trim().is_empty() {
        return records.iter().collect();
    }

    rank_scored(records, query)
        .into_iter()
        .map(|scored| scored.record)
        .collect()
}

/// Like [`rank`], but keeps each record's score and best field.
///
/// A blank query yields every record with score `1.0` and no field.
pub fn rank_scored<'a, R: Searchable + Sync>(records: &'a [R], query: &str) -> Vec<ScoredRecord<'a, R>> {
    let query = query.trim();
    if query.is_empty() {
        return records
            .iter()
            .map(|record| ScoredRecord {
                record,
                score: 1.0,
                field: None,
            })
            .collect();
    }

    let mut kept: Vec<ScoredRecord<'a, R>> = score_all(records, query)
        .into_iter()
        .filter(|scored| scored.score >= MIN_SCORE)
        .collect();

    // Stable: equal scores keep input order.
    kept.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));

    debug!(
        query,
        candidates = records.len(),
        kept = kept.len(),
        "Ranked records"
    );
    for scored in &kept {
        trace!(score = scored.score, field = ?scored.field, "Kept record");
    }

    kept
}

/// Parse a JSON array of employees, rank it and serialize the result.
///
/// # Returns
/// JSON array of the kept employees in ranked order
pub fn rank_json(query: &str, records_json: &str) -> Result<String> {
    let records: Vec<Employee> =
        serde_json::from_str(records_json).map_err(SearchError::InvalidRecords)?;

    let ranked = rank(&records, query);

    serde_json::to_string(&ranked).map_err(SearchError::Serialization)
}

fn score_all<'a, R: Searchable + Sync>(records: &'a [R], query: &str) -> Vec<ScoredRecord<'a, R>> {
    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        records
            .par_iter()
            .map(|record| score_one(record, query))
            .collect()
    }

    #[cfg(not(feature = "parallel"))]
    {
        records
            .iter()
            .map(|record| score_one(record, query))
            .collect()
    }
}

#[inline]
fn score_one<'a, R: Searchable>(record: &'a R, query: &str) -> ScoredRecord<'a, R> {
    let FieldScore { field, score } = score_record(record, query);
    ScoredRecord {
        record,
        score,
        field,
    }
}
