//! Error types for the search crate.
//!
//! Scoring and ranking are total; errors only arise when records cross a
//! JSON boundary.

use thiserror::Error;

/// Result type alias for search operations.
pub type Result<T> = std::result::Result<T, SearchError>;

/// Errors that can occur at the search crate's JSON boundary.
#[derive(Debug, Error)]
pub enum SearchError {
    /// Input was not a JSON array of records
    #[error("Invalid records: {0}")]
    InvalidRecords(#[source] serde_json::Error),

    /// Ranked output could not be serialized
    #[error("Serialization error: {0}")]
    Serialization(#[source] serde_json::Error),
}

/// Error code for integration with staffdir-core error handling.
/// Range: 11xxx for search errors.
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchErrorCode {
    /// Input was not a JSON array of records
    InvalidRecords = 11001,
    /// Ranked output could not be serialized
    Serialization = 11002,
}

impl SearchError {
    /// Returns the error code for this error.
    pub fn code(&self) -> SearchErrorCode {
        match self {
            SearchError::InvalidRecords(_) => SearchErrorCode::InvalidRecords,
            SearchError::Serialization(_) => SearchErrorCode::Serialization,
        }
    }

    /// `"E<code>: <message>"`, the form handed across the WASM boundary.
    pub fn describe(&self) -> String {
        format!("E{}: {}", self.code() as u32, self)
    }
}
