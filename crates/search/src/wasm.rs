//! WASM bindings for the directory search.

use wasm_bindgen::prelude::*;

/// Similarity of `query` to `target`, in `[0, 1]`.
#[wasm_bindgen]
pub fn similarity(query: &str, target: &str) -> f64 {
    crate::string_similarity(query, target)
}

/// Name of the tier that decided the similarity score.
///
/// One of `exact`, `substring`, `prefix`, `subsequence`, `edit_distance`, `none`.
#[wasm_bindgen]
pub fn match_tier(query: &str, target: &str) -> String {
    crate::similarity_match(query, target).tier.as_str().to_string()
}

/// Calculate Levenshtein edit distance between two strings.
#[wasm_bindgen]
pub fn edit_distance(a: &str, b: &str) -> usize {
    crate::levenshtein_distance(a, b)
}

/// Rank employees against a query.
///
/// # Arguments
/// * `query` - Free-text query (blank returns the input order)
/// * `employees_json` - JSON array of employee objects
///
/// # Returns
/// JSON array of the matching employees, most relevant first. Errors carry
/// the numeric search error code.
#[wasm_bindgen]
pub fn rank_employees(query: &str, employees_json: &str) -> Result<String, JsValue> {
    crate::rank_json(query, employees_json).map_err(|e| JsValue::from_str(&e.describe()))
}
