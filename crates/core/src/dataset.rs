//! Employee dataset loading
//!
//! Accepts either a bare JSON array of employees or an object wrapping the
//! array under an `employees` key.

use crate::error::{Error, ErrorCode, Result, ResultExt};
use serde::Deserialize;
use staffdir_search::Employee;
use std::path::Path;
use tracing::info;

#[derive(Deserialize)]
#[serde(untagged)]
enum DatasetShape {
    List(Vec<Employee>),
    Wrapped { employees: Vec<Employee> },
}

/// Load employees from a JSON file.
pub fn load_employees(path: impl AsRef<Path>) -> Result<Vec<Employee>> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(Error::file_not_found(path)
            .with_suggestion("Pass --data <file> or set general.dataset in .staffdir.toml"));
    }

    let content = std::fs::read_to_string(path)?;
    let employees = parse_employees(&content).context(format!("While loading {}", path.display()))?;

    info!(path = %path.display(), count = employees.len(), "Loaded employee dataset");
    Ok(employees)
}

/// Parse employees from JSON text.
pub fn parse_employees(json: &str) -> Result<Vec<Employee>> {
    let value: serde_json::Value = serde_json::from_str(json)?;

    match serde_json::from_value::<DatasetShape>(value) {
        Ok(DatasetShape::List(employees)) | Ok(DatasetShape::Wrapped { employees }) => Ok(employees),
        Err(e) => Err(Error::new(
            ErrorCode::DatasetShapeError,
            "Expected a JSON array of employees or an object with an \"employees\" array",
        )
        .with_source(e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SAMPLE: &str = r#"[
        {"id": 1, "firstName": "John", "lastName": "Smith", "email": "john@example.com",
         "role": "Engineer", "department": "Engineering", "status": "Active"},
        {"id": 2, "firstName": "Jon", "lastName": "Jones", "status": null}
    ]"#;

    #[test]
    fn test_parse_array() {
        let employees = parse_employees(SAMPLE).unwrap();
        assert_eq!(employees.len(), 2);
        assert_eq!(employees[1].status, "");
    }

    #[test]
    fn test_parse_wrapped() {
        let json = format!(r#"{{"employees": {}}}"#, SAMPLE);
        let employees = parse_employees(&json).unwrap();
        assert_eq!(employees.len(), 2);
        assert_eq!(employees[0].department, "Engineering");
    }

    #[test]
    fn test_parse_keeps_unusual_ids() {
        let employees =
            parse_employees(r#"[{"id": "E-002", "firstName": "Jo"}, {"id": -5}, {"id": 0.5}]"#).unwrap();
        assert_eq!(employees.len(), 3);
        assert_eq!(employees[0].id.to_string(), "E-002");
        assert_eq!(employees[1].id.to_string(), "-5");
        assert_eq!(employees[2].id.to_string(), "0.5");
    }

    #[test]
    fn test_parse_invalid_json() {
        let err = parse_employees("[{").unwrap_err();
        assert_eq!(err.code, ErrorCode::DatasetParseError);
    }

    #[test]
    fn test_parse_wrong_shape() {
        let err = parse_employees(r#"{"people": []}"#).unwrap_err();
        assert_eq!(err.code, ErrorCode::DatasetShapeError);
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_employees("/nonexistent/employees.json").unwrap_err();
        assert_eq!(err.code, ErrorCode::FileNotFound);
        assert!(err.suggestion.is_some());
    }

    #[test]
    fn test_load_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{}", SAMPLE).unwrap();

        let employees = load_employees(file.path()).unwrap();
        assert_eq!(employees[0].first_name, "John");
    }
}
