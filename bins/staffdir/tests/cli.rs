//! End-to-end tests for the staffdir binary.

use assert_cmd::Command;
use predicates::prelude::*;
use std::path::PathBuf;
use tempfile::TempDir;

const EMPLOYEES: &str = r#"[
    {"id": 1, "firstName": "John", "lastName": "Smith", "email": "john.smith@example.com",
     "role": "Engineer", "department": "Engineering", "status": "Active"},
    {"id": 2, "firstName": "Jon", "lastName": "Jones", "email": "jon.jones@example.com",
     "role": "Manager", "department": "Sales", "status": "Active"},
    {"id": 3, "firstName": "Mary", "lastName": "Major", "email": "mary.major@example.com",
     "role": "Designer", "department": "Product", "status": "Active"}
]"#;

struct Fixture {
    dir: TempDir,
}

impl Fixture {
    fn new() -> Self {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("employees.json"), EMPLOYEES).unwrap();
        std::fs::write(dir.path().join("staffdir.toml"), "[logging]\nlevel = \"off\"\n").unwrap();
        Self { dir }
    }

    fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("staffdir").unwrap();
        cmd.current_dir(self.dir.path())
            .env_remove("RUST_LOG")
            .arg("--config")
            .arg(self.path("staffdir.toml"));
        cmd
    }
}

fn ids(json: &[u8]) -> Vec<u64> {
    let value: serde_json::Value = serde_json::from_slice(json).unwrap();
    value
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["id"].as_u64().unwrap())
        .collect()
}

fn stdout_of(cmd: &mut Command) -> Vec<u8> {
    cmd.assert().success().get_output().stdout.clone()
}

#[test]
fn test_search_table_ranks_exact_match_first() {
    let fx = Fixture::new();
    let stdout = stdout_of(fx.cmd().args(["search", "jon"]));
    let text = String::from_utf8(stdout).unwrap();

    let jon = text.find("Jon Jones").unwrap();
    let john = text.find("John Smith").unwrap();
    assert!(jon < john);
    assert!(!text.contains("Mary Major"));
}

#[test]
fn test_search_table_reports_summary() {
    let fx = Fixture::new();
    fx.cmd()
        .args(["search", "jon"])
        .assert()
        .success()
        .stderr(predicate::str::contains("✓").and(predicate::str::contains("2 matches of 3")));
}

#[test]
fn test_search_string_ids() {
    let fx = Fixture::new();
    let other = fx.path("mixed.json");
    std::fs::write(
        &other,
        r#"[{"id": "E-002", "firstName": "John"}, {"id": 1, "firstName": "Jon"}, {"id": -5, "firstName": "Mary"}]"#,
    )
    .unwrap();

    fx.cmd()
        .args(["search", "jon", "--data"])
        .arg(&other)
        .assert()
        .success()
        .stdout(predicate::str::contains("E-002  John"));
}

#[test]
fn test_search_json() {
    let fx = Fixture::new();
    let stdout = stdout_of(fx.cmd().args(["search", "jon", "--format", "json"]));
    assert_eq!(ids(&stdout), vec![2, 1]);
}

#[test]
fn test_blank_query_lists_everyone_in_order() {
    let fx = Fixture::new();
    let stdout = stdout_of(fx.cmd().args(["search", "  ", "-f", "json"]));
    assert_eq!(ids(&stdout), vec![1, 2, 3]);
}

#[test]
fn test_search_with_scores() {
    let fx = Fixture::new();
    let stdout = stdout_of(fx.cmd().args(["search", "jon", "--scores", "--format", "json"]));

    let value: serde_json::Value = serde_json::from_slice(&stdout).unwrap();
    let first = &value[0];
    assert_eq!(first["record"]["id"], 2);
    assert_eq!(first["score"], 1.0);
    assert_eq!(first["field"], "first_name");
}

#[test]
fn test_no_matches_exit_code() {
    let fx = Fixture::new();
    fx.cmd()
        .args(["search", "xyz123"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("No employees matched"));
}

#[test]
fn test_explicit_data_path() {
    let fx = Fixture::new();
    let other = fx.path("other.json");
    std::fs::write(&other, r#"{"employees": [{"id": 9, "firstName": "Jon"}]}"#).unwrap();

    let stdout = stdout_of(
        fx.cmd()
            .args(["search", "jon", "--format", "json", "--data"])
            .arg(&other),
    );
    assert_eq!(ids(&stdout), vec![9]);
}

#[test]
fn test_missing_dataset() {
    let fx = Fixture::new();
    fx.cmd()
        .args(["search", "jon", "--data", "missing.json"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("✗").and(predicate::str::contains("E2001")));
}

#[test]
fn test_malformed_dataset() {
    let fx = Fixture::new();
    std::fs::write(fx.path("bad.json"), "{not json").unwrap();
    fx.cmd()
        .args(["search", "jon", "--data", "bad.json"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("E4001"));
}

#[test]
fn test_score_json() {
    let fx = Fixture::new();
    let stdout = stdout_of(fx.cmd().args(["score", "cat", "category", "--format", "json"]));

    let value: serde_json::Value = serde_json::from_slice(&stdout).unwrap();
    assert_eq!(value["tier"], "substring");
    assert_eq!(value["score"], 0.9);
}

#[test]
fn test_score_table() {
    let fx = Fixture::new();
    fx.cmd()
        .args(["score", "engr", "engineering"])
        .assert()
        .success()
        .stdout(predicate::str::contains("subsequence"));
}

#[test]
fn test_invalid_config() {
    let fx = Fixture::new();
    let config = fx.path("bad.toml");
    std::fs::write(&config, "[logging]\nlevel = \"loud\"\n").unwrap();

    Command::cargo_bin("staffdir")
        .unwrap()
        .current_dir(fx.dir.path())
        .args(["--config"])
        .arg(&config)
        .arg("config")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("logging.level"));
}

#[test]
fn test_show_config() {
    let fx = Fixture::new();
    fx.cmd()
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("[general]"))
        .stdout(predicate::str::contains("dataset = \"employees.json\""));
}
