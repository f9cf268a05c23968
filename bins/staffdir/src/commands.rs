//! Subcommand implementations.

use staffdir_cli::output::{format_count, format_duration, format_score, Status};
use staffdir_cli::table::{employee_table, scored_table};
use staffdir_core::config::{Config, OutputFormat};
use staffdir_core::dataset::load_employees;
use staffdir_core::error::{exit_codes, Error, ErrorCode, Result};
use staffdir_search::{rank, rank_scored, similarity_match};
use staffdir_telemetry::Timer;
use std::path::Path;
use std::process::ExitCode;
use tracing::debug;

/// Rank the dataset at `data` against `query` and print the result.
pub fn search(query: &str, data: &Path, scores: bool, format: OutputFormat) -> Result<ExitCode> {
    let employees = load_employees(data)?;

    let timer = Timer::start("rank");
    let (rendered, matches) = if scores {
        let ranked = rank_scored(&employees, query);
        let rendered = match format {
            OutputFormat::Json => to_json(&ranked)?,
            OutputFormat::Table => scored_table(&ranked),
        };
        (rendered, ranked.len())
    } else {
        let ranked = rank(&employees, query);
        let rendered = match format {
            OutputFormat::Json => to_json(&ranked)?,
            OutputFormat::Table => employee_table(&ranked),
        };
        (rendered, ranked.len())
    };
    let elapsed = timer.stop();

    debug!(matches, total = employees.len(), "Search finished");

    if matches == 0 {
        if format == OutputFormat::Json {
            println!("{}", rendered);
        }
        Status::warning(&format!("No employees matched {:?}", query.trim()));
        return Ok(ExitCode::from(exit_codes::NO_MATCHES as u8));
    }

    print!("{}", rendered);
    if format == OutputFormat::Json {
        println!();
    } else {
        Status::success(&format!(
            "{} of {} in {}",
            format_count(matches, "match", "matches"),
            employees.len(),
            format_duration(elapsed)
        ));
    }

    Ok(ExitCode::SUCCESS)
}

/// Print which tier scores `query` against `target`.
pub fn score(query: &str, target: &str, format: OutputFormat) -> Result<ExitCode> {
    let found = similarity_match(query, target);

    match format {
        OutputFormat::Json => println!("{}", to_json(&found)?),
        OutputFormat::Table => {
            Status::header(&format!("{:?} vs {:?}", query, target));
            Status::detail("tier", found.tier.as_str());
            Status::detail("score", &format_score(found.score));
        }
    }

    Ok(ExitCode::SUCCESS)
}

/// Print the effective configuration as TOML.
pub fn show_config(config: &Config) -> Result<ExitCode> {
    match &config.path {
        Some(path) => Status::info(&format!("Loaded from {}", path.display())),
        None => Status::info("No configuration file found; using defaults"),
    }
    print!("{}", config.to_toml()?);
    Ok(ExitCode::SUCCESS)
}

fn to_json<T: serde::Serialize + ?Sized>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value)
        .map_err(|e| Error::new(ErrorCode::Internal, format!("Failed to serialize output: {}", e)))
}
