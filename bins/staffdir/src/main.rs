//! staffdir: fuzzy search over an employee directory.

use clap::{Parser, Subcommand};
use staffdir_cli::output::Status;
use staffdir_core::config::{Config, OutputFormat};
use std::path::PathBuf;
use std::process::ExitCode;

mod commands;

/// Fuzzy search over an employee directory
#[derive(Parser)]
#[command(name = "staffdir")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file (defaults to .staffdir.toml if present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Output format (table, json)
    #[arg(short, long, global = true)]
    format: Option<OutputFormat>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Rank employees by relevance to a query
    Search {
        /// Free-text query; blank lists every employee
        query: String,

        /// Employee dataset (JSON)
        #[arg(short, long)]
        data: Option<PathBuf>,

        /// Show relevance scores and the best matching field
        #[arg(short, long)]
        scores: bool,
    },

    /// Score a single query against a single target string
    Score {
        /// Query text
        query: String,

        /// Target text
        target: String,
    },

    /// Print the effective configuration
    Config,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match Config::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => return report(&e, cli.format.unwrap_or_default()),
    };

    let level = if cli.verbose { "debug".to_string() } else { config.schema.logging.level.clone() };
    let telemetry = staffdir_telemetry::TelemetryConfig {
        show_target: config.schema.logging.show_target,
        ..staffdir_telemetry::TelemetryConfig::with_level(level)
    };
    if let Err(e) = staffdir_telemetry::init_with_config(telemetry) {
        Status::warning(&e.to_string());
    }

    let format = cli.format.unwrap_or(config.schema.output.format);

    let result = match cli.command {
        Commands::Search { query, data, scores } => {
            let data = data.unwrap_or_else(|| PathBuf::from(&config.schema.general.dataset));
            let scores = scores || config.schema.output.show_scores;
            commands::search(&query, &data, scores, format)
        }
        Commands::Score { query, target } => commands::score(&query, &target, format),
        Commands::Config => commands::show_config(&config),
    };

    match result {
        Ok(code) => code,
        Err(e) => report(&e, format),
    }
}

fn report(error: &staffdir_core::Error, format: OutputFormat) -> ExitCode {
    match format {
        OutputFormat::Json => match serde_json::to_string_pretty(&error.to_report()) {
            Ok(json) => eprintln!("{}", json),
            Err(_) => eprintln!("{}", error),
        },
        OutputFormat::Table => Status::error(&error.to_string()),
    }
    ExitCode::from(error.exit_code() as u8)
}
