//! Terminal output utilities
//!
//! Status lines go to stderr so stdout carries only results.

use owo_colors::OwoColorize;

/// Status message helpers
pub struct Status;

impl Status {
    /// Print a success message
    pub fn success(message: &str) {
        eprintln!("{} {}", "✓".green(), message);
    }

    /// Print an error message
    pub fn error(message: &str) {
        eprintln!("{} {}", "✗".red(), message);
    }

    /// Print a warning message
    pub fn warning(message: &str) {
        eprintln!("{} {}", "⚠".yellow(), message);
    }

    /// Print an info message
    pub fn info(message: &str) {
        eprintln!("{} {}", "ℹ".blue(), message);
    }

    /// Print a header underlined to its display width
    pub fn header(message: &str) {
        println!("{}", message.bold());
        println!("{}", "─".repeat(console::measure_text_width(message)));
    }

    /// Print a key/value detail line
    pub fn detail(key: &str, value: &str) {
        println!("  {} {}", format!("{}:", key).dimmed(), value);
    }
}

/// Format a relevance score with two decimals.
///
/// Scores are banded by colour: green for exact/containment matches, yellow
/// for subsequence matches, red for edit-distance matches.
pub fn format_score(score: f64) -> String {
    let text = format!("{:.2}", score);
    if score >= 0.85 {
        text.green().to_string()
    } else if score > 0.5 {
        text.yellow().to_string()
    } else {
        text.red().to_string()
    }
}

/// Format a duration for display
pub fn format_duration(duration: std::time::Duration) -> String {
    let micros = duration.as_micros();
    if micros < 1_000 {
        format!("{}µs", micros)
    } else if micros < 1_000_000 {
        format!("{:.1}ms", micros as f64 / 1_000.0)
    } else {
        format!("{:.2}s", duration.as_secs_f64())
    }
}

/// Format a count with singular/plural
pub fn format_count(count: usize, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("{} {}", count, singular)
    } else {
        format!("{} {}", count, plural)
    }
}
