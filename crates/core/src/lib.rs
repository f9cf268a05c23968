//! Core utilities for staffdir tools
//!
//! - **Error handling**: errors with codes, context, and recovery suggestions
//! - **Configuration**: TOML-based configuration with validation
//! - **Dataset loading**: employee records from JSON files
//!
//! # Example
//!
//! ```rust,no_run
//! use staffdir_core::{config::Config, dataset::load_employees};
//!
//! let config = Config::load(None)?;
//! let employees = load_employees(&config.schema.general.dataset)?;
//! println!("{} employees", employees.len());
//! # Ok::<(), staffdir_core::Error>(())
//! ```

#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod dataset;
pub mod error;

pub use error::{Error, ErrorCode, Result, ResultExt};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::config::{Config, ConfigSchema, OutputFormat};
    pub use crate::dataset::{load_employees, parse_employees};
    pub use crate::error::{exit_codes, Error, ErrorCode, Result, ResultExt};
}
