//! CLI utilities for staffdir tools
//!
//! - Status messages
//! - Result tables for employee records

#![warn(missing_docs)]

pub mod output;
pub mod table;
