//! I/O module
//!
//! Handles file output.
//!
//! # Components
//!
//! - `csv_format` - CSV account report (serialization and file writing)

pub mod csv_format;

pub use csv_format::{write_accounts_csv, write_report_file};
