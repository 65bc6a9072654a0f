//! CSV account report
//!
//! Serializes account summaries with columns
//! `branch,account,holder,national_id,balance`. The report is written once
//! when the menu exits and is never read back.

use crate::types::{AccountSummary, BankError};
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Column names, matching the serde names of [`AccountSummary`]
pub const REPORT_HEADER: [&str; 5] = ["branch", "account", "holder", "national_id", "balance"];

/// Write account summaries to CSV format
///
/// Rows are sorted by account number for deterministic output and balances
/// are written with two decimal places.
///
/// # Errors
///
/// Returns `BankError::Io` if a row cannot be written or flushed.
pub fn write_accounts_csv(
    accounts: &[AccountSummary],
    output: &mut dyn Write,
) -> Result<(), BankError> {
    use csv::WriterBuilder;

    // Header written by hand so an empty report still carries it
    let mut writer = WriterBuilder::new().has_headers(false).from_writer(output);
    writer.write_record(REPORT_HEADER)?;

    let mut sorted_accounts = accounts.to_vec();
    sorted_accounts.sort_by_key(|account| account.account_number);

    for account in &sorted_accounts {
        writer.serialize(account)?;
    }

    writer.flush()?;

    Ok(())
}

/// Create (or truncate) `path` and write the account report into it
///
/// # Errors
///
/// Returns `BankError::Io` if the file cannot be created or written.
pub fn write_report_file(path: &Path, accounts: &[AccountSummary]) -> Result<(), BankError> {
    let mut file = File::create(path).map_err(|e| BankError::Io {
        message: format!("Failed to create report {}: {}", path.display(), e),
    })?;
    write_accounts_csv(accounts, &mut file)
}
