//! Statement-related types for the branch bank
//!
//! Accounts keep an ordered list of [`StatementEntry`] values. A
//! [`Statement`] is the read-only report built from them on request.

use super::account::AccountNumber;
use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use std::fmt;

/// Layout of entry timestamps in the statement report
pub const RECORDED_AT_FORMAT: &str = "%d/%m/%Y %H:%M:%S";

/// Text shown in place of entry lines when an account has no transactions
pub const NO_TRANSACTIONS: &str = "No transactions performed";

/// Kind of an accepted transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// Credit to the account
    Deposit,

    /// Debit from the account
    Withdrawal,
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntryKind::Deposit => f.write_str("Deposit"),
            EntryKind::Withdrawal => f.write_str("Withdrawal"),
        }
    }
}

/// One accepted deposit or withdrawal
///
/// Displays as the statement line, e.g. `Deposit: 200.00`.
#[derive(Debug, Clone, PartialEq)]
pub struct StatementEntry {
    pub kind: EntryKind,
    pub amount: Decimal,
    pub recorded_at: NaiveDateTime,
}

impl fmt::Display for StatementEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {:.2}", self.kind, self.amount.round_dp(2))
    }
}

/// Statement of one account: its entries plus the current balance
#[derive(Debug, Clone, PartialEq)]
pub struct Statement {
    pub branch_code: String,
    pub account_number: AccountNumber,
    pub national_id: String,
    pub entries: Vec<StatementEntry>,
    pub balance: Decimal,
}

impl Statement {
    /// Statement lines in transaction order
    pub fn lines(&self) -> Vec<String> {
        self.entries.iter().map(ToString::to_string).collect()
    }

    /// Lines as shown to the operator, each prefixed with when it happened
    ///
    /// An empty statement reports [`NO_TRANSACTIONS`] instead of nothing.
    pub fn report_lines(&self) -> Vec<String> {
        if self.entries.is_empty() {
            return vec![NO_TRANSACTIONS.to_string()];
        }

        self.entries
            .iter()
            .map(|entry| {
                format!(
                    "{} - {}",
                    entry.recorded_at.format(RECORDED_AT_FORMAT),
                    entry
                )
            })
            .collect()
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== Statement ===")?;
        writeln!(
            f,
            "National ID: {} | Account: {}",
            self.national_id, self.account_number
        )?;
        for line in self.report_lines() {
            writeln!(f, "{line}")?;
        }
        writeln!(f, "Balance: {:.2}", self.balance.round_dp(2))?;
        write!(f, "=================")
    }
}
