//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `user`: registered customers
//! - `account`: accounts, limits and listing rows
//! - `statement`: statement entries and reports
//! - `error`: Error types for the bank

pub mod account;
pub mod error;
pub mod statement;
pub mod user;

pub use account::{Account, AccountLimits, AccountNumber, AccountSummary, BRANCH_CODE};
pub use error::BankError;
pub use statement::{EntryKind, Statement, StatementEntry, NO_TRANSACTIONS, RECORDED_AT_FORMAT};
pub use user::{NewUser, User};
