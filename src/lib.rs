//! Branch Bank Library
//! # Overview
//!
//! This library simulates a single bank branch: registered users, checking
//! accounts, deposits, withdrawals and statements, all held in memory and
//! driven from a text menu.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (User, Account, Statement, BankError)
//! - [`cli`] - CLI arguments parsing and log setup
//! - [`core`] - Business logic components:
//!   - [`core::user_registry`] - Registered users keyed by national ID
//!   - [`core::account_registry`] - Accounts, number assignment and lookup
//!   - [`core::processor`] - Deposit and withdrawal rules
//!   - [`core::bank`] - Facade used by the shell
//! - [`shell`] - Interactive menu loop and console input parsing
//! - [`io`] - CSV account report
//!
//! # Withdrawal Rules
//!
//! A withdrawal is checked in this order and the first failure is reported:
//!
//! - **Insufficient funds**: the amount is above the balance
//! - **Limit exceeded**: the amount is above the per-transaction limit
//!   (500.00 by default)
//! - **Daily limit exceeded**: the account already made its allowed number
//!   of withdrawals (3 by default)
//! - **Invalid amount**: the amount is zero or negative
//!
//! # Account State
//!
//! Each account maintains:
//! - `balance`: sum of accepted deposits minus accepted withdrawals
//! - `statement`: accepted transactions in order
//! - `withdrawal_count_today`: withdrawals accepted during this run

pub mod cli;
pub mod core;
pub mod io;
pub mod shell;
pub mod types;

pub use core::{Bank, TransactionProcessor};
pub use io::write_accounts_csv;
pub use shell::Shell;
pub use types::{
    Account, AccountLimits, AccountNumber, AccountSummary, BankError, NewUser, Statement, User,
};
