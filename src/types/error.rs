//! Error types for the branch bank
//!
//! This module defines every error an operation on the bank can report.
//! Messages are written for the menu shell, which prints them verbatim and
//! returns to the menu.
//!
//! # Error Categories
//!
//! - **Input Errors**: malformed national ID, date or amount
//! - **Registry Errors**: duplicate user, unknown user, unknown account
//! - **Transaction Errors**: invalid amount, insufficient funds, limits
//! - **I/O Errors**: console or report file failures

use crate::types::AccountNumber;
use rust_decimal::Decimal;
use thiserror::Error;

/// Main error type for the bank
///
/// Every variant is recoverable: the operation that produced it left all
/// state unchanged.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BankError {
    /// A field typed at the console does not match its expected format
    #[error("Invalid {field} '{value}': expected {expected}")]
    InvalidFormat {
        /// Name of the offending field
        field: String,
        /// The rejected input
        value: String,
        /// Human readable description of the accepted format
        expected: String,
    },

    /// A user with this national ID is already registered
    #[error("A user with national ID {national_id} already exists")]
    DuplicateUser {
        /// The national ID that is already taken
        national_id: String,
    },

    /// No user is registered under this national ID
    #[error("User {national_id} not found")]
    UserNotFound {
        /// The national ID that was looked up
        national_id: String,
    },

    /// No account matches the national ID and account number pair
    #[error("{}", account_not_found_message(national_id, *account_number))]
    AccountNotFound {
        /// The national ID that was looked up (if supplied)
        national_id: Option<String>,
        /// The account number that was looked up (if supplied)
        account_number: Option<AccountNumber>,
    },

    /// Operations that need an account were attempted before any account exists
    #[error("Operation failed: no accounts registered")]
    NoAccounts,

    /// Amount is zero, negative or would overflow the balance
    #[error("Invalid amount {amount}")]
    InvalidAmount {
        /// The rejected amount
        amount: Decimal,
    },

    /// Withdrawal is larger than the current balance
    #[error(
        "Insufficient funds: balance {:.2}, requested {:.2}",
        .balance.round_dp(2),
        .requested.round_dp(2)
    )]
    InsufficientFunds {
        /// Balance at the time of the request
        balance: Decimal,
        /// Requested withdrawal amount
        requested: Decimal,
    },

    /// Withdrawal is larger than the per-transaction limit
    #[error(
        "Withdrawal of {:.2} exceeds the limit of {:.2} per transaction",
        .requested.round_dp(2),
        .limit.round_dp(2)
    )]
    LimitExceeded {
        /// Configured per-transaction limit
        limit: Decimal,
        /// Requested withdrawal amount
        requested: Decimal,
    },

    /// The account already made its maximum number of withdrawals today
    #[error("Maximum of {max} daily withdrawals reached")]
    DailyLimitExceeded {
        /// Configured maximum withdrawals per day
        max: u32,
    },

    /// Console or report I/O failed
    #[error("I/O error: {message}")]
    Io {
        /// Description of the I/O error
        message: String,
    },
}

fn account_not_found_message(
    national_id: &Option<String>,
    account_number: Option<AccountNumber>,
) -> String {
    match (national_id, account_number) {
        (Some(id), Some(number)) => format!("Account {number} not found for national ID {id}"),
        _ => "Account not found: national ID and account number are both required".to_string(),
    }
}

impl From<std::io::Error> for BankError {
    fn from(error: std::io::Error) -> Self {
        BankError::Io {
            message: error.to_string(),
        }
    }
}

impl From<csv::Error> for BankError {
    fn from(error: csv::Error) -> Self {
        BankError::Io {
            message: error.to_string(),
        }
    }
}

// Helper functions for creating common errors

impl BankError {
    /// Create an InvalidFormat error
    pub fn invalid_format(field: &str, value: &str, expected: &str) -> Self {
        BankError::InvalidFormat {
            field: field.to_string(),
            value: value.to_string(),
            expected: expected.to_string(),
        }
    }

    /// Create a DuplicateUser error
    pub fn duplicate_user(national_id: &str) -> Self {
        BankError::DuplicateUser {
            national_id: national_id.to_string(),
        }
    }

    /// Create a UserNotFound error
    pub fn user_not_found(national_id: &str) -> Self {
        BankError::UserNotFound {
            national_id: national_id.to_string(),
        }
    }

    /// Create an AccountNotFound error
    pub fn account_not_found(national_id: Option<&str>, account_number: Option<AccountNumber>) -> Self {
        BankError::AccountNotFound {
            national_id: national_id.map(str::to_string),
            account_number,
        }
    }

    /// Create an InvalidAmount error
    pub fn invalid_amount(amount: Decimal) -> Self {
        BankError::InvalidAmount { amount }
    }

    /// Create an InsufficientFunds error
    pub fn insufficient_funds(balance: Decimal, requested: Decimal) -> Self {
        BankError::InsufficientFunds { balance, requested }
    }

    /// Create a LimitExceeded error
    pub fn limit_exceeded(limit: Decimal, requested: Decimal) -> Self {
        BankError::LimitExceeded { limit, requested }
    }

    /// Create a DailyLimitExceeded error
    pub fn daily_limit_exceeded(max: u32) -> Self {
        BankError::DailyLimitExceeded { max }
    }
}
