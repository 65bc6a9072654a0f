//! Account-related types for the branch bank
//!
//! This module defines the Account structure, its withdrawal limits and the
//! summary row used by listings and reports.

use super::statement::StatementEntry;
use super::user::User;
use rust_decimal::Decimal;
use serde::{Serialize, Serializer};

/// Account identifier
///
/// Assigned sequentially by the account registry, starting at 1.
pub type AccountNumber = u32;

/// Code of the single simulated branch
pub const BRANCH_CODE: &str = "0001";

/// Withdrawal rules applied to an account
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccountLimits {
    /// Largest amount a single withdrawal may take
    pub withdrawal_limit_per_tx: Decimal,

    /// Number of withdrawals allowed per banking day
    pub max_withdrawals_per_day: u32,
}

impl AccountLimits {
    /// Default per-transaction withdrawal limit (500.00)
    pub const DEFAULT_WITHDRAWAL_LIMIT: Decimal = Decimal::from_parts(50000, 0, 0, false, 2);

    /// Default number of withdrawals per day
    pub const DEFAULT_MAX_WITHDRAWALS: u32 = 3;
}

impl Default for AccountLimits {
    fn default() -> Self {
        AccountLimits {
            withdrawal_limit_per_tx: Self::DEFAULT_WITHDRAWAL_LIMIT,
            max_withdrawals_per_day: Self::DEFAULT_MAX_WITHDRAWALS,
        }
    }
}

/// Checking account state
///
/// Mutated in place by deposits and withdrawals; never removed.
#[derive(Debug, Clone, PartialEq)]
pub struct Account {
    /// Branch the account belongs to (always [`BRANCH_CODE`])
    pub branch_code: &'static str,

    /// Unique account number
    pub account_number: AccountNumber,

    /// Account holder
    pub owner: User,

    /// Current balance
    ///
    /// Equals the sum of accepted deposits minus the sum of accepted
    /// withdrawals.
    pub balance: Decimal,

    /// Accepted transactions in the order they happened
    pub statement: Vec<StatementEntry>,

    /// Withdrawals accepted so far today
    pub withdrawal_count_today: u32,

    /// Withdrawal rules for this account
    pub limits: AccountLimits,
}

impl Account {
    /// Create a new account with zero balance and an empty statement
    ///
    /// # Arguments
    ///
    /// * `account_number` - Number assigned by the registry
    /// * `owner` - The registered user holding the account
    /// * `limits` - Withdrawal rules for the account
    pub fn new(account_number: AccountNumber, owner: User, limits: AccountLimits) -> Self {
        Account {
            branch_code: BRANCH_CODE,
            account_number,
            owner,
            balance: Decimal::ZERO,
            statement: Vec::new(),
            withdrawal_count_today: 0,
            limits,
        }
    }

    /// Whether the account is held by the user with this national ID
    pub fn is_owned_by(&self, national_id: &str) -> bool {
        self.owner.national_id == national_id
    }

    /// Build the listing row for this account
    pub fn summary(&self) -> AccountSummary {
        AccountSummary {
            branch_code: self.branch_code.to_string(),
            account_number: self.account_number,
            holder: self.owner.full_name.clone(),
            national_id: self.owner.national_id.clone(),
            balance: self.balance,
        }
    }
}

/// One row of the account listing and the CSV report
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AccountSummary {
    #[serde(rename = "branch")]
    pub branch_code: String,
    #[serde(rename = "account")]
    pub account_number: AccountNumber,
    pub holder: String,
    pub national_id: String,
    #[serde(serialize_with = "serialize_two_places")]
    pub balance: Decimal,
}

/// Balances are reported with exactly two decimal places
fn serialize_two_places<S>(amount: &Decimal, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.collect_str(&format_args!("{:.2}", amount.round_dp(2)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn owner() -> User {
        User {
            full_name: "Maria Souza".to_string(),
            birth_date: NaiveDate::from_ymd_opt(1990, 1, 1).unwrap(),
            national_id: "123.456.789-00".to_string(),
            address: "Rua A, 123 - Centro - Recife/PE".to_string(),
        }
    }

    #[test]
    fn test_new_account_starts_empty() {
        let account = Account::new(1, owner(), AccountLimits::default());

        assert_eq!(account.branch_code, "0001");
        assert_eq!(account.account_number, 1);
        assert_eq!(account.balance, Decimal::ZERO);
        assert!(account.statement.is_empty());
        assert_eq!(account.withdrawal_count_today, 0);
    }

    #[test]
    fn test_default_limits() {
        let limits = AccountLimits::default();
        assert_eq!(limits.withdrawal_limit_per_tx, Decimal::new(500, 0));
        assert_eq!(limits.max_withdrawals_per_day, 3);
    }

    #[test]
    fn test_summary_copies_holder_fields() {
        let mut account = Account::new(4, owner(), AccountLimits::default());
        account.balance = Decimal::new(12345, 2);

        let summary = account.summary();
        assert_eq!(summary.branch_code, "0001");
        assert_eq!(summary.account_number, 4);
        assert_eq!(summary.holder, "Maria Souza");
        assert_eq!(summary.national_id, "123.456.789-00");
        assert_eq!(summary.balance, Decimal::new(12345, 2));
    }

    #[test]
    fn test_is_owned_by() {
        let account = Account::new(1, owner(), AccountLimits::default());
        assert!(account.is_owned_by("123.456.789-00"));
        assert!(!account.is_owned_by("999.999.999-99"));
    }
}
