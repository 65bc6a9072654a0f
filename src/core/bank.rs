//! Bank facade
//!
//! This module provides the `Bank` that the menu shell talks to. It owns the
//! user registry, the account registry and the transaction processor, and
//! turns national ID / account number pairs into the account the processor
//! works on.
//!
//! The facade enforces the lookup rules:
//! - accounts can only be opened for registered users
//! - deposits, withdrawals and statements need at least one opened account
//! - accounts are found only by the full (national ID, account number) pair

use crate::core::account_registry::AccountRegistry;
use crate::core::processor::TransactionProcessor;
use crate::core::traits::{Clock, SystemClock};
use crate::core::user_registry::UserRegistry;
use crate::types::{
    Account, AccountLimits, AccountNumber, AccountSummary, BankError, NewUser, Statement, User,
};
use rust_decimal::Decimal;
use tracing::{debug, info, warn};

/// Single-branch bank
///
/// Owns all in-memory state for one run of the program.
pub struct Bank<C = SystemClock> {
    users: UserRegistry,
    accounts: AccountRegistry,
    processor: TransactionProcessor<C>,
}

impl Bank<SystemClock> {
    /// Create an empty bank using the default account limits
    pub fn new() -> Self {
        Self::with_limits(AccountLimits::default())
    }

    /// Create an empty bank whose new accounts get `limits`
    pub fn with_limits(limits: AccountLimits) -> Self {
        Bank::with_clock(limits, SystemClock)
    }
}

impl<C: Clock> Bank<C> {
    /// Create an empty bank with custom limits and clock
    pub fn with_clock(limits: AccountLimits, clock: C) -> Self {
        Bank {
            users: UserRegistry::new(),
            accounts: AccountRegistry::with_limits(limits),
            processor: TransactionProcessor::with_clock(clock),
        }
    }

    /// Register a new user
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - the national ID has the wrong format
    /// - the national ID is already registered
    pub fn register_user(&mut self, new_user: NewUser) -> Result<User, BankError> {
        match self.users.register(new_user) {
            Ok(user) => {
                info!(national_id = %user.national_id, "user registered");
                Ok(user)
            }
            Err(e) => {
                warn!(error = %e, "user registration rejected");
                Err(e)
            }
        }
    }

    /// Open a new account for the user registered under `national_id`
    ///
    /// The account number is assigned by the account registry.
    ///
    /// # Errors
    ///
    /// Returns `BankError::UserNotFound` if no user has this national ID.
    pub fn open_account(&mut self, national_id: &str) -> Result<Account, BankError> {
        let owner = self.users.find(national_id).cloned().ok_or_else(|| {
            warn!(national_id, "account opening rejected: unknown user");
            BankError::user_not_found(national_id)
        })?;

        let number = self.accounts.next_account_number();
        let account = self.accounts.open(owner, number).clone();
        info!(national_id, account = number, "account opened");

        Ok(account)
    }

    /// Deposit `amount` into the account `account_number` held by `national_id`
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - no account has been opened yet
    /// - the account is not found
    /// - the amount is not positive
    pub fn deposit(
        &mut self,
        national_id: &str,
        account_number: AccountNumber,
        amount: Decimal,
    ) -> Result<(), BankError> {
        let account = Self::account_mut(&mut self.accounts, national_id, account_number)?;

        match self.processor.deposit(account, amount) {
            Ok(()) => {
                info!(account = account_number, %amount, balance = %account.balance, "deposit accepted");
                Ok(())
            }
            Err(e) => {
                warn!(account = account_number, %amount, error = %e, "deposit rejected");
                Err(e)
            }
        }
    }

    /// Withdraw `amount` from the account `account_number` held by `national_id`
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - no account has been opened yet
    /// - the account is not found
    /// - any withdrawal rule fails (see [`TransactionProcessor::withdraw`])
    pub fn withdraw(
        &mut self,
        national_id: &str,
        account_number: AccountNumber,
        amount: Decimal,
    ) -> Result<(), BankError> {
        let account = Self::account_mut(&mut self.accounts, national_id, account_number)?;

        match self.processor.withdraw(account, amount) {
            Ok(()) => {
                info!(
                    account = account_number,
                    %amount,
                    balance = %account.balance,
                    withdrawals_today = account.withdrawal_count_today,
                    "withdrawal accepted"
                );
                Ok(())
            }
            Err(e) => {
                warn!(account = account_number, %amount, error = %e, "withdrawal rejected");
                Err(e)
            }
        }
    }

    /// Statement of the account `account_number` held by `national_id`
    ///
    /// # Errors
    ///
    /// Returns an error if no account has been opened yet or the account is
    /// not found.
    pub fn statement(
        &self,
        national_id: &str,
        account_number: AccountNumber,
    ) -> Result<Statement, BankError> {
        if self.accounts.is_empty() {
            return Err(BankError::NoAccounts);
        }

        let account = self
            .accounts
            .find(Some(national_id), Some(account_number))
            .ok_or_else(|| BankError::account_not_found(Some(national_id), Some(account_number)))?;

        Ok(self.processor.statement(account))
    }

    /// Summaries of all accounts, or only those held by `national_id`
    pub fn list_accounts(&self, national_id: Option<&str>) -> Vec<AccountSummary> {
        self.accounts
            .list(national_id)
            .into_iter()
            .map(Account::summary)
            .collect()
    }

    /// Find a registered user
    pub fn find_user(&self, national_id: &str) -> Option<&User> {
        self.users.find(national_id)
    }

    /// Number of registered users
    pub fn user_count(&self) -> usize {
        self.users.len()
    }

    /// Whether at least one account has been opened
    pub fn has_accounts(&self) -> bool {
        !self.accounts.is_empty()
    }

    // Takes the registry rather than `self` so the processor stays borrowable.
    fn account_mut<'a>(
        accounts: &'a mut AccountRegistry,
        national_id: &str,
        account_number: AccountNumber,
    ) -> Result<&'a mut Account, BankError> {
        if accounts.is_empty() {
            return Err(BankError::NoAccounts);
        }

        debug!(national_id, account = account_number, "looking up account");
        accounts
            .find_mut(Some(national_id), Some(account_number))
            .ok_or_else(|| BankError::account_not_found(Some(national_id), Some(account_number)))
    }
}

impl Default for Bank<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::traits::FixedClock;
    use chrono::NaiveDate;

    fn bank() -> Bank<FixedClock> {
        let at = NaiveDate::from_ymd_opt(2024, 1, 2)
            .unwrap()
            .and_hms_opt(8, 15, 0)
            .unwrap();
        Bank::with_clock(AccountLimits::default(), FixedClock(at))
    }

    fn new_user(national_id: &str) -> NewUser {
        NewUser {
            full_name: "Joana Alves".to_string(),
            birth_date: NaiveDate::from_ymd_opt(1995, 10, 20).unwrap(),
            national_id: national_id.to_string(),
            address: "Rua E, 99 - Madalena - Recife/PE".to_string(),
        }
    }

    #[test]
    fn test_register_duplicate_keeps_one_user() {
        let mut bank = bank();

        bank.register_user(new_user("111.222.333-44")).unwrap();
        let result = bank.register_user(new_user("111.222.333-44"));

        assert_eq!(
            result.unwrap_err(),
            BankError::duplicate_user("111.222.333-44")
        );
        assert_eq!(bank.user_count(), 1);
    }

    #[test]
    fn test_open_account_requires_registered_user() {
        let mut bank = bank();

        let result = bank.open_account("111.222.333-44");

        assert_eq!(
            result.unwrap_err(),
            BankError::user_not_found("111.222.333-44")
        );
        assert!(!bank.has_accounts());
    }

    #[test]
    fn test_open_account_assigns_sequential_numbers() {
        let mut bank = bank();
        bank.register_user(new_user("111.222.333-44")).unwrap();
        bank.register_user(new_user("555.666.777-88")).unwrap();

        let first = bank.open_account("111.222.333-44").unwrap();
        let second = bank.open_account("555.666.777-88").unwrap();
        let third = bank.open_account("111.222.333-44").unwrap();

        assert_eq!(first.account_number, 1);
        assert_eq!(second.account_number, 2);
        assert_eq!(third.account_number, 3);
        assert_eq!(third.owner.national_id, "111.222.333-44");
    }

    #[test]
    fn test_operations_before_any_account_fail_with_no_accounts() {
        let mut bank = bank();

        assert_eq!(
            bank.deposit("111.222.333-44", 1, Decimal::ONE).unwrap_err(),
            BankError::NoAccounts
        );
        assert_eq!(
            bank.withdraw("111.222.333-44", 1, Decimal::ONE).unwrap_err(),
            BankError::NoAccounts
        );
        assert_eq!(
            bank.statement("111.222.333-44", 1).unwrap_err(),
            BankError::NoAccounts
        );
    }

    #[test]
    fn test_operations_on_unknown_account_fail() {
        let mut bank = bank();
        bank.register_user(new_user("111.222.333-44")).unwrap();
        bank.open_account("111.222.333-44").unwrap();

        let expected = BankError::account_not_found(Some("111.222.333-44"), Some(2));
        assert_eq!(
            bank.deposit("111.222.333-44", 2, Decimal::ONE).unwrap_err(),
            expected
        );
        assert_eq!(
            bank.withdraw("111.222.333-44", 2, Decimal::ONE).unwrap_err(),
            expected
        );
        assert_eq!(bank.statement("111.222.333-44", 2).unwrap_err(), expected);
    }

    #[test]
    fn test_deposit_withdraw_and_statement() {
        let mut bank = bank();
        bank.register_user(new_user("111.222.333-44")).unwrap();
        let account = bank.open_account("111.222.333-44").unwrap();

        bank.deposit("111.222.333-44", account.account_number, Decimal::new(1000, 0))
            .unwrap();
        bank.withdraw("111.222.333-44", account.account_number, Decimal::new(250, 0))
            .unwrap();

        // Within the balance but above the per-transaction limit
        let result = bank.withdraw("111.222.333-44", account.account_number, Decimal::new(600, 0));
        assert_eq!(
            result.unwrap_err(),
            BankError::limit_exceeded(Decimal::new(500, 0), Decimal::new(600, 0))
        );

        // Above both: the balance check is reported first
        let result = bank.withdraw("111.222.333-44", account.account_number, Decimal::new(800, 0));
        assert_eq!(
            result.unwrap_err(),
            BankError::insufficient_funds(Decimal::new(750, 0), Decimal::new(800, 0))
        );

        let statement = bank
            .statement("111.222.333-44", account.account_number)
            .unwrap();
        assert_eq!(statement.balance, Decimal::new(750, 0));
        assert_eq!(
            statement.lines(),
            vec!["Deposit: 1000.00", "Withdrawal: 250.00"]
        );
    }

    #[test]
    fn test_list_accounts_with_and_without_filter() {
        let mut bank = bank();
        bank.register_user(new_user("111.222.333-44")).unwrap();
        bank.register_user(new_user("555.666.777-88")).unwrap();
        bank.open_account("111.222.333-44").unwrap();
        bank.open_account("555.666.777-88").unwrap();
        bank.deposit("555.666.777-88", 2, Decimal::new(10, 0)).unwrap();

        let all = bank.list_accounts(None);
        assert_eq!(all.len(), 2);

        let filtered = bank.list_accounts(Some("555.666.777-88"));
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].account_number, 2);
        assert_eq!(filtered[0].balance, Decimal::new(10, 0));
        assert_eq!(filtered[0].branch_code, "0001");
    }
}
