//! Account registry
//!
//! This module provides the `AccountRegistry` which keeps every account
//! opened at the branch.
//!
//! The AccountRegistry is responsible for:
//! - Handing out account numbers, starting at 1 and never reused
//! - Opening accounts with the branch's default withdrawal limits
//! - Fully qualified lookup by national ID and account number
//! - Listing accounts, optionally filtered by holder

use crate::types::{Account, AccountLimits, AccountNumber, User};

/// Keeps all accounts of the branch in opening order
#[derive(Debug)]
pub struct AccountRegistry {
    /// Accounts in opening order
    accounts: Vec<Account>,

    /// Number the next opened account receives
    next_number: AccountNumber,

    /// Limits copied into every new account
    limits: AccountLimits,
}

impl AccountRegistry {
    /// Create an empty registry using the default limits
    pub fn new() -> Self {
        Self::with_limits(AccountLimits::default())
    }

    /// Create an empty registry whose new accounts get `limits`
    pub fn with_limits(limits: AccountLimits) -> Self {
        AccountRegistry {
            accounts: Vec::new(),
            next_number: 1,
            limits,
        }
    }

    /// Limits applied to newly opened accounts
    pub fn limits(&self) -> AccountLimits {
        self.limits
    }

    /// Number the next call to [`open`](Self::open) should use
    pub fn next_account_number(&self) -> AccountNumber {
        self.next_number
    }

    /// Open an account for `owner` under `assigned_number`
    ///
    /// The owner must already be registered; checking that is the caller's
    /// job. The new account starts with zero balance, an empty statement and
    /// no withdrawals.
    ///
    /// `assigned_number` must not be in use; pass
    /// [`next_account_number`](Self::next_account_number) to get a fresh one.
    /// Reusing a number panics in debug builds.
    ///
    /// # Returns
    ///
    /// A mutable reference to the newly opened account
    pub fn open(&mut self, owner: User, assigned_number: AccountNumber) -> &mut Account {
        debug_assert!(
            self.accounts
                .iter()
                .all(|account| account.account_number != assigned_number),
            "account number {assigned_number} already in use"
        );
        self.next_number = self.next_number.max(assigned_number.saturating_add(1));

        let index = self.accounts.len();
        self.accounts
            .push(Account::new(assigned_number, owner, self.limits));
        &mut self.accounts[index]
    }

    /// Find the account held by `national_id` under `account_number`
    ///
    /// Both keys are required: if either is `None` no account is returned,
    /// even when the other key alone would identify exactly one account.
    pub fn find(
        &self,
        national_id: Option<&str>,
        account_number: Option<AccountNumber>,
    ) -> Option<&Account> {
        let (national_id, account_number) = (national_id?, account_number?);
        self.accounts.iter().find(|account| {
            account.account_number == account_number && account.is_owned_by(national_id)
        })
    }

    /// Mutable counterpart of [`find`](Self::find)
    pub fn find_mut(
        &mut self,
        national_id: Option<&str>,
        account_number: Option<AccountNumber>,
    ) -> Option<&mut Account> {
        let (national_id, account_number) = (national_id?, account_number?);
        self.accounts.iter_mut().find(|account| {
            account.account_number == account_number && account.is_owned_by(national_id)
        })
    }

    /// All accounts, or only those held by `filter_national_id`
    ///
    /// Accounts are returned in opening order.
    pub fn list(&self, filter_national_id: Option<&str>) -> Vec<&Account> {
        self.accounts
            .iter()
            .filter(|account| filter_national_id.is_none_or(|id| account.is_owned_by(id)))
            .collect()
    }

    /// Number of opened accounts
    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    /// Whether no account has been opened yet
    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }
}

impl Default for AccountRegistry {
    fn default() -> Self {
        Self::new()
    }
}
