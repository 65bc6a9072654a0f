//! Transaction processor
//!
//! Applies deposit and withdrawal rules to a single account. All state lives
//! on the [`Account`]; the processor only carries the clock used to stamp
//! statement entries.
//!
//! Each operation checks everything first and mutates only when every check
//! passes, so a rejected operation leaves the account untouched.

use crate::core::traits::{Clock, SystemClock};
use crate::types::{Account, BankError, EntryKind, Statement, StatementEntry};
use rust_decimal::Decimal;

/// Deposit/withdraw rule engine
#[derive(Debug, Clone, Default)]
pub struct TransactionProcessor<C = SystemClock> {
    clock: C,
}

impl TransactionProcessor<SystemClock> {
    /// Create a processor that stamps entries with the local system time
    pub fn new() -> Self {
        TransactionProcessor { clock: SystemClock }
    }
}

impl<C: Clock> TransactionProcessor<C> {
    /// Create a processor using a custom clock
    pub fn with_clock(clock: C) -> Self {
        TransactionProcessor { clock }
    }

    /// Deposit `amount` into `account`
    ///
    /// Increases the balance and appends a `Deposit: <amount>` entry.
    ///
    /// # Errors
    ///
    /// Returns `BankError::InvalidAmount` if the amount is zero or negative,
    /// or if adding it would overflow the balance.
    pub fn deposit(&self, account: &mut Account, amount: Decimal) -> Result<(), BankError> {
        if amount <= Decimal::ZERO {
            return Err(BankError::invalid_amount(amount));
        }

        let new_balance = account
            .balance
            .checked_add(amount)
            .ok_or_else(|| BankError::invalid_amount(amount))?;

        account.balance = new_balance;
        self.record(account, EntryKind::Deposit, amount);

        Ok(())
    }

    /// Withdraw `amount` from `account`
    ///
    /// Checks run in a fixed order and the first failure is reported:
    /// 1. amount above the balance
    /// 2. amount above the per-transaction limit
    /// 3. daily withdrawal count already reached
    /// 4. amount zero or negative
    ///
    /// On success the balance decreases, the daily count increases and a
    /// `Withdrawal: <amount>` entry is appended.
    ///
    /// # Errors
    ///
    /// Returns, in order of precedence:
    /// - `BankError::InsufficientFunds`
    /// - `BankError::LimitExceeded`
    /// - `BankError::DailyLimitExceeded`
    /// - `BankError::InvalidAmount`
    pub fn withdraw(&self, account: &mut Account, amount: Decimal) -> Result<(), BankError> {
        if amount > account.balance {
            return Err(BankError::insufficient_funds(account.balance, amount));
        }

        if amount > account.limits.withdrawal_limit_per_tx {
            return Err(BankError::limit_exceeded(
                account.limits.withdrawal_limit_per_tx,
                amount,
            ));
        }

        if account.withdrawal_count_today >= account.limits.max_withdrawals_per_day {
            return Err(BankError::daily_limit_exceeded(
                account.limits.max_withdrawals_per_day,
            ));
        }

        if amount <= Decimal::ZERO {
            return Err(BankError::invalid_amount(amount));
        }

        let new_balance = account
            .balance
            .checked_sub(amount)
            .ok_or_else(|| BankError::invalid_amount(amount))?;

        account.balance = new_balance;
        account.withdrawal_count_today += 1;
        self.record(account, EntryKind::Withdrawal, amount);

        Ok(())
    }

    /// Statement of `account`: its entries plus the current balance
    pub fn statement(&self, account: &Account) -> Statement {
        Statement {
            branch_code: account.branch_code.to_string(),
            account_number: account.account_number,
            national_id: account.owner.national_id.clone(),
            entries: account.statement.clone(),
            balance: account.balance,
        }
    }

    fn record(&self, account: &mut Account, kind: EntryKind, amount: Decimal) {
        account.statement.push(StatementEntry {
            kind,
            amount,
            recorded_at: self.clock.now(),
        });
    }
}
