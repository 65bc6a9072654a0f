use crate::types::AccountLimits;
use clap::Parser;
use rust_decimal::Decimal;
use std::path::PathBuf;
use tracing::warn;

/// Single-branch bank simulator driven by a text menu
#[derive(Parser, Debug)]
#[command(name = "branch-bank")]
#[command(about = "Single-branch bank simulator driven by a text menu", long_about = None)]
pub struct CliArgs {
    /// Largest amount a single withdrawal may take
    #[arg(
        long = "withdrawal-limit",
        value_name = "AMOUNT",
        default_value = "500.00",
        help = "Per-transaction withdrawal limit for new accounts"
    )]
    pub withdrawal_limit: Decimal,

    /// Number of withdrawals each account may make per day
    #[arg(
        long = "max-withdrawals",
        value_name = "COUNT",
        default_value_t = AccountLimits::DEFAULT_MAX_WITHDRAWALS,
        help = "Daily withdrawal count for new accounts"
    )]
    pub max_withdrawals: u32,

    /// Write a CSV account report to this path on exit
    #[arg(
        long = "report",
        value_name = "PATH",
        help = "Write a CSV report of all accounts to PATH when the menu exits"
    )]
    pub report: Option<PathBuf>,

    /// Log verbosity used when RUST_LOG is not set
    #[arg(
        long = "log-level",
        value_name = "LEVEL",
        default_value = "warn",
        help = "Log level (error, warn, info, debug, trace); RUST_LOG takes precedence"
    )]
    pub log_level: String,
}

/// Settings for one run of the bank
#[derive(Debug, Clone, PartialEq)]
pub struct BankConfig {
    /// Limits copied into every account opened during the run
    pub limits: AccountLimits,

    /// Where to write the account report on exit, if anywhere
    pub report: Option<PathBuf>,
}

impl CliArgs {
    /// Create a BankConfig from CLI arguments
    ///
    /// A non-positive withdrawal limit or a zero withdrawal count would make
    /// every withdrawal fail, so those values fall back to the defaults with
    /// a logged warning.
    pub fn to_bank_config(&self) -> BankConfig {
        let default = AccountLimits::default();

        let withdrawal_limit_per_tx = if self.withdrawal_limit > Decimal::ZERO {
            self.withdrawal_limit
        } else {
            warn!(
                requested = %self.withdrawal_limit,
                fallback = %default.withdrawal_limit_per_tx,
                "withdrawal limit must be positive, using default"
            );
            default.withdrawal_limit_per_tx
        };

        let max_withdrawals_per_day = if self.max_withdrawals > 0 {
            self.max_withdrawals
        } else {
            warn!(
                requested = self.max_withdrawals,
                fallback = default.max_withdrawals_per_day,
                "max withdrawals must be at least 1, using default"
            );
            default.max_withdrawals_per_day
        };

        BankConfig {
            limits: AccountLimits {
                withdrawal_limit_per_tx,
                max_withdrawals_per_day,
            },
            report: self.report.clone(),
        }
    }
}
