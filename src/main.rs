//! Branch Bank CLI
//!
//! Interactive menu for the single-branch bank simulator.
//!
//! # Usage
//!
//! ```bash
//! cargo run
//! cargo run -- --withdrawal-limit 1000 --max-withdrawals 5
//! cargo run -- --report accounts.csv
//! RUST_LOG=info cargo run
//! ```
//!
//! The menu reads from stdin and writes to stdout; logs go to stderr. When
//! `--report` is given, a CSV summary of every account is written there as
//! the program exits.
//!
//! # Exit Codes
//!
//! - 0: Success
//! - 1: Error (console I/O failure, report could not be written)

use branch_bank::cli;
use branch_bank::io::write_report_file;
use branch_bank::{Bank, Shell};
use std::io::{self, BufRead, Write};
use std::process;
use tracing::info;

fn main() {
    let args = cli::parse_args();
    cli::init_logging(&args.log_level);

    let config = args.to_bank_config();
    info!(
        withdrawal_limit = %config.limits.withdrawal_limit_per_tx,
        max_withdrawals = config.limits.max_withdrawals_per_day,
        "starting branch bank"
    );

    let mut bank = Bank::with_limits(config.limits);

    let stdin = io::stdin();
    let stdout = io::stdout();
    if let Err(e) = run_menu(&mut bank, stdin.lock(), stdout.lock()) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }

    if let Some(path) = &config.report {
        if let Err(e) = write_report_file(path, &bank.list_accounts(None)) {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
        info!(path = %path.display(), "account report written");
    }
}

fn run_menu(
    bank: &mut Bank,
    input: impl BufRead,
    output: impl Write,
) -> Result<(), branch_bank::BankError> {
    Shell::new(bank, input, output).run()
}
