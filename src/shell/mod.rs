//! Interactive menu shell
//!
//! Reads menu choices and field values line by line from any `BufRead`,
//! calls into the [`Bank`], and writes prompts and results to any `Write`.
//! Every rejected operation prints its error and returns to the menu; only
//! I/O failures end the loop early. End of input behaves like quitting.

pub mod input;
pub mod menu;

use crate::core::{Bank, Clock};
use crate::types::{BankError, NewUser};
use input::{parse_account_number, parse_amount, parse_birth_date, parse_national_id};
use menu::MenuOption;
use std::io::{BufRead, Write};
use tracing::debug;

const NATIONAL_ID_PROMPT: &str = "National ID (NNN.NNN.NNN-NN): ";
const ACCOUNT_NUMBER_PROMPT: &str = "Account number: ";

/// Whether the loop should keep reading after a command
enum Flow {
    Continue,
    EndOfInput,
}

/// Menu read-eval loop bound to one bank
pub struct Shell<'b, R, W, C: Clock> {
    bank: &'b mut Bank<C>,
    input: R,
    output: W,
}

impl<'b, R, W, C> Shell<'b, R, W, C>
where
    R: BufRead,
    W: Write,
    C: Clock,
{
    /// Bind a shell to `bank`, reading commands from `input` and writing
    /// prompts and results to `output`
    pub fn new(bank: &'b mut Bank<C>, input: R, output: W) -> Self {
        Shell {
            bank,
            input,
            output,
        }
    }

    /// Run the menu until the operator quits or input ends
    ///
    /// # Errors
    ///
    /// Returns `BankError::Io` if reading input or writing output fails.
    pub fn run(&mut self) -> Result<(), BankError> {
        loop {
            self.print_menu()?;

            let Some(choice) = self.read_line()? else {
                break;
            };

            let option = match choice.parse::<MenuOption>() {
                Ok(option) => option,
                Err(_) => {
                    writeln!(
                        self.output,
                        "Invalid operation, please select the desired operation again."
                    )?;
                    continue;
                }
            };
            debug!(?option, "menu option selected");

            if option == MenuOption::Quit {
                break;
            }

            match self.dispatch(option) {
                Ok(Flow::Continue) => {}
                Ok(Flow::EndOfInput) => break,
                Err(e @ BankError::Io { .. }) => return Err(e),
                Err(e) => writeln!(self.output, "{e}")?,
            }
        }

        self.output.flush()?;
        Ok(())
    }

    fn dispatch(&mut self, option: MenuOption) -> Result<Flow, BankError> {
        match option {
            MenuOption::Deposit => self.deposit(),
            MenuOption::Withdraw => self.withdraw(),
            MenuOption::Statement => self.statement(),
            MenuOption::NewAccount => self.new_account(),
            MenuOption::ListAccounts => self.list_accounts(),
            MenuOption::NewUser => self.new_user(),
            MenuOption::Quit => Ok(Flow::EndOfInput),
        }
    }

    fn deposit(&mut self) -> Result<Flow, BankError> {
        self.require_accounts()?;

        let Some(national_id) = self.prompt(NATIONAL_ID_PROMPT)? else {
            return Ok(Flow::EndOfInput);
        };
        let national_id = parse_national_id(&national_id)?;
        let Some(number) = self.prompt(ACCOUNT_NUMBER_PROMPT)? else {
            return Ok(Flow::EndOfInput);
        };
        let number = parse_account_number(&number)?;
        let Some(amount) = self.prompt("Deposit amount: ")? else {
            return Ok(Flow::EndOfInput);
        };
        let amount = parse_amount(&amount)?;

        self.bank.deposit(&national_id, number, amount)?;
        writeln!(self.output, "Deposit completed successfully!")?;
        Ok(Flow::Continue)
    }

    fn withdraw(&mut self) -> Result<Flow, BankError> {
        self.require_accounts()?;

        let Some(national_id) = self.prompt(NATIONAL_ID_PROMPT)? else {
            return Ok(Flow::EndOfInput);
        };
        let national_id = parse_national_id(&national_id)?;
        let Some(number) = self.prompt(ACCOUNT_NUMBER_PROMPT)? else {
            return Ok(Flow::EndOfInput);
        };
        let number = parse_account_number(&number)?;
        let Some(amount) = self.prompt("Withdrawal amount: ")? else {
            return Ok(Flow::EndOfInput);
        };
        let amount = parse_amount(&amount)?;

        self.bank.withdraw(&national_id, number, amount)?;
        writeln!(self.output, "Withdrawal completed successfully!")?;
        Ok(Flow::Continue)
    }

    fn statement(&mut self) -> Result<Flow, BankError> {
        self.require_accounts()?;

        let Some(national_id) = self.prompt(NATIONAL_ID_PROMPT)? else {
            return Ok(Flow::EndOfInput);
        };
        let national_id = parse_national_id(&national_id)?;
        let Some(number) = self.prompt(ACCOUNT_NUMBER_PROMPT)? else {
            return Ok(Flow::EndOfInput);
        };
        let number = parse_account_number(&number)?;

        let statement = self.bank.statement(&national_id, number)?;
        writeln!(self.output)?;
        writeln!(self.output, "{statement}")?;
        Ok(Flow::Continue)
    }

    fn new_user(&mut self) -> Result<Flow, BankError> {
        let Some(national_id) = self.prompt(NATIONAL_ID_PROMPT)? else {
            return Ok(Flow::EndOfInput);
        };
        let national_id = parse_national_id(&national_id)?;

        // Reject duplicates before asking for the remaining fields
        if self.bank.find_user(&national_id).is_some() {
            return Err(BankError::duplicate_user(&national_id));
        }

        let Some(full_name) = self.prompt("Full name: ")? else {
            return Ok(Flow::EndOfInput);
        };
        let Some(birth_date) = self.prompt("Birth date (DD/MM/YYYY): ")? else {
            return Ok(Flow::EndOfInput);
        };
        let birth_date = parse_birth_date(&birth_date)?;
        let Some(address) =
            self.prompt("Address (street, number - district - city/state): ")?
        else {
            return Ok(Flow::EndOfInput);
        };

        self.bank.register_user(NewUser {
            full_name: full_name.trim().to_string(),
            birth_date,
            national_id,
            address: address.trim().to_string(),
        })?;
        writeln!(self.output, "User created successfully!")?;
        Ok(Flow::Continue)
    }

    fn new_account(&mut self) -> Result<Flow, BankError> {
        let Some(national_id) = self.prompt(NATIONAL_ID_PROMPT)? else {
            return Ok(Flow::EndOfInput);
        };
        let national_id = parse_national_id(&national_id)?;

        let account = self.bank.open_account(&national_id)?;
        writeln!(
            self.output,
            "Account {} created successfully! Branch: {}",
            account.account_number, account.branch_code
        )?;
        Ok(Flow::Continue)
    }

    fn list_accounts(&mut self) -> Result<Flow, BankError> {
        let Some(filter) = self.prompt("National ID (blank for all accounts): ")? else {
            return Ok(Flow::EndOfInput);
        };
        let filter = match filter.trim() {
            "" => None,
            typed => Some(parse_national_id(typed)?),
        };

        let summaries = self.bank.list_accounts(filter.as_deref());
        if summaries.is_empty() {
            writeln!(self.output, "No accounts found.")?;
            return Ok(Flow::Continue);
        }

        writeln!(self.output)?;
        for summary in summaries {
            writeln!(self.output, "==============================")?;
            writeln!(self.output, "Branch: {}", summary.branch_code)?;
            writeln!(self.output, "Account number: {}", summary.account_number)?;
            writeln!(self.output, "Holder: {}", summary.holder)?;
            writeln!(self.output, "National ID: {}", summary.national_id)?;
            writeln!(self.output, "Balance: {:.2}", summary.balance.round_dp(2))?;
        }
        Ok(Flow::Continue)
    }

    fn require_accounts(&self) -> Result<(), BankError> {
        if self.bank.has_accounts() {
            Ok(())
        } else {
            Err(BankError::NoAccounts)
        }
    }

    fn print_menu(&mut self) -> Result<(), BankError> {
        writeln!(self.output)?;
        writeln!(self.output, "=== Menu ===")?;
        for option in MenuOption::ALL {
            writeln!(self.output, "{option}")?;
        }
        write!(self.output, "Choose an option: ")?;
        self.output.flush()?;
        Ok(())
    }

    fn prompt(&mut self, text: &str) -> Result<Option<String>, BankError> {
        write!(self.output, "{text}")?;
        self.output.flush()?;
        self.read_line()
    }

    /// Next input line without its line ending, or `None` at end of input
    fn read_line(&mut self) -> Result<Option<String>, BankError> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::FixedClock;
    use crate::types::AccountLimits;
    use chrono::NaiveDate;

    fn bank() -> Bank<FixedClock> {
        let at = NaiveDate::from_ymd_opt(2024, 6, 1)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap();
        Bank::with_clock(AccountLimits::default(), FixedClock(at))
    }

    fn run_script(bank: &mut Bank<FixedClock>, script: &str) -> String {
        let mut output = Vec::new();
        Shell::new(bank, script.as_bytes(), &mut output)
            .run()
            .unwrap();
        String::from_utf8(output).unwrap()
    }

    const REGISTER_ANA: &str = "nu\n111.222.333-44\nAna Lima\n01/01/1990\nRua A, 1 - Centro - Recife/PE\n";

    #[test]
    fn test_quit_immediately() {
        let mut bank = bank();
        let output = run_script(&mut bank, "q\n");

        assert!(output.contains("=== Menu ==="));
        assert!(output.contains("[lc] List accounts"));
    }

    #[test]
    fn test_end_of_input_ends_loop() {
        let mut bank = bank();
        let output = run_script(&mut bank, "");
        assert!(output.contains("Choose an option: "));
    }

    #[test]
    fn test_unknown_option_reprompts() {
        let mut bank = bank();
        let output = run_script(&mut bank, "x\nq\n");

        assert!(output.contains("Invalid operation"));
        assert_eq!(output.matches("=== Menu ===").count(), 2);
    }

    #[test]
    fn test_register_open_deposit_withdraw_statement() {
        let mut bank = bank();
        let script = format!(
            "{REGISTER_ANA}n\n111.222.333-44\nd\n111.222.333-44\n1\n200\ns\n111.222.333-44\n1\n50.5\ne\n111.222.333-44\n1\nq\n"
        );

        let output = run_script(&mut bank, &script);

        assert!(output.contains("User created successfully!"));
        assert!(output.contains("Account 1 created successfully! Branch: 0001"));
        assert!(output.contains("Deposit completed successfully!"));
        assert!(output.contains("Withdrawal completed successfully!"));
        assert!(output.contains(
            "01/06/2024 12:00:00 - Deposit: 200.00\n\
             01/06/2024 12:00:00 - Withdrawal: 50.50\n\
             Balance: 149.50"
        ));
    }

    #[test]
    fn test_operations_without_accounts_report_and_continue() {
        let mut bank = bank();
        let output = run_script(&mut bank, "d\ns\ne\nq\n");

        assert_eq!(
            output.matches("Operation failed: no accounts registered").count(),
            3
        );
    }

    #[test]
    fn test_duplicate_user_rejected_before_other_prompts() {
        let mut bank = bank();
        let script = format!("{REGISTER_ANA}nu\n111.222.333-44\nq\n");

        let output = run_script(&mut bank, &script);

        assert!(output.contains("A user with national ID 111.222.333-44 already exists"));
        assert_eq!(bank.user_count(), 1);
    }

    #[test]
    fn test_invalid_inputs_are_reported() {
        let mut bank = bank();
        let script = "nu\n123\nnu\n111.222.333-44\nAna\n1990-01-01\nn\n999.999.999-99\nq\n";

        let output = run_script(&mut bank, script);

        assert!(output.contains("Invalid national ID '123'"));
        assert!(output.contains("Invalid birth date '1990-01-01'"));
        assert!(output.contains("User 999.999.999-99 not found"));
        assert_eq!(bank.user_count(), 0);
    }

    #[test]
    fn test_list_accounts() {
        let mut bank = bank();
        let script = format!("lc\n\n{REGISTER_ANA}n\n111.222.333-44\nlc\n\nlc\n555.555.555-55\nq\n");

        let output = run_script(&mut bank, &script);

        assert_eq!(output.matches("No accounts found.").count(), 2);
        assert!(output.contains("Account number: 1\nHolder: Ana Lima\nNational ID: 111.222.333-44\nBalance: 0.00"));
    }

    #[test]
    fn test_end_of_input_mid_operation() {
        let mut bank = bank();
        let output = run_script(&mut bank, "nu\n111.222.333-44\nAna");

        assert!(!output.contains("User created successfully!"));
        assert_eq!(bank.user_count(), 0);
        assert!(!bank.has_accounts());
    }
}
