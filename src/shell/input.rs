//! Parsing and format validation of console input
//!
//! The core only accepts typed values; everything the operator types is
//! turned into those types here.

use crate::core::validate_national_id;
use crate::types::{AccountNumber, BankError};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::str::FromStr;

/// Accepted birth date layout
pub const BIRTH_DATE_FORMAT: &str = "DD/MM/YYYY";

/// Validate a typed national ID and return it trimmed
pub fn parse_national_id(input: &str) -> Result<String, BankError> {
    let national_id = input.trim();
    validate_national_id(national_id)?;
    Ok(national_id.to_string())
}

/// Parse a `DD/MM/YYYY` birth date
pub fn parse_birth_date(input: &str) -> Result<NaiveDate, BankError> {
    let input = input.trim();
    NaiveDate::parse_from_str(input, "%d/%m/%Y")
        .map_err(|_| BankError::invalid_format("birth date", input, BIRTH_DATE_FORMAT))
}

/// Parse a decimal amount such as `150` or `99.90`
///
/// Only the number format is checked here; whether the amount is acceptable
/// is decided by the transaction rules.
pub fn parse_amount(input: &str) -> Result<Decimal, BankError> {
    let input = input.trim();
    Decimal::from_str(input)
        .map_err(|_| BankError::invalid_format("amount", input, "a decimal number"))
}

/// Parse a positive account number
pub fn parse_account_number(input: &str) -> Result<AccountNumber, BankError> {
    let input = input.trim();
    match input.parse::<AccountNumber>() {
        Ok(number) if number > 0 => Ok(number),
        _ => Err(BankError::invalid_format(
            "account number",
            input,
            "a positive integer",
        )),
    }
}
