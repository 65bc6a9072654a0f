//! Menu options of the interactive shell

use std::fmt;
use std::str::FromStr;

/// One entry of the main menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuOption {
    Deposit,
    Withdraw,
    Statement,
    NewAccount,
    ListAccounts,
    NewUser,
    Quit,
}

impl MenuOption {
    /// Options in the order they are displayed
    pub const ALL: [MenuOption; 7] = [
        MenuOption::Deposit,
        MenuOption::Withdraw,
        MenuOption::Statement,
        MenuOption::Quit,
        MenuOption::NewAccount,
        MenuOption::ListAccounts,
        MenuOption::NewUser,
    ];

    /// Key the operator types to pick this option
    pub fn key(self) -> &'static str {
        match self {
            MenuOption::Deposit => "d",
            MenuOption::Withdraw => "s",
            MenuOption::Statement => "e",
            MenuOption::NewAccount => "n",
            MenuOption::ListAccounts => "lc",
            MenuOption::NewUser => "nu",
            MenuOption::Quit => "q",
        }
    }

    /// Label shown next to the key
    pub fn label(self) -> &'static str {
        match self {
            MenuOption::Deposit => "Deposit",
            MenuOption::Withdraw => "Withdraw",
            MenuOption::Statement => "Statement",
            MenuOption::NewAccount => "New account",
            MenuOption::ListAccounts => "List accounts",
            MenuOption::NewUser => "New user",
            MenuOption::Quit => "Quit",
        }
    }
}

impl fmt::Display for MenuOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.key(), self.label())
    }
}

/// Returned when the typed key matches no option
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownOption(pub String);

impl FromStr for MenuOption {
    type Err = UnknownOption;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_lowercase();
        MenuOption::ALL
            .into_iter()
            .find(|option| option.key() == key)
            .ok_or(UnknownOption(key))
    }
}
