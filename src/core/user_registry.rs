//! User registry
//!
//! Stores registered users in registration order and rejects a second user
//! with a national ID that is already taken.

use crate::types::{BankError, NewUser, User};
use regex::Regex;
use std::sync::LazyLock;

/// Accepted national ID layout: `NNN.NNN.NNN-NN`
pub const NATIONAL_ID_FORMAT: &str = "NNN.NNN.NNN-NN";

static NATIONAL_ID_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{3}\.\d{3}\.\d{3}-\d{2}$").expect("valid national ID regex"));

/// Check that a national ID has the `NNN.NNN.NNN-NN` layout
///
/// # Errors
///
/// Returns `BankError::InvalidFormat` when the layout does not match.
pub fn validate_national_id(national_id: &str) -> Result<(), BankError> {
    if NATIONAL_ID_PATTERN.is_match(national_id) {
        Ok(())
    } else {
        Err(BankError::invalid_format(
            "national ID",
            national_id,
            NATIONAL_ID_FORMAT,
        ))
    }
}

/// Registry of all users known to the branch
#[derive(Debug, Default)]
pub struct UserRegistry {
    users: Vec<User>,
}

impl UserRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        UserRegistry { users: Vec::new() }
    }

    /// Register a new user
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - the national ID does not have the `NNN.NNN.NNN-NN` layout
    /// - a user with the same national ID is already registered
    pub fn register(&mut self, new_user: NewUser) -> Result<User, BankError> {
        validate_national_id(&new_user.national_id)?;

        if self.find(&new_user.national_id).is_some() {
            return Err(BankError::duplicate_user(&new_user.national_id));
        }

        let user = User::from(new_user);
        self.users.push(user.clone());
        Ok(user)
    }

    /// Find the user registered under `national_id`
    pub fn find(&self, national_id: &str) -> Option<&User> {
        self.users.iter().find(|user| user.national_id == national_id)
    }

    /// Number of registered users
    pub fn len(&self) -> usize {
        self.users.len()
    }

    /// Whether no user has been registered yet
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}
