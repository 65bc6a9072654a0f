//! User-related types for the branch bank

use chrono::NaiveDate;

/// A registered bank customer
///
/// Users are immutable once registered and live until the process exits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    /// Full name as typed at registration
    pub full_name: String,

    /// Date of birth
    pub birth_date: NaiveDate,

    /// National ID in `NNN.NNN.NNN-NN` form, unique across the registry
    pub national_id: String,

    /// Free-form address (street, number - district - city/state)
    pub address: String,
}

/// Registration request for a new user
///
/// Carries the same fields as [`User`]; the registry validates it and turns
/// it into a `User` on success.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub full_name: String,
    pub birth_date: NaiveDate,
    pub national_id: String,
    pub address: String,
}

impl From<NewUser> for User {
    fn from(new_user: NewUser) -> Self {
        User {
            full_name: new_user.full_name,
            birth_date: new_user.birth_date,
            national_id: new_user.national_id,
            address: new_user.address,
        }
    }
}
