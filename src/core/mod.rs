//! Core business logic module
//!
//! This module contains the banking components:
//! - `traits` - Clock abstraction used to stamp statement entries
//! - `user_registry` - Registered users keyed by national ID
//! - `account_registry` - Accounts, number assignment and lookup
//! - `processor` - Deposit and withdrawal rules
//! - `bank` - Facade tying the registries and processor together

pub mod account_registry;
pub mod bank;
pub mod processor;
pub mod traits;
pub mod user_registry;

pub use account_registry::AccountRegistry;
pub use bank::Bank;
pub use processor::TransactionProcessor;
pub use traits::{Clock, FixedClock, SystemClock};
pub use user_registry::{validate_national_id, UserRegistry, NATIONAL_ID_FORMAT};
