//! Core data models for bank-menu
//!
//! Money amounts, the two account variants, and the bank that owns them.

pub mod account;
pub mod bank;
pub mod money;

pub use account::{Account, AccountKind, SAVINGS_MINIMUM_BALANCE};
pub use bank::Bank;
pub use money::{Money, MoneyParseError};
