//! Display formatting for terminal output
//!
//! Menu blocks and the messages reported after account operations.

pub mod account;
pub mod menu;

pub use account::{
    format_balance, format_deposit, format_deposit_error, format_withdrawal,
    format_withdrawal_error,
};
