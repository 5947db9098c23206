//! Custom error types for bank-menu
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

use crate::models::Money;

/// The main error type for bank-menu operations
#[derive(Error, Debug)]
pub enum BankError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Console or file I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Amount is zero, negative, or otherwise unusable for the operation
    #[error("Invalid amount: {0}")]
    InvalidAmount(Money),

    /// Withdrawal would take the balance below the account's floor
    #[error(
        "Insufficient funds in {account}: requested {requested}, available {available}, minimum balance {minimum}"
    )]
    InsufficientFunds {
        account: &'static str,
        requested: Money,
        available: Money,
        minimum: Money,
    },

    /// Balance arithmetic left the representable range
    #[error("Amount out of range: {0}")]
    Overflow(Money),

    /// Standard input reached end of file while waiting for a response
    #[error("Input closed")]
    InputClosed,
}

impl BankError {
    /// Check if this is an insufficient funds error
    pub fn is_insufficient_funds(&self) -> bool {
        matches!(self, Self::InsufficientFunds { .. })
    }

    /// Check if this is an invalid amount error
    pub fn is_invalid_amount(&self) -> bool {
        matches!(self, Self::InvalidAmount(_))
    }

    /// Check if the console ran out of input
    pub fn is_input_closed(&self) -> bool {
        matches!(self, Self::InputClosed)
    }
}

impl From<std::io::Error> for BankError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

/// Result type alias for bank-menu operations
pub type BankResult<T> = Result<T, BankError>;
