//! Account display formatting
//!
//! Turns account operation outcomes into the lines shown on the console.

use crate::error::BankError;
use crate::models::Money;

/// Format a successful deposit
pub fn format_deposit(amount: Money, balance: Money, symbol: &str) -> String {
    format!(
        "Deposited: {}. New balance: {}",
        amount.format_with_symbol(symbol),
        balance.format_with_symbol(symbol)
    )
}

/// Format a successful withdrawal
pub fn format_withdrawal(amount: Money, balance: Money, symbol: &str) -> String {
    format!(
        "Withdrawn: {}. New balance: {}",
        amount.format_with_symbol(symbol),
        balance.format_with_symbol(symbol)
    )
}

/// Format the result of a balance check
///
/// A zero balance is reported as "no balance available" rather than as an
/// amount. This conflates an empty account with a missing one; kept as the
/// menu has always shown it.
pub fn format_balance(balance: Money, symbol: &str) -> String {
    if balance.is_positive() {
        format!("Current Balance: {}", balance.format_with_symbol(symbol))
    } else {
        "There is no balance available.".to_string()
    }
}

/// Format a rejected deposit
pub fn format_deposit_error(err: &BankError, symbol: &str) -> String {
    match err {
        BankError::InvalidAmount(_) => {
            "Invalid deposit amount. Please enter a positive value.".to_string()
        }
        other => format_common_error(other, symbol),
    }
}

/// Format a rejected withdrawal
pub fn format_withdrawal_error(err: &BankError, symbol: &str) -> String {
    match err {
        BankError::InvalidAmount(_) => "Invalid withdrawal amount.".to_string(),
        other => format_common_error(other, symbol),
    }
}

fn format_common_error(err: &BankError, symbol: &str) -> String {
    match err {
        BankError::InsufficientFunds { minimum, .. } if minimum.is_positive() => format!(
            "Insufficient balance. Minimum balance of {} must be maintained.",
            minimum.format_with_symbol(symbol)
        ),
        BankError::InsufficientFunds { .. } => {
            "Insufficient balance to complete the withdrawal.".to_string()
        }
        BankError::Overflow(_) => "Amount is too large to process.".to_string(),
        other => other.to_string(),
    }
}
