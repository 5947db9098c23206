//! Bank context
//!
//! Owns the savings and current accounts for the lifetime of a session.

use super::account::{Account, AccountKind};

/// The pair of accounts a menu session operates on
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bank {
    savings: Account,
    current: Account,
}

impl Bank {
    /// Create a bank whose accounts both start with a zero balance
    pub fn new() -> Self {
        Self {
            savings: Account::new(AccountKind::Savings),
            current: Account::new(AccountKind::Current),
        }
    }

    pub fn account(&self, kind: AccountKind) -> &Account {
        match kind {
            AccountKind::Savings => &self.savings,
            AccountKind::Current => &self.current,
        }
    }

    pub fn account_mut(&mut self, kind: AccountKind) -> &mut Account {
        match kind {
            AccountKind::Savings => &mut self.savings,
            AccountKind::Current => &mut self.current,
        }
    }
}

impl Default for Bank {
    fn default() -> Self {
        Self::new()
    }
}
