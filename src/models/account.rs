//! Account model
//!
//! Represents the two account variants the menu operates on. Both share one
//! contract (deposit, withdraw, balance, name) and differ only in the floor a
//! withdrawal may not cross.

use std::fmt;

use super::money::Money;
use crate::error::{BankError, BankResult};

/// Balance a savings account must keep after every withdrawal
pub const SAVINGS_MINIMUM_BALANCE: Money = Money::from_dollars_cents(1000, 0);

/// Variant of a bank account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AccountKind {
    /// Savings account, keeps a minimum balance
    Savings,
    /// Current account, may be drawn down to zero
    Current,
}

impl AccountKind {
    /// Every variant, in menu order
    pub const ALL: [AccountKind; 2] = [AccountKind::Savings, AccountKind::Current];

    /// Lowest balance a withdrawal may leave behind
    pub const fn minimum_balance(&self) -> Money {
        match self {
            Self::Savings => SAVINGS_MINIMUM_BALANCE,
            Self::Current => Money::zero(),
        }
    }

    /// Fixed label used for menu headers
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Savings => "Savings Account",
            Self::Current => "Current Account",
        }
    }
}

impl fmt::Display for AccountKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// An in-memory bank account
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    kind: AccountKind,
    balance: Money,
}

impl Account {
    /// Create a new account with a zero balance
    pub fn new(kind: AccountKind) -> Self {
        Self::with_balance(kind, Money::zero())
    }

    /// Create a new account with an opening balance
    pub fn with_balance(kind: AccountKind, balance: Money) -> Self {
        Self { kind, balance }
    }

    pub fn kind(&self) -> AccountKind {
        self.kind
    }

    pub fn name(&self) -> &'static str {
        self.kind.name()
    }

    /// Current balance. Never mutates the account.
    pub fn check_balance(&self) -> Money {
        self.balance
    }

    /// Add a positive amount to the balance
    ///
    /// Returns the new balance. Zero or negative amounts are rejected and the
    /// balance is left untouched.
    pub fn deposit(&mut self, amount: Money) -> BankResult<Money> {
        if !amount.is_positive() {
            return Err(BankError::InvalidAmount(amount));
        }

        self.balance = self
            .balance
            .checked_add(amount)
            .ok_or(BankError::Overflow(amount))?;
        Ok(self.balance)
    }

    /// Take a positive amount out of the balance
    ///
    /// Returns the new balance. Fails without touching the balance if the
    /// amount is not positive or if the remainder would fall below the
    /// variant's minimum balance.
    pub fn withdraw(&mut self, amount: Money) -> BankResult<Money> {
        if !amount.is_positive() {
            return Err(BankError::InvalidAmount(amount));
        }

        let minimum = self.kind.minimum_balance();
        let remaining = self
            .balance
            .checked_sub(amount)
            .ok_or(BankError::Overflow(amount))?;

        if remaining < minimum {
            return Err(BankError::InsufficientFunds {
                account: self.name(),
                requested: amount,
                available: self.balance,
                minimum,
            });
        }

        self.balance = remaining;
        Ok(self.balance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dollars(d: i64) -> Money {
        Money::from_dollars_cents(d, 0)
    }

    #[test]
    fn test_new_account_starts_empty() {
        for kind in AccountKind::ALL {
            let account = Account::new(kind);
            assert_eq!(account.kind(), kind);
            assert!(account.check_balance().is_zero());
        }
    }

    #[test]
    fn test_names() {
        assert_eq!(Account::new(AccountKind::Savings).name(), "Savings Account");
        assert_eq!(Account::new(AccountKind::Current).name(), "Current Account");
    }

    #[test]
    fn test_minimum_balances() {
        assert_eq!(AccountKind::Savings.minimum_balance(), dollars(1000));
        assert_eq!(AccountKind::Current.minimum_balance(), Money::zero());
    }

    #[test]
    fn test_deposit_adds_to_balance() {
        for kind in AccountKind::ALL {
            let mut account = Account::with_balance(kind, dollars(50));
            let balance = account.deposit(Money::from_cents(1250)).unwrap();
            assert_eq!(balance, Money::from_cents(6250));
            assert_eq!(account.check_balance(), Money::from_cents(6250));
        }
    }

    #[test]
    fn test_deposit_rejects_non_positive() {
        for kind in AccountKind::ALL {
            let mut account = Account::with_balance(kind, dollars(10));
            for amount in [Money::zero(), dollars(-5)] {
                let err = account.deposit(amount).unwrap_err();
                assert!(err.is_invalid_amount());
                assert_eq!(account.check_balance(), dollars(10));
            }
        }
    }

    #[test]
    fn test_deposit_overflow_leaves_balance() {
        let mut account = Account::with_balance(AccountKind::Current, Money::from_cents(i64::MAX));
        let err = account.deposit(Money::from_cents(1)).unwrap_err();
        assert!(matches!(err, BankError::Overflow(_)));
        assert_eq!(account.check_balance(), Money::from_cents(i64::MAX));
    }

    #[test]
    fn test_withdraw_rejects_non_positive() {
        for kind in AccountKind::ALL {
            let mut account = Account::with_balance(kind, dollars(5000));
            for amount in [Money::zero(), dollars(-1)] {
                assert!(account.withdraw(amount).unwrap_err().is_invalid_amount());
            }
            assert_eq!(account.check_balance(), dollars(5000));
        }
    }

    #[test]
    fn test_savings_keeps_minimum_balance() {
        let mut account = Account::with_balance(AccountKind::Savings, dollars(1500));

        let err = account.withdraw(dollars(501)).unwrap_err();
        match err {
            BankError::InsufficientFunds {
                account: name,
                requested,
                available,
                minimum,
            } => {
                assert_eq!(name, "Savings Account");
                assert_eq!(requested, dollars(501));
                assert_eq!(available, dollars(1500));
                assert_eq!(minimum, dollars(1000));
            }
            other => panic!("unexpected error: {other}"),
        }
        assert_eq!(account.check_balance(), dollars(1500));

        // Landing exactly on the minimum is allowed
        assert_eq!(account.withdraw(dollars(500)).unwrap(), dollars(1000));
        assert!(account.withdraw(Money::from_cents(1)).unwrap_err().is_insufficient_funds());
    }

    #[test]
    fn test_savings_below_minimum_cannot_withdraw() {
        let mut account = Account::with_balance(AccountKind::Savings, dollars(900));
        assert!(account.withdraw(dollars(1)).unwrap_err().is_insufficient_funds());
        assert_eq!(account.check_balance(), dollars(900));
    }

    #[test]
    fn test_current_can_reach_zero() {
        let mut account = Account::with_balance(AccountKind::Current, dollars(200));
        assert!(account.withdraw(dollars(201)).unwrap_err().is_insufficient_funds());
        assert_eq!(account.withdraw(dollars(200)).unwrap(), Money::zero());
        assert!(account.withdraw(dollars(1)).unwrap_err().is_insufficient_funds());
        assert!(account.check_balance().is_zero());
    }

    #[test]
    fn test_withdraw_success_condition() {
        let balances = [0, 999, 1000, 1001, 2500];
        let amounts = [1, 500, 1000, 1500, 2500];

        for kind in AccountKind::ALL {
            for &start in &balances {
                for &amount in &amounts {
                    let mut account = Account::with_balance(kind, dollars(start));
                    let remaining = dollars(start).checked_sub(dollars(amount)).unwrap();
                    let expected_ok = remaining >= kind.minimum_balance();
                    let result = account.withdraw(dollars(amount));

                    assert_eq!(result.is_ok(), expected_ok, "{kind} {start} - {amount}");
                    if expected_ok {
                        assert_eq!(account.check_balance(), dollars(start - amount));
                    } else {
                        assert_eq!(account.check_balance(), dollars(start));
                    }
                }
            }
        }
    }

    #[test]
    fn test_check_balance_is_idempotent() {
        let account = Account::with_balance(AccountKind::Current, dollars(42));
        let first = account.check_balance();
        for _ in 0..5 {
            assert_eq!(account.check_balance(), first);
        }
        assert_eq!(account, Account::with_balance(AccountKind::Current, dollars(42)));
    }

    #[test]
    fn test_savings_scenario() {
        let mut account = Account::new(AccountKind::Savings);
        assert_eq!(account.deposit(dollars(1500)).unwrap(), dollars(1500));
        assert!(account.withdraw(dollars(600)).unwrap_err().is_insufficient_funds());
        assert_eq!(account.withdraw(dollars(400)).unwrap(), dollars(1100));
        assert_eq!(account.check_balance(), dollars(1100));
    }
}
