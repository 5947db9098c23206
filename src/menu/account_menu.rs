//! Account menu
//!
//! Operations offered once an account has been selected.

/// A valid account menu selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountAction {
    Deposit,
    Withdraw,
    CheckBalance,
    /// Return to the main menu
    Back,
}

impl AccountAction {
    /// Parse a token as a menu number
    ///
    /// Non-integer tokens (including `1abc`) and numbers outside 1-4 give
    /// `None`.
    pub fn parse(token: &str) -> Option<Self> {
        match token.parse::<i64>().ok()? {
            1 => Some(Self::Deposit),
            2 => Some(Self::Withdraw),
            3 => Some(Self::CheckBalance),
            4 => Some(Self::Back),
            _ => None,
        }
    }
}
