//! Main menu
//!
//! Picks which account to operate on, or ends the session.

use crate::models::AccountKind;

/// A valid main menu selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MainChoice {
    /// Open the account menu for one variant
    Open(AccountKind),
    /// Leave the program
    Exit,
}

impl MainChoice {
    /// Match a token against the menu entries
    ///
    /// Comparison is by string, so `01` or `1.0` are not selections.
    pub fn parse(token: &str) -> Option<Self> {
        match token {
            "1" => Some(Self::Open(AccountKind::Savings)),
            "2" => Some(Self::Open(AccountKind::Current)),
            "3" => Some(Self::Exit),
            _ => None,
        }
    }
}
