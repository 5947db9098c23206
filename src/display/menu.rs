//! Menu text
//!
//! The fixed blocks printed by the main and account menus.

use crate::models::AccountKind;

pub const SELECT_PROMPT: &str = "Select an option: ";
pub const INVALID_OPTION: &str = "Invalid option. Please try again.";
pub const INVALID_AMOUNT: &str = "Invalid input. Please enter a valid amount: ";
pub const DEPOSIT_PROMPT: &str = "Enter amount to deposit: ";
pub const WITHDRAW_PROMPT: &str = "Enter amount to withdraw: ";
pub const RETURNING: &str = "Returning to Main Menu...";
pub const GOODBYE: &str = "Exiting the system. Goodbye!";
pub const WELCOME: &str = "Welcome to bank-menu. Choose an account to operate on.";

/// The main menu block, without the selection prompt
pub fn main_menu() -> String {
    let mut output = String::from("Main Menu\n");
    for (index, kind) in AccountKind::ALL.iter().enumerate() {
        output.push_str(&format!("[{}] {}\n", index + 1, kind));
    }
    output.push_str(&format!("[{}] Exit\n", AccountKind::ALL.len() + 1));
    output
}

/// The account menu block for one variant, without the selection prompt
pub fn account_menu(kind: AccountKind) -> String {
    format!(
        "{} Menu\n[1] Deposit\n[2] Withdraw\n[3] Check Balance\n[4] Back\n",
        kind.name()
    )
}
