//! bank-menu - Console menu for savings and current accounts
//!
//! This library provides the pieces of a small interactive banking menu. Two
//! in-memory accounts are offered, each with its own withdrawal floor: a
//! savings account that keeps a minimum balance and a current account that
//! may be drawn down to zero.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Money, the account variants and the bank that owns them
//! - `display`: Menu text and operation messages
//! - `menu`: Console handling and the menu state machine
//! - `cli`: Non-interactive command handlers
//!
//! # Example
//!
//! ```rust
//! use bank_menu::config::Settings;
//! use bank_menu::menu::{Console, Session};
//! use bank_menu::models::AccountKind;
//!
//! let script = "2\n1\n200\n4\n3\n";
//! let console = Console::new(script.as_bytes(), Vec::new());
//! let mut session = Session::new(console, Settings::default());
//! session.run().unwrap();
//!
//! let balance = session.bank().account(AccountKind::Current).check_balance();
//! assert_eq!(balance.cents(), 20_000);
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod menu;
pub mod models;

pub use error::{BankError, BankResult};
