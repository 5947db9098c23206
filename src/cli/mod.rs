//! CLI command handlers
//!
//! Non-interactive commands that sit next to the account menu.

pub mod config;

pub use config::{format_config, handle_config_command, handle_init_command};
