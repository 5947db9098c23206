//! Interactive account menu
//!
//! A small state machine: the main menu selects an account, the account menu
//! loops over deposit/withdraw/balance until the user goes back, and the main
//! menu's exit entry (or end of input) ends the session.

pub mod account_menu;
pub mod console;
pub mod main_menu;

use std::io::{BufRead, Write};

pub use account_menu::AccountAction;
pub use console::{parse_amount, AmountInputError, Console};
pub use main_menu::MainChoice;

use crate::config::Settings;
use crate::display::{self, menu};
use crate::error::BankResult;
use crate::models::{AccountKind, Bank, Money};

/// Where the session currently is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuState {
    MainMenu,
    AccountMenu(AccountKind),
    Exit,
}

/// One menu session over a bank and a console
pub struct Session<R, W> {
    bank: Bank,
    console: Console<R, W>,
    settings: Settings,
    state: MenuState,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Start a session with fresh, empty accounts
    pub fn new(console: Console<R, W>, settings: Settings) -> Self {
        Self::with_bank(Bank::new(), console, settings)
    }

    /// Start a session over an existing bank
    pub fn with_bank(bank: Bank, console: Console<R, W>, settings: Settings) -> Self {
        Self {
            bank,
            console,
            settings,
            state: MenuState::MainMenu,
        }
    }

    pub fn bank(&self) -> &Bank {
        &self.bank
    }

    pub fn state(&self) -> MenuState {
        self.state
    }

    /// Run until the user exits or the input closes
    pub fn run(&mut self) -> BankResult<()> {
        if self.settings.show_welcome {
            self.console.line(menu::WELCOME)?;
            self.console.line("")?;
        }

        while self.state != MenuState::Exit {
            match self.step() {
                Ok(next) => self.transition(next),
                Err(e) if e.is_input_closed() => {
                    log::debug!("input closed in state {:?}", self.state);
                    self.console.line("")?;
                    self.say_goodbye()?;
                    self.transition(MenuState::Exit);
                }
                Err(e) => return Err(e),
            }
        }

        Ok(())
    }

    /// Perform one interaction in the current state and return the next state
    pub fn step(&mut self) -> BankResult<MenuState> {
        match self.state {
            MenuState::MainMenu => self.main_menu(),
            MenuState::AccountMenu(kind) => self.account_menu(kind),
            MenuState::Exit => Ok(MenuState::Exit),
        }
    }

    /// Deposit into one account and report the outcome
    pub fn deposit(&mut self, kind: AccountKind, amount: Money) -> BankResult<()> {
        let symbol = &self.settings.currency_symbol;
        let message = match self.bank.account_mut(kind).deposit(amount) {
            Ok(balance) => {
                log::info!("{}: deposited {}, balance {}", kind, amount, balance);
                display::format_deposit(amount, balance, symbol)
            }
            Err(e) => {
                log::debug!("{}: deposit rejected: {}", kind, e);
                display::format_deposit_error(&e, symbol)
            }
        };

        self.console.line("")?;
        self.console.line(&message)
    }

    /// Withdraw from one account and report the outcome
    ///
    /// Returns whether the withdrawal was applied.
    pub fn withdraw(&mut self, kind: AccountKind, amount: Money) -> BankResult<bool> {
        let symbol = &self.settings.currency_symbol;
        let (applied, message) = match self.bank.account_mut(kind).withdraw(amount) {
            Ok(balance) => {
                log::info!("{}: withdrew {}, balance {}", kind, amount, balance);
                (true, display::format_withdrawal(amount, balance, symbol))
            }
            Err(e) => {
                log::debug!("{}: withdrawal rejected: {}", kind, e);
                (false, display::format_withdrawal_error(&e, symbol))
            }
        };

        self.console.line("")?;
        self.console.line(&message)?;
        Ok(applied)
    }

    /// Report the balance of one account
    pub fn show_balance(&mut self, kind: AccountKind) -> BankResult<()> {
        let balance = self.bank.account(kind).check_balance();
        let message = display::format_balance(balance, &self.settings.currency_symbol);

        self.console.line("")?;
        self.console.line(&message)
    }

    /// Hand back the bank and console once the session is over
    pub fn into_parts(self) -> (Bank, Console<R, W>) {
        (self.bank, self.console)
    }

    fn main_menu(&mut self) -> BankResult<MenuState> {
        self.console.write(&menu::main_menu())?;
        let token = self.console.prompt_token(menu::SELECT_PROMPT)?;

        match MainChoice::parse(&token) {
            Some(MainChoice::Open(kind)) => Ok(MenuState::AccountMenu(kind)),
            Some(MainChoice::Exit) => {
                self.console.line("")?;
                self.say_goodbye()?;
                Ok(MenuState::Exit)
            }
            None => {
                log::debug!("invalid main menu selection {:?}", token);
                self.console.line(menu::INVALID_OPTION)?;
                self.console.line("")?;
                Ok(MenuState::MainMenu)
            }
        }
    }

    fn account_menu(&mut self, kind: AccountKind) -> BankResult<MenuState> {
        self.console.line("")?;
        self.console.write(&menu::account_menu(kind))?;
        let token = self.console.prompt_token(menu::SELECT_PROMPT)?;

        match AccountAction::parse(&token) {
            Some(AccountAction::Deposit) => {
                let amount = self.prompt_amount(menu::DEPOSIT_PROMPT)?;
                self.deposit(kind, amount)?;
            }
            Some(AccountAction::Withdraw) => {
                let amount = self.prompt_amount(menu::WITHDRAW_PROMPT)?;
                self.withdraw(kind, amount)?;
            }
            Some(AccountAction::CheckBalance) => self.show_balance(kind)?,
            Some(AccountAction::Back) => {
                self.console.line("")?;
                self.console.line(menu::RETURNING)?;
                self.console.line("")?;
                return Ok(MenuState::MainMenu);
            }
            None => {
                log::debug!("invalid account menu selection {:?}", token);
                self.console.line("")?;
                self.console.line(menu::INVALID_OPTION)?;
            }
        }

        Ok(MenuState::AccountMenu(kind))
    }

    fn prompt_amount(&mut self, prompt: &str) -> BankResult<Money> {
        self.console.line("")?;
        self.console.write(prompt)?;
        self.console.read_amount()
    }

    fn say_goodbye(&mut self) -> BankResult<()> {
        self.console.line(menu::GOODBYE)?;
        self.console.line("")
    }

    fn transition(&mut self, next: MenuState) {
        if next != self.state {
            log::debug!("menu: {:?} -> {:?}", self.state, next);
        }
        self.state = next;
    }
}
