//! Console input and output
//!
//! Wraps a buffered reader and a writer so the menu can run against stdin and
//! stdout or against in-memory buffers in tests.

use std::io::{BufRead, Write};

use thiserror::Error;

use crate::display::menu::INVALID_AMOUNT;
use crate::error::{BankError, BankResult};
use crate::models::{Money, MoneyParseError};

/// Why a typed amount was not accepted
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AmountInputError {
    #[error("{0}")]
    Malformed(MoneyParseError),

    #[error("Amount cannot be negative: {0}")]
    Negative(Money),

    #[error("Amount has more than two decimal places: {0}")]
    TooPrecise(String),
}

/// Parse one token as an amount the menu can pass to an account
///
/// Zero is accepted here; the account operation decides what to do with it.
/// Amounts finer than one cent are refused so they are never rounded away.
pub fn parse_amount(token: &str) -> Result<Money, AmountInputError> {
    let amount = Money::parse(token).map_err(|e| match e {
        MoneyParseError::TooPrecise(text) => AmountInputError::TooPrecise(text),
        other => AmountInputError::Malformed(other),
    })?;
    if amount.is_negative() {
        return Err(AmountInputError::Negative(amount));
    }
    Ok(amount)
}

/// Line-oriented console over any reader/writer pair
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Write text without a trailing newline and flush it
    pub fn write(&mut self, text: &str) -> BankResult<()> {
        self.output.write_all(text.as_bytes())?;
        self.output.flush()?;
        Ok(())
    }

    /// Write a full line
    pub fn line(&mut self, text: &str) -> BankResult<()> {
        self.write(text)?;
        self.write("\n")
    }

    /// Read the first whitespace-delimited token of the next non-blank line
    ///
    /// Anything after the first token on that line is discarded, and the token
    /// is taken whole: `1abc` is one token, not `1` followed by `abc`. Returns
    /// `BankError::InputClosed` once the input is exhausted.
    pub fn read_token(&mut self) -> BankResult<String> {
        let mut buf = Vec::new();
        loop {
            buf.clear();
            if self.input.read_until(b'\n', &mut buf)? == 0 {
                return Err(BankError::InputClosed);
            }

            let line = String::from_utf8_lossy(&buf);
            if let Some(token) = line.split_whitespace().next() {
                return Ok(token.to_string());
            }
        }
    }

    /// Print a prompt and read one token
    pub fn prompt_token(&mut self, prompt: &str) -> BankResult<String> {
        self.write(prompt)?;
        self.read_token()
    }

    /// Read tokens until one is a valid non-negative amount
    pub fn read_amount(&mut self) -> BankResult<Money> {
        loop {
            let token = self.read_token()?;
            match parse_amount(&token) {
                Ok(amount) => return Ok(amount),
                Err(e) => {
                    log::debug!("rejected amount {:?}: {}", token, e);
                    self.write(INVALID_AMOUNT)?;
                }
            }
        }
    }

    /// Give back the reader and writer
    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }
}
