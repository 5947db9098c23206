//! Money type for representing currency amounts
//!
//! Internally stores amounts in cents (i64) to avoid floating-point precision
//! issues. Provides checked arithmetic and formatting.

use std::fmt;

/// Represents a monetary amount stored as cents (hundredths of the currency unit)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Money(i64);

impl Money {
    /// Create a Money amount from cents
    ///
    /// # Examples
    /// ```
    /// use bank_menu::models::Money;
    /// let amount = Money::from_cents(1050); // $10.50
    /// assert_eq!(amount.to_string(), "$10.50");
    /// ```
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Create a Money amount from whole units and cents
    ///
    /// # Examples
    /// ```
    /// use bank_menu::models::Money;
    /// let amount = Money::from_dollars_cents(1000, 0);
    /// assert_eq!(amount.cents(), 100_000);
    /// ```
    pub const fn from_dollars_cents(dollars: i64, cents: i64) -> Self {
        Self(dollars * 100 + cents)
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in cents
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Get the whole units portion (truncated toward zero)
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Get the cents portion (0-99)
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Add two amounts, returning `None` on overflow
    pub fn checked_add(self, other: Self) -> Option<Self> {
        self.0.checked_add(other.0).map(Self)
    }

    /// Subtract two amounts, returning `None` on overflow
    pub fn checked_sub(self, other: Self) -> Option<Self> {
        self.0.checked_sub(other.0).map(Self)
    }

    /// Parse a money amount from a string
    ///
    /// Accepts formats: "10.50", "-10.50", "+10.50", "$10.50", "10", "10.",
    /// ".5", "1e3", "1.25E2". The value must be exact to the cent: "0.009"
    /// gives `MoneyParseError::TooPrecise` rather than being rounded.
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let s = s.trim();
        let invalid = || MoneyParseError::InvalidFormat(s.to_string());
        let overflow = || MoneyParseError::Overflow(s.to_string());

        let (negative, body) = match s.strip_prefix('-') {
            Some(stripped) => (true, stripped),
            None => (false, s.strip_prefix('+').unwrap_or(s)),
        };
        let body = body.strip_prefix('$').unwrap_or(body);

        let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());

        let (mantissa, exponent) = match body.split_once(|c: char| c == 'e' || c == 'E') {
            Some((mantissa, exp)) => {
                let exp_digits = exp.strip_prefix(&['+', '-'][..]).unwrap_or(exp);
                if exp_digits.is_empty() || !all_digits(exp_digits) {
                    return Err(invalid());
                }
                (mantissa, exp.parse::<i64>().map_err(|_| overflow())?)
            }
            None => (body, 0),
        };

        let (whole, fraction) = mantissa.split_once('.').unwrap_or((mantissa, ""));
        if (whole.is_empty() && fraction.is_empty()) || !all_digits(whole) || !all_digits(fraction)
        {
            return Err(invalid());
        }

        // Trailing fraction zeros carry no value
        let fraction = fraction.trim_end_matches('0');

        let mut digits: i64 = 0;
        for b in whole.bytes().chain(fraction.bytes()) {
            digits = digits
                .checked_mul(10)
                .and_then(|d| d.checked_add(i64::from(b - b'0')))
                .ok_or_else(overflow)?;
        }
        if digits == 0 {
            return Ok(Self::zero());
        }

        // Power of ten turning `digits` into cents
        let scale = exponent
            .checked_add(2)
            .and_then(|e| e.checked_sub(fraction.len() as i64))
            .ok_or_else(overflow)?;

        let cents = if scale >= 0 {
            u32::try_from(scale)
                .ok()
                .and_then(|k| 10i64.checked_pow(k))
                .and_then(|factor| digits.checked_mul(factor))
                .ok_or_else(overflow)?
        } else {
            match u32::try_from(-scale).ok().and_then(|k| 10i64.checked_pow(k)) {
                Some(divisor) if digits % divisor == 0 => digits / divisor,
                _ => return Err(MoneyParseError::TooPrecise(s.to_string())),
            }
        };

        Ok(Self(if negative { -cents } else { cents }))
    }

    /// Format with a currency symbol
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        if self.is_negative() {
            format!(
                "-{}{}.{:02}",
                symbol,
                self.dollars().abs(),
                self.cents_part()
            )
        } else {
            format!("{}{}.{:02}", symbol, self.dollars(), self.cents_part())
        }
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_with_symbol("$"))
    }
}

/// Error type for money parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoneyParseError {
    InvalidFormat(String),
    Overflow(String),
    /// More precision than whole cents
    TooPrecise(String),
}

impl fmt::Display for MoneyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoneyParseError::InvalidFormat(s) => write!(f, "Invalid money format: {}", s),
            MoneyParseError::Overflow(s) => write!(f, "Amount too large: {}", s),
            MoneyParseError::TooPrecise(s) => {
                write!(f, "Amount has more than two decimal places: {}", s)
            }
        }
    }
}

impl std::error::Error for MoneyParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let m = Money::from_cents(1050);
        assert_eq!(m.cents(), 1050);
        assert_eq!(m.dollars(), 10);
        assert_eq!(m.cents_part(), 50);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_cents(1050)), "$10.50");
        assert_eq!(format!("{}", Money::from_cents(0)), "$0.00");
        assert_eq!(format!("{}", Money::from_cents(-1050)), "-$10.50");
        assert_eq!(format!("{}", Money::from_cents(5)), "$0.05");
    }

    #[test]
    fn test_format_with_symbol() {
        let m = Money::from_dollars_cents(1100, 0);
        assert_eq!(m.format_with_symbol("€"), "€1100.00");
        assert_eq!(m.format_with_symbol(""), "1100.00");
    }

    #[test]
    fn test_parse() {
        assert_eq!(Money::parse("10.50").unwrap().cents(), 1050);
        assert_eq!(Money::parse("$10.50").unwrap().cents(), 1050);
        assert_eq!(Money::parse("-10.50").unwrap().cents(), -1050);
        assert_eq!(Money::parse("10").unwrap().cents(), 1000);
        assert_eq!(Money::parse("10.5").unwrap().cents(), 1050);
        assert_eq!(Money::parse("10.").unwrap().cents(), 1000);
        assert_eq!(Money::parse(".5").unwrap().cents(), 50);
        assert_eq!(Money::parse("10.500").unwrap().cents(), 1050);
        assert_eq!(Money::parse(" 1500 ").unwrap().cents(), 150_000);
        assert_eq!(Money::parse("+5").unwrap().cents(), 500);
        assert_eq!(Money::parse("+$5").unwrap().cents(), 500);
        assert_eq!(Money::parse("-0").unwrap().cents(), 0);
    }

    #[test]
    fn test_parse_exponent() {
        assert_eq!(Money::parse("1e3").unwrap().cents(), 100_000);
        assert_eq!(Money::parse("1.25E2").unwrap().cents(), 12_500);
        assert_eq!(Money::parse("2.5e-1").unwrap().cents(), 25);
        assert_eq!(Money::parse("15e+2").unwrap().cents(), 150_000);
        assert_eq!(Money::parse("-1e1").unwrap().cents(), -1000);
        assert_eq!(Money::parse("0e-999").unwrap().cents(), 0);
    }

    #[test]
    fn test_parse_rejects_sub_cent_amounts() {
        for input in ["0.009", "10.999", "0.059", "1e-3", "1.2345e1", "7e-40"] {
            assert_eq!(
                Money::parse(input),
                Err(MoneyParseError::TooPrecise(input.to_string())),
                "{input:?}"
            );
        }
    }

    #[test]
    fn test_parse_rejects_garbage() {
        for input in [
            "", "abc", "12abc", "1.2.3", "1.-5", "-", ".", "$", "--5", "++5", "+-5", "1e", "e5",
            "1e+", ".e1", "1e1.5", "inf",
        ] {
            assert!(
                matches!(Money::parse(input), Err(MoneyParseError::InvalidFormat(_))),
                "expected {:?} to be rejected",
                input
            );
        }
    }

    #[test]
    fn test_parse_overflow() {
        assert!(matches!(
            Money::parse("99999999999999999999"),
            Err(MoneyParseError::Overflow(_))
        ));
        assert!(matches!(
            Money::parse("92233720368547759"),
            Err(MoneyParseError::Overflow(_))
        ));
        assert!(matches!(
            Money::parse("1e30"),
            Err(MoneyParseError::Overflow(_))
        ));
    }

    #[test]
    fn test_checked_arithmetic() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(500);

        assert_eq!(a.checked_add(b), Some(Money::from_cents(1500)));
        assert_eq!(b.checked_sub(a), Some(Money::from_cents(-500)));
        assert_eq!(Money::from_cents(i64::MAX).checked_add(b), None);
        assert_eq!(Money::from_cents(i64::MIN).checked_sub(b), None);
    }

    #[test]
    fn test_is_checks() {
        assert!(Money::zero().is_zero());
        assert!(Money::from_cents(100).is_positive());
        assert!(Money::from_cents(-100).is_negative());
        assert_eq!(Money::default(), Money::zero());
    }
}
