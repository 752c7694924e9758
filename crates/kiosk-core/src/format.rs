//! # Currency Display
//!
//! Turns a [`Money`] value into the string shown next to "Total:".
//!
//! ## Options
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  minimum_fraction_digits  at least this many digits after the point    │
//! │  maximum_fraction_digits  round to this many (0..=2)                   │
//! │  use_grouping             1234567.89 ──► 1,234,567.89                  │
//! │  symbol                   prefix, "" by default                        │
//! │                                                                         │
//! │  Default: 2 / 2 / grouping on / no symbol ──► "7.50"                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Locale-specific separators are not supported: the decimal point is `.`
//! and the group separator is `,`.

use serde::{Deserialize, Serialize};

use crate::money::Money;
use crate::validation::{validate_fraction_digits, ValidationResult};
use crate::MONEY_FRACTION_DIGITS;

/// Display options for money amounts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CurrencyFormat {
    pub minimum_fraction_digits: u8,
    pub maximum_fraction_digits: u8,
    pub use_grouping: bool,
    pub symbol: String,
}

impl Default for CurrencyFormat {
    fn default() -> Self {
        CurrencyFormat {
            minimum_fraction_digits: MONEY_FRACTION_DIGITS,
            maximum_fraction_digits: MONEY_FRACTION_DIGITS,
            use_grouping: true,
            symbol: String::new(),
        }
    }
}

impl CurrencyFormat {
    /// Default options with validated fraction digit bounds.
    ///
    /// ## Errors
    /// `OutOfRange` when `max > 2` or `min > max`.
    pub fn with_fraction_digits(min: u8, max: u8) -> ValidationResult<Self> {
        validate_fraction_digits(min, max)?;
        Ok(CurrencyFormat {
            minimum_fraction_digits: min,
            maximum_fraction_digits: max,
            ..CurrencyFormat::default()
        })
    }

    pub fn symbol(mut self, symbol: impl Into<String>) -> Self {
        self.symbol = symbol.into();
        self
    }

    pub fn grouping(mut self, use_grouping: bool) -> Self {
        self.use_grouping = use_grouping;
        self
    }

    /// Formats `money` with these options.
    ///
    /// Rounds half away from zero. Out-of-range digit counts (set through
    /// the public fields or deserialization) are clamped rather than
    /// rejected.
    ///
    /// ## Example
    /// ```rust
    /// use kiosk_core::{CurrencyFormat, Money};
    ///
    /// let fmt = CurrencyFormat::default();
    /// assert_eq!(fmt.format(Money::from_cents(750)), "7.50");
    /// assert_eq!(fmt.format(Money::from_cents(123456789)), "1,234,567.89");
    /// ```
    pub fn format(&self, money: Money) -> String {
        let max = self.maximum_fraction_digits.min(MONEY_FRACTION_DIGITS);
        let min = self.minimum_fraction_digits.min(max);

        let divisor = 10u64.pow(u32::from(MONEY_FRACTION_DIGITS - max));
        let rounded = (money.cents().unsigned_abs() + divisor / 2) / divisor;

        let unit = 10u64.pow(u32::from(max));
        let whole = rounded / unit;
        let mut fraction = if max == 0 {
            String::new()
        } else {
            format!("{:0width$}", rounded % unit, width = usize::from(max))
        };
        while fraction.len() > usize::from(min) && fraction.ends_with('0') {
            fraction.pop();
        }

        let mut out = String::new();
        if money.is_negative() && rounded != 0 {
            out.push('-');
        }
        out.push_str(&self.symbol);
        if self.use_grouping {
            out.push_str(&group_thousands(whole));
        } else {
            out.push_str(&whole.to_string());
        }
        if !fraction.is_empty() {
            out.push('.');
            out.push_str(&fraction);
        }
        out
    }
}

/// `1234567` ──► `"1,234,567"`
fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cents(c: i64) -> Money {
        Money::from_cents(c)
    }

    #[test]
    fn test_default_two_digits() {
        let fmt = CurrencyFormat::default();
        assert_eq!(fmt.format(cents(750)), "7.50");
        assert_eq!(fmt.format(cents(250)), "2.50");
        assert_eq!(fmt.format(cents(0)), "0.00");
        assert_eq!(fmt.format(cents(5)), "0.05");
    }

    #[test]
    fn test_grouping() {
        let fmt = CurrencyFormat::default();
        assert_eq!(fmt.format(cents(123_456_789)), "1,234,567.89");
        assert_eq!(fmt.format(cents(100_000)), "1,000.00");
        assert_eq!(fmt.format(cents(99_999)), "999.99");

        let plain = CurrencyFormat::default().grouping(false);
        assert_eq!(plain.format(cents(123_456_789)), "1234567.89");
    }

    #[test]
    fn test_trailing_zeros_trimmed_to_minimum() {
        let fmt = CurrencyFormat::with_fraction_digits(0, 2).unwrap();
        assert_eq!(fmt.format(cents(500)), "5");
        assert_eq!(fmt.format(cents(250)), "2.5");
        assert_eq!(fmt.format(cents(255)), "2.55");
    }

    #[test]
    fn test_rounding_half_away_from_zero() {
        let one = CurrencyFormat::with_fraction_digits(1, 1).unwrap();
        assert_eq!(one.format(cents(250)), "2.5");
        assert_eq!(one.format(cents(255)), "2.6");
        assert_eq!(one.format(cents(254)), "2.5");
        assert_eq!(one.format(cents(-255)), "-2.6");

        let none = CurrencyFormat::with_fraction_digits(0, 0).unwrap();
        assert_eq!(none.format(cents(250)), "3");
        assert_eq!(none.format(cents(249)), "2");
        assert_eq!(none.format(cents(-49)), "0");
    }

    #[test]
    fn test_negative_and_symbol() {
        let fmt = CurrencyFormat::default().symbol("$");
        assert_eq!(fmt.format(cents(-550)), "-$5.50");
        assert_eq!(fmt.format(cents(750)), "$7.50");
    }

    #[test]
    fn test_out_of_range_digits() {
        assert!(CurrencyFormat::with_fraction_digits(0, 3).is_err());
        assert!(CurrencyFormat::with_fraction_digits(2, 1).is_err());

        let wide = CurrencyFormat {
            minimum_fraction_digits: 4,
            maximum_fraction_digits: 6,
            ..CurrencyFormat::default()
        };
        assert_eq!(wide.format(cents(750)), "7.50");
    }

    #[test]
    fn test_deserialize_with_defaults() {
        let fmt: CurrencyFormat = serde_json::from_str(r#"{"symbol":"€"}"#).unwrap();
        assert_eq!(fmt.maximum_fraction_digits, 2);
        assert_eq!(fmt.format(cents(1999)), "€19.99");
    }
}
