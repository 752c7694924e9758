//! # Shell Configuration
//!
//! Settings loaded once at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`KIOSK_*`)
//! 2. Defaults (this file)
//!
//! Read-only after startup, so the session holds it by value.

use serde::{Deserialize, Serialize};

use kiosk_core::CurrencyFormat;

use crate::error::{ShellError, ShellResult};

/// Default `tracing` filter when neither `RUST_LOG` nor `KIOSK_LOG` is set.
pub const DEFAULT_LOG_FILTER: &str = "info,kiosk_core=debug,kiosk_shell=debug";

/// Shell configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShellConfig {
    /// Printed before each input line.
    pub prompt: String,

    /// How totals are displayed.
    pub currency: CurrencyFormat,

    /// `tracing` filter directive used when `RUST_LOG` is unset.
    pub log_filter: String,
}

impl Default for ShellConfig {
    /// ## Default Values
    /// - Prompt: `"> "`
    /// - Currency: two fraction digits, grouping, no symbol
    /// - Log filter: [`DEFAULT_LOG_FILTER`]
    fn default() -> Self {
        ShellConfig {
            prompt: "> ".to_string(),
            currency: CurrencyFormat::default(),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl ShellConfig {
    /// Creates a ShellConfig from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `KIOSK_PROMPT`: Override the prompt
    /// - `KIOSK_CURRENCY_SYMBOL`: Prefix for totals (e.g. `$`)
    /// - `KIOSK_FRACTION_DIGITS`: Digits after the point, `0`..=`2`
    /// - `KIOSK_LOG`: Default log filter
    pub fn from_env() -> ShellResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with a custom variable source.
    pub fn from_lookup<F>(lookup: F) -> ShellResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = ShellConfig::default();

        if let Some(prompt) = lookup("KIOSK_PROMPT") {
            config.prompt = prompt;
        }

        if let Some(digits) = lookup("KIOSK_FRACTION_DIGITS") {
            let digits: u8 = digits.trim().parse().map_err(|_| {
                ShellError::Config(format!(
                    "KIOSK_FRACTION_DIGITS must be 0, 1 or 2, got '{}'",
                    digits
                ))
            })?;
            config.currency = CurrencyFormat::with_fraction_digits(digits, digits)
                .map_err(|e| ShellError::Config(format!("KIOSK_FRACTION_DIGITS: {}", e)))?;
        }

        if let Some(symbol) = lookup("KIOSK_CURRENCY_SYMBOL") {
            config.currency.symbol = symbol;
        }

        if let Some(filter) = lookup("KIOSK_LOG") {
            config.log_filter = filter;
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_without_env() {
        let config = ShellConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config, ShellConfig::default());
        assert_eq!(config.prompt, "> ");
        assert_eq!(config.currency.maximum_fraction_digits, 2);
    }

    #[test]
    fn test_env_overrides() {
        let config = ShellConfig::from_lookup(lookup_from(&[
            ("KIOSK_PROMPT", "cart$ "),
            ("KIOSK_CURRENCY_SYMBOL", "$"),
            ("KIOSK_FRACTION_DIGITS", "1"),
            ("KIOSK_LOG", "warn"),
        ]))
        .unwrap();

        assert_eq!(config.prompt, "cart$ ");
        assert_eq!(config.currency.symbol, "$");
        assert_eq!(config.currency.minimum_fraction_digits, 1);
        assert_eq!(config.currency.maximum_fraction_digits, 1);
        assert_eq!(config.log_filter, "warn");
    }

    #[test]
    fn test_bad_fraction_digits() {
        let err = ShellConfig::from_lookup(lookup_from(&[("KIOSK_FRACTION_DIGITS", "two")]))
            .unwrap_err();
        assert!(matches!(err, ShellError::Config(_)));

        let err = ShellConfig::from_lookup(lookup_from(&[("KIOSK_FRACTION_DIGITS", "5")]))
            .unwrap_err();
        assert!(matches!(err, ShellError::Config(_)));
    }

    #[test]
    fn test_serializes_camel_case() {
        let json = serde_json::to_value(ShellConfig::default()).unwrap();
        assert_eq!(json["logFilter"], DEFAULT_LOG_FILTER);
        assert_eq!(json["currency"]["maximumFractionDigits"], 2);
    }
}
