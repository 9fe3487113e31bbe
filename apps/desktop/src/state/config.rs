//! # Configuration State
//!
//! Stores application configuration loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`PIZZA_*`)
//! 2. Defaults (this file)
//!
//! Configuration is read-only after initialization.

use serde::{Deserialize, Serialize};

use pizza_core::Money;

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigState {
    /// Window title, also used as the eframe app name
    pub window_title: String,

    /// Initial inner window size in points
    pub window_size: [f32; 2],

    /// Currency symbol (for display)
    pub currency_symbol: String,

    /// Number of decimal places for currency
    pub currency_decimals: u8,

    /// Tracing filter used when `RUST_LOG` is unset
    pub log_filter: String,
}

impl Default for ConfigState {
    /// ## Default Values
    /// - Title: "Pizza Order Form"
    /// - Window: 500 × 400
    /// - Currency: $ with 2 decimals
    /// - Logging: info, debug for the pizza crates
    fn default() -> Self {
        ConfigState {
            window_title: "Pizza Order Form".to_string(),
            window_size: [500.0, 400.0],
            currency_symbol: "$".to_string(),
            currency_decimals: 2,
            log_filter: "info,pizza=debug".to_string(),
        }
    }
}

impl ConfigState {
    /// Creates a new ConfigState from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `PIZZA_WINDOW_TITLE`: Override window title
    /// - `PIZZA_CURRENCY_SYMBOL`: Override currency symbol
    /// - `PIZZA_LOG`: Tracing filter when `RUST_LOG` is unset
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with an injectable lookup.
    /// Blank values are ignored.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = ConfigState::default();
        let non_blank = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(title) = non_blank("PIZZA_WINDOW_TITLE") {
            config.window_title = title;
        }

        if let Some(symbol) = non_blank("PIZZA_CURRENCY_SYMBOL") {
            config.currency_symbol = symbol.trim().to_string();
        }

        if let Some(filter) = non_blank("PIZZA_LOG") {
            config.log_filter = filter;
        }

        config
    }

    /// Formats an amount as a fixed-decimal currency string.
    ///
    /// ## Example
    /// ```rust
    /// use pizza_core::Money;
    /// use pizza_desktop_lib::state::ConfigState;
    ///
    /// let config = ConfigState::default();
    /// assert_eq!(config.format_currency(Money::from_cents(1498)), "$14.98");
    /// ```
    pub fn format_currency(&self, amount: Money) -> String {
        let cents = amount.cents();
        // Money is always in cents; fewer decimals drop the trailing digits.
        let decimals = self.currency_decimals.min(2) as u32;
        let divisor = 10_i64.pow(2 - decimals);
        let scaled = cents / divisor;
        let unit = 10_i64.pow(decimals);
        let whole = scaled / unit;
        let frac = (scaled % unit).abs();

        format!(
            "{}{}{}",
            if cents < 0 { "-" } else { "" },
            self.currency_symbol,
            if decimals > 0 {
                format!("{}.{:0width$}", whole.abs(), frac, width = decimals as usize)
            } else {
                whole.abs().to_string()
            }
        )
    }
}
