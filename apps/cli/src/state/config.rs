//! # Configuration State
//!
//! Settings loaded once at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Command line flags (`--data-dir`)
//! 2. Environment variables (`ANDAZ_*`)
//! 3. Defaults (this file)
//!
//! The sales tax rate is deliberately absent: it is fixed in andaz-core.

use std::path::PathBuf;

use andaz_core::{Money, CART_STORAGE_KEY};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigState {
    /// Store name shown in the cart header.
    pub store_name: String,

    /// Storage key holding the serialized cart.
    pub cart_key: String,

    /// Directory for the cart file. `None` uses the platform data dir.
    pub data_dir: Option<PathBuf>,

    /// Currency symbol (for display)
    pub currency_symbol: String,

    /// Number of decimal places for currency
    pub currency_decimals: u8,
}

impl Default for ConfigState {
    fn default() -> Self {
        ConfigState {
            store_name: "AndazLibas".to_string(),
            cart_key: CART_STORAGE_KEY.to_string(),
            data_dir: None,
            currency_symbol: "$".to_string(),
            currency_decimals: 2,
        }
    }
}

impl ConfigState {
    /// Creates a ConfigState from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `ANDAZ_STORE_NAME`: Override store name
    /// - `ANDAZ_CART_KEY`: Override the storage key
    /// - `ANDAZ_DATA_DIR`: Directory for the cart file
    /// - `ANDAZ_CURRENCY_SYMBOL`: Override currency symbol
    /// - `ANDAZ_CURRENCY_DECIMALS`: Decimals shown for amounts (0-2)
    pub fn from_env() -> Self {
        Self::from_vars(|name| std::env::var(name).ok())
    }

    /// Same as [`ConfigState::from_env`], reading variables through `var`.
    pub fn from_vars<F>(var: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = ConfigState::default();

        if let Some(store_name) = var("ANDAZ_STORE_NAME") {
            config.store_name = store_name;
        }

        if let Some(cart_key) = var("ANDAZ_CART_KEY").filter(|k| !k.trim().is_empty()) {
            config.cart_key = cart_key;
        }

        if let Some(data_dir) = var("ANDAZ_DATA_DIR").filter(|d| !d.is_empty()) {
            config.data_dir = Some(PathBuf::from(data_dir));
        }

        if let Some(symbol) = var("ANDAZ_CURRENCY_SYMBOL") {
            config.currency_symbol = symbol;
        }

        // Unparseable values keep the default; anything above 2 shows cents
        if let Some(decimals) =
            var("ANDAZ_CURRENCY_DECIMALS").and_then(|d| d.trim().parse::<u8>().ok())
        {
            config.currency_decimals = decimals.min(2);
        }

        config
    }

    /// Directory the cart file lives in.
    ///
    /// ## Platform-Specific Defaults
    /// - **macOS**: `~/Library/Application Support/com.andazlibas.cart`
    /// - **Windows**: `%APPDATA%\andazlibas\cart\data`
    /// - **Linux**: `~/.local/share/cart`
    pub fn resolve_data_dir(&self) -> Option<PathBuf> {
        self.data_dir.clone().or_else(|| {
            ProjectDirs::from("com", "andazlibas", "cart").map(|dirs| dirs.data_dir().to_path_buf())
        })
    }

    /// Formats an amount with the configured currency symbol.
    ///
    /// ## Example
    /// ```rust
    /// use andaz_cli::state::ConfigState;
    /// use andaz_core::Money;
    ///
    /// let config = ConfigState::default();
    /// assert_eq!(config.format_currency(Money::from_cents(1234)), "$12.34");
    /// ```
    pub fn format_currency(&self, amount: Money) -> String {
        let cents = amount.cents();
        let decimals = u32::from(self.currency_decimals.min(2));
        let divisor = 10_i64.pow(decimals);
        // Money is always in hundredths; drop digits we don't display
        let scaled = cents / 10_i64.pow(2 - decimals);
        let whole = scaled / divisor;
        let frac = (scaled % divisor).abs();

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

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_format_currency_positive() {
        let config = ConfigState::default();
        assert_eq!(config.format_currency(Money::from_cents(1234)), "$12.34");
        assert_eq!(config.format_currency(Money::from_cents(100)), "$1.00");
        assert_eq!(config.format_currency(Money::from_cents(1)), "$0.01");
        assert_eq!(config.format_currency(Money::zero()), "$0.00");
    }

    #[test]
    fn test_format_currency_negative() {
        let config = ConfigState::default();
        assert_eq!(config.format_currency(Money::from_cents(-1234)), "-$12.34");
    }

    #[test]
    fn test_format_currency_whole_units() {
        let config = ConfigState {
            currency_symbol: "Rs ".to_string(),
            currency_decimals: 0,
            ..ConfigState::default()
        };
        assert_eq!(config.format_currency(Money::from_cents(123456)), "Rs 1234");
    }

    #[test]
    fn test_from_vars_overrides() {
        let vars: HashMap<&str, &str> = [
            ("ANDAZ_STORE_NAME", "Andaz Test"),
            ("ANDAZ_CART_KEY", "cart_v2"),
            ("ANDAZ_DATA_DIR", "/tmp/andaz"),
            ("ANDAZ_CURRENCY_SYMBOL", "€"),
            ("ANDAZ_CURRENCY_DECIMALS", "0"),
        ]
        .into_iter()
        .collect();

        let config = ConfigState::from_vars(|name| vars.get(name).map(|v| v.to_string()));

        assert_eq!(config.store_name, "Andaz Test");
        assert_eq!(config.cart_key, "cart_v2");
        assert_eq!(config.data_dir, Some(PathBuf::from("/tmp/andaz")));
        assert_eq!(config.currency_symbol, "€");
        assert_eq!(config.currency_decimals, 0);
        assert_eq!(config.format_currency(Money::from_cents(2499)), "€24");
    }

    #[test]
    fn test_from_vars_currency_decimals_bounds() {
        let decimals = |value: &'static str| {
            ConfigState::from_vars(move |name| {
                (name == "ANDAZ_CURRENCY_DECIMALS").then(|| value.to_string())
            })
            .currency_decimals
        };

        assert_eq!(decimals("1"), 1);
        assert_eq!(decimals("5"), 2);
        assert_eq!(decimals("two"), 2);
        assert_eq!(decimals("-1"), 2);
    }

    #[test]
    fn test_from_vars_ignores_blank_key() {
        let config = ConfigState::from_vars(|name| {
            (name == "ANDAZ_CART_KEY").then(|| "  ".to_string())
        });
        assert_eq!(config.cart_key, "cart");
    }

    #[test]
    fn test_explicit_data_dir_wins() {
        let config = ConfigState {
            data_dir: Some(PathBuf::from("/srv/andaz")),
            ..ConfigState::default()
        };
        assert_eq!(config.resolve_data_dir(), Some(PathBuf::from("/srv/andaz")));
    }
}
