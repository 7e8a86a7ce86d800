//! # Configuration State
//!
//! Counter configuration loaded once at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`HEARTH_*`)
//! 2. Defaults (this file)
//!
//! ## Thread Safety
//! Configuration is read-only after loading, so no mutex is needed.

use std::env;
use std::path::PathBuf;

use hearth_core::{Catalog, Money, DEFAULT_EXIT_CHOICE, DEFAULT_LEDGER_CAPACITY, MAX_LEDGER_CAPACITY};
use thiserror::Error;

/// Counter configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CounterConfig {
    /// Shop name (welcome banner and farewell)
    pub shop_name: String,

    /// Currency code printed in front of every amount
    pub currency_code: String,

    /// Maximum number of line items per session
    pub ledger_capacity: usize,

    /// Menu number that ends ordering
    pub exit_choice: u32,

    /// Login username
    pub username: String,

    /// Login password
    pub password: String,

    /// Optional JSON catalog replacing the built-in menu
    pub catalog_path: Option<PathBuf>,
}

impl Default for CounterConfig {
    /// ## Default Values
    /// - Shop: "Pizza Palace"
    /// - Currency: INR
    /// - Capacity: 50 lines
    /// - Exit choice: 6
    /// - Login: pizza / pizza
    fn default() -> Self {
        CounterConfig {
            shop_name: "Pizza Palace".to_string(),
            currency_code: "INR".to_string(),
            ledger_capacity: DEFAULT_LEDGER_CAPACITY,
            exit_choice: DEFAULT_EXIT_CHOICE,
            username: "pizza".to_string(),
            password: "pizza".to_string(),
            catalog_path: None,
        }
    }
}

impl CounterConfig {
    /// Loads configuration from the process environment.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Loads configuration from an arbitrary key lookup.
    ///
    /// ## Environment Variables
    /// - `HEARTH_SHOP_NAME`: shop name
    /// - `HEARTH_CURRENCY`: currency code
    /// - `HEARTH_LEDGER_CAPACITY`: line item limit (1..=10000)
    /// - `HEARTH_EXIT_CHOICE`: exit menu number (>= 1)
    /// - `HEARTH_USERNAME` / `HEARTH_PASSWORD`: login credentials
    /// - `HEARTH_CATALOG_PATH`: JSON catalog file
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = CounterConfig::default();

        let config = CounterConfig {
            shop_name: lookup("HEARTH_SHOP_NAME").unwrap_or(defaults.shop_name),

            currency_code: lookup("HEARTH_CURRENCY").unwrap_or(defaults.currency_code),

            ledger_capacity: lookup("HEARTH_LEDGER_CAPACITY")
                .unwrap_or_else(|| defaults.ledger_capacity.to_string())
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidValue("HEARTH_LEDGER_CAPACITY".to_string()))?,

            exit_choice: lookup("HEARTH_EXIT_CHOICE")
                .unwrap_or_else(|| defaults.exit_choice.to_string())
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidValue("HEARTH_EXIT_CHOICE".to_string()))?,

            username: lookup("HEARTH_USERNAME").unwrap_or(defaults.username),

            password: lookup("HEARTH_PASSWORD").unwrap_or(defaults.password),

            catalog_path: lookup("HEARTH_CATALOG_PATH")
                .filter(|path| !path.trim().is_empty())
                .map(PathBuf::from),
        };

        if !(1..=MAX_LEDGER_CAPACITY).contains(&config.ledger_capacity) {
            return Err(ConfigError::InvalidValue("HEARTH_LEDGER_CAPACITY".to_string()));
        }
        if config.exit_choice == 0 {
            return Err(ConfigError::InvalidValue("HEARTH_EXIT_CHOICE".to_string()));
        }

        Ok(config)
    }

    /// Ensures the exit choice does not shadow a product number.
    pub fn check_exit_choice(&self, catalog: &Catalog) -> Result<(), ConfigError> {
        let product_count = catalog.product_count();

        if (self.exit_choice as usize) <= product_count {
            return Err(ConfigError::ExitChoiceCollides {
                exit_choice: self.exit_choice,
                product_count,
            });
        }

        Ok(())
    }

    /// Formats an amount with the configured currency code.
    ///
    /// ## Example
    /// ```rust,ignore
    /// let config = CounterConfig::default();
    /// assert_eq!(config.format_amount(Money::from_cents(60_000)), "INR 600.00");
    /// ```
    pub fn format_amount(&self, amount: Money) -> String {
        format!("{} {}", self.currency_code, amount)
    }
}

/// Configuration error types.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),

    #[error("Exit choice {exit_choice} collides with product numbers 1..={product_count}")]
    ExitChoiceCollides {
        exit_choice: u32,
        product_count: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_nothing_set() {
        let config = CounterConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config, CounterConfig::default());
        assert_eq!(config.ledger_capacity, 50);
        assert_eq!(config.exit_choice, 6);
    }

    #[test]
    fn test_overrides_applied() {
        let config = CounterConfig::from_lookup(lookup_from(&[
            ("HEARTH_SHOP_NAME", "Slice Stop"),
            ("HEARTH_CURRENCY", "USD"),
            ("HEARTH_LEDGER_CAPACITY", " 3 "),
            ("HEARTH_EXIT_CHOICE", "9"),
            ("HEARTH_CATALOG_PATH", "/srv/menu.json"),
        ]))
        .unwrap();

        assert_eq!(config.shop_name, "Slice Stop");
        assert_eq!(config.currency_code, "USD");
        assert_eq!(config.ledger_capacity, 3);
        assert_eq!(config.exit_choice, 9);
        assert_eq!(config.catalog_path, Some(PathBuf::from("/srv/menu.json")));
    }

    #[test]
    fn test_invalid_capacity_rejected() {
        let err = CounterConfig::from_lookup(lookup_from(&[("HEARTH_LEDGER_CAPACITY", "lots")]))
            .unwrap_err();
        assert_eq!(err, ConfigError::InvalidValue("HEARTH_LEDGER_CAPACITY".to_string()));

        let err = CounterConfig::from_lookup(lookup_from(&[("HEARTH_LEDGER_CAPACITY", "0")]))
            .unwrap_err();
        assert_eq!(err, ConfigError::InvalidValue("HEARTH_LEDGER_CAPACITY".to_string()));

        let err = CounterConfig::from_lookup(lookup_from(&[("HEARTH_LEDGER_CAPACITY", "10001")]))
            .unwrap_err();
        assert_eq!(err, ConfigError::InvalidValue("HEARTH_LEDGER_CAPACITY".to_string()));

        let config =
            CounterConfig::from_lookup(lookup_from(&[("HEARTH_LEDGER_CAPACITY", "10000")])).unwrap();
        assert_eq!(config.ledger_capacity, MAX_LEDGER_CAPACITY);
    }

    #[test]
    fn test_zero_exit_choice_rejected() {
        let err = CounterConfig::from_lookup(lookup_from(&[("HEARTH_EXIT_CHOICE", "0")]))
            .unwrap_err();
        assert_eq!(err, ConfigError::InvalidValue("HEARTH_EXIT_CHOICE".to_string()));
    }

    #[test]
    fn test_blank_catalog_path_ignored() {
        let config =
            CounterConfig::from_lookup(lookup_from(&[("HEARTH_CATALOG_PATH", "  ")])).unwrap();
        assert_eq!(config.catalog_path, None);
    }

    #[test]
    fn test_exit_choice_collision() {
        let catalog = Catalog::reference();
        let mut config = CounterConfig::default();
        assert!(config.check_exit_choice(&catalog).is_ok());

        config.exit_choice = 4;
        assert_eq!(
            config.check_exit_choice(&catalog),
            Err(ConfigError::ExitChoiceCollides {
                exit_choice: 4,
                product_count: 4,
            })
        );

        config.exit_choice = 5;
        assert!(config.check_exit_choice(&catalog).is_ok());
    }

    #[test]
    fn test_format_amount() {
        let config = CounterConfig::default();
        assert_eq!(config.format_amount(Money::from_cents(60_000)), "INR 600.00");
        assert_eq!(config.format_amount(Money::zero()), "INR 0.00");
    }
}
