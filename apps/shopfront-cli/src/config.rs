//! # Configuration
//!
//! Settings for the console driver: who is shopping, what is in stock and
//! which discount rule applies.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`SHOPFRONT_*`)
//! 2. Config file (`--config shopfront.toml`)
//! 3. Defaults (this file)
//!
//! ## Configuration File Format
//! ```toml
//! currency_symbol = "€"
//!
//! [customer]
//! name = "Sina"
//! email = "sina@g.com"
//! shipping_address = "Altstadt 11, 4600 Wels"
//!
//! [discount]
//! threshold_cents = 10000
//! rate_bps = 1000
//!
//! [[products]]
//! name = "Water"
//! price_cents = 100
//! quantity = 20
//! category = "Drinks"
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use shopfront_core::{CoreError, Inventory, Money, Product, ThresholdDiscount, User};
use thiserror::Error;
use tracing::{debug, info};

/// Configuration loading errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid product '{name}' in config: {source}")]
    InvalidProduct {
        name: String,
        #[source]
        source: CoreError,
    },

    #[error("Invalid discount in config: {0}")]
    InvalidDiscount(#[source] CoreError),
}

// =============================================================================
// Sections
// =============================================================================

/// The shopper placing orders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CustomerConfig {
    pub name: String,
    pub email: String,
    pub shipping_address: String,
}

impl Default for CustomerConfig {
    fn default() -> Self {
        CustomerConfig {
            name: "Sina".to_string(),
            email: "sina@g.com".to_string(),
            shipping_address: "Altstadt 11, 4600 Wels".to_string(),
        }
    }
}

/// One seeded inventory entry. Prices are whole cents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductConfig {
    pub name: String,
    pub price_cents: i64,
    pub quantity: i64,
    #[serde(default)]
    pub category: String,
}

impl ProductConfig {
    fn new(name: &str, price_cents: i64, quantity: i64, category: &str) -> Self {
        ProductConfig {
            name: name.to_string(),
            price_cents,
            quantity,
            category: category.to_string(),
        }
    }
}

/// Threshold discount settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiscountConfig {
    pub threshold_cents: i64,
    pub rate_bps: u32,
}

impl Default for DiscountConfig {
    fn default() -> Self {
        let policy = ThresholdDiscount::default();
        DiscountConfig {
            threshold_cents: policy.threshold().cents(),
            rate_bps: policy.rate_bps(),
        }
    }
}

// =============================================================================
// App Config
// =============================================================================

/// Console driver configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Symbol used when printing money.
    pub currency_symbol: String,

    pub customer: CustomerConfig,

    pub discount: DiscountConfig,

    /// Inventory to seed at startup.
    pub products: Vec<ProductConfig>,
}

impl Default for AppConfig {
    /// Returns the demo store: Water, Ice and Chocolate, 10% off at $100.
    fn default() -> Self {
        AppConfig {
            currency_symbol: "$".to_string(),
            customer: CustomerConfig::default(),
            discount: DiscountConfig::default(),
            products: vec![
                ProductConfig::new("Water", 100, 20, "Drinks"),
                ProductConfig::new("Ice", 250, 5, "Frozen"),
                ProductConfig::new("Chocolate", 375, 40, "Snacks"),
            ],
        }
    }
}

impl AppConfig {
    /// Loads configuration from an optional TOML file, then applies
    /// `SHOPFRONT_*` environment overrides.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => {
                info!(?path, "Loading config from file");
                let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
                    path: path.display().to_string(),
                    source,
                })?;
                Self::from_toml(&contents)?
            }
            None => {
                debug!("No config file given, using defaults");
                Self::default()
            }
        };

        config.apply_overrides(|key| std::env::var(key).ok());
        Ok(config)
    }

    /// Parses a TOML document; missing sections fall back to defaults.
    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(contents)?)
    }

    /// Applies overrides from a key lookup (the process environment in
    /// production).
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(name) = lookup("SHOPFRONT_CUSTOMER_NAME") {
            debug!(name = %name, "Overriding customer name from environment");
            self.customer.name = name;
        }

        if let Some(email) = lookup("SHOPFRONT_CUSTOMER_EMAIL") {
            debug!(email = %email, "Overriding customer email from environment");
            self.customer.email = email;
        }

        if let Some(address) = lookup("SHOPFRONT_SHIPPING_ADDRESS") {
            self.customer.shipping_address = address;
        }

        if let Some(symbol) = lookup("SHOPFRONT_CURRENCY_SYMBOL") {
            self.currency_symbol = symbol;
        }
    }

    /// Builds the seeded inventory, rejecting invalid product entries.
    pub fn build_inventory(&self) -> Result<Inventory, ConfigError> {
        let mut inventory = Inventory::new();
        for p in &self.products {
            let product = Product::new(
                p.name.clone(),
                Money::from_cents(p.price_cents),
                p.quantity,
                p.category.clone(),
            )
            .map_err(|source| ConfigError::InvalidProduct {
                name: p.name.clone(),
                source,
            })?;
            inventory.add_product(product);
        }
        Ok(inventory)
    }

    pub fn discount_policy(&self) -> Result<ThresholdDiscount, ConfigError> {
        ThresholdDiscount::new(
            Money::from_cents(self.discount.threshold_cents),
            self.discount.rate_bps,
        )
        .map_err(ConfigError::InvalidDiscount)
    }

    /// Creates the configured shopper with an empty cart.
    pub fn user(&self) -> User {
        User::new(
            self.customer.name.clone(),
            self.customer.email.clone(),
            self.customer.shipping_address.clone(),
        )
    }

    /// Formats money with the configured symbol.
    ///
    /// ## Example
    /// ```rust
    /// use shopfront_cli::config::AppConfig;
    /// use shopfront_core::Money;
    ///
    /// let config = AppConfig::default();
    /// assert_eq!(config.format_money(Money::from_cents(11025)), "$110.25");
    /// ```
    pub fn format_money(&self, amount: Money) -> String {
        amount.format_with_symbol(&self.currency_symbol)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_default_inventory() {
        let inventory = AppConfig::default().build_inventory().unwrap();
        assert_eq!(inventory.len(), 3);
        assert_eq!(inventory.get("Chocolate").unwrap().price().cents(), 375);
        assert_eq!(inventory.get("Ice").unwrap().quantity(), 5);
    }

    #[test]
    fn test_from_toml_partial() {
        let config = AppConfig::from_toml(
            r#"
            currency_symbol = "€"

            [customer]
            name = "Alex"

            [[products]]
            name = "Tea"
            price_cents = 450
            quantity = 12
            "#,
        )
        .unwrap();

        assert_eq!(config.currency_symbol, "€");
        assert_eq!(config.customer.name, "Alex");
        assert_eq!(config.customer.email, "sina@g.com");
        assert_eq!(config.products.len(), 1);
        assert_eq!(config.products[0].category, "");
        assert_eq!(config.discount, DiscountConfig::default());
    }

    #[test]
    fn test_from_toml_rejects_garbage() {
        assert!(matches!(
            AppConfig::from_toml("products = 7"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_invalid_product_rejected() {
        let mut config = AppConfig::default();
        config.products.push(ProductConfig::new("Broken", -5, 1, "X"));

        assert!(matches!(
            config.build_inventory(),
            Err(ConfigError::InvalidProduct { ref name, .. }) if name == "Broken"
        ));
    }

    #[test]
    fn test_invalid_discount_rejected() {
        let mut config = AppConfig::default();
        config.discount.rate_bps = 20_000;
        assert!(config.discount_policy().is_err());
    }

    #[test]
    fn test_overrides() {
        let env: HashMap<&str, &str> = [
            ("SHOPFRONT_CUSTOMER_NAME", "Robin"),
            ("SHOPFRONT_CURRENCY_SYMBOL", "€"),
        ]
        .into_iter()
        .collect();

        let mut config = AppConfig::default();
        config.apply_overrides(|key| env.get(key).map(|v| v.to_string()));

        assert_eq!(config.customer.name, "Robin");
        assert_eq!(config.customer.email, "sina@g.com");
        assert_eq!(config.currency_symbol, "€");
    }

    #[test]
    fn test_missing_file() {
        let err = AppConfig::load(Some(Path::new("/nonexistent/shopfront.toml"))).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn test_format_money() {
        let mut config = AppConfig::default();
        assert_eq!(config.format_money(Money::from_cents(1)), "$0.01");
        assert_eq!(config.format_money(Money::from_cents(-550)), "-$5.50");

        config.currency_symbol = "€".to_string();
        assert_eq!(config.format_money(Money::from_cents(12250)), "€122.50");

        config.currency_symbol = "$".to_string();
        for cents in [0, 7, 11025, -550, i64::MIN, i64::MAX] {
            let amount = Money::from_cents(cents);
            assert_eq!(config.format_money(amount), amount.to_string());
        }
    }
}
