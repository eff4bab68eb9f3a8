//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All variables are optional:
//! - `SHOP_CURRENCY_SYMBOL` - Symbol prefixed to displayed amounts (default: `$`)
//! - `SHOP_SHIPPING_FEE` - Flat shipping fee (default: 10)
//! - `SHOP_FREE_SHIPPING_THRESHOLD` - Subtotals above this ship free (default: 100)
//! - `SHOP_TAX_RATE` - Tax rate applied to the subtotal, between 0 and 1 (default: 0.10)
//! - `SHOP_PROMO_CODE` - Accepted promo code, case-insensitive (default: `SAVE20`)
//! - `SHOP_CATALOG_PATH` - Catalog file (JSON or YAML) used when none is given explicitly

use std::path::PathBuf;
use std::str::FromStr;

use rust_decimal::Decimal;
use thiserror::Error;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

const DEFAULT_CURRENCY_SYMBOL: &str = "$";
const DEFAULT_PROMO_CODE: &str = "SAVE20";

/// Storefront configuration, fixed for the lifetime of a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorefrontConfig {
    /// Symbol prefixed to displayed amounts
    pub currency_symbol: String,
    /// Shipping and tax settings used by the order summary
    pub pricing: PricingConfig,
    /// Promo code accepted at checkout
    pub promo_code: String,
    /// Catalog file to load when none is given explicitly
    pub catalog_path: Option<PathBuf>,
}

/// Shipping and tax settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PricingConfig {
    /// Flat fee charged when the subtotal does not exceed the threshold
    pub shipping_fee: Decimal,
    /// Subtotals strictly above this ship free
    pub free_shipping_threshold: Decimal,
    /// Fraction of the subtotal charged as tax
    pub tax_rate: Decimal,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            shipping_fee: Decimal::TEN,
            free_shipping_threshold: Decimal::ONE_HUNDRED,
            tax_rate: Decimal::new(10, 2),
        }
    }
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            currency_symbol: DEFAULT_CURRENCY_SYMBOL.to_string(),
            pricing: PricingConfig::default(),
            promo_code: DEFAULT_PROMO_CODE.to_string(),
            catalog_path: None,
        }
    }
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an invalid value.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an invalid value.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let currency_symbol =
            get_or_default(&lookup, "SHOP_CURRENCY_SYMBOL", DEFAULT_CURRENCY_SYMBOL);
        let pricing = PricingConfig::from_lookup(&lookup)?;

        let promo_code = get_or_default(&lookup, "SHOP_PROMO_CODE", DEFAULT_PROMO_CODE)
            .trim()
            .to_string();
        if promo_code.is_empty() {
            return Err(ConfigError::InvalidEnvVar(
                "SHOP_PROMO_CODE".to_string(),
                "must not be empty".to_string(),
            ));
        }

        let catalog_path = lookup("SHOP_CATALOG_PATH")
            .filter(|path| !path.trim().is_empty())
            .map(PathBuf::from);

        Ok(Self {
            currency_symbol,
            pricing,
            promo_code,
            catalog_path,
        })
    }
}

impl PricingConfig {
    fn from_lookup<F>(lookup: &F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let shipping_fee = get_decimal(lookup, "SHOP_SHIPPING_FEE", defaults.shipping_fee)?;
        ensure_non_negative("SHOP_SHIPPING_FEE", shipping_fee)?;

        let free_shipping_threshold = get_decimal(
            lookup,
            "SHOP_FREE_SHIPPING_THRESHOLD",
            defaults.free_shipping_threshold,
        )?;
        ensure_non_negative("SHOP_FREE_SHIPPING_THRESHOLD", free_shipping_threshold)?;

        let tax_rate = get_decimal(lookup, "SHOP_TAX_RATE", defaults.tax_rate)?;
        if tax_rate < Decimal::ZERO || tax_rate > Decimal::ONE {
            return Err(ConfigError::InvalidEnvVar(
                "SHOP_TAX_RATE".to_string(),
                format!("must be between 0 and 1 (got {tax_rate})"),
            ));
        }

        Ok(Self {
            shipping_fee,
            free_shipping_threshold,
            tax_rate,
        })
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get a variable with a default value.
fn get_or_default<F>(lookup: &F, key: &str, default: &str) -> String
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key).unwrap_or_else(|| default.to_string())
}

/// Get a decimal variable with a default value.
fn get_decimal<F>(lookup: &F, key: &str, default: Decimal) -> Result<Decimal, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key).map_or(Ok(default), |value| {
        Decimal::from_str(value.trim())
            .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))
    })
}

fn ensure_non_negative(key: &str, value: Decimal) -> Result<(), ConfigError> {
    if value < Decimal::ZERO {
        return Err(ConfigError::InvalidEnvVar(
            key.to_string(),
            format!("must not be negative (got {value})"),
        ));
    }
    Ok(())
}
