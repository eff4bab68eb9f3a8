//! Unified error handling.
//!
//! Provides a `StorefrontError` type wrapping every fallible concern of the
//! storefront so callers can propagate any of them with `?`. Cart mutations
//! themselves never fail and do not appear here.

use thiserror::Error;

use crate::catalog::CatalogError;
use crate::config::ConfigError;
use crate::promo::PromoError;
use crate::selection::SelectionError;

/// Application-level error type for the storefront.
#[derive(Debug, Error)]
pub enum StorefrontError {
    /// Configuration could not be loaded.
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// Catalog could not be built or loaded.
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// A product page selection was rejected.
    #[error("Selection error: {0}")]
    Selection(#[from] SelectionError),

    /// A promo code was rejected.
    #[error("Promo error: {0}")]
    Promo(#[from] PromoError),

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),
}
