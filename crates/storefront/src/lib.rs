//! Shopfront storefront library.
//!
//! Catalog browsing, the shopping cart and the order summary shown at
//! checkout. Everything here is in-memory and synchronous; a
//! [`ShopSession`] ties one shopper's cart to a shared catalog.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod catalog;
pub mod collection;
pub mod config;
pub mod error;
pub mod promo;
pub mod selection;
pub mod session;

pub use cart::{CartEvent, CartLine, CartStore, LineItem, OrderSummary, SavedItems, SummaryDisplay};
pub use catalog::{Catalog, CatalogError};
pub use collection::{CollectionFilter, SortOrder, category_count, sub_category_count};
pub use config::{ConfigError, PricingConfig, StorefrontConfig};
pub use error::StorefrontError;
pub use promo::{PromoCode, PromoError};
pub use selection::{ProductSelection, SelectionError};
pub use session::ShopSession;
