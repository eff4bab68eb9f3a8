//! Cart quote command.
//!
//! # Usage
//!
//! ```bash
//! # Two tees in M, one sizeless cap
//! shop-cli cart quote --item aaaaa:M:2 --item aaaak:1
//! ```

use std::str::FromStr;

use shopfront_core::{Quantity, Size, format_amount};
use shopfront_storefront::{Catalog, ShopSession, StorefrontConfig};
use thiserror::Error;
use tracing::{info, warn};

/// Errors parsing an `ID[:SIZE]:QTY` item argument.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ItemSpecError {
    #[error("missing quantity in {0:?}, expected ID[:SIZE]:QTY")]
    MissingQuantity(String),

    #[error("invalid quantity in {0:?}, expected a whole number of at least 1")]
    InvalidQuantity(String),

    #[error("missing product ID in {0:?}")]
    MissingProductId(String),
}

/// One `--item` argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemSpec {
    pub product_id: String,
    pub size: Size,
    pub quantity: Quantity,
}

impl FromStr for ItemSpec {
    type Err = ItemSpecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (head, quantity) = s
            .rsplit_once(':')
            .ok_or_else(|| ItemSpecError::MissingQuantity(s.to_string()))?;
        let quantity = quantity
            .trim()
            .parse::<u32>()
            .ok()
            .and_then(|n| Quantity::new(n).ok())
            .ok_or_else(|| ItemSpecError::InvalidQuantity(s.to_string()))?;

        let (product_id, size) = head.split_once(':').unwrap_or((head, ""));
        let product_id = product_id.trim();
        if product_id.is_empty() {
            return Err(ItemSpecError::MissingProductId(s.to_string()));
        }

        Ok(Self {
            product_id: product_id.to_string(),
            size: Size::new(size.trim()),
            quantity,
        })
    }
}

/// Add `items` to a fresh cart in order and log the order summary.
pub fn quote(catalog: Catalog, config: StorefrontConfig, items: &[ItemSpec]) {
    let session = ShopSession::new(config, catalog);

    for item in items {
        if session.catalog().get(&item.product_id).is_none() {
            warn!(product_id = %item.product_id, "Unknown product, it will not be priced");
        }
        session.add_to_cart(&item.product_id, item.size.clone(), item.quantity);
    }

    let symbol = session.config().currency_symbol.as_str();
    session.with_cart_lines(|lines| {
        for line in lines {
            let size = if line.size.is_none() { "-" } else { line.size.as_str() };
            info!(
                "  {:<36} {:>4} x{:<3} {:>10}",
                line.product.name,
                size,
                line.quantity.get(),
                format_amount(symbol, line.line_total)
            );
        }
    });

    let cart = session.cart();
    let summary = session.order_summary().display(symbol);
    info!(
        "You have {} items ({} units)",
        cart.distinct_lines(),
        cart.count()
    );
    info!("  Subtotal: {}", summary.subtotal);
    info!("  Shipping: {}", summary.shipping);
    info!("  Tax:      {}", summary.tax);
    info!("  Total:    {}", summary.total);
}
