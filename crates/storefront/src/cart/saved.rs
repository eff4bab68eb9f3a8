//! Items set aside from the cart.

use serde::Serialize;
use shopfront_core::Size;
use tracing::debug;

use super::{CartEvent, CartStore, LineItem};

/// Line items moved out of the cart to buy later.
///
/// Saved items are keyed the same way as the cart, so saving the same
/// product and size twice merges the quantities.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SavedItems {
    items: CartStore,
}

impl SavedItems {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Move a line from `cart` into the saved list.
    ///
    /// Returns the cart-side event: `Removed` if the line moved, `Unchanged`
    /// if the cart had no such line.
    pub fn save_from(
        &mut self,
        cart: &mut CartStore,
        product_id: &str,
        size: &Size,
    ) -> CartEvent {
        let Some(item) = cart.take(product_id, size) else {
            return CartEvent::Unchanged;
        };

        debug!(product_id = %item.product_id, size = %item.size, "Saved for later");
        let LineItem {
            product_id,
            size,
            quantity,
        } = item;
        self.items.add_item(product_id.clone(), size.clone(), quantity);

        CartEvent::Removed { product_id, size }
    }

    /// Move a saved line back into `cart`, merging with any existing line.
    ///
    /// Returns the cart-side event, or `Unchanged` if nothing was saved
    /// under that key.
    pub fn move_into(
        &mut self,
        cart: &mut CartStore,
        product_id: &str,
        size: &Size,
    ) -> CartEvent {
        match self.items.take(product_id, size) {
            Some(item) => cart.add_item(item.product_id, item.size, item.quantity),
            None => CartEvent::Unchanged,
        }
    }

    /// Saved lines in the order they were first saved.
    #[must_use]
    pub fn items(&self) -> &[LineItem] {
        self.items.items()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.distinct_lines()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
