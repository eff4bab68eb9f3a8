//! In-memory cart store.
//!
//! The cart is an ordered list of line items keyed by `(product id, size)`.
//! Every mutation is total: unknown keys are no-ops and quantities below one
//! remove the line. Each mutation returns a [`CartEvent`] describing what
//! changed so callers can decide what to show without the store knowing
//! about presentation.

mod saved;
mod summary;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use shopfront_core::{Product, ProductId, Quantity, Size};
use tracing::warn;

use crate::catalog::Catalog;

pub use saved::SavedItems;
pub use summary::{OrderSummary, SummaryDisplay};

/// One `(product, size, quantity)` entry in the cart.
///
/// The product ID is not checked against the catalog when the line is
/// created. Lines whose product cannot be resolved contribute nothing to
/// totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    pub product_id: ProductId,
    pub size: Size,
    pub quantity: Quantity,
}

impl LineItem {
    fn has_key(&self, product_id: &str, size: &Size) -> bool {
        self.product_id.as_str() == product_id && self.size == *size
    }
}

/// What a cart mutation did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartEvent {
    /// A new line was appended.
    Added {
        product_id: ProductId,
        size: Size,
        quantity: Quantity,
    },
    /// Units were added to an existing line. `quantity` is the new total.
    Merged {
        product_id: ProductId,
        size: Size,
        quantity: Quantity,
    },
    /// A line's quantity was set.
    QuantityChanged {
        product_id: ProductId,
        size: Size,
        quantity: Quantity,
    },
    /// A line was deleted.
    Removed { product_id: ProductId, size: Size },
    /// Nothing matched, the cart is as it was.
    Unchanged,
}

impl CartEvent {
    /// Returns `true` if the cart was modified.
    #[must_use]
    pub const fn is_change(&self) -> bool {
        !matches!(self, Self::Unchanged)
    }
}

/// A line item joined with its catalog product.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartLine<'a> {
    pub product: &'a Product,
    pub size: &'a Size,
    pub quantity: Quantity,
    /// Unit price times quantity, unrounded.
    pub line_total: Decimal,
}

/// Ordered collection of line items with unique `(product id, size)` keys.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CartStore {
    items: Vec<LineItem>,
}

impl CartStore {
    /// Create an empty cart.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add units of a product in a size.
    ///
    /// An existing line with the same key grows by `quantity` and keeps its
    /// position; otherwise a new line is appended.
    pub fn add_item(
        &mut self,
        product_id: impl Into<ProductId>,
        size: Size,
        quantity: Quantity,
    ) -> CartEvent {
        let product_id = product_id.into();

        if let Some(item) = self.find_mut(product_id.as_str(), &size) {
            item.quantity = item.quantity.saturating_add(quantity);
            return CartEvent::Merged {
                product_id,
                size,
                quantity: item.quantity,
            };
        }

        self.items.push(LineItem {
            product_id: product_id.clone(),
            size: size.clone(),
            quantity,
        });
        CartEvent::Added {
            product_id,
            size,
            quantity,
        }
    }

    /// Remove the line with the given key, if present.
    pub fn remove_item(&mut self, product_id: &str, size: &Size) -> CartEvent {
        let Some(position) = self
            .items
            .iter()
            .position(|item| item.has_key(product_id, size))
        else {
            return CartEvent::Unchanged;
        };

        let item = self.items.remove(position);
        CartEvent::Removed {
            product_id: item.product_id,
            size: item.size,
        }
    }

    /// Set the quantity of a line.
    ///
    /// Values below one remove the line. Unknown keys are ignored.
    pub fn update_quantity(
        &mut self,
        product_id: &str,
        size: &Size,
        new_quantity: i64,
    ) -> CartEvent {
        let Some(quantity) = Quantity::from_signed(new_quantity) else {
            return self.remove_item(product_id, size);
        };

        match self.find_mut(product_id, size) {
            Some(item) => {
                item.quantity = quantity;
                CartEvent::QuantityChanged {
                    product_id: item.product_id.clone(),
                    size: item.size.clone(),
                    quantity,
                }
            }
            None => CartEvent::Unchanged,
        }
    }

    /// Total number of units across all lines.
    #[must_use]
    pub fn count(&self) -> u64 {
        self.items
            .iter()
            .map(|item| u64::from(item.quantity.get()))
            .sum()
    }

    /// Number of distinct lines.
    #[must_use]
    pub fn distinct_lines(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the cart has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Line items in insertion order.
    #[must_use]
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Look up a line by key.
    #[must_use]
    pub fn get(&self, product_id: &str, size: &Size) -> Option<&LineItem> {
        self.items.iter().find(|item| item.has_key(product_id, size))
    }

    /// Sum of unit price times quantity over resolvable lines, unrounded.
    ///
    /// Lines whose product is missing from the catalog contribute zero.
    #[must_use]
    pub fn subtotal(&self, catalog: &Catalog) -> Decimal {
        self.resolve(catalog)
            .iter()
            .map(|line| line.line_total)
            .sum()
    }

    /// Join lines with their products, in cart order.
    ///
    /// Lines referencing products missing from the catalog are skipped and
    /// logged as a data-integrity warning.
    #[must_use]
    pub fn resolve<'a>(&'a self, catalog: &'a Catalog) -> Vec<CartLine<'a>> {
        self.items
            .iter()
            .filter_map(|item| {
                let Some(product) = catalog.get(item.product_id.as_str()) else {
                    warn!(
                        product_id = %item.product_id,
                        size = %item.size,
                        "Cart line references a product missing from the catalog"
                    );
                    return None;
                };
                Some(CartLine {
                    product,
                    size: &item.size,
                    quantity: item.quantity,
                    line_total: product.price.times(item.quantity),
                })
            })
            .collect()
    }

    /// Take a line out of the cart, returning it.
    pub(crate) fn take(&mut self, product_id: &str, size: &Size) -> Option<LineItem> {
        let position = self
            .items
            .iter()
            .position(|item| item.has_key(product_id, size))?;
        Some(self.items.remove(position))
    }

    fn find_mut(&mut self, product_id: &str, size: &Size) -> Option<&mut LineItem> {
        self.items
            .iter_mut()
            .find(|item| item.has_key(product_id, size))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use shopfront_core::{Category, Price, SubCategory};

    use super::*;

    fn qty(n: u32) -> Quantity {
        Quantity::new(n).unwrap()
    }

    fn product(id: &str, cents: i64) -> Product {
        Product {
            id: ProductId::new(id),
            name: id.to_string(),
            description: String::new(),
            price: Price::from_cents(cents).unwrap(),
            images: Vec::new(),
            category: Category::Men,
            sub_category: SubCategory::Topwear,
            sizes: vec![Size::from("M"), Size::from("L")],
            bestseller: false,
            stock: None,
            rating: None,
            discount: None,
        }
    }

    fn catalog() -> Catalog {
        Catalog::new(vec![product("tee", 2000), product("hoodie", 4550)]).unwrap()
    }

    #[test]
    fn test_add_appends_new_line() {
        let mut cart = CartStore::new();
        let event = cart.add_item("tee", Size::from("M"), qty(2));
        assert_eq!(
            event,
            CartEvent::Added {
                product_id: ProductId::new("tee"),
                size: Size::from("M"),
                quantity: qty(2),
            }
        );
        assert_eq!(cart.distinct_lines(), 1);
        assert_eq!(cart.count(), 2);
    }

    #[test]
    fn test_add_same_key_merges_in_place() {
        let mut cart = CartStore::new();
        cart.add_item("tee", Size::from("M"), qty(1));
        cart.add_item("hoodie", Size::from("L"), qty(1));
        let event = cart.add_item("tee", Size::from("M"), qty(3));

        assert!(matches!(event, CartEvent::Merged { quantity, .. } if quantity.get() == 4));
        let keys: Vec<(&str, &str)> = cart
            .items()
            .iter()
            .map(|item| (item.product_id.as_str(), item.size.as_str()))
            .collect();
        assert_eq!(keys, [("tee", "M"), ("hoodie", "L")]);
    }

    #[test]
    fn test_different_size_is_different_line() {
        let mut cart = CartStore::new();
        cart.add_item("tee", Size::from("M"), qty(1));
        cart.add_item("tee", Size::from("L"), qty(1));
        assert_eq!(cart.distinct_lines(), 2);
    }

    #[test]
    fn test_size_labels_are_compared_verbatim() {
        let mut cart = CartStore::new();
        cart.add_item("tee", Size::from("M"), qty(1));
        cart.add_item("tee", Size::from(" M"), qty(1));
        assert_eq!(cart.distinct_lines(), 2);

        cart.remove_item("tee", &Size::from("M"));
        assert_eq!(cart.get("tee", &Size::from(" M")).unwrap().quantity, qty(1));
    }

    #[test]
    fn test_remove_missing_is_unchanged() {
        let mut cart = CartStore::new();
        cart.add_item("tee", Size::from("M"), qty(1));
        assert_eq!(
            cart.remove_item("tee", &Size::from("L")),
            CartEvent::Unchanged
        );
        assert_eq!(cart.distinct_lines(), 1);
    }

    #[test]
    fn test_remove_twice_is_idempotent() {
        let mut cart = CartStore::new();
        cart.add_item("tee", Size::from("M"), qty(1));
        assert!(cart.remove_item("tee", &Size::from("M")).is_change());
        let after_once = cart.clone();
        assert!(!cart.remove_item("tee", &Size::from("M")).is_change());
        assert_eq!(cart, after_once);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_update_quantity_sets_value() {
        let mut cart = CartStore::new();
        cart.add_item("tee", Size::from("M"), qty(1));
        let event = cart.update_quantity("tee", &Size::from("M"), 5);
        assert!(
            matches!(event, CartEvent::QuantityChanged { quantity, .. } if quantity.get() == 5)
        );
        assert_eq!(cart.get("tee", &Size::from("M")).unwrap().quantity, qty(5));
    }

    #[test]
    fn test_update_quantity_below_one_removes() {
        for new_quantity in [0, -5] {
            let mut cart = CartStore::new();
            cart.add_item("tee", Size::from("M"), qty(2));
            let event = cart.update_quantity("tee", &Size::from("M"), new_quantity);
            assert!(matches!(event, CartEvent::Removed { .. }));
            assert!(cart.get("tee", &Size::from("M")).is_none());
        }
    }

    #[test]
    fn test_update_quantity_unknown_key_is_noop() {
        let mut cart = CartStore::new();
        assert_eq!(
            cart.update_quantity("tee", &Size::from("M"), 3),
            CartEvent::Unchanged
        );
        assert!(cart.is_empty());
    }

    #[test]
    fn test_count_empty_is_zero() {
        assert_eq!(CartStore::new().count(), 0);
    }

    #[test]
    fn test_subtotal_skips_unknown_products() {
        let catalog = catalog();
        let mut cart = CartStore::new();
        cart.add_item("tee", Size::from("M"), qty(2));
        cart.add_item("ghost", Size::from("M"), qty(7));
        cart.add_item("hoodie", Size::from("L"), qty(1));

        assert_eq!(cart.subtotal(&catalog), Decimal::new(8550, 2));
        let lines = cart.resolve(&catalog);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines.first().unwrap().line_total, Decimal::new(4000, 2));
        // The dangling line stays in the cart.
        assert_eq!(cart.count(), 10);
    }

    #[test]
    fn test_serde_shape() {
        let mut cart = CartStore::new();
        cart.add_item("tee", Size::from("M"), qty(2));
        let json = serde_json::to_value(&cart).unwrap();
        assert_eq!(
            json,
            serde_json::json!([{"productId": "tee", "size": "M", "quantity": 2}])
        );
    }
}
