//! Shopping session shared across callers.
//!
//! A `ShopSession` owns the cart for one shopper together with the read-only
//! catalog and configuration it is priced against. All mutations go through
//! a single lock, so concurrent callers observe each operation either fully
//! applied or not at all.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use shopfront_core::{Quantity, Size};
use tracing::{debug, instrument};

use crate::cart::{CartEvent, CartLine, CartStore, OrderSummary, SavedItems};
use crate::catalog::Catalog;
use crate::config::StorefrontConfig;
use crate::error::StorefrontError;
use crate::promo::{PromoCode, PromoError};
use crate::selection::ProductSelection;

/// Session handle shared by everything that reads or updates the cart.
///
/// This struct is cheaply cloneable via `Arc`; clones share the same cart.
#[derive(Debug, Clone)]
pub struct ShopSession {
    inner: Arc<ShopSessionInner>,
}

#[derive(Debug)]
struct ShopSessionInner {
    config: StorefrontConfig,
    catalog: Arc<Catalog>,
    state: Mutex<SessionState>,
}

#[derive(Debug)]
struct SessionState {
    cart: CartStore,
    saved: SavedItems,
    promo: PromoCode,
}

impl ShopSession {
    /// Start a session with an empty cart.
    #[must_use]
    pub fn new(config: StorefrontConfig, catalog: impl Into<Arc<Catalog>>) -> Self {
        let promo = PromoCode::new(config.promo_code.clone());
        Self {
            inner: Arc::new(ShopSessionInner {
                config,
                catalog: catalog.into(),
                state: Mutex::new(SessionState {
                    cart: CartStore::new(),
                    saved: SavedItems::new(),
                    promo,
                }),
            }),
        }
    }

    /// Get a reference to the session configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Get a reference to the catalog.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.inner.catalog
    }

    // =========================================================================
    // Cart mutations
    // =========================================================================

    /// Add units of a product in a size, merging with an existing line.
    ///
    /// The product is not required to exist in the catalog.
    #[instrument(skip(self))]
    pub fn add_to_cart(&self, product_id: &str, size: Size, quantity: Quantity) -> CartEvent {
        self.mutate(|state| state.cart.add_item(product_id, size, quantity))
    }

    /// Validate a product page selection and add it to the cart.
    ///
    /// # Errors
    ///
    /// Returns `StorefrontError::NotFound` if the product is not in the
    /// catalog, or `StorefrontError::Selection` if the selection is invalid.
    #[instrument(skip(self, selection))]
    pub fn add_selection(
        &self,
        product_id: &str,
        selection: &ProductSelection,
    ) -> Result<CartEvent, StorefrontError> {
        let product = self
            .catalog()
            .get(product_id)
            .ok_or_else(|| StorefrontError::NotFound(format!("product {product_id}")))?;
        let (size, quantity) = selection.validate(product)?;
        let product_id = product.id.clone();

        Ok(self.mutate(|state| state.cart.add_item(product_id, size, quantity)))
    }

    /// Remove a line. Unknown keys are ignored.
    #[instrument(skip(self))]
    pub fn remove_from_cart(&self, product_id: &str, size: &Size) -> CartEvent {
        self.mutate(|state| state.cart.remove_item(product_id, size))
    }

    /// Set a line's quantity; values below one remove it.
    #[instrument(skip(self))]
    pub fn update_quantity(&self, product_id: &str, size: &Size, new_quantity: i64) -> CartEvent {
        self.mutate(|state| state.cart.update_quantity(product_id, size, new_quantity))
    }

    /// Move a line out of the cart into the saved-for-later list.
    #[instrument(skip(self))]
    pub fn save_for_later(&self, product_id: &str, size: &Size) -> CartEvent {
        self.mutate(|state| {
            let SessionState { cart, saved, .. } = state;
            saved.save_from(cart, product_id, size)
        })
    }

    /// Move a saved line back into the cart.
    #[instrument(skip(self))]
    pub fn move_to_cart(&self, product_id: &str, size: &Size) -> CartEvent {
        self.mutate(|state| {
            let SessionState { cart, saved, .. } = state;
            saved.move_into(cart, product_id, size)
        })
    }

    // =========================================================================
    // Reads
    // =========================================================================

    /// Total units in the cart.
    #[must_use]
    pub fn cart_count(&self) -> u64 {
        self.lock().cart.count()
    }

    /// A copy of the current cart.
    #[must_use]
    pub fn cart(&self) -> CartStore {
        self.lock().cart.clone()
    }

    /// A copy of the saved-for-later list.
    #[must_use]
    pub fn saved_items(&self) -> SavedItems {
        self.lock().saved.clone()
    }

    /// Run `f` over the resolved lines of a snapshot of the cart.
    ///
    /// The session lock is released before `f` runs, so `f` may call back
    /// into the session; changes it makes are not reflected in `lines`.
    /// Lines whose product is missing from the catalog are not passed to `f`.
    pub fn with_cart_lines<R>(&self, f: impl FnOnce(&[CartLine<'_>]) -> R) -> R {
        let cart = self.cart();
        f(&cart.resolve(self.catalog()))
    }

    /// Subtotal, shipping, tax and total for the current cart.
    #[must_use]
    pub fn order_summary(&self) -> OrderSummary {
        let state = self.lock();
        OrderSummary::for_cart(&state.cart, self.catalog(), &self.config().pricing)
    }

    // =========================================================================
    // Promo code
    // =========================================================================

    /// Apply a promo code entered by the shopper.
    ///
    /// # Errors
    ///
    /// Returns `PromoError` if the code does not match or one is already applied.
    #[instrument(skip(self))]
    pub fn apply_promo_code(&self, input: &str) -> Result<(), PromoError> {
        let result = self.lock().promo.apply(input);
        match &result {
            Ok(()) => debug!("Promo code applied"),
            Err(e) => debug!(error = %e, "Promo code rejected"),
        }
        result
    }

    #[must_use]
    pub fn promo_applied(&self) -> bool {
        self.lock().promo.is_applied()
    }

    // =========================================================================
    // Helpers
    // =========================================================================

    fn lock(&self) -> MutexGuard<'_, SessionState> {
        // The state is valid after any panic: every mutation is a single
        // Vec operation.
        self.inner
            .state
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    fn mutate(&self, f: impl FnOnce(&mut SessionState) -> CartEvent) -> CartEvent {
        let event = f(&mut self.lock());
        if event.is_change() {
            debug!(?event, "Cart updated");
        }
        event
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use rust_decimal::Decimal;

    use super::*;

    const CATALOG_JSON: &str = r#"[
        {"_id": "shirt", "name": "Shirt", "price": "60.00", "category": "Men", "subCategory": "Topwear", "sizes": ["M", "L"], "stock": 5},
        {"_id": "cap", "name": "Cap", "price": "30.00", "category": "Kids", "subCategory": "Topwear"}
    ]"#;

    fn session() -> ShopSession {
        ShopSession::new(
            StorefrontConfig::default(),
            Catalog::from_json_str(CATALOG_JSON).unwrap(),
        )
    }

    fn qty(n: u32) -> Quantity {
        Quantity::new(n).unwrap()
    }

    #[test]
    fn test_clones_share_cart() {
        let session = session();
        let other = session.clone();
        session.add_to_cart("shirt", Size::from("M"), qty(1));
        assert_eq!(other.cart_count(), 1);
    }

    #[test]
    fn test_sessions_are_isolated() {
        let first = session();
        let second = session();
        first.add_to_cart("shirt", Size::from("M"), qty(1));
        assert_eq!(second.cart_count(), 0);
    }

    #[test]
    fn test_order_summary() {
        let session = session();
        session.add_to_cart("shirt", Size::from("M"), qty(2));
        let summary = session.order_summary();
        assert_eq!(summary.subtotal, Decimal::new(120, 0));
        assert_eq!(summary.total, Decimal::new(132, 0));
    }

    #[test]
    fn test_add_selection_validates() {
        let session = session();
        let err = session
            .add_selection("shirt", &ProductSelection::new())
            .unwrap_err();
        assert!(matches!(err, StorefrontError::Selection(_)));

        let err = session
            .add_selection("nope", &ProductSelection::new())
            .unwrap_err();
        assert!(matches!(err, StorefrontError::NotFound(_)));

        let event = session
            .add_selection("cap", &ProductSelection::new())
            .unwrap();
        assert!(matches!(event, CartEvent::Added { ref size, .. } if size.is_none()));
        assert_eq!(session.cart_count(), 1);
    }

    #[test]
    fn test_save_and_move_back() {
        let session = session();
        session.add_to_cart("shirt", Size::from("L"), qty(3));
        session.save_for_later("shirt", &Size::from("L"));
        assert_eq!(session.cart_count(), 0);
        assert_eq!(session.saved_items().len(), 1);

        session.move_to_cart("shirt", &Size::from("L"));
        assert_eq!(session.cart_count(), 3);
        assert!(session.saved_items().is_empty());
    }

    #[test]
    fn test_promo_does_not_change_summary() {
        let session = session();
        session.add_to_cart("cap", Size::none(), qty(1));
        let before = session.order_summary();
        session.apply_promo_code("save20").unwrap();
        assert!(session.promo_applied());
        assert_eq!(session.order_summary(), before);
    }

    #[test]
    fn test_with_cart_lines_skips_unknown() {
        let session = session();
        session.add_to_cart("ghost", Size::none(), qty(1));
        session.add_to_cart("cap", Size::none(), qty(2));
        let names: Vec<String> =
            session.with_cart_lines(|lines| lines.iter().map(|l| l.product.name.clone()).collect());
        assert_eq!(names, ["Cap"]);
        assert_eq!(session.cart_count(), 3);
    }

    #[test]
    fn test_with_cart_lines_allows_reentry() {
        let session = session();
        session.add_to_cart("cap", Size::none(), qty(1));

        let (seen, count_inside) = session.with_cart_lines(|lines| {
            session.add_to_cart("cap", Size::none(), qty(1));
            (lines.len(), session.cart_count())
        });
        assert_eq!(seen, 1);
        assert_eq!(count_inside, 2);
    }

    #[test]
    fn test_concurrent_adds_are_serialized() {
        let session = session();
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let session = session.clone();
                std::thread::spawn(move || {
                    for _ in 0..25 {
                        session.add_to_cart("shirt", Size::from("M"), qty(1));
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        let cart = session.cart();
        assert_eq!(cart.distinct_lines(), 1);
        assert_eq!(cart.count(), 200);
    }
}
