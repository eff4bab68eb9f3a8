//! Shopping session flows: product page to cart to checkout summary.

#![allow(clippy::unwrap_used)]

use std::sync::Arc;
use std::thread;

use rust_decimal::Decimal;
use shopfront_core::{Quantity, Size};
use shopfront_integration_tests::sample_catalog;
use shopfront_storefront::{
    CartEvent, ProductSelection, PromoError, SelectionError, ShopSession, StorefrontConfig,
    StorefrontError,
};

fn session() -> ShopSession {
    ShopSession::new(StorefrontConfig::default(), sample_catalog().unwrap())
}

#[test]
fn test_product_page_to_checkout() {
    let session = session();

    let mut selection = ProductSelection::new();
    let err = session.add_selection("p1", &selection).unwrap_err();
    assert!(matches!(
        err,
        StorefrontError::Selection(SelectionError::SizeRequired)
    ));

    selection.select_size("M");
    selection.increment();
    session.add_selection("p1", &selection).unwrap();
    session
        .add_selection("cap", &ProductSelection::new())
        .unwrap();

    assert_eq!(session.cart_count(), 3);
    assert_eq!(session.cart().distinct_lines(), 2);

    // 2 x 60.00 + 15.00 = 135.00, ships free, tax 13.50
    let display = session.order_summary().display("$");
    assert_eq!(display.subtotal, "$135.00");
    assert_eq!(display.shipping, "Free");
    assert_eq!(display.tax, "$13.50");
    assert_eq!(display.total, "$148.50");
}

#[test]
fn test_update_and_remove_through_session() {
    let session = session();
    session.add_to_cart("p2", Size::from("S"), Quantity::ONE);

    let event = session.update_quantity("p2", &Size::from("S"), 4);
    assert!(matches!(event, CartEvent::QuantityChanged { quantity, .. } if quantity.get() == 4));
    assert_eq!(session.order_summary().subtotal, Decimal::new(120, 0));

    let event = session.update_quantity("p2", &Size::from("S"), 0);
    assert!(matches!(event, CartEvent::Removed { .. }));
    assert_eq!(session.cart_count(), 0);

    assert_eq!(
        session.remove_from_cart("p2", &Size::from("S")),
        CartEvent::Unchanged
    );
}

#[test]
fn test_save_for_later_round_trip() {
    let session = session();
    session.add_to_cart("p4", Size::from("L"), Quantity::new(2).unwrap());
    session.add_to_cart("p5", Size::from("S"), Quantity::ONE);

    session.save_for_later("p4", &Size::from("L"));
    assert_eq!(session.cart_count(), 1);
    assert_eq!(session.saved_items().len(), 1);
    assert_eq!(session.order_summary().subtotal, Decimal::new(1299, 2));

    session.move_to_cart("p4", &Size::from("L"));
    assert_eq!(session.cart_count(), 3);
    assert!(session.saved_items().is_empty());

    // Moved lines go to the end of the cart.
    let last = session.cart().items().last().cloned().unwrap();
    assert_eq!(last.product_id.as_str(), "p4");
}

#[test]
fn test_promo_code_flow() {
    let session = session();
    assert_eq!(session.apply_promo_code("nope"), Err(PromoError::Invalid));
    assert!(!session.promo_applied());

    session.apply_promo_code("Save20").unwrap();
    assert!(session.promo_applied());
    assert_eq!(
        session.apply_promo_code("SAVE20"),
        Err(PromoError::AlreadyApplied)
    );
}

#[test]
fn test_concurrent_mutations_keep_invariants() {
    let session = Arc::new(session());

    let handles: Vec<_> = ["M", "L"]
        .into_iter()
        .map(|size| {
            let session = Arc::clone(&session);
            thread::spawn(move || {
                for _ in 0..50 {
                    session.add_to_cart("p1", Size::from(size), Quantity::ONE);
                }
                session.update_quantity("p1", &Size::from(size), 10);
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    let cart = session.cart();
    assert_eq!(cart.distinct_lines(), 2);
    assert_eq!(cart.count(), 20);
    assert_eq!(session.order_summary().subtotal, Decimal::new(1200, 0));
}
