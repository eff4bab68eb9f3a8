//! Integration tests for Shopfront.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p shopfront-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `cart_properties` - Property tests over random cart operation sequences
//! - `order_summary` - Shipping threshold and unresolvable product scenarios
//! - `collection_browsing` - Catalog filters, sorting and home page sections
//! - `session` - Shared session handle, saved items and promo codes
//!
//! This crate only provides fixtures; the tests live in `tests/`.

#![cfg_attr(not(test), forbid(unsafe_code))]

use rust_decimal::Decimal;
use shopfront_core::{Category, Price, Product, ProductId, Size, SubCategory};
use shopfront_storefront::{Catalog, CatalogError};

/// Build a product with the fields the tests care about.
///
/// # Panics
///
/// Panics if `price` is negative.
#[must_use]
#[allow(clippy::unwrap_used)]
pub fn product(
    id: &str,
    price: Decimal,
    category: Category,
    sub_category: SubCategory,
    sizes: &[&str],
) -> Product {
    Product {
        id: ProductId::new(id),
        name: format!("Product {id}"),
        description: String::new(),
        price: Price::new(price).unwrap(),
        images: Vec::new(),
        category,
        sub_category,
        sizes: sizes.iter().copied().map(Size::from).collect(),
        bestseller: false,
        stock: None,
        rating: None,
        discount: None,
    }
}

/// A small catalog spanning every category and sub-category.
///
/// | id  | price  | category | sub-category | bestseller |
/// |-----|--------|----------|--------------|------------|
/// | p1  | 60.00  | Men      | Topwear      | yes        |
/// | p2  | 30.00  | Women    | Bottomwear   | no         |
/// | p3  | 45.50  | Men      | Topwear      | yes        |
/// | p4  | 120.00 | Women    | Winterwear   | no         |
/// | p5  | 12.99  | Kids     | Topwear      | yes        |
/// | p6  | 30.00  | Men      | Bottomwear   | no         |
/// | cap | 15.00  | Kids     | Winterwear   | no (no sizes) |
///
/// # Errors
///
/// Never in practice; the IDs are unique.
pub fn sample_catalog() -> Result<Catalog, CatalogError> {
    let mut products = vec![
        product("p1", Decimal::new(6000, 2), Category::Men, SubCategory::Topwear, &["M", "L"]),
        product("p2", Decimal::new(3000, 2), Category::Women, SubCategory::Bottomwear, &["S", "M"]),
        product("p3", Decimal::new(4550, 2), Category::Men, SubCategory::Topwear, &["M"]),
        product("p4", Decimal::new(12000, 2), Category::Women, SubCategory::Winterwear, &["M", "L"]),
        product("p5", Decimal::new(1299, 2), Category::Kids, SubCategory::Topwear, &["S"]),
        product("p6", Decimal::new(3000, 2), Category::Men, SubCategory::Bottomwear, &["L"]),
        product("cap", Decimal::new(1500, 2), Category::Kids, SubCategory::Winterwear, &[]),
    ];
    for product in &mut products {
        product.bestseller = matches!(product.id.as_str(), "p1" | "p3" | "p5");
    }
    Catalog::new(products)
}
