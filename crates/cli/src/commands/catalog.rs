//! Catalog browsing commands.
//!
//! # Usage
//!
//! ```bash
//! shop-cli catalog list --category men --category kids --sort high-to-low
//! shop-cli catalog show aaaab
//! shop-cli catalog bestsellers --limit 4
//! shop-cli catalog latest
//! ```

use shopfront_core::{Category, Product, SubCategory, format_amount};
use shopfront_storefront::{
    Catalog, CollectionFilter, SortOrder, StorefrontConfig, StorefrontError, category_count,
    sub_category_count,
};
use tracing::info;

/// Number of related products shown under a product.
const RELATED_LIMIT: usize = 4;

/// List products matching the given filters.
pub fn list(
    catalog: &Catalog,
    config: &StorefrontConfig,
    categories: &[Category],
    sub_categories: &[SubCategory],
    sort: SortOrder,
) {
    let filter = categories
        .iter()
        .fold(CollectionFilter::new().with_sort(sort), |filter, &c| filter.with_category(c));
    let filter = sub_categories
        .iter()
        .fold(filter, |filter, &s| filter.with_sub_category(s));

    let products = filter.apply(catalog);
    info!(
        filters = filter.active_filter_count(),
        sort = %filter.sort(),
        "Showing {} of {} products",
        products.len(),
        catalog.len()
    );
    for product in products {
        log_product(product, &config.currency_symbol);
    }

    for category in Category::ALL {
        info!(
            "  [{}] {category} ({})",
            mark(filter.is_category_selected(category)),
            category_count(catalog, category)
        );
    }
    for sub_category in SubCategory::ALL {
        info!(
            "  [{}] {sub_category} ({})",
            mark(filter.is_sub_category_selected(sub_category)),
            sub_category_count(catalog, sub_category)
        );
    }
}

/// Show one product and related products.
///
/// # Errors
///
/// Returns `StorefrontError::NotFound` if the product does not exist.
pub fn show(catalog: &Catalog, config: &StorefrontConfig, id: &str) -> Result<(), StorefrontError> {
    let product = catalog
        .get(id)
        .ok_or_else(|| StorefrontError::NotFound(format!("product {id}")))?;
    let symbol = &config.currency_symbol;

    info!("{} ({})", product.name, product.id);
    info!("  Price: {}", format_amount(symbol, product.price.amount()));
    info!("  Category: {} / {}", product.category, product.sub_category);
    if product.has_sizes() {
        let sizes: Vec<&str> = product.sizes.iter().map(AsRef::as_ref).collect();
        info!("  Sizes: {}", sizes.join(", "));
    }
    if let Some(stock) = product.stock {
        info!("  In stock: {stock}");
    }
    if let Some(rating) = product.rating {
        info!("  Rating: {rating}/5");
    }
    if !product.description.is_empty() {
        info!("  {}", product.description);
    }

    let related = catalog.related(product, RELATED_LIMIT);
    if !related.is_empty() {
        info!("Related products:");
        for product in related {
            log_product(product, symbol);
        }
    }

    Ok(())
}

/// List the first `limit` bestsellers.
pub fn bestsellers(catalog: &Catalog, config: &StorefrontConfig, limit: usize) {
    info!("Bestsellers");
    for product in catalog.bestsellers(limit) {
        log_product(product, &config.currency_symbol);
    }
}

/// List the first `limit` products in catalog order.
pub fn latest(catalog: &Catalog, config: &StorefrontConfig, limit: usize) {
    info!("Latest collection");
    for product in catalog.latest(limit) {
        log_product(product, &config.currency_symbol);
    }
}

fn log_product(product: &Product, symbol: &str) {
    info!(
        "  {:<8} {:<36} {:>9}  {} / {}",
        product.id.as_str(),
        product.name,
        format_amount(symbol, product.price.amount()),
        product.category,
        product.sub_category
    );
}

const fn mark(selected: bool) -> char {
    if selected { 'x' } else { ' ' }
}
