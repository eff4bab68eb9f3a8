//! Collection page filtering and sorting.

use std::collections::BTreeSet;
use std::str::FromStr;

use shopfront_core::{Category, Product, SubCategory};

use crate::catalog::Catalog;

/// Sort order for collection listings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SortOrder {
    /// Catalog order.
    #[default]
    Relevant,
    PriceLowToHigh,
    PriceHighToLow,
}

impl SortOrder {
    /// The value used in query strings and on the command line.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Relevant => "relevant",
            Self::PriceLowToHigh => "low-to-high",
            Self::PriceHighToLow => "high-to-low",
        }
    }
}

impl FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "relevant" => Ok(Self::Relevant),
            "low-to-high" => Ok(Self::PriceLowToHigh),
            "high-to-low" => Ok(Self::PriceHighToLow),
            _ => Err(format!("invalid sort order: {s}")),
        }
    }
}

impl std::fmt::Display for SortOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Active filters and sort order on a collection page.
///
/// An empty set places no constraint on its dimension. Category and
/// sub-category constraints combine with AND.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CollectionFilter {
    categories: BTreeSet<Category>,
    sub_categories: BTreeSet<SubCategory>,
    sort: SortOrder,
}

impl CollectionFilter {
    /// A filter with nothing selected and relevant ordering.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip a category checkbox. Returns the new checked state.
    pub fn toggle_category(&mut self, category: Category) -> bool {
        if self.categories.remove(&category) {
            false
        } else {
            self.categories.insert(category)
        }
    }

    /// Flip a sub-category checkbox. Returns the new checked state.
    pub fn toggle_sub_category(&mut self, sub_category: SubCategory) -> bool {
        if self.sub_categories.remove(&sub_category) {
            false
        } else {
            self.sub_categories.insert(sub_category)
        }
    }

    /// Change the sort order.
    pub const fn set_sort(&mut self, sort: SortOrder) {
        self.sort = sort;
    }

    /// Builder form of [`Self::toggle_category`] for selecting a category.
    #[must_use]
    pub fn with_category(mut self, category: Category) -> Self {
        self.categories.insert(category);
        self
    }

    /// Builder form of [`Self::toggle_sub_category`] for selecting a sub-category.
    #[must_use]
    pub fn with_sub_category(mut self, sub_category: SubCategory) -> Self {
        self.sub_categories.insert(sub_category);
        self
    }

    /// Builder form of [`Self::set_sort`].
    #[must_use]
    pub fn with_sort(mut self, sort: SortOrder) -> Self {
        self.sort = sort;
        self
    }

    /// Uncheck everything and restore relevant ordering.
    pub fn clear(&mut self) {
        self.categories.clear();
        self.sub_categories.clear();
        self.sort = SortOrder::Relevant;
    }

    /// Number of checked boxes, shown on the mobile filter toggle.
    #[must_use]
    pub fn active_filter_count(&self) -> usize {
        self.categories.len() + self.sub_categories.len()
    }

    #[must_use]
    pub fn is_category_selected(&self, category: Category) -> bool {
        self.categories.contains(&category)
    }

    #[must_use]
    pub fn is_sub_category_selected(&self, sub_category: SubCategory) -> bool {
        self.sub_categories.contains(&sub_category)
    }

    #[must_use]
    pub const fn sort(&self) -> SortOrder {
        self.sort
    }

    /// Returns `true` if `product` passes the selected filters.
    #[must_use]
    pub fn matches(&self, product: &Product) -> bool {
        (self.categories.is_empty() || self.categories.contains(&product.category))
            && (self.sub_categories.is_empty()
                || self.sub_categories.contains(&product.sub_category))
    }

    /// Filter and sort the catalog.
    ///
    /// Price sorting is stable, so equally priced products keep catalog order.
    #[must_use]
    pub fn apply<'a>(&self, catalog: &'a Catalog) -> Vec<&'a Product> {
        let mut products: Vec<&Product> = catalog
            .products()
            .iter()
            .filter(|product| self.matches(product))
            .collect();

        match self.sort {
            SortOrder::Relevant => {}
            SortOrder::PriceLowToHigh => products.sort_by_key(|product| product.price),
            SortOrder::PriceHighToLow => {
                products.sort_by(|a, b| b.price.cmp(&a.price));
            }
        }

        products
    }
}

/// Unfiltered number of products in a category.
#[must_use]
pub fn category_count(catalog: &Catalog, category: Category) -> usize {
    catalog
        .products()
        .iter()
        .filter(|product| product.category == category)
        .count()
}

/// Unfiltered number of products in a sub-category.
#[must_use]
pub fn sub_category_count(catalog: &Catalog, sub_category: SubCategory) -> usize {
    catalog
        .products()
        .iter()
        .filter(|product| product.sub_category == sub_category)
        .count()
}
