//! Catalog product records.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use super::id::ProductId;
use super::price::Price;
use super::quantity::Quantity;
use super::size::Size;

/// Audience a product is sold for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    Men,
    Women,
    Kids,
}

impl Category {
    /// All categories in display order.
    pub const ALL: [Self; 3] = [Self::Men, Self::Women, Self::Kids];

    /// Human-readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Men => "Men",
            Self::Women => "Women",
            Self::Kids => "Kids",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "men" => Ok(Self::Men),
            "women" => Ok(Self::Women),
            "kids" => Ok(Self::Kids),
            _ => Err(format!("invalid category: {s}")),
        }
    }
}

/// Garment type within a category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SubCategory {
    Topwear,
    Bottomwear,
    Winterwear,
}

impl SubCategory {
    /// All sub-categories in display order.
    pub const ALL: [Self; 3] = [Self::Topwear, Self::Bottomwear, Self::Winterwear];

    /// Human-readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Topwear => "Topwear",
            Self::Bottomwear => "Bottomwear",
            Self::Winterwear => "Winter Wear",
        }
    }
}

impl fmt::Display for SubCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for SubCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace([' ', '-', '_'], "").as_str() {
            "topwear" => Ok(Self::Topwear),
            "bottomwear" => Ok(Self::Bottomwear),
            "winterwear" => Ok(Self::Winterwear),
            _ => Err(format!("invalid sub-category: {s}")),
        }
    }
}

/// A purchasable product.
///
/// Only `id`, `price` and `sizes` matter to the cart. The remaining fields
/// are descriptive and exist for browsing and detail views.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    #[serde(alias = "_id")]
    pub id: ProductId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub price: Price,
    /// Image URLs, first one is the primary image.
    #[serde(default, alias = "image")]
    pub images: Vec<String>,
    pub category: Category,
    pub sub_category: SubCategory,
    /// Available sizes in display order. Empty if not sold by size.
    #[serde(default)]
    pub sizes: Vec<Size>,
    #[serde(default)]
    pub bestseller: bool,
    /// Units available, if the catalog tracks stock.
    #[serde(default)]
    pub stock: Option<u32>,
    /// Star rating out of 5.
    #[serde(default)]
    pub rating: Option<u8>,
    /// Advertised discount percentage. Display only.
    #[serde(default)]
    pub discount: Option<u8>,
}

impl Product {
    /// Returns `true` if the product is sold by size.
    #[must_use]
    pub fn has_sizes(&self) -> bool {
        !self.sizes.is_empty()
    }

    /// Returns `true` if `size` can be ordered for this product.
    ///
    /// Products without sizes only accept the empty label.
    #[must_use]
    pub fn offers_size(&self, size: &Size) -> bool {
        if self.has_sizes() {
            self.sizes.contains(size)
        } else {
            size.is_none()
        }
    }

    /// Returns `true` if `quantity` units are available.
    ///
    /// Products without stock tracking are always available.
    #[must_use]
    pub fn in_stock_for(&self, quantity: Quantity) -> bool {
        self.stock.is_none_or(|stock| quantity.get() <= stock)
    }

    /// The primary image URL, if any.
    #[must_use]
    pub fn primary_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn tee() -> Product {
        serde_json::from_value(serde_json::json!({
            "_id": "aaaaa",
            "name": "Cotton Tee",
            "price": "19.50",
            "image": ["tee.png"],
            "category": "Women",
            "subCategory": "Topwear",
            "sizes": ["S", "M", "L"],
            "bestseller": true,
            "stock": 4
        }))
        .unwrap()
    }

    #[test]
    fn test_deserialize_with_aliases() {
        let product = tee();
        assert_eq!(product.id.as_str(), "aaaaa");
        assert_eq!(product.primary_image(), Some("tee.png"));
        assert_eq!(product.sub_category, SubCategory::Topwear);
        assert!(product.bestseller);
        assert_eq!(product.rating, None);
    }

    #[test]
    fn test_offers_size() {
        let mut product = tee();
        assert!(product.offers_size(&Size::from("M")));
        assert!(!product.offers_size(&Size::from("XXL")));
        assert!(!product.offers_size(&Size::none()));

        product.sizes.clear();
        assert!(product.offers_size(&Size::none()));
        assert!(!product.offers_size(&Size::from("M")));
    }

    #[test]
    fn test_in_stock_for() {
        let mut product = tee();
        assert!(product.in_stock_for(Quantity::new(4).unwrap()));
        assert!(!product.in_stock_for(Quantity::new(5).unwrap()));

        product.stock = None;
        assert!(product.in_stock_for(Quantity::new(500).unwrap()));
    }

    #[test]
    fn test_category_from_str() {
        assert_eq!("women".parse::<Category>().unwrap(), Category::Women);
        assert!("pets".parse::<Category>().is_err());
        assert_eq!(
            "Winter Wear".parse::<SubCategory>().unwrap(),
            SubCategory::Winterwear
        );
        assert_eq!(
            "bottom-wear".parse::<SubCategory>().unwrap(),
            SubCategory::Bottomwear
        );
    }
}
