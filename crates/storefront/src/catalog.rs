//! Read-only product catalog.
//!
//! The catalog is supplied once at session start, either built in memory or
//! loaded from a JSON/YAML file. Product order is preserved because it is the
//! "relevant" order used by collection pages.

use std::collections::HashMap;
use std::path::Path;

use shopfront_core::{Price, Product, ProductId};
use thiserror::Error;
use tracing::{debug, instrument};

/// Errors that can occur while building or loading a catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Two products share an ID.
    #[error("duplicate product id: {0}")]
    DuplicateId(ProductId),

    /// The catalog file could not be read.
    #[error("failed to read catalog: {0}")]
    Io(#[from] std::io::Error),

    /// The catalog is not valid JSON.
    #[error("invalid catalog JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The catalog is not valid YAML.
    #[error("invalid catalog YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// The file extension is not a supported catalog format.
    #[error("unsupported catalog format: {0} (expected .json, .yaml or .yml)")]
    UnsupportedFormat(String),
}

/// An immutable, ordered list of products with lookup by ID.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: Vec<Product>,
    index: HashMap<ProductId, usize>,
}

impl Catalog {
    /// Build a catalog, keeping product order.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::DuplicateId`] if two products share an ID.
    pub fn new(products: Vec<Product>) -> Result<Self, CatalogError> {
        let mut index = HashMap::with_capacity(products.len());
        for (position, product) in products.iter().enumerate() {
            if index.insert(product.id.clone(), position).is_some() {
                return Err(CatalogError::DuplicateId(product.id.clone()));
            }
        }
        Ok(Self { products, index })
    }

    /// Parse a catalog from a JSON array of products.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or contains duplicate IDs.
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        Self::new(serde_json::from_str(json)?)
    }

    /// Parse a catalog from a YAML sequence of products.
    ///
    /// # Errors
    ///
    /// Returns an error if the YAML is malformed or contains duplicate IDs.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, CatalogError> {
        Self::new(serde_yaml::from_str(yaml)?)
    }

    /// Load a catalog file, choosing the format from its extension.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, has an unsupported
    /// extension, or fails to parse.
    #[instrument(level = "debug")]
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();

        let catalog = match extension.as_str() {
            "json" => Self::from_json_str(&std::fs::read_to_string(path)?)?,
            "yaml" | "yml" => Self::from_yaml_str(&std::fs::read_to_string(path)?)?,
            _ => return Err(CatalogError::UnsupportedFormat(path.display().to_string())),
        };

        debug!(products = catalog.len(), "Catalog loaded");
        Ok(catalog)
    }

    /// Look up a product by ID.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Product> {
        self.index
            .get(id)
            .and_then(|&position| self.products.get(position))
    }

    /// Unit price of a product, if it exists.
    #[must_use]
    pub fn price_of(&self, id: &str) -> Option<Price> {
        self.get(id).map(|product| product.price)
    }

    /// All products in catalog order.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Number of products.
    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Returns `true` if the catalog has no products.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// The first `limit` products flagged as bestsellers.
    #[must_use]
    pub fn bestsellers(&self, limit: usize) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|product| product.bestseller)
            .take(limit)
            .collect()
    }

    /// The first `limit` products in catalog order.
    #[must_use]
    pub fn latest(&self, limit: usize) -> Vec<&Product> {
        self.products.iter().take(limit).collect()
    }

    /// Up to `limit` other products sharing the category and sub-category.
    #[must_use]
    pub fn related(&self, product: &Product, limit: usize) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|other| {
                other.id != product.id
                    && other.category == product.category
                    && other.sub_category == product.sub_category
            })
            .take(limit)
            .collect()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    const CATALOG_JSON: &str = r#"[
        {"_id": "p1", "name": "Tee", "price": "20", "category": "Men", "subCategory": "Topwear", "sizes": ["M"], "bestseller": true},
        {"_id": "p2", "name": "Chinos", "price": "45", "category": "Men", "subCategory": "Bottomwear", "sizes": ["32"]},
        {"_id": "p3", "name": "Polo", "price": "30", "category": "Men", "subCategory": "Topwear", "sizes": ["L"], "bestseller": true},
        {"_id": "p4", "name": "Blouse", "price": "35", "category": "Women", "subCategory": "Topwear", "sizes": ["S"]},
        {"_id": "p5", "name": "Henley", "price": "25", "category": "Men", "subCategory": "Topwear", "sizes": ["M"], "bestseller": true}
    ]"#;

    fn catalog() -> Catalog {
        Catalog::from_json_str(CATALOG_JSON).unwrap()
    }

    #[test]
    fn test_lookup_and_order() {
        let catalog = catalog();
        assert_eq!(catalog.len(), 5);
        assert_eq!(catalog.get("p2").unwrap().name, "Chinos");
        assert!(catalog.get("missing").is_none());
        let ids: Vec<&str> = catalog.products().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["p1", "p2", "p3", "p4", "p5"]);
    }

    #[test]
    fn test_price_of() {
        let catalog = catalog();
        assert_eq!(
            catalog.price_of("p4").unwrap().amount(),
            rust_decimal::Decimal::new(35, 0)
        );
        assert!(catalog.price_of("nope").is_none());
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let mut products = catalog().products().to_vec();
        products.push(products.first().unwrap().clone());
        let err = Catalog::new(products).unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateId(id) if id.as_str() == "p1"));
    }

    #[test]
    fn test_bestsellers_respects_limit_and_order() {
        let catalog = catalog();
        let ids: Vec<&str> = catalog.bestsellers(2).iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["p1", "p3"]);
    }

    #[test]
    fn test_latest() {
        let catalog = catalog();
        assert_eq!(catalog.latest(3).len(), 3);
        assert_eq!(catalog.latest(12).len(), 5);
    }

    #[test]
    fn test_related_excludes_self_and_other_types() {
        let catalog = catalog();
        let tee = catalog.get("p1").unwrap();
        let ids: Vec<&str> = catalog.related(tee, 4).iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["p3", "p5"]);
    }

    #[test]
    fn test_yaml_catalog() {
        let yaml = r#"
- id: y1
  name: Parka
  price: "120.00"
  category: Kids
  subCategory: Winterwear
"#;
        let catalog = Catalog::from_yaml_str(yaml).unwrap();
        let parka = catalog.get("y1").unwrap();
        assert!(parka.sizes.is_empty());
        assert!(!parka.bestseller);
    }

    #[test]
    fn test_unsupported_extension() {
        let err = Catalog::load(Path::new("catalog.csv")).unwrap_err();
        assert!(matches!(err, CatalogError::UnsupportedFormat(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = Catalog::load(Path::new("definitely/not/here.json")).unwrap_err();
        assert!(matches!(err, CatalogError::Io(_)));
    }
}
