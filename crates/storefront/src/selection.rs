//! Size and quantity picker on the product detail page.

use shopfront_core::{Product, ProductId, Quantity, Size};
use thiserror::Error;

/// Reasons a selection cannot be added to the cart.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    #[error("please select a size")]
    SizeRequired,

    #[error("size {size} is not available for product {product_id}")]
    UnknownSize { product_id: ProductId, size: Size },

    #[error("only {available} units available")]
    ExceedsStock { available: u32 },
}

/// The shopper's current choice on a product page.
///
/// Starts with no size and a quantity of one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductSelection {
    size: Option<Size>,
    quantity: Quantity,
}

impl ProductSelection {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select_size(&mut self, size: impl Into<Size>) {
        self.size = Some(size.into());
    }

    /// Builder form of [`Self::select_size`].
    #[must_use]
    pub fn with_size(mut self, size: impl Into<Size>) -> Self {
        self.select_size(size);
        self
    }

    /// Builder form for setting the quantity directly.
    #[must_use]
    pub fn with_quantity(mut self, quantity: Quantity) -> Self {
        self.quantity = quantity;
        self
    }

    pub const fn increment(&mut self) {
        self.quantity = self.quantity.saturating_add(Quantity::ONE);
    }

    /// Step the quantity down, never below one.
    pub fn decrement(&mut self) {
        if let Ok(lower) = Quantity::new(self.quantity.get() - 1) {
            self.quantity = lower;
        }
    }

    #[must_use]
    pub const fn size(&self) -> Option<&Size> {
        self.size.as_ref()
    }

    #[must_use]
    pub const fn quantity(&self) -> Quantity {
        self.quantity
    }

    /// Check the selection against a product.
    ///
    /// Products without sizes resolve to the empty size whatever was
    /// selected. Stock is only checked when the product tracks it.
    ///
    /// # Errors
    ///
    /// Returns a [`SelectionError`] if a required size is missing, the size
    /// is not offered, or the quantity exceeds tracked stock.
    pub fn validate(&self, product: &Product) -> Result<(Size, Quantity), SelectionError> {
        let size = if product.has_sizes() {
            let size = self
                .size
                .clone()
                .filter(|size| !size.is_none())
                .ok_or(SelectionError::SizeRequired)?;
            if !product.offers_size(&size) {
                return Err(SelectionError::UnknownSize {
                    product_id: product.id.clone(),
                    size,
                });
            }
            size
        } else {
            Size::none()
        };

        if !product.in_stock_for(self.quantity) {
            return Err(SelectionError::ExceedsStock {
                available: product.stock.unwrap_or_default(),
            });
        }

        Ok((size, self.quantity))
    }
}
