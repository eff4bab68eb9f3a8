//! Order summary derivation.

use rust_decimal::Decimal;
use serde::Serialize;
use shopfront_core::{format_amount, round_currency};

use super::{CartLine, CartStore};
use crate::catalog::Catalog;
use crate::config::PricingConfig;

/// Subtotal, shipping, tax and total for a cart.
///
/// Only `tax` is rounded to cents when derived; the other amounts stay
/// unrounded until [`OrderSummary::display`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OrderSummary {
    pub subtotal: Decimal,
    pub shipping: Decimal,
    pub tax: Decimal,
    pub total: Decimal,
}

/// Display strings for an [`OrderSummary`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryDisplay {
    pub subtotal: String,
    /// `"Free"` when no shipping is charged.
    pub shipping: String,
    pub tax: String,
    pub total: String,
}

impl OrderSummary {
    /// Derive the summary from a subtotal.
    ///
    /// Shipping is waived when the subtotal is strictly above the threshold.
    /// Tax applies to the subtotal only.
    #[must_use]
    pub fn from_subtotal(subtotal: Decimal, pricing: &PricingConfig) -> Self {
        let shipping = if subtotal > pricing.free_shipping_threshold {
            Decimal::ZERO
        } else {
            pricing.shipping_fee
        };
        let tax = round_currency(subtotal * pricing.tax_rate);

        Self {
            subtotal,
            shipping,
            tax,
            total: subtotal + shipping + tax,
        }
    }

    /// Derive the summary from resolved cart lines.
    #[must_use]
    pub fn from_lines(lines: &[CartLine<'_>], pricing: &PricingConfig) -> Self {
        let subtotal = lines.iter().map(|line| line.line_total).sum();
        Self::from_subtotal(subtotal, pricing)
    }

    /// Derive the summary for a cart against a catalog.
    #[must_use]
    pub fn for_cart(cart: &CartStore, catalog: &Catalog, pricing: &PricingConfig) -> Self {
        Self::from_lines(&cart.resolve(catalog), pricing)
    }

    /// Returns `true` if no shipping is charged.
    #[must_use]
    pub fn is_free_shipping(&self) -> bool {
        self.shipping.is_zero()
    }

    /// Format every amount with the currency symbol, rounded half-up to cents.
    #[must_use]
    pub fn display(&self, currency_symbol: &str) -> SummaryDisplay {
        SummaryDisplay {
            subtotal: format_amount(currency_symbol, self.subtotal),
            shipping: if self.is_free_shipping() {
                "Free".to_string()
            } else {
                format_amount(currency_symbol, self.shipping)
            },
            tax: format_amount(currency_symbol, self.tax),
            total: format_amount(currency_symbol, self.total),
        }
    }
}
