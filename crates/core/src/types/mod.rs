//! Core types for Shopfront.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod id;
pub mod price;
pub mod product;
pub mod quantity;
pub mod size;

pub use id::*;
pub use price::{Price, PriceError, format_amount, round_currency};
pub use product::{Category, Product, SubCategory};
pub use quantity::{Quantity, QuantityError};
pub use size::Size;
