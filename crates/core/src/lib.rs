//! Shopfront Core - Shared domain types.
//!
//! This crate provides the types used across all Shopfront components:
//! - `storefront` - Catalog, collection browsing, cart store and order summary
//! - `cli` - Command-line tool for browsing catalogs and quoting carts
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no logging, no global state.
//! This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for product IDs, sizes, quantities, prices and products

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
