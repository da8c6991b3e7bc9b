//! `agrimart-catalog` — catalog collaborator contract.
//!
//! The cart does not own product data. This crate defines the shapes the
//! storefront catalog hands over when a shopper picks "add to cart"; after
//! that handoff the cart never calls back into the catalog.

pub mod product;

pub use product::{Product, ProductId, Variant, VariantLabel};
