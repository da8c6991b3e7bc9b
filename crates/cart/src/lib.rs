//! `agrimart-cart` — in-memory shopping cart engine.
//!
//! Single-owner, synchronous cart state: ordered line items keyed by product
//! and variant, snapshot pricing, merge-on-add, totals, and change
//! notification for whatever presentation layer holds the cart.

pub mod cart;
pub mod event;
pub mod item;

pub use cart::Cart;
pub use event::{CartEvent, CartSubscription};
pub use item::{LineItem, LineItemKey};
