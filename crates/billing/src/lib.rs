//! `agrimart-billing` — order summaries and checkout dispatch.
//!
//! Pure projections over cart state: the numbered memo a shopper reviews
//! before ordering, and the WhatsApp deep link that carries it to the store
//! owner. Nothing here mutates the cart or performs IO.

pub mod summary;
pub mod whatsapp;


pub use summary::{Customer, OrderSummary, SummaryLine};
pub use whatsapp::WhatsappCheckout;
