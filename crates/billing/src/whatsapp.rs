//! WhatsApp checkout dispatch.
//!
//! The storefront hands a finished order to the shop owner as a prefilled
//! WhatsApp chat message. Everything here is pure string building; opening
//! the link is the caller's side effect.

use crate::summary::OrderSummary;

const SEPARATOR: &str = "--------------------------";

/// Dispatch target: the store's WhatsApp number in international format
/// without `+` (e.g. `919876543210`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WhatsappCheckout {
    phone: String,
}

impl WhatsappCheckout {
    pub fn new(phone: impl Into<String>) -> Self {
        Self {
            phone: phone.into(),
        }
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    /// The outbound order message body.
    pub fn message(&self, summary: &OrderSummary) -> String {
        let mut lines = vec![
            "Order Details:".to_string(),
            format!("Name: {}", summary.customer.name),
            format!("Address: {}", summary.customer.address),
            format!("Phone: {}", summary.customer.phone),
            format!("Pincode: {}", summary.customer.pincode),
            SEPARATOR.to_string(),
            "Items Ordered:".to_string(),
        ];

        for line in &summary.lines {
            lines.push(format!(
                "{}. {} - {} x {} = {}",
                line.index, line.title, line.variant_label, line.quantity, line.line_total
            ));
        }

        lines.push(SEPARATOR.to_string());
        lines.push(format!("Grand Total: {}", summary.grand_total));
        lines.join("\n")
    }

    /// Deep link that opens a chat with the order message prefilled.
    pub fn order_link(&self, summary: &OrderSummary) -> String {
        format!(
            "https://wa.me/{}?text={}",
            self.phone,
            urlencoding::encode(&self.message(summary))
        )
    }
}
