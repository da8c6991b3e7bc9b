use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use agrimart_cart::Cart;

/// Checkout contact details captured from the order form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub name: String,
    pub address: String,
    pub phone: String,
    pub pincode: String,
}

/// One numbered bill line, display-ready.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryLine {
    /// 1-based position, cart insertion order at build time.
    pub index: u32,
    pub title: String,
    pub variant_label: String,
    pub quantity: u32,
    /// Canonical rendering (`₹750`).
    pub unit_price: String,
    /// Always two decimals (`₹2250.00`).
    pub line_total: String,
}

/// Immutable order memo projected from a cart.
///
/// Building a summary reads the cart and nothing else. An empty cart yields
/// an empty memo with a `₹0.00` total; refusing to check out an empty cart
/// is the caller's job, not the builder's.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderSummary {
    pub customer: Customer,
    pub lines: Vec<SummaryLine>,
    /// Always two decimals (`₹2700.00`).
    pub grand_total: String,
    pub issued_at: DateTime<Utc>,
}

impl OrderSummary {
    /// Project the cart's current state into a numbered memo.
    pub fn build(cart: &Cart, customer: Customer, issued_at: DateTime<Utc>) -> Self {
        let lines = cart
            .items()
            .iter()
            .enumerate()
            .map(|(i, item)| SummaryLine {
                index: (i as u32) + 1,
                title: item.title.clone(),
                variant_label: item.variant_label.to_string(),
                quantity: item.quantity,
                unit_price: item.unit_price.to_string(),
                line_total: item.line_total().format_fixed(),
            })
            .collect();

        Self {
            customer,
            lines,
            grand_total: cart.grand_total().format_fixed(),
            issued_at,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Plain-text memo for terminal display or logs; the bill date renders
/// day-first (`14/03/2025`) as on the printed bills.
impl core::fmt::Display for OrderSummary {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "Order Summary")?;
        writeln!(f, "Dated: {}", self.issued_at.format("%d/%m/%Y"))?;
        writeln!(f)?;
        writeln!(f, "Customer: {}", self.customer.name)?;
        writeln!(f, "Address: {}", self.customer.address)?;
        writeln!(f, "Phone: {}", self.customer.phone)?;
        writeln!(f, "Pincode: {}", self.customer.pincode)?;
        writeln!(f)?;
        for line in &self.lines {
            writeln!(
                f,
                "{}. {} - {} x {} = {}",
                line.index, line.title, line.variant_label, line.quantity, line.line_total
            )?;
        }
        if !self.lines.is_empty() {
            writeln!(f)?;
        }
        write!(f, "Grand Total: {}", self.grand_total)
    }
}
