//! Rupee-denominated money value object.
//!
//! Prices arrive from the catalog as display strings (`"₹750"`), so parsing
//! and formatting live here, next to the arithmetic, instead of being
//! re-implemented at every call site. Amounts are exact decimals; float
//! arithmetic never touches money.

use core::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};

/// Currency symbol for every external representation. Single-currency store.
pub const CURRENCY_SYMBOL: &str = "₹";

/// A non-negative rupee amount with at most two fractional digits.
///
/// Construction validates, so any `Money` in the system is well-formed.
/// Equality is numeric: `₹12.5` and `₹12.50` compare equal.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(Decimal);

impl Money {
    /// Zero rupees.
    pub fn zero() -> Self {
        Self(Decimal::ZERO)
    }

    /// Validate and wrap a raw decimal amount.
    ///
    /// Rejects negative amounts and more than two fractional digits.
    pub fn new(amount: Decimal) -> DomainResult<Self> {
        if amount.is_sign_negative() {
            return Err(DomainError::invalid_amount(format!(
                "amount must not be negative: {amount}"
            )));
        }
        if amount.scale() > 2 {
            return Err(DomainError::invalid_amount(format!(
                "amount must have at most two fractional digits: {amount}"
            )));
        }
        Ok(Self(amount))
    }

    /// Parse a display-formatted amount such as `"₹750"`, `"750"` or `"₹12.50"`.
    ///
    /// One leading currency symbol and surrounding whitespace are tolerated.
    /// Everything else fails with [`DomainError::InvalidAmount`]: empty input,
    /// non-numeric text, negative amounts, more than two fractional digits,
    /// and grouping separators (`"₹1,200"` is rejected, never misread).
    pub fn parse(raw: &str) -> DomainResult<Self> {
        let trimmed = raw.trim();
        let digits = trimmed.strip_prefix(CURRENCY_SYMBOL).unwrap_or(trimmed).trim();

        if digits.is_empty() {
            return Err(DomainError::invalid_amount("empty amount"));
        }

        let amount = Decimal::from_str(digits)
            .map_err(|e| DomainError::invalid_amount(format!("{digits:?}: {e}")))?;

        Self::new(amount)
    }

    /// Raw decimal value.
    pub fn amount(&self) -> Decimal {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Multiply by a quantity, rounding half-up to two decimal places.
    pub fn multiply(&self, quantity: u32) -> Self {
        let product = self.0 * Decimal::from(quantity);
        Self(product.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero))
    }

    /// Fixed two-decimal rendering used for line totals and grand totals
    /// (`₹2250.00`, `₹0.00`).
    pub fn format_fixed(&self) -> String {
        format!("{CURRENCY_SYMBOL}{:.2}", self.0)
    }
}

/// Canonical rendering: whole amounts drop their fractional digits (`₹750`),
/// everything else keeps its natural scale (`₹12.50`).
impl core::fmt::Display for Money {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        if self.0.fract().is_zero() {
            write!(f, "{CURRENCY_SYMBOL}{}", self.0.normalize())
        } else {
            write!(f, "{CURRENCY_SYMBOL}{}", self.0)
        }
    }
}

impl core::ops::Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Money {
        Money(self.0 + rhs.0)
    }
}

impl core::iter::Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::zero(), core::ops::Add::add)
    }
}
