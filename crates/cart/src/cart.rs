//! The cart engine: ordered entries, merge-by-identity, totals.

use std::sync::mpsc;

use serde::{Deserialize, Serialize};

use agrimart_catalog::{ProductId, VariantLabel};
use agrimart_core::{CartId, DomainError, DomainResult, Money};

use crate::event::{CartEvent, CartSubscription};
use crate::item::{LineItem, LineItemKey};

/// In-memory shopping cart owned by a single session.
///
/// Entries keep insertion order (oldest first) and no two entries share a
/// [`LineItemKey`]. Every quantity in the cart is at least 1; an entry that
/// would reach 0 is removed instead.
///
/// Mutations validate up front. A failing call leaves the cart exactly as it
/// was: version untouched, nothing published. Each successful mutation bumps
/// `version` by one and sends one [`CartEvent`] to every live subscriber.
#[derive(Debug, Serialize, Deserialize)]
pub struct Cart {
    id: CartId,
    entries: Vec<LineItem>,
    version: u64,
    #[serde(skip)]
    observers: Vec<mpsc::Sender<CartEvent>>,
}

impl Cart {
    /// Create an empty cart with a fresh identifier.
    pub fn new() -> Self {
        Self::with_id(CartId::new())
    }

    /// Create an empty cart with a caller-supplied identifier.
    pub fn with_id(id: CartId) -> Self {
        Self {
            id,
            entries: Vec::new(),
            version: 0,
            observers: Vec::new(),
        }
    }

    pub fn id(&self) -> CartId {
        self.id
    }

    /// Monotonically increasing state version; +1 per successful mutation.
    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in insertion order (oldest first).
    pub fn items(&self) -> &[LineItem] {
        &self.entries
    }

    /// Look up one entry by its composite identity.
    pub fn entry(
        &self,
        product_id: &ProductId,
        variant_label: &VariantLabel,
    ) -> Option<&LineItem> {
        self.entries
            .iter()
            .find(|e| e.is_for(product_id, variant_label))
    }

    /// Number of distinct entries (catalog picks).
    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    /// Total units across all entries (the cart-badge number).
    pub fn item_count(&self) -> u64 {
        self.entries.iter().map(|e| u64::from(e.quantity)).sum()
    }

    /// Sum of line totals in entry order.
    pub fn grand_total(&self) -> Money {
        self.entries.iter().map(LineItem::line_total).sum()
    }

    /// Add an item snapshot to the cart.
    ///
    /// An existing entry with the same key absorbs the quantity; its
    /// snapshot fields keep their first-add values so bill lines stay
    /// stable across repeated picks. A new key appends at the end.
    ///
    /// Quantity 0 fails with [`DomainError::InvalidQuantity`]; callers use
    /// [`Cart::remove_item`] for removal, never a zero add.
    pub fn add_item(&mut self, item: LineItem) -> DomainResult<()> {
        if item.quantity == 0 {
            return Err(DomainError::invalid_quantity(0));
        }

        let key = item.key();
        let quantity = match self.position(&key) {
            Some(idx) => {
                let current = self.entries[idx].quantity;
                let merged = current.checked_add(item.quantity).ok_or_else(|| {
                    DomainError::invalid_quantity(
                        i64::from(current) + i64::from(item.quantity),
                    )
                })?;
                self.entries[idx].quantity = merged;
                merged
            }
            None => {
                let quantity = item.quantity;
                self.entries.push(item);
                quantity
            }
        };

        self.commit(CartEvent::ItemAdded { key, quantity });
        Ok(())
    }

    /// Remove the entry with the given composite identity.
    ///
    /// Returns the removed line, or `None` when no entry matches, leaving
    /// the cart untouched (version included). Both key components must
    /// match: removing one package size of a product never touches its
    /// other sizes.
    pub fn remove_item(
        &mut self,
        product_id: &ProductId,
        variant_label: &VariantLabel,
    ) -> Option<LineItem> {
        let idx = self
            .entries
            .iter()
            .position(|e| e.is_for(product_id, variant_label))?;
        let removed = self.entries.remove(idx);

        self.commit(CartEvent::ItemRemoved { key: removed.key() });
        Some(removed)
    }

    /// Apply a signed quantity delta to the entry matching `template`.
    ///
    /// The template's key selects the entry and its snapshot fields seed a
    /// fresh one; the template's own `quantity` is ignored.
    ///
    /// - Existing entry, resulting quantity >= 1: updated in place, position
    ///   unchanged.
    /// - Existing entry, resulting quantity <= 0: the entry is removed.
    /// - No entry and `delta` > 0: added as a fresh line with that quantity
    ///   (the "+" button starting from zero).
    /// - No entry and `delta` <= 0: nothing to do.
    ///
    /// A resulting quantity above `u32::MAX` fails with
    /// [`DomainError::InvalidQuantity`] and changes nothing.
    pub fn adjust_quantity(&mut self, template: &LineItem, delta: i64) -> DomainResult<()> {
        let key = template.key();

        let Some(idx) = self.position(&key) else {
            if delta > 0 {
                let quantity =
                    u32::try_from(delta).map_err(|_| DomainError::invalid_quantity(delta))?;
                let mut fresh = template.clone();
                fresh.quantity = quantity;
                self.entries.push(fresh);
                self.commit(CartEvent::ItemAdded { key, quantity });
            }
            return Ok(());
        };

        let current = i64::from(self.entries[idx].quantity);
        let next = current
            .checked_add(delta)
            .ok_or_else(|| DomainError::invalid_quantity(delta))?;

        if next <= 0 {
            self.entries.remove(idx);
            self.commit(CartEvent::ItemRemoved { key });
            return Ok(());
        }

        let quantity = u32::try_from(next).map_err(|_| DomainError::invalid_quantity(next))?;
        self.entries[idx].quantity = quantity;
        self.commit(CartEvent::QuantityAdjusted { key, quantity });
        Ok(())
    }

    /// Remove every entry.
    ///
    /// Clearing an already-empty cart is a no-op: no version bump, no event.
    pub fn clear(&mut self) {
        if self.entries.is_empty() {
            return;
        }
        self.entries.clear();
        self.commit(CartEvent::Cleared);
    }

    /// Subscribe to this cart's change feed.
    ///
    /// Every successful mutation sends one event to each live subscriber;
    /// dropped subscriptions are pruned on the next publish.
    pub fn subscribe(&mut self) -> CartSubscription {
        let (tx, rx) = mpsc::channel();
        self.observers.push(tx);
        CartSubscription::new(rx)
    }

    fn position(&self, key: &LineItemKey) -> Option<usize> {
        self.entries
            .iter()
            .position(|e| e.is_for(&key.product_id, &key.variant_label))
    }

    /// Record a successful mutation: bump the version, then notify.
    fn commit(&mut self, event: CartEvent) {
        self.version += 1;
        self.publish(event);
    }

    fn publish(&mut self, event: CartEvent) {
        // Drop any dead subscribers while publishing.
        self.observers.retain(|tx| tx.send(event.clone()).is_ok());
    }
}

impl Default for Cart {
    fn default() -> Self {
        Self::new()
    }
}

/// Equality covers observable state only; the observer list is excluded so
/// a no-op can be checked as deep equality against a snapshot.
impl PartialEq for Cart {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id && self.entries == other.entries && self.version == other.version
    }
}

impl Eq for Cart {}

/// Clones carry the observable state; subscriptions stay with the original.
impl Clone for Cart {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            entries: self.entries.clone(),
            version: self.version,
            observers: Vec::new(),
        }
    }
}
