//! Cart change notifications.
//!
//! Replaces implicit "context" propagation with an explicit observer feed:
//! whoever renders the cart subscribes and re-reads state when an event
//! arrives. Best-effort fan-out, no IO, no async.

use std::sync::mpsc::{Receiver, RecvError, RecvTimeoutError, TryRecvError};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::item::LineItemKey;

/// Notification emitted after every successful cart mutation.
///
/// Quantities carry the resulting state, not the delta, so consumers can
/// stay stateless.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CartEvent {
    ItemAdded { key: LineItemKey, quantity: u32 },
    QuantityAdjusted { key: LineItemKey, quantity: u32 },
    ItemRemoved { key: LineItemKey },
    Cleared,
}

impl CartEvent {
    /// Stable event name (e.g. `"cart.item.added"`).
    pub fn event_type(&self) -> &'static str {
        match self {
            CartEvent::ItemAdded { .. } => "cart.item.added",
            CartEvent::QuantityAdjusted { .. } => "cart.quantity.adjusted",
            CartEvent::ItemRemoved { .. } => "cart.item.removed",
            CartEvent::Cleared => "cart.cleared",
        }
    }
}

/// A subscription to one cart's change feed.
///
/// Backed by an in-memory channel; dropping the subscription unsubscribes on
/// the next publish.
#[derive(Debug)]
pub struct CartSubscription {
    receiver: Receiver<CartEvent>,
}

impl CartSubscription {
    pub(crate) fn new(receiver: Receiver<CartEvent>) -> Self {
        Self { receiver }
    }

    /// Block until the next event is available.
    pub fn recv(&self) -> Result<CartEvent, RecvError> {
        self.receiver.recv()
    }

    /// Try to receive an event without blocking.
    pub fn try_recv(&self) -> Result<CartEvent, TryRecvError> {
        self.receiver.try_recv()
    }

    /// Block for up to `timeout` waiting for an event.
    pub fn recv_timeout(&self, timeout: Duration) -> Result<CartEvent, RecvTimeoutError> {
        self.receiver.recv_timeout(timeout)
    }
}
