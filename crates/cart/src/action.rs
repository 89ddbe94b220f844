//! Cart state transitions.

use oceanpro_core::ProductId;
use serde::{Deserialize, Serialize};

/// The closed set of cart state transitions.
///
/// Actions are plain data: constructing one has no effect until it is passed
/// to [`reducer::apply`](crate::reducer::apply), usually via
/// [`Cart::dispatch`](crate::facade::Cart::dispatch). Quantities are unsigned
/// throughout, so a negative quantity cannot be expressed; a zero quantity is
/// handled per variant (no-op for `AddItem`, removal for `UpdateQty`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CartAction {
    /// Add `qty` units of a product on top of whatever is already held.
    /// Adding an id not previously present creates a new entry.
    AddItem {
        /// Product to add.
        id: ProductId,
        /// Units to add. Zero is a silent no-op.
        qty: u32,
    },
    /// Drop a product from the cart entirely, regardless of prior presence.
    RemoveItem {
        /// Product to remove.
        id: ProductId,
    },
    /// Set a product's quantity to exactly `qty` (absolute, not additive).
    UpdateQty {
        /// Product to update.
        id: ProductId,
        /// New quantity. Zero removes the entry.
        qty: u32,
    },
    /// Discard every entry.
    Clear,
}

impl CartAction {
    /// `AddItem` with the storefront's default quantity of one.
    #[must_use]
    pub fn add_one(id: ProductId) -> Self {
        Self::AddItem { id, qty: 1 }
    }
}
