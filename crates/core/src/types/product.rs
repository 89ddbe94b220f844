//! Catalog product record.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::id::ProductId;

/// A product as published by the catalog.
///
/// The cart treats products as read-only reference data: it stores only
/// product ids and quantities, and resolves the rest of the row through a
/// [`Catalog`](crate::catalog::Catalog) lookup when a view is built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Opaque catalog identifier.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Unit price in the store currency. Non-negative.
    pub unit_price: Decimal,
    /// Units available to order. A display hint, not a reservation.
    pub stock_ceiling: u32,
}

impl Product {
    /// Clamp a requested quantity to the orderable range `1..=stock_ceiling`.
    ///
    /// This is the same clamp the storefront quantity stepper applies; cart
    /// state transitions do not enforce it.
    #[must_use]
    pub fn clamp_quantity(&self, qty: u32) -> u32 {
        qty.clamp(1, self.stock_ceiling.max(1))
    }
}
