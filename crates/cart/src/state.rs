//! The cart's core state.

use indexmap::IndexMap;
use oceanpro_core::ProductId;

/// Quantity map: product id to a strictly positive unit count.
///
/// Insertion order is part of the contract - derived views list lines in the
/// order products first entered the cart, and removals do not reorder the
/// survivors. A key with quantity zero must never exist; the reducer removes
/// entries instead of storing zero, and the store adapter rejects persisted
/// payloads that violate the shape.
///
/// State is only ever produced by [`reducer::apply`](crate::reducer::apply)
/// (or rehydrated by [`CartStore::load`](crate::store::CartStore::load),
/// which validates the same invariant).
pub type CartState = IndexMap<ProductId, u32>;
