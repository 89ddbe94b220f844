//! The composed cart surface the UI layer talks to.

use oceanpro_core::{Catalog, ProductId};

use crate::action::CartAction;
use crate::reducer;
use crate::state::CartState;
use crate::store::{CartStore, StorageBackend};
use crate::view::{self, CartView};

/// The cart's composition root and lifecycle owner.
///
/// A `Cart` is constructed explicitly at one well-defined point and handed
/// to consumers - there is no ambient global instance. Construction seeds
/// the in-memory state from the store once; every dispatch afterwards
/// reduces, replaces the state, and persists the result best-effort.
///
/// Assumption (documented, not guaranteed): one `Cart` instance owns its
/// storage key at a time. Concurrent instances over the same key race on
/// save with last-write-wins interleaving, since each save serializes the
/// full current state rather than a delta.
#[derive(Debug)]
pub struct Cart<B: StorageBackend, C: Catalog> {
    state: CartState,
    store: CartStore<B>,
    catalog: C,
}

impl<B: StorageBackend, C: Catalog> Cart<B, C> {
    /// Build a cart over a storage backend and a catalog, rehydrating any
    /// persisted state. A missing or malformed payload seeds an empty cart.
    #[must_use]
    pub fn new(backend: B, catalog: C) -> Self {
        let store = CartStore::new(backend);
        let state = store.load();
        Self {
            state,
            store,
            catalog,
        }
    }

    /// Apply one action: reduce, replace the in-memory state, persist.
    ///
    /// The in-memory update is synchronous and in dispatch order; the
    /// persistence write is fire-and-forget (failures are swallowed by the
    /// store adapter).
    pub fn dispatch(&mut self, action: &CartAction) {
        self.state = reducer::apply(&self.state, action);
        self.store.save(&self.state);
    }

    /// The current derived view, recomputed from the latest state.
    #[must_use]
    pub fn view(&self) -> CartView {
        view::build_view(&self.state, &self.catalog)
    }

    /// Read-only access to the raw quantity map.
    #[must_use]
    pub const fn state(&self) -> &CartState {
        &self.state
    }

    /// Add `qty` units of a product (zero is a silent no-op).
    pub fn add_item(&mut self, id: ProductId, qty: u32) {
        self.dispatch(&CartAction::AddItem { id, qty });
    }

    /// Drop a product from the cart entirely.
    pub fn remove_item(&mut self, id: ProductId) {
        self.dispatch(&CartAction::RemoveItem { id });
    }

    /// Set a product's quantity exactly (zero removes the entry).
    pub fn update_qty(&mut self, id: ProductId, qty: u32) {
        self.dispatch(&CartAction::UpdateQty { id, qty });
    }

    /// Discard every entry.
    pub fn clear(&mut self) {
        self.dispatch(&CartAction::Clear);
    }
}
