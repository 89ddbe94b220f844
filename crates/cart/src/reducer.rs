//! Pure cart state transition function.

use crate::action::CartAction;
use crate::state::CartState;

/// Apply one action to a state, returning the next state.
///
/// Pure and deterministic: the input state is never mutated, the catalog is
/// never consulted, and no output entry ever holds a zero quantity. Unknown
/// product ids are valid keys here; whether they still resolve is decided at
/// view-build time.
#[must_use]
pub fn apply(state: &CartState, action: &CartAction) -> CartState {
    match action {
        CartAction::AddItem { id, qty } => {
            if *qty == 0 {
                return state.clone();
            }
            let mut next = state.clone();
            let held = next.get(id).copied().unwrap_or(0);
            next.insert(id.clone(), held.saturating_add(*qty));
            next
        }
        CartAction::RemoveItem { id } => {
            let mut next = state.clone();
            // shift_remove keeps the remaining entries in insertion order.
            next.shift_remove(id);
            next
        }
        CartAction::UpdateQty { id, qty } => {
            let mut next = state.clone();
            if *qty == 0 {
                next.shift_remove(id);
            } else {
                next.insert(id.clone(), *qty);
            }
            next
        }
        CartAction::Clear => CartState::new(),
    }
}
