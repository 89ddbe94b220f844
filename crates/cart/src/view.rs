//! Derived, display-ready cart projections.
//!
//! Nothing here is stored: a [`CartView`] is recomputed from the quantity
//! map and the catalog whenever a caller asks for one.

use oceanpro_core::{Catalog, Product, ProductId, round_money};
use rust_decimal::Decimal;

use crate::state::CartState;

/// One resolved cart row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineItem {
    /// Product id held in the cart.
    pub id: ProductId,
    /// Units held. Always positive.
    pub quantity: u32,
    /// Resolved catalog row, or `None` if the catalog no longer lists the
    /// id. The line still appears so the quantity entry is not silently
    /// lost; the UI decides how to render an unavailable product.
    pub product: Option<Product>,
    /// `unit_price * quantity` rounded to two decimal places, or zero when
    /// the product is unresolved.
    pub line_total: Decimal,
}

/// The full derived snapshot the UI renders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartView {
    /// Lines in cart insertion order.
    pub items: Vec<LineItem>,
    /// Total units across all lines, unresolved products included.
    pub item_count: u64,
    /// Sum of line totals, rounded to two decimal places.
    pub subtotal: Decimal,
}

impl CartView {
    /// The view of an empty cart.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            items: Vec::new(),
            item_count: 0,
            subtotal: Decimal::ZERO,
        }
    }

    /// Whether the cart holds no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Project a quantity map into a [`CartView`].
///
/// Pure: the only inputs are the state and the catalog, and the catalog is
/// read-only. Each line total is rounded once; the subtotal is the rounded
/// sum of the already-rounded line totals, absorbing any accumulation drift.
/// A missing catalog entry still counts toward `item_count` - the user's
/// intent was to hold that quantity - but contributes nothing to `subtotal`.
#[must_use]
pub fn build_view(state: &CartState, catalog: &impl Catalog) -> CartView {
    let items: Vec<LineItem> = state
        .iter()
        .map(|(id, &quantity)| {
            let product = catalog.lookup(id);
            let line_total = product.as_ref().map_or(Decimal::ZERO, |p| {
                round_money(p.unit_price * Decimal::from(quantity))
            });
            LineItem {
                id: id.clone(),
                quantity,
                product,
                line_total,
            }
        })
        .collect();

    let item_count = items.iter().map(|line| u64::from(line.quantity)).sum();
    let subtotal = round_money(items.iter().map(|line| line.line_total).sum());

    CartView {
        items,
        item_count,
        subtotal,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use oceanpro_core::StaticCatalog;

    use super::*;

    fn id(s: &str) -> ProductId {
        ProductId::parse(s).unwrap()
    }

    fn state_of(entries: &[(&str, u32)]) -> CartState {
        entries.iter().map(|&(s, q)| (id(s), q)).collect()
    }

    #[test]
    fn test_empty_state_empty_view() {
        let view = build_view(&CartState::new(), &StaticCatalog::demo());
        assert!(view.is_empty());
        assert_eq!(view.item_count, 0);
        assert_eq!(view.subtotal, Decimal::ZERO);
    }

    #[test]
    fn test_single_line_totals() {
        let view = build_view(&state_of(&[("p-101", 2)]), &StaticCatalog::demo());

        assert_eq!(view.item_count, 2);
        assert_eq!(view.subtotal.to_string(), "48.00");
        assert_eq!(view.items.len(), 1);

        let line = view.items.first().unwrap();
        assert_eq!(line.quantity, 2);
        assert_eq!(line.line_total.to_string(), "48.00");
        assert_eq!(line.product.as_ref().unwrap().name, "Ocean Tee");
    }

    #[test]
    fn test_lines_follow_insertion_order() {
        let view = build_view(
            &state_of(&[("p-301", 1), ("p-101", 1), ("p-201", 1)]),
            &StaticCatalog::demo(),
        );
        let ids: Vec<&str> = view.items.iter().map(|l| l.id.as_str()).collect();
        assert_eq!(ids, ["p-301", "p-101", "p-201"]);
    }

    #[test]
    fn test_unresolved_product_counts_but_costs_nothing() {
        let view = build_view(
            &state_of(&[("unknown-product-id", 1)]),
            &StaticCatalog::demo(),
        );

        assert_eq!(view.item_count, 1);
        assert_eq!(view.subtotal, Decimal::ZERO);

        let line = view.items.first().unwrap();
        assert!(line.product.is_none());
        assert_eq!(line.line_total, Decimal::ZERO);
    }

    #[test]
    fn test_unresolved_line_mixes_with_resolved() {
        let view = build_view(
            &state_of(&[("p-101", 2), ("unknown-product-id", 3)]),
            &StaticCatalog::demo(),
        );

        assert_eq!(view.item_count, 5);
        assert_eq!(view.subtotal.to_string(), "48.00");
    }

    #[test]
    fn test_subtotal_is_rounded_sum_of_line_totals() {
        let catalog = StaticCatalog::new([Product {
            id: id("p-odd"),
            name: "Odd Price".to_owned(),
            unit_price: "0.335".parse().unwrap(),
            stock_ceiling: 10,
        }]);
        let view = build_view(&state_of(&[("p-odd", 3)]), &catalog);

        // 0.335 * 3 = 1.005, rounded once per line to 1.01.
        assert_eq!(view.items.first().unwrap().line_total.to_string(), "1.01");
        let expected = round_money(view.items.iter().map(|l| l.line_total).sum());
        assert_eq!(view.subtotal, expected);
    }

    #[test]
    fn test_multi_line_subtotal() {
        // 2 * 24.00 + 1 * 19.50 + 3 * 16.00 = 115.50
        let view = build_view(
            &state_of(&[("p-101", 2), ("p-201", 1), ("p-202", 3)]),
            &StaticCatalog::demo(),
        );
        assert_eq!(view.item_count, 6);
        assert_eq!(view.subtotal.to_string(), "115.50");
    }
}
