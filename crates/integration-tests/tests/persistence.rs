//! Durable state across facade instances: reload fidelity, corruption
//! healing, and ownership of the single storage key.

use std::fs;

use oceanpro_core::ProductId;
use oceanpro_integration_tests::TestContext;

const STATE_FILE: &str = "oceanpro.cart.v1";

fn id(s: &str) -> ProductId {
    ProductId::parse(s).expect("test ids are non-empty")
}

#[test]
fn test_cart_survives_reload() {
    let ctx = TestContext::new();

    {
        let mut cart = ctx.open_cart();
        cart.add_item(id("p-101"), 2);
        cart.add_item(id("p-303"), 1);
    }

    // A fresh facade over the same store is a page reload.
    let revived = ctx.open_cart();
    let view = revived.view();
    assert_eq!(view.item_count, 3);
    // 2 * 24.00 + 1 * 59.00 = 107.00
    assert_eq!(view.subtotal.to_string(), "107.00");
}

#[test]
fn test_reload_preserves_line_order() {
    let ctx = TestContext::new();

    {
        let mut cart = ctx.open_cart();
        cart.add_item(id("p-303"), 1);
        cart.add_item(id("p-101"), 1);
        cart.add_item(id("p-401"), 1);
    }

    let revived = ctx.open_cart();
    let revived_view = revived.view();
    let ids: Vec<&str> = revived_view.items.iter().map(|l| l.id.as_str()).collect();
    assert_eq!(ids, ["p-303", "p-101", "p-401"]);
}

#[test]
fn test_corrupt_payload_heals_to_empty_cart() {
    let ctx = TestContext::new();
    fs::create_dir_all(ctx.state_dir()).expect("state dir");
    fs::write(ctx.state_dir().join(STATE_FILE), "not json at all").expect("write");

    let cart = ctx.open_cart();
    assert!(cart.state().is_empty());
}

#[test]
fn test_legacy_shaped_payload_heals_to_empty_cart() {
    let ctx = TestContext::new();
    fs::create_dir_all(ctx.state_dir()).expect("state dir");
    // An older client persisted a list of line objects; the current schema
    // is a flat id -> quantity object, so this must load as absent.
    fs::write(
        ctx.state_dir().join(STATE_FILE),
        r#"[{"id": "p-101", "qty": 2}]"#,
    )
    .expect("write");

    let cart = ctx.open_cart();
    assert!(cart.state().is_empty());
}

#[test]
fn test_invalid_quantity_payload_heals_to_empty_cart() {
    let ctx = TestContext::new();
    fs::create_dir_all(ctx.state_dir()).expect("state dir");
    fs::write(ctx.state_dir().join(STATE_FILE), r#"{"p-101": -2}"#).expect("write");

    let cart = ctx.open_cart();
    assert!(cart.state().is_empty());
}

#[test]
fn test_healed_cart_overwrites_corrupt_payload_on_next_dispatch() {
    let ctx = TestContext::new();
    fs::create_dir_all(ctx.state_dir()).expect("state dir");
    fs::write(ctx.state_dir().join(STATE_FILE), "garbage").expect("write");

    let mut cart = ctx.open_cart();
    cart.add_item(id("p-101"), 1);

    let raw = fs::read_to_string(ctx.state_dir().join(STATE_FILE)).expect("read");
    assert_eq!(raw, r#"{"p-101":1}"#);
}

#[test]
fn test_last_write_wins_across_instances() {
    let ctx = TestContext::new();

    let mut first = ctx.open_cart();
    let mut second = ctx.open_cart();

    first.add_item(id("p-101"), 1);
    second.add_item(id("p-201"), 5);

    // Each save serializes the writer's full state; the second instance's
    // payload replaces the first's wholesale.
    let revived = ctx.open_cart();
    assert_eq!(revived.state().get(&id("p-201")), Some(&5));
    assert_eq!(revived.state().get(&id("p-101")), None);
}
