//! Cart commands: mutate and inspect the locally persisted cart.

use oceanpro_cart::{Cart, CartView, FileBackend};
use oceanpro_core::{ProductId, StaticCatalog, format_usd};

use crate::catalog::load_catalog;
use crate::config::CliConfig;

/// Build the cart facade the commands operate on: file-backed store rooted
/// at the configured state directory, catalog from the configured file or
/// the bundled demo set.
fn open_cart(config: &CliConfig) -> Result<Cart<FileBackend, StaticCatalog>, Box<dyn std::error::Error>> {
    let catalog = match &config.catalog_path {
        Some(path) => load_catalog(path)?,
        None => StaticCatalog::demo(),
    };
    let backend = FileBackend::new(&config.state_dir);
    Ok(Cart::new(backend, catalog))
}

/// Add `qty` units of a product.
pub fn add(config: &CliConfig, id: &str, qty: u32) -> Result<(), Box<dyn std::error::Error>> {
    let id = ProductId::parse(id)?;
    let mut cart = open_cart(config)?;
    cart.add_item(id.clone(), qty);
    tracing::info!("Added {qty} x {id}");
    render(&cart.view());
    Ok(())
}

/// Remove a product entirely.
pub fn remove(config: &CliConfig, id: &str) -> Result<(), Box<dyn std::error::Error>> {
    let id = ProductId::parse(id)?;
    let mut cart = open_cart(config)?;
    cart.remove_item(id.clone());
    tracing::info!("Removed {id}");
    render(&cart.view());
    Ok(())
}

/// Set a product's quantity exactly (zero removes it).
pub fn update(config: &CliConfig, id: &str, qty: u32) -> Result<(), Box<dyn std::error::Error>> {
    let id = ProductId::parse(id)?;
    let mut cart = open_cart(config)?;
    cart.update_qty(id.clone(), qty);
    tracing::info!("Set {id} to {qty}");
    render(&cart.view());
    Ok(())
}

/// Empty the cart.
pub fn clear(config: &CliConfig) -> Result<(), Box<dyn std::error::Error>> {
    let mut cart = open_cart(config)?;
    cart.clear();
    tracing::info!("Cart cleared");
    Ok(())
}

/// Show the current cart view.
pub fn show(config: &CliConfig) -> Result<(), Box<dyn std::error::Error>> {
    let cart = open_cart(config)?;
    render(&cart.view());
    Ok(())
}

/// Render a cart view, one line per item, the way the storefront cart page
/// lays it out: name, quantity, line total, then the aggregates.
fn render(view: &CartView) {
    if view.is_empty() {
        tracing::info!("Cart is empty");
        return;
    }

    for line in &view.items {
        match &line.product {
            Some(product) => tracing::info!(
                "  {} x {} - {}",
                product.name,
                line.quantity,
                format_usd(line.line_total)
            ),
            None => tracing::info!("  {} x {} - unavailable", line.id, line.quantity),
        }
    }
    tracing::info!(
        "Items: {}, Subtotal: {}",
        view.item_count,
        format_usd(view.subtotal)
    );
}
