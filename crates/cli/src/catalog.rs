//! Catalog loading for the CLI.
//!
//! The core crate keeps catalog data abstract behind the `Catalog` trait;
//! reading product files from disk is this binary's job.

use std::fs;
use std::path::Path;

use oceanpro_core::{Product, StaticCatalog};
use thiserror::Error;

/// Errors raised while loading a catalog file.
#[derive(Debug, Error)]
pub enum CatalogFileError {
    /// The file could not be read.
    #[error("cannot read catalog file: {0}")]
    Io(#[from] std::io::Error),

    /// The file is not a JSON array of products.
    #[error("cannot parse catalog file: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Load a catalog from a JSON file holding an array of products:
///
/// ```json
/// [{"id": "p-101", "name": "Ocean Tee", "unit_price": "24.00", "stock_ceiling": 42}]
/// ```
///
/// # Errors
///
/// Returns [`CatalogFileError`] if the file is unreadable or malformed.
/// Unlike cart state, a broken catalog is a hard error: silently selling
/// from an empty catalog would price every line at zero.
pub fn load_catalog(path: &Path) -> Result<StaticCatalog, CatalogFileError> {
    let raw = fs::read_to_string(path)?;
    let products: Vec<Product> = serde_json::from_str(&raw)?;
    Ok(StaticCatalog::new(products))
}
