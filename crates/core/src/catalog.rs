//! Read-only product catalog contract.
//!
//! The cart engine never owns catalog data. It resolves product ids through
//! this trait at view-build time, and tolerates ids the catalog no longer
//! knows (delisted products keep their cart line, priced at zero).

use std::collections::HashMap;

use crate::types::{Product, ProductId};

/// A read-only, session-stable product lookup.
///
/// Implementations must be idempotent: the same id returns the same product
/// for as long as the session's catalog is fixed. Lookups are synchronous
/// and side-effect free.
pub trait Catalog {
    /// Resolve a product by id, or `None` if the catalog no longer lists it.
    fn lookup(&self, id: &ProductId) -> Option<Product>;
}

/// An in-memory [`Catalog`] backed by a fixed product set.
///
/// This is the collaborator the CLI and tests use; a storefront would
/// substitute its own implementation over live catalog data.
#[derive(Debug, Clone, Default)]
pub struct StaticCatalog {
    products: HashMap<ProductId, Product>,
}

impl StaticCatalog {
    /// Build a catalog from a product set. Later duplicates win.
    #[must_use]
    pub fn new(products: impl IntoIterator<Item = Product>) -> Self {
        Self {
            products: products
                .into_iter()
                .map(|p| (p.id.clone(), p))
                .collect(),
        }
    }

    /// Number of listed products.
    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Whether the catalog lists no products.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// The OceanPro demo catalog used by the CLI and the test suites.
    #[must_use]
    pub fn demo() -> Self {
        fn product(id: &str, name: &str, unit_price: &str, stock_ceiling: u32) -> Product {
            Product {
                id: ProductId::parse(id).expect("demo ids are non-empty"),
                name: name.to_owned(),
                unit_price: unit_price.parse().expect("demo prices are valid decimals"),
                stock_ceiling,
            }
        }

        Self::new([
            product("p-101", "Ocean Tee", "24.00", 42),
            product("p-102", "Coastal Hoodie", "58.00", 18),
            product("p-201", "Magenta Cap", "19.50", 65),
            product("p-202", "Ocean Tote", "16.00", 80),
            product("p-301", "Wave Earbuds", "89.00", 25),
            product("p-302", "Harbor Power Bank", "39.00", 50),
            product("p-401", "Reef Mug", "14.00", 120),
            product("p-402", "Shoreline Throw", "49.00", 33),
            product("p-403", "Tidal Lamp", "69.00", 17),
            product("p-303", "Compass Tracker", "59.00", 40),
        ])
    }
}

impl Catalog for StaticCatalog {
    fn lookup(&self, id: &ProductId) -> Option<Product> {
        self.products.get(id).cloned()
    }
}

impl<C: Catalog + ?Sized> Catalog for &C {
    fn lookup(&self, id: &ProductId) -> Option<Product> {
        (**self).lookup(id)
    }
}
