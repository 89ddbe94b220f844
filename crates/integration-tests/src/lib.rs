//! Integration tests for OceanPro.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p oceanpro-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `cart_scenarios` - End-to-end cart flows through the facade
//! - `persistence` - Durable state across facade instances, corruption healing
//!
//! Tests are hermetic: each context gets its own temporary state directory
//! and the bundled demo catalog, so suites can run in parallel.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::Path;

use oceanpro_cart::{Cart, FileBackend};
use oceanpro_core::StaticCatalog;
use tempfile::TempDir;

/// A cart wired to a throwaway on-disk store and the demo catalog.
///
/// Dropping the context deletes the state directory. Re-opening a cart over
/// the same context simulates a page reload.
pub struct TestContext {
    state_dir: TempDir,
}

impl TestContext {
    /// Create a context with a fresh, empty state directory.
    ///
    /// # Panics
    ///
    /// Panics if a temporary directory cannot be created.
    #[must_use]
    pub fn new() -> Self {
        Self {
            state_dir: TempDir::new().expect("failed to create temp state dir"),
        }
    }

    /// Open a cart over this context's store, rehydrating persisted state.
    #[must_use]
    pub fn open_cart(&self) -> Cart<FileBackend, StaticCatalog> {
        Cart::new(FileBackend::new(self.state_dir.path()), StaticCatalog::demo())
    }

    /// The state directory backing the file store.
    #[must_use]
    pub fn state_dir(&self) -> &Path {
        self.state_dir.path()
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}
