//! OceanPro Core - Shared types library.
//!
//! This crate provides common types used across all OceanPro cart components:
//! - `cart` - The cart state engine (reducer, derived views, persistence)
//! - `cli` - Command-line tools for inspecting and mutating a local cart
//!
//! # Architecture
//!
//! The core crate contains only types and traits - no I/O, no storage access.
//! This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe ids, money helpers, and products
//! - [`catalog`] - The read-only product catalog contract and an in-memory impl

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod catalog;
pub mod types;

pub use catalog::{Catalog, StaticCatalog};
pub use types::*;
