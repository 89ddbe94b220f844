//! Best-effort durable persistence for cart state.
//!
//! One fixed storage key holds the serialized quantity map as a JSON object
//! of string keys to positive integers, e.g. `{"p-101":2,"p-303":1}`. No
//! version tag is stored; any payload that fails to parse as that shape is
//! treated as absent, so corrupt or legacy data self-heals to an empty cart
//! instead of crashing rehydration.
//!
//! This module is the cart engine's only side-effect boundary. Failures
//! never cross [`CartStore::load`] or [`CartStore::save`]; they are logged
//! at `warn` and degraded to the safe default.

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;

use thiserror::Error;
use tracing::warn;

use crate::state::CartState;

/// Storage key the cart state lives under.
pub const CART_STORAGE_KEY: &str = "oceanpro.cart.v1";

/// Errors raised by storage backends.
///
/// These stay internal to the store adapter: `load`/`save` swallow them
/// after logging, because persistence is an optimization rather than a
/// correctness requirement of the in-memory session.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Underlying filesystem operation failed.
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// In-memory store lock was poisoned by a panicking holder.
    #[error("storage lock poisoned")]
    Poisoned,
}

/// A synchronous fixed-key string store.
///
/// The durable-storage analog of the browser's local storage: keys map to
/// string payloads, reads of missing keys yield `None`, and writes replace
/// the whole value.
pub trait StorageBackend {
    /// Read the payload stored under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] if the underlying store cannot be read.
    fn read(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Replace the payload stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] if the underlying store rejects the write
    /// (quota exceeded, store unavailable).
    fn write(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

impl<B: StorageBackend + ?Sized> StorageBackend for &B {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).read(key)
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).write(key, value)
    }
}

/// Volatile in-memory backend. The default for tests and embedded use.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryBackend {
    /// Create an empty in-memory backend.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl StorageBackend for MemoryBackend {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        let entries = self.entries.lock().map_err(|_| StorageError::Poisoned)?;
        Ok(entries.get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut entries = self.entries.lock().map_err(|_| StorageError::Poisoned)?;
        entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

/// Durable backend keeping one file per key under a root directory.
#[derive(Debug, Clone)]
pub struct FileBackend {
    root: PathBuf,
}

impl FileBackend {
    /// Create a backend rooted at `root`. The directory is created lazily
    /// on first write.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.root.join(key)
    }
}

impl StorageBackend for FileBackend {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(raw) => Ok(Some(raw)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        fs::create_dir_all(&self.root)?;
        // Write-then-rename so a crash mid-write cannot leave a torn payload
        // under the live key.
        let tmp = self.path_for(&format!("{key}.tmp"));
        fs::write(&tmp, value)?;
        fs::rename(&tmp, self.path_for(key))?;
        Ok(())
    }
}

/// The persistence bridge: serializes cart state under [`CART_STORAGE_KEY`].
#[derive(Debug)]
pub struct CartStore<B: StorageBackend> {
    backend: B,
    key: &'static str,
}

impl<B: StorageBackend> CartStore<B> {
    /// Wrap a backend, scoping all traffic under the fixed cart key.
    #[must_use]
    pub const fn new(backend: B) -> Self {
        Self {
            backend,
            key: CART_STORAGE_KEY,
        }
    }

    /// Rehydrate the persisted quantity map.
    ///
    /// Returns the empty map when the key is absent, the backend fails, or
    /// the payload does not match the expected shape (a JSON object of
    /// string keys to positive integers). Never raises to the caller.
    #[must_use]
    pub fn load(&self) -> CartState {
        let raw = match self.backend.read(self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return CartState::new(),
            Err(e) => {
                warn!(key = self.key, error = %e, "cart state unreadable, starting empty");
                return CartState::new();
            }
        };

        decode_state(&raw).unwrap_or_else(|| {
            warn!(key = self.key, "persisted cart state malformed, starting empty");
            CartState::new()
        })
    }

    /// Persist the full quantity map, replacing the previous payload.
    ///
    /// Write failures are logged and discarded: the in-memory state remains
    /// the source of truth for the current session.
    pub fn save(&self, state: &CartState) {
        let payload = match serde_json::to_string(state) {
            Ok(payload) => payload,
            Err(e) => {
                warn!(key = self.key, error = %e, "cart state serialization failed, skipping save");
                return;
            }
        };

        if let Err(e) = self.backend.write(self.key, &payload) {
            warn!(key = self.key, error = %e, "cart state write failed, keeping in-memory state");
        }
    }
}

/// Decode a persisted payload, enforcing the schema explicitly.
///
/// `None` means the payload as a whole is rejected: not JSON, not an
/// object, a non-integer or out-of-range value, or a zero quantity (the
/// state invariant forbids stored zeroes).
fn decode_state(raw: &str) -> Option<CartState> {
    let state: CartState = serde_json::from_str(raw).ok()?;
    if state.values().any(|&qty| qty == 0) {
        return None;
    }
    Some(state)
}
