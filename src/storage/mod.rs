//! Storage backends for the game SharedStore
//!
//! A backend maps `String` keys to [`StoredValue`]s. Only the in-memory backend
//! ships with the crate; the trait is the seam for anything else a game wants to
//! plug in.

use serde_json::Value;
use std::any::Any;
use std::error::Error;
use std::fmt;
use std::sync::Arc;

// ============================================================================
// STORED VALUES
// ============================================================================

/// A value held by a storage backend.
///
/// `Json` values are serialization-safe and can be deep-copied through JSON text.
/// `Opaque` values are arbitrary Rust values (callbacks, handles, caches) that can
/// be stored and read back but have no JSON representation.
#[derive(Clone)]
pub enum StoredValue {
    Json(Value),
    Opaque(Arc<dyn Any + Send + Sync>),
}

impl StoredValue {
    /// Wrap any `Send + Sync` value as an opaque entry
    pub fn opaque<T: Any + Send + Sync>(value: T) -> Self {
        StoredValue::Opaque(Arc::new(value))
    }

    /// Returns the JSON value, if this entry has one
    pub fn as_json(&self) -> Option<&Value> {
        match self {
            StoredValue::Json(value) => Some(value),
            StoredValue::Opaque(_) => None,
        }
    }

    /// Returns the opaque value downcast to `T`
    pub fn downcast<T: Any + Send + Sync>(&self) -> Option<Arc<T>> {
        match self {
            StoredValue::Json(_) => None,
            StoredValue::Opaque(value) => Arc::clone(value).downcast::<T>().ok(),
        }
    }

    pub fn is_json(&self) -> bool {
        matches!(self, StoredValue::Json(_))
    }
}

impl fmt::Debug for StoredValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoredValue::Json(value) => f.debug_tuple("Json").field(value).finish(),
            StoredValue::Opaque(_) => f.write_str("Opaque(..)"),
        }
    }
}

impl From<Value> for StoredValue {
    fn from(value: Value) -> Self {
        StoredValue::Json(value)
    }
}

// ============================================================================
// STORAGE TRAITS
// ============================================================================

/// Trait defining the interface for storage backends used by SharedStore
pub trait StorageBackend: Send + Sync {
    /// Error type returned by storage operations
    type Error: Error + Send + Sync + 'static;

    /// Store a value with the given key, replacing any previous value
    fn set(&mut self, key: String, value: StoredValue) -> Result<(), Self::Error>;

    /// Retrieve a value by key
    fn get(&self, key: &str) -> Result<Option<StoredValue>, Self::Error>;

    /// Remove a value by key, returning it if it existed
    fn remove(&mut self, key: &str) -> Result<Option<StoredValue>, Self::Error>;

    /// Check if a key exists
    fn contains_key(&self, key: &str) -> Result<bool, Self::Error>;

    /// Get all keys
    fn keys(&self) -> Result<Vec<String>, Self::Error>;

    /// Clear all data
    fn clear(&mut self) -> Result<(), Self::Error>;

    /// Get the number of stored items
    fn len(&self) -> Result<usize, Self::Error>;

    /// Check if the storage is empty
    fn is_empty(&self) -> Result<bool, Self::Error> {
        Ok(self.len()? == 0)
    }
}

// ============================================================================
// STORAGE IMPLEMENTATIONS
// ============================================================================

mod memory;
pub use memory::InMemoryStorage;
