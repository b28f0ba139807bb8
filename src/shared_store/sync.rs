use crate::storage::{InMemoryStorage, StorageBackend, StoredValue};
use crate::{GameUtilError, GameUtilResult};
use serde_json::Value;
use std::any::Any;
use std::sync::Arc;

/// SharedStore is the key/value mapping games use to hand data between scenes
/// and systems. It can use different storage backends for flexibility.
///
/// A key that was never written reads back as `None`, never as an error.
#[derive(Debug)]
pub struct SharedStore<S: StorageBackend> {
    storage: S,
}

/// Type alias for the default in-memory SharedStore
pub type InMemorySharedStore = SharedStore<InMemoryStorage>;

fn storage_err<E: std::error::Error>(e: E) -> GameUtilError {
    GameUtilError::Storage(e.to_string())
}

impl<S: StorageBackend> SharedStore<S> {
    /// Creates a new SharedStore with the provided storage backend
    pub fn with_storage(storage: S) -> Self {
        Self { storage }
    }

    /// Sets a JSON value in the SharedStore, overwriting any prior value.
    ///
    /// # Arguments
    ///
    /// * `key` - The key to associate with the value.
    /// * `value` - The `serde_json::Value` to store.
    pub fn set(&mut self, key: impl Into<String>, value: Value) -> GameUtilResult<()> {
        let key = key.into();
        tracing::trace!(key = %key, "store set");
        self.storage
            .set(key, StoredValue::Json(value))
            .map_err(storage_err)
    }

    /// Stores an arbitrary Rust value that has no JSON form (a callback, a handle).
    ///
    /// Such values can be read back with [`SharedStore::get_opaque`] but
    /// [`SharedStore::copy_json`] refuses them.
    pub fn set_opaque<T: Any + Send + Sync>(
        &mut self,
        key: impl Into<String>,
        value: T,
    ) -> GameUtilResult<()> {
        let key = key.into();
        tracing::trace!(key = %key, "store set opaque");
        self.storage
            .set(key, StoredValue::opaque(value))
            .map_err(storage_err)
    }

    /// Gets a JSON value from the SharedStore.
    ///
    /// # Returns
    ///
    /// `Ok(Some(Value))` if the key holds a JSON value and `Ok(None)` only if the
    /// key was never set.
    ///
    /// # Errors
    ///
    /// * `NotSerializable` if the key holds an opaque value
    /// * `Storage` if the backend failed
    pub fn get(&self, key: &str) -> GameUtilResult<Option<Value>> {
        match self.get_stored(key)? {
            Some(StoredValue::Json(value)) => Ok(Some(value)),
            Some(StoredValue::Opaque(_)) => Err(GameUtilError::NotSerializable(key.to_string())),
            None => Ok(None),
        }
    }

    /// Gets the raw stored entry, JSON or opaque.
    pub fn get_stored(&self, key: &str) -> GameUtilResult<Option<StoredValue>> {
        tracing::trace!(key = %key, "store get");
        self.storage.get(key).map_err(storage_err)
    }

    /// Gets an opaque value, downcast to `T`. `Ok(None)` only if the key was
    /// never set.
    ///
    /// # Errors
    ///
    /// `InvalidInput` if the key holds a JSON value or an opaque value of another type.
    pub fn get_opaque<T: Any + Send + Sync>(&self, key: &str) -> GameUtilResult<Option<Arc<T>>> {
        match self.get_stored(key)? {
            Some(stored) => stored.downcast::<T>().map(Some).ok_or_else(|| {
                GameUtilError::InvalidInput(format!(
                    "value under key '{key}' is not a {}",
                    std::any::type_name::<T>()
                ))
            }),
            None => Ok(None),
        }
    }

    /// Returns a structurally independent deep copy of the value at `key`.
    ///
    /// The copy is produced by writing the value out as JSON text and parsing it
    /// back, so nothing in the result shares structure with the stored value.
    ///
    /// # Errors
    ///
    /// * `KeyNotFound` if nothing is stored under `key`
    /// * `NotSerializable` if the key holds an opaque value
    /// * `SerializationError` if the JSON round trip fails
    pub fn copy_json(&self, key: &str) -> GameUtilResult<Value> {
        match self.get_stored(key)? {
            Some(StoredValue::Json(value)) => {
                let text = serde_json::to_string(&value)?;
                Ok(serde_json::from_str(&text)?)
            }
            Some(StoredValue::Opaque(_)) => Err(GameUtilError::NotSerializable(key.to_string())),
            None => Err(GameUtilError::KeyNotFound(key.to_string())),
        }
    }

    /// Deep-copies the value at `key` and decodes it into `T`
    pub fn copy_json_as<T: serde::de::DeserializeOwned>(&self, key: &str) -> GameUtilResult<T> {
        let copied = self.copy_json(key)?;
        Ok(serde_json::from_value(copied)?)
    }

    /// Removes a value from the SharedStore, returning it if it existed.
    pub fn remove(&mut self, key: &str) -> GameUtilResult<Option<StoredValue>> {
        self.storage.remove(key).map_err(storage_err)
    }

    /// Checks if a key exists in the SharedStore.
    pub fn contains_key(&self, key: &str) -> GameUtilResult<bool> {
        self.storage.contains_key(key).map_err(storage_err)
    }

    /// Gets all keys from the SharedStore.
    pub fn keys(&self) -> GameUtilResult<Vec<String>> {
        self.storage.keys().map_err(storage_err)
    }

    /// Clears all data from the SharedStore.
    pub fn clear(&mut self) -> GameUtilResult<()> {
        self.storage.clear().map_err(storage_err)
    }

    /// Gets the number of items in the SharedStore.
    pub fn len(&self) -> GameUtilResult<usize> {
        self.storage.len().map_err(storage_err)
    }

    /// Checks if the SharedStore is empty.
    pub fn is_empty(&self) -> GameUtilResult<bool> {
        self.storage.is_empty().map_err(storage_err)
    }

    /// Convenience method to set a serializable value
    pub fn set_serializable<T: serde::Serialize>(
        &mut self,
        key: impl Into<String>,
        value: &T,
    ) -> GameUtilResult<()> {
        let json_value = serde_json::to_value(value)?;
        self.set(key, json_value)
    }

    /// Convenience method to get and deserialize a value
    pub fn get_deserializable<T: serde::de::DeserializeOwned>(
        &self,
        key: &str,
    ) -> GameUtilResult<Option<T>> {
        match self.get(key)? {
            Some(value) => Ok(Some(serde_json::from_value(value)?)),
            None => Ok(None),
        }
    }
}

// Convenience constructors for the in-memory backend
impl InMemorySharedStore {
    /// Creates a new SharedStore with in-memory storage
    pub fn new() -> Self {
        Self::with_storage(InMemoryStorage::new())
    }

    /// Creates a new SharedStore with in-memory storage and specified capacity
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_storage(InMemoryStorage::with_capacity(capacity))
    }
}

impl Default for InMemorySharedStore {
    fn default() -> Self {
        Self::new()
    }
}
