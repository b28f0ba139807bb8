use super::sync::SharedStore;
use crate::GameUtilResult;
use crate::storage::{InMemoryStorage, StorageBackend, StoredValue};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::any::Any;
use std::sync::Arc;
use tokio::sync::Mutex;

/// A cloneable, lock-guarded SharedStore for hosts that touch the store from
/// several tasks or threads. Every clone sees the same data, and a read after a
/// write always observes that write.
pub struct AsyncSharedStore<S: StorageBackend> {
    inner: Arc<Mutex<SharedStore<S>>>,
}

impl<S: StorageBackend> AsyncSharedStore<S> {
    /// Create a new async shared store with the given storage backend
    pub fn new(storage: S) -> Self {
        Self::from_store(SharedStore::with_storage(storage))
    }

    /// Wrap an existing synchronous store
    pub fn from_store(store: SharedStore<S>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(store)),
        }
    }

    /// Store a JSON value with the given key
    pub async fn set(&self, key: impl Into<String>, value: Value) -> GameUtilResult<()> {
        self.inner.lock().await.set(key, value)
    }

    /// Store a value with no JSON form
    pub async fn set_opaque<T: Any + Send + Sync>(
        &self,
        key: impl Into<String>,
        value: T,
    ) -> GameUtilResult<()> {
        self.inner.lock().await.set_opaque(key, value)
    }

    /// Retrieve a JSON value by key
    pub async fn get(&self, key: &str) -> GameUtilResult<Option<Value>> {
        self.inner.lock().await.get(key)
    }

    /// Retrieve the raw stored entry by key
    pub async fn get_stored(&self, key: &str) -> GameUtilResult<Option<StoredValue>> {
        self.inner.lock().await.get_stored(key)
    }

    /// Retrieve an opaque value downcast to `T`
    pub async fn get_opaque<T: Any + Send + Sync>(&self, key: &str) -> GameUtilResult<Option<Arc<T>>> {
        self.inner.lock().await.get_opaque(key)
    }

    /// Deep copy of the JSON value at `key`
    pub async fn copy_json(&self, key: &str) -> GameUtilResult<Value> {
        self.inner.lock().await.copy_json(key)
    }

    /// Remove a value by key, returning it if it existed
    pub async fn remove(&self, key: &str) -> GameUtilResult<Option<StoredValue>> {
        self.inner.lock().await.remove(key)
    }

    /// Check if a key exists
    pub async fn contains_key(&self, key: &str) -> GameUtilResult<bool> {
        self.inner.lock().await.contains_key(key)
    }

    /// Get all keys
    pub async fn keys(&self) -> GameUtilResult<Vec<String>> {
        self.inner.lock().await.keys()
    }

    /// Clear all data
    pub async fn clear(&self) -> GameUtilResult<()> {
        self.inner.lock().await.clear()
    }

    /// Get the number of stored items
    pub async fn len(&self) -> GameUtilResult<usize> {
        self.inner.lock().await.len()
    }

    pub async fn is_empty(&self) -> GameUtilResult<bool> {
        self.inner.lock().await.is_empty()
    }

    /// Store a serializable value (convenience method)
    pub async fn set_serializable<T: Serialize>(
        &self,
        key: impl Into<String>,
        value: &T,
    ) -> GameUtilResult<()> {
        self.inner.lock().await.set_serializable(key, value)
    }

    /// Retrieve and deserialize a value (convenience method)
    pub async fn get_deserializable<T>(&self, key: &str) -> GameUtilResult<Option<T>>
    where
        T: for<'de> Deserialize<'de>,
    {
        self.inner.lock().await.get_deserializable(key)
    }

    /// Lock the underlying synchronous store (use with caution)
    pub async fn lock(&self) -> tokio::sync::MutexGuard<'_, SharedStore<S>> {
        self.inner.lock().await
    }
}

impl AsyncSharedStore<InMemoryStorage> {
    /// Creates an async store over fresh in-memory storage
    pub fn in_memory() -> Self {
        Self::new(InMemoryStorage::new())
    }
}

impl<S: StorageBackend> Clone for AsyncSharedStore<S> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}
