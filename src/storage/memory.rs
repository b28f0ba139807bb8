use super::{StorageBackend, StoredValue};
use std::collections::HashMap;
use std::convert::Infallible;

/// Simple in-memory storage backend using HashMap
#[derive(Debug, Clone, Default)]
pub struct InMemoryStorage {
    data: HashMap<String, StoredValue>,
}

impl InMemoryStorage {
    /// Create a new in-memory storage
    pub fn new() -> Self {
        Self {
            data: HashMap::new(),
        }
    }

    /// Create a new in-memory storage with specified capacity
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: HashMap::with_capacity(capacity),
        }
    }
}

impl StorageBackend for InMemoryStorage {
    type Error = Infallible;

    fn set(&mut self, key: String, value: StoredValue) -> Result<(), Self::Error> {
        self.data.insert(key, value);
        Ok(())
    }

    fn get(&self, key: &str) -> Result<Option<StoredValue>, Self::Error> {
        Ok(self.data.get(key).cloned())
    }

    fn remove(&mut self, key: &str) -> Result<Option<StoredValue>, Self::Error> {
        Ok(self.data.remove(key))
    }

    fn contains_key(&self, key: &str) -> Result<bool, Self::Error> {
        Ok(self.data.contains_key(key))
    }

    fn keys(&self) -> Result<Vec<String>, Self::Error> {
        Ok(self.data.keys().cloned().collect())
    }

    fn clear(&mut self) -> Result<(), Self::Error> {
        self.data.clear();
        Ok(())
    }

    fn len(&self) -> Result<usize, Self::Error> {
        Ok(self.data.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn json_of(value: Option<StoredValue>) -> Option<serde_json::Value> {
        value.and_then(|v| v.as_json().cloned())
    }

    #[test]
    fn test_in_memory_storage_basic_operations() {
        let mut storage = InMemoryStorage::new();

        storage
            .set("isGameOver".to_string(), json!(true).into())
            .unwrap();
        assert_eq!(json_of(storage.get("isGameOver").unwrap()), Some(json!(true)));

        assert!(storage.get("nonexistent").unwrap().is_none());

        assert!(storage.contains_key("isGameOver").unwrap());
        assert!(!storage.contains_key("nonexistent").unwrap());

        assert_eq!(storage.len().unwrap(), 1);
        assert!(!storage.is_empty().unwrap());

        assert_eq!(
            json_of(storage.remove("isGameOver").unwrap()),
            Some(json!(true))
        );
        assert!(storage.remove("isGameOver").unwrap().is_none());
        assert!(storage.is_empty().unwrap());
    }

    #[test]
    fn test_in_memory_storage_cannot_fail() {
        let mut storage = InMemoryStorage::new();
        let written: Result<(), Infallible> = storage.set("lives".to_string(), json!(3).into());
        let Ok(()) = written;
        let Ok(len) = storage.len();
        assert_eq!(len, 1);
    }

    #[test]
    fn test_in_memory_storage_overwrites() {
        let mut storage = InMemoryStorage::with_capacity(4);

        storage.set("level".to_string(), json!(1).into()).unwrap();
        storage.set("level".to_string(), json!(2).into()).unwrap();

        assert_eq!(json_of(storage.get("level").unwrap()), Some(json!(2)));
        assert_eq!(storage.len().unwrap(), 1);
    }

    #[test]
    fn test_in_memory_storage_keys_and_clear() {
        let mut storage = InMemoryStorage::new();

        storage.set("key1".to_string(), json!("value1").into()).unwrap();
        storage.set("key2".to_string(), StoredValue::opaque(7u8)).unwrap();
        storage.set("key3".to_string(), json!("value3").into()).unwrap();

        let mut keys = storage.keys().unwrap();
        keys.sort();
        assert_eq!(keys, vec!["key1", "key2", "key3"]);

        storage.clear().unwrap();
        assert_eq!(storage.len().unwrap(), 0);
        assert!(storage.keys().unwrap().is_empty());
    }
}
