//! In-process storage backend
//!
//! Stands in for LocalStorage on native builds and in tests.

use std::collections::HashMap;

use super::{Storage, StorageError};

#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    items: HashMap<String, String>,
    writes: usize,
    /// When set, every write fails with this error
    fail_writes: Option<StorageError>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Backend whose writes always fail (full quota, private browsing, ...)
    pub fn failing(error: StorageError) -> Self {
        Self {
            fail_writes: Some(error),
            ..Self::default()
        }
    }

    /// Number of successful set/remove calls so far
    pub fn writes(&self) -> usize {
        self.writes
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.items.contains_key(key)
    }

    /// Seed a slot without counting it as a write
    pub fn insert(&mut self, key: &str, value: &str) {
        self.items.insert(key.to_string(), value.to_string());
    }
}

impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.items.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        if let Some(err) = &self.fail_writes {
            return Err(err.clone());
        }
        self.items.insert(key.to_string(), value.to_string());
        self.writes += 1;
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        if let Some(err) = &self.fail_writes {
            return Err(err.clone());
        }
        self.items.remove(key);
        self.writes += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_get_remove() {
        let mut storage = MemoryStorage::new();
        assert_eq!(storage.get("k").unwrap(), None);
        storage.set("k", "v").unwrap();
        assert_eq!(storage.get("k").unwrap().as_deref(), Some("v"));
        storage.remove("k").unwrap();
        assert_eq!(storage.get("k").unwrap(), None);
        assert_eq!(storage.writes(), 2);
    }

    #[test]
    fn test_failing_backend() {
        let mut storage = MemoryStorage::failing(StorageError::QuotaExceeded);
        assert_eq!(storage.set("k", "v"), Err(StorageError::QuotaExceeded));
        assert!(storage.is_empty());
        assert_eq!(storage.writes(), 0);
    }
}
