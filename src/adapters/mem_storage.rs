//! In-memory key-value storage.
//!
//! Implements [`StoragePort`] over an ordered map.  Used by the dashboard
//! host in place of a browser-local cache, and by tests as a mock store.
//! Writes replace the whole value in one step, so they are trivially atomic.

use std::collections::BTreeMap;

use crate::app::ports::{StorageError, StoragePort};

#[derive(Debug, Default)]
pub struct MemStorage {
    store: BTreeMap<String, Vec<u8>>,
}

impl MemStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of stored keys across every namespace.
    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    fn composite_key(namespace: &str, key: &str) -> String {
        format!("{namespace}::{key}")
    }
}

impl StoragePort for MemStorage {
    fn read(&self, namespace: &str, key: &str, buf: &mut [u8]) -> Result<usize, StorageError> {
        let data = self
            .store
            .get(&Self::composite_key(namespace, key))
            .ok_or(StorageError::NotFound)?;
        if data.len() > buf.len() {
            return Err(StorageError::Full);
        }
        buf[..data.len()].copy_from_slice(data);
        Ok(data.len())
    }

    fn write(&mut self, namespace: &str, key: &str, data: &[u8]) -> Result<(), StorageError> {
        if namespace.is_empty() || key.is_empty() {
            return Err(StorageError::Invalid("empty namespace or key"));
        }
        self.store
            .insert(Self::composite_key(namespace, key), data.to_vec());
        Ok(())
    }

    fn delete(&mut self, namespace: &str, key: &str) -> Result<(), StorageError> {
        self.store.remove(&Self::composite_key(namespace, key));
        Ok(())
    }

    fn exists(&self, namespace: &str, key: &str) -> bool {
        self.store.contains_key(&Self::composite_key(namespace, key))
    }

    fn keys(&self, namespace: &str) -> Vec<String> {
        let prefix = Self::composite_key(namespace, "");
        self.store
            .range(prefix.clone()..)
            .take_while(|(k, _)| k.starts_with(&prefix))
            .map(|(k, _)| k[prefix.len()..].to_string())
            .collect()
    }
}
