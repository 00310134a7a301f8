//! In-memory secret store

use std::collections::HashMap;

use parking_lot::RwLock;

use super::traits::{SecretStore, SecretStoreError, SecretStoreResult};

/// In-memory secret store for testing and embedding
///
/// Fully read-write; values are lost when the store is dropped.
///
/// # Example
///
/// ```
/// use agentrpc_core::secrets::{SecretStore, MemorySecretStore};
///
/// let store = MemorySecretStore::new();
/// store.store("agentrpc", "sk_cluster_abc").unwrap();
/// assert_eq!(store.get("agentrpc"), Some("sk_cluster_abc".to_string()));
/// ```
#[derive(Debug, Default)]
pub struct MemorySecretStore {
    secrets: RwLock<HashMap<String, String>>,
}

impl MemorySecretStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a memory store with initial values
    pub fn with_secrets<I, K, V>(initial: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            secrets: RwLock::new(
                initial
                    .into_iter()
                    .map(|(k, v)| (k.into(), v.into()))
                    .collect(),
            ),
        }
    }
}

impl SecretStore for MemorySecretStore {
    fn name(&self) -> &str {
        "memory"
    }

    fn get(&self, key: &str) -> Option<String> {
        self.secrets
            .read()
            .get(key)
            .filter(|value| !value.is_empty())
            .cloned()
    }

    fn store(&self, key: &str, value: &str) -> SecretStoreResult<()> {
        self.secrets.write().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn delete(&self, key: &str) -> SecretStoreResult<()> {
        self.secrets
            .write()
            .remove(key)
            .map(|_| ())
            .ok_or_else(|| SecretStoreError::NotFound(key.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_roundtrip() {
        let store = MemorySecretStore::new();
        assert_eq!(store.get("agentrpc"), None);

        store.store("agentrpc", "sk_c_r").unwrap();
        assert_eq!(store.get("agentrpc"), Some("sk_c_r".to_string()));

        store.delete("agentrpc").unwrap();
        assert_eq!(store.get("agentrpc"), None);
    }

    #[test]
    fn test_memory_store_delete_missing() {
        let store = MemorySecretStore::new();
        assert!(matches!(store.delete("nope"), Err(SecretStoreError::NotFound(_))));
    }

    #[test]
    fn test_memory_store_empty_value_is_absent() {
        let store = MemorySecretStore::with_secrets([("agentrpc", "")]);
        assert!(!store.has("agentrpc"));
        assert_eq!(store.get_info("agentrpc").source, None);
    }
}
