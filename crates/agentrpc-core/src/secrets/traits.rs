//! Settings store abstraction
//!
//! The client reads its secret and connection settings through a
//! `SecretStore` so that tests can swap the process environment for an
//! in-memory map.

use thiserror::Error;

/// Where a setting was found
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecretInfo {
    pub key: String,
    /// Name of the store that holds it, `None` when absent
    pub source: Option<String>,
}

impl SecretInfo {
    pub fn found(key: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            source: Some(source.into()),
        }
    }

    pub fn missing(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            source: None,
        }
    }

    pub fn is_available(&self) -> bool {
        self.source.is_some()
    }
}

impl std::fmt::Display for SecretInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.source {
            Some(source) => write!(f, "{} (from {})", self.key, source),
            None => write!(f, "{} (not set)", self.key),
        }
    }
}

#[derive(Error, Debug)]
pub enum SecretStoreError {
    #[error("Store is read-only")]
    ReadOnly,

    #[error("Secret not found: {0}")]
    NotFound(String),
}

pub type SecretStoreResult<T> = Result<T, SecretStoreError>;

/// A source of secrets and connection settings
///
/// Keys are either well-known aliases (`agentrpc`, `endpoint`, `mcp_uuid`,
/// `mcp_app`) or raw names such as `AGENTRPC_API_SECRET`; how aliases map is
/// up to the store. Empty values are reported as absent.
pub trait SecretStore: Send + Sync {
    fn name(&self) -> &str;

    fn get(&self, key: &str) -> Option<String>;

    /// Returns `Err(SecretStoreError::ReadOnly)` if the store doesn't support writing.
    fn store(&self, key: &str, value: &str) -> SecretStoreResult<()>;

    fn delete(&self, key: &str) -> SecretStoreResult<()>;

    fn has(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    fn get_info(&self, key: &str) -> SecretInfo {
        if self.has(key) {
            SecretInfo::found(key, self.name())
        } else {
            SecretInfo::missing(key)
        }
    }
}
