//! Environment variable secret store

use std::collections::HashMap;
use std::env;

use once_cell::sync::Lazy;

use super::traits::{SecretStore, SecretStoreError, SecretStoreResult};

/// Alias key for the API secret
pub(crate) const API_SECRET_KEY: &str = "agentrpc";
/// Alias key for the endpoint override
pub(crate) const ENDPOINT_KEY: &str = "endpoint";
/// Alias key for the MCP deployment id
pub(crate) const MCP_UUID_KEY: &str = "mcp_uuid";
/// Alias key for the MCP app name
pub(crate) const MCP_APP_KEY: &str = "mcp_app";

/// Mapping from alias keys to environment variable names
static ENV_VAR_MAP: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    let mut m = HashMap::new();
    m.insert(API_SECRET_KEY, "AGENTRPC_API_SECRET");
    m.insert(ENDPOINT_KEY, "AGENTRPC_ENDPOINT");
    m.insert(MCP_UUID_KEY, "MCP_UUID");
    m.insert(MCP_APP_KEY, "MCP_APP");
    m
});

/// Serializes tests that mutate the process environment
#[cfg(test)]
pub(crate) static ENV_LOCK: Lazy<parking_lot::Mutex<()>> = Lazy::new(|| parking_lot::Mutex::new(()));

/// Secret store that reads from environment variables
///
/// Read-only. Alias keys resolve only through the alias table, so a stray
/// lowercase `endpoint` variable never shadows `AGENTRPC_ENDPOINT`:
/// - `agentrpc` → `AGENTRPC_API_SECRET`
/// - `endpoint` → `AGENTRPC_ENDPOINT`
/// - `mcp_uuid` → `MCP_UUID`
/// - `mcp_app` → `MCP_APP`
///
/// Any other key is read verbatim.
///
/// # Example
///
/// ```
/// use agentrpc_core::secrets::{SecretStore, EnvSecretStore};
///
/// let store = EnvSecretStore::new();
///
/// // Equivalent:
/// let a = store.get("agentrpc");
/// let b = store.get("AGENTRPC_API_SECRET");
/// assert_eq!(a, b);
/// ```
#[derive(Debug, Default)]
pub struct EnvSecretStore {
    _private: (),
}

impl EnvSecretStore {
    pub fn new() -> Self {
        Self { _private: () }
    }

    /// The environment variable behind an alias key
    pub fn env_var_for(key: &str) -> Option<&'static str> {
        ENV_VAR_MAP.get(key.to_lowercase().as_str()).copied()
    }

    fn read(name: &str) -> Option<String> {
        env::var(name).ok().filter(|value| !value.is_empty())
    }
}

impl SecretStore for EnvSecretStore {
    fn name(&self) -> &str {
        "env"
    }

    fn get(&self, key: &str) -> Option<String> {
        match Self::env_var_for(key) {
            Some(name) => Self::read(name),
            None => Self::read(key),
        }
    }

    fn store(&self, _key: &str, _value: &str) -> SecretStoreResult<()> {
        Err(SecretStoreError::ReadOnly)
    }

    fn delete(&self, _key: &str) -> SecretStoreResult<()> {
        Err(SecretStoreError::ReadOnly)
    }
}
