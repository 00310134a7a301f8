//! Secret and setting sources
//!
//! - `EnvSecretStore`: process environment (read-only)
//! - `MemorySecretStore`: in-memory, for tests and embedding

mod traits;
mod env_store;
mod memory_store;

pub use traits::{SecretStore, SecretInfo, SecretStoreError, SecretStoreResult};
pub use env_store::EnvSecretStore;
pub(crate) use env_store::{API_SECRET_KEY, ENDPOINT_KEY, MCP_APP_KEY, MCP_UUID_KEY};
#[cfg(test)]
pub(crate) use env_store::ENV_LOCK;
pub use memory_store::MemorySecretStore;
