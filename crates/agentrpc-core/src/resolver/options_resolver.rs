//! Builds `ClientOptions` from a settings store
//!
//! In production the store is the process environment:
//! `AGENTRPC_API_SECRET`, `AGENTRPC_ENDPOINT`, `MCP_UUID`, `MCP_APP`.
//! Nothing else is consulted.

use std::sync::Arc;

use crate::config::ClientOptions;
use crate::logging::file_logger as log;
use crate::secrets::{
    EnvSecretStore, SecretStore, API_SECRET_KEY, ENDPOINT_KEY, MCP_APP_KEY, MCP_UUID_KEY,
};

/// Resolves `ClientOptions` from a settings store
///
/// When the secret is missing the resolved options carry an empty secret and
/// `AgentRpc::new` rejects them, so a missing secret surfaces as a
/// construction failure.
pub struct OptionsResolver {
    store: Arc<dyn SecretStore>,
}

impl OptionsResolver {
    pub fn new(store: Arc<dyn SecretStore>) -> Self {
        Self { store }
    }

    /// Resolver over the process environment
    pub fn from_env() -> Self {
        Self::new(Arc::new(EnvSecretStore::new()))
    }

    pub fn resolve(&self) -> ClientOptions {
        let secret_info = self.store.get_info(API_SECRET_KEY);
        if secret_info.is_available() {
            log::debug("resolver", &format!("API secret: {}", secret_info));
        } else {
            log::warn("resolver", &format!("API secret: {}", secret_info));
        }

        let options = ClientOptions {
            api_secret: self.store.get(API_SECRET_KEY).unwrap_or_default(),
            endpoint: self.store.get(ENDPOINT_KEY),
            mcp_uuid: self.store.get(MCP_UUID_KEY),
            mcp_app: self.store.get(MCP_APP_KEY),
            ..Default::default()
        };

        log::debug("resolver", &format!("Resolved options: {:?}", options));
        options
    }
}
