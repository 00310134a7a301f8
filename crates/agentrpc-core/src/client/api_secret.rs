//! API secret parsing

use super::error::{AgentRpcError, AgentRpcResult};

/// A validated API secret: `sk_<clusterId>_<random>`
///
/// Only the first three `_`-separated parts are inspected, so extra
/// segments after the random part are tolerated.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiSecret {
    value: String,
    cluster_id: String,
}

impl ApiSecret {
    pub fn parse(value: &str) -> AgentRpcResult<Self> {
        if value.is_empty() {
            return Err(AgentRpcError::MissingApiSecret);
        }

        let mut parts = value.split('_');
        let prefix = parts.next().unwrap_or_default();
        let cluster_id = parts.next().unwrap_or_default();
        let random = parts.next().unwrap_or_default();

        if prefix != "sk" || cluster_id.is_empty() || random.is_empty() {
            return Err(AgentRpcError::InvalidApiSecret);
        }

        Ok(Self {
            value: value.to_string(),
            cluster_id: cluster_id.to_string(),
        })
    }

    pub fn cluster_id(&self) -> &str {
        &self.cluster_id
    }

    /// The raw secret, for the `authorization` header
    pub fn expose(&self) -> &str {
        &self.value
    }
}

impl std::fmt::Debug for ApiSecret {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiSecret")
            .field("cluster_id", &self.cluster_id)
            .field("value", &"<redacted>")
            .finish()
    }
}
