//! Client error type

use thiserror::Error;

use crate::rpc::RpcError;

/// Errors surfaced by `AgentRpc`
#[derive(Error, Debug)]
pub enum AgentRpcError {
    #[error("No API Secret provided")]
    MissingApiSecret,

    #[error("Invalid API Secret")]
    InvalidApiSecret,

    #[error("mcpUuid is required when a custom endpoint is provided")]
    MissingMcpUuid,

    #[error(transparent)]
    Rpc(#[from] RpcError),

    #[error("Tool '{tool}' has an invalid schema: {source}")]
    InvalidToolSchema {
        tool: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Tool not found: {0}")]
    ToolNotFound(String),

    #[error("Invalid arguments for tool '{tool}': {source}")]
    InvalidToolArguments {
        tool: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to encode job result: {0}")]
    Encode(#[source] serde_json::Error),
}

pub type AgentRpcResult<T> = Result<T, AgentRpcError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(AgentRpcError::MissingApiSecret.to_string(), "No API Secret provided");
        assert_eq!(AgentRpcError::ToolNotFound("x".into()).to_string(), "Tool not found: x");
    }
}
