//! The AgentRPC client
//!
//! ```rust,ignore
//! use agentrpc_core::{AgentRpc, ClientOptions};
//!
//! let rpc = AgentRpc::new(ClientOptions::new(api_secret))?;
//! let tools = rpc.openai().get_tools().await?;
//! ```

mod agentrpc;
mod api_secret;
mod error;
mod openai;
mod polling;

use async_trait::async_trait;

use crate::types::ChatCompletionTool;

pub use agentrpc::{AgentRpc, DEFAULT_POLL_INTERVAL};
pub use api_secret::ApiSecret;
pub use error::{AgentRpcError, AgentRpcResult};
pub use openai::OpenAi;

/// Listing of registered tools
///
/// The seam callers depend on when they only need the tool list, so they
/// can run against a stub instead of a live cluster.
#[async_trait]
pub trait ToolsApi: Send + Sync {
    async fn get_tools(&self) -> AgentRpcResult<Vec<ChatCompletionTool>>;
}

#[async_trait]
impl ToolsApi for AgentRpc {
    async fn get_tools(&self) -> AgentRpcResult<Vec<ChatCompletionTool>> {
        self.openai().get_tools().await
    }
}
