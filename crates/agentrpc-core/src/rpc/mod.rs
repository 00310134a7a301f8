//! JSON-RPC 2.0 over HTTP
//!
//! Every AgentRPC call is a JSON-RPC request POSTed to a single URL:
//! - `{endpoint}/json-rpc` for the hosted service
//! - `{endpoint}/v1/{mcp_uuid}[/{mcp_app}]` for MCP deployments
//!
//! The secret travels in the `authorization` header. Transports sit behind
//! `RpcTransport` so the client can be driven without a network.
//!
//! ```rust,ignore
//! let endpoint = RpcEndpoint::resolve(&options);
//! let transport = HttpTransport::new(&endpoint, &options)?;
//! let rpc = JsonRpcClient::new(Arc::new(transport));
//!
//! let tools: Vec<RegisteredTool> = rpc.request("listTools", json!({ "clusterId": id })).await?;
//! ```

mod client;
mod endpoint;
mod transport;

#[cfg(test)]
pub(crate) mod testing;

pub use client::{JsonRpcClient, RpcError, RpcResult};
pub use endpoint::RpcEndpoint;
pub use transport::{HttpTransport, RpcTransport, SDK_LANGUAGE};
