//! AgentRPC Core
//!
//! Client for AgentRPC clusters: list the tools registered with a cluster
//! and run them remotely, over JSON-RPC 2.0 on HTTP.
//!
//! ```rust,ignore
//! use agentrpc_core::{AgentRpc, ClientOptions, OptionsResolver};
//!
//! // Options come from the caller; the client never reads the environment
//! let options = OptionsResolver::from_env().resolve();
//! let rpc = AgentRpc::new(options)?;
//!
//! let tools = rpc.openai().get_tools().await?;
//! let output = rpc.openai().execute_tool(&tool_call).await?;
//! ```

pub mod types;
pub mod secrets;
pub mod logging;
pub mod config;
pub mod rpc;
pub mod resolver;
pub mod tools;
pub mod client;

pub use types::{
    ChatCompletionTool, FunctionCall, FunctionDefinition, RegisteredTool, ToolCall, ToolKind,
    JobOutcome, JobStatus,
};

pub use secrets::{SecretStore, SecretInfo, SecretStoreError, SecretStoreResult, EnvSecretStore, MemorySecretStore};

pub use logging::{Logger, SharedLogger, NoOpLogger, ConsoleLogger};

pub use config::{ClientOptions, DEFAULT_ENDPOINT};

pub use rpc::{HttpTransport, JsonRpcClient, RpcEndpoint, RpcError, RpcResult, RpcTransport};

pub use resolver::OptionsResolver;

pub use tools::ToolRegistry;

pub use client::{AgentRpc, AgentRpcError, AgentRpcResult, ApiSecret, OpenAi, ToolsApi};
