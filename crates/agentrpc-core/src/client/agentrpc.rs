//! Client construction

use std::sync::Arc;
use std::time::Duration;

use super::api_secret::ApiSecret;
use super::error::{AgentRpcError, AgentRpcResult};
use super::openai::OpenAi;
use crate::config::ClientOptions;
use crate::logging::{NoOpLogger, SharedLogger};
use crate::rpc::{HttpTransport, JsonRpcClient, RpcEndpoint, RpcTransport};
use crate::tools::ToolRegistry;
use crate::log_debug;

/// Delay between `getJob` polls
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(1);

/// Handle to one AgentRPC cluster
///
/// Construction only validates options and prepares the transport; no
/// request is sent until a method is called.
pub struct AgentRpc {
    secret: ApiSecret,
    endpoint: RpcEndpoint,
    rpc: JsonRpcClient,
    tools: ToolRegistry,
    logger: SharedLogger,
    poll_interval: Duration,
}

impl AgentRpc {
    /// Create a client that talks HTTP to the configured endpoint
    pub fn new(options: ClientOptions) -> AgentRpcResult<Self> {
        Self::with_logger(options, Arc::new(NoOpLogger::new()))
    }

    pub fn with_logger(options: ClientOptions, logger: SharedLogger) -> AgentRpcResult<Self> {
        let (secret, endpoint) = Self::validate(&options)?;
        let transport = HttpTransport::new(&endpoint, &options)?;
        Ok(Self::assemble(secret, endpoint, Arc::new(transport), logger))
    }

    /// Create a client over a caller-supplied transport
    ///
    /// Options are validated exactly as in `new`.
    pub fn with_transport(
        options: ClientOptions,
        transport: Arc<dyn RpcTransport>,
        logger: SharedLogger,
    ) -> AgentRpcResult<Self> {
        let (secret, endpoint) = Self::validate(&options)?;
        Ok(Self::assemble(secret, endpoint, transport, logger))
    }

    fn validate(options: &ClientOptions) -> AgentRpcResult<(ApiSecret, RpcEndpoint)> {
        let secret = ApiSecret::parse(&options.api_secret)?;

        if options.has_custom_endpoint() && options.mcp_uuid.is_none() {
            return Err(AgentRpcError::MissingMcpUuid);
        }

        Ok((secret, RpcEndpoint::resolve(options)))
    }

    fn assemble(
        secret: ApiSecret,
        endpoint: RpcEndpoint,
        transport: Arc<dyn RpcTransport>,
        logger: SharedLogger,
    ) -> Self {
        log_debug!(logger, "Client for cluster {} using {}", secret.cluster_id(), endpoint);

        Self {
            secret,
            endpoint,
            rpc: JsonRpcClient::new(transport),
            tools: ToolRegistry::new(),
            logger,
            poll_interval: DEFAULT_POLL_INTERVAL,
        }
    }

    /// Override the delay between job status polls
    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }

    pub fn cluster_id(&self) -> &str {
        self.secret.cluster_id()
    }

    pub fn endpoint(&self) -> &RpcEndpoint {
        &self.endpoint
    }

    /// Tools cached by the last `openai().get_tools()`
    pub fn tools(&self) -> &ToolRegistry {
        &self.tools
    }

    /// OpenAI-flavoured tool operations
    pub fn openai(&self) -> OpenAi<'_> {
        OpenAi::new(self)
    }

    pub(crate) fn rpc(&self) -> &JsonRpcClient {
        &self.rpc
    }

    pub(crate) fn logger(&self) -> &SharedLogger {
        &self.logger
    }

    pub(crate) fn poll_interval(&self) -> Duration {
        self.poll_interval
    }
}

impl std::fmt::Debug for AgentRpc {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AgentRpc")
            .field("cluster_id", &self.cluster_id())
            .field("endpoint", &self.endpoint)
            .field("poll_interval", &self.poll_interval)
            .finish()
    }
}
