//! Options for constructing an `AgentRpc` client

/// Endpoint used when none is configured
pub const DEFAULT_ENDPOINT: &str = "https://api.agentrpc.com";

/// Options for `AgentRpc::new`
///
/// Only `api_secret` is required. A non-default `endpoint` must come with an
/// `mcp_uuid`; the constructor enforces that.
///
/// # Example
///
/// ```
/// use agentrpc_core::config::ClientOptions;
///
/// let options = ClientOptions::new("sk_cluster_abc")
///     .with_endpoint("http://localhost:3010")
///     .with_mcp_uuid("4f1c");
/// assert_eq!(options.endpoint(), "http://localhost:3010");
/// ```
#[derive(Clone, Default, PartialEq, Eq)]
pub struct ClientOptions {
    /// API secret, `sk_<clusterId>_<random>`
    pub api_secret: String,
    /// Endpoint override; `None` means `DEFAULT_ENDPOINT`
    pub endpoint: Option<String>,
    /// Machine identifier sent as `x-machine-id`
    pub machine_id: Option<String>,
    /// MCP deployment id; routes requests to `/v1/<uuid>`
    pub mcp_uuid: Option<String>,
    /// MCP app name appended after the deployment id
    pub mcp_app: Option<String>,
    /// Sent as `mcp-session-id`
    pub mcp_session_id: Option<String>,
    /// Sent as `x-pd-mcp-chat-id`
    pub mcp_chat_id: Option<String>,
}

impl ClientOptions {
    pub fn new(api_secret: impl Into<String>) -> Self {
        Self {
            api_secret: api_secret.into(),
            ..Default::default()
        }
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    pub fn with_machine_id(mut self, machine_id: impl Into<String>) -> Self {
        self.machine_id = Some(machine_id.into());
        self
    }

    pub fn with_mcp_uuid(mut self, uuid: impl Into<String>) -> Self {
        self.mcp_uuid = Some(uuid.into());
        self
    }

    pub fn with_mcp_app(mut self, app: impl Into<String>) -> Self {
        self.mcp_app = Some(app.into());
        self
    }

    pub fn with_mcp_session_id(mut self, session_id: impl Into<String>) -> Self {
        self.mcp_session_id = Some(session_id.into());
        self
    }

    pub fn with_mcp_chat_id(mut self, chat_id: impl Into<String>) -> Self {
        self.mcp_chat_id = Some(chat_id.into());
        self
    }

    /// The effective endpoint
    pub fn endpoint(&self) -> &str {
        self.endpoint.as_deref().unwrap_or(DEFAULT_ENDPOINT)
    }

    /// Whether the endpoint differs from `DEFAULT_ENDPOINT`
    pub fn has_custom_endpoint(&self) -> bool {
        self.endpoint() != DEFAULT_ENDPOINT
    }
}

impl std::fmt::Debug for ClientOptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let secret = if self.api_secret.is_empty() { "<unset>" } else { "<redacted>" };
        f.debug_struct("ClientOptions")
            .field("api_secret", &secret)
            .field("endpoint", &self.endpoint)
            .field("machine_id", &self.machine_id)
            .field("mcp_uuid", &self.mcp_uuid)
            .field("mcp_app", &self.mcp_app)
            .field("mcp_session_id", &self.mcp_session_id)
            .field("mcp_chat_id", &self.mcp_chat_id)
            .finish()
    }
}
