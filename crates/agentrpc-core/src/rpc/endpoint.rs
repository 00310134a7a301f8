//! Request URL resolution

use crate::config::ClientOptions;

/// The URL all JSON-RPC requests for a client are sent to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RpcEndpoint {
    url: String,
}

impl RpcEndpoint {
    /// Resolve the request URL from client options
    ///
    /// A trailing `/` on the endpoint is ignored. `mcp_app` only applies
    /// together with `mcp_uuid`.
    pub fn resolve(options: &ClientOptions) -> Self {
        let base = options.endpoint().trim_end_matches('/');

        let url = match options.mcp_uuid.as_deref() {
            Some(uuid) => match options.mcp_app.as_deref() {
                Some(app) => format!("{}/v1/{}/{}", base, uuid, app),
                None => format!("{}/v1/{}", base, uuid),
            },
            None => format!("{}/json-rpc", base),
        };

        Self { url }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl std::fmt::Display for RpcEndpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_endpoint() {
        let endpoint = RpcEndpoint::resolve(&ClientOptions::new("sk_a_b"));
        assert_eq!(endpoint.url(), "https://api.agentrpc.com/json-rpc");
    }

    #[test]
    fn test_mcp_uuid() {
        let options = ClientOptions::new("sk_a_b")
            .with_endpoint("http://localhost:3010/")
            .with_mcp_uuid("test-uuid");
        assert_eq!(RpcEndpoint::resolve(&options).url(), "http://localhost:3010/v1/test-uuid");
    }

    #[test]
    fn test_mcp_uuid_and_app() {
        let options = ClientOptions::new("sk_a_b")
            .with_endpoint("http://localhost:3010")
            .with_mcp_uuid("test-uuid")
            .with_mcp_app("github");
        assert_eq!(
            RpcEndpoint::resolve(&options).to_string(),
            "http://localhost:3010/v1/test-uuid/github"
        );
    }

    #[test]
    fn test_app_without_uuid_is_ignored() {
        let options = ClientOptions::new("sk_a_b").with_mcp_app("github");
        assert_eq!(
            RpcEndpoint::resolve(&options).url(),
            "https://api.agentrpc.com/json-rpc"
        );
    }
}
