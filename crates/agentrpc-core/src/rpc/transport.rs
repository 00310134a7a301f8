//! Transports that carry JSON-RPC envelopes

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::StatusCode;
use serde_json::Value;

use super::client::{RpcError, RpcResult};
use super::endpoint::RpcEndpoint;
use crate::config::ClientOptions;
use crate::logging::file_logger as log;

/// Value of the `x-machine-sdk-language` header
pub const SDK_LANGUAGE: &str = "rust";

/// Sends one JSON-RPC request envelope and returns the response envelope
#[async_trait]
pub trait RpcTransport: Send + Sync {
    async fn send(&self, request: &Value) -> RpcResult<Value>;
}

/// HTTP transport: one POST per request
pub struct HttpTransport {
    http: reqwest::Client,
    url: String,
}

impl HttpTransport {
    /// Build a transport for `endpoint`, authenticating with the options' secret
    pub fn new(endpoint: &RpcEndpoint, options: &ClientOptions) -> RpcResult<Self> {
        let http = reqwest::Client::builder()
            .default_headers(Self::headers(options)?)
            .build()?;

        Ok(Self {
            http,
            url: endpoint.url().to_string(),
        })
    }

    fn headers(options: &ClientOptions) -> RpcResult<HeaderMap> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(AUTHORIZATION, header_value("authorization", &options.api_secret)?);
        headers.insert(
            HeaderName::from_static("x-machine-sdk-version"),
            HeaderValue::from_static(env!("CARGO_PKG_VERSION")),
        );
        headers.insert(
            HeaderName::from_static("x-machine-sdk-language"),
            HeaderValue::from_static(SDK_LANGUAGE),
        );

        let optional = [
            ("mcp-session-id", &options.mcp_session_id),
            ("x-pd-mcp-chat-id", &options.mcp_chat_id),
            ("x-machine-id", &options.machine_id),
        ];
        for (name, value) in optional {
            if let Some(value) = value {
                headers.insert(HeaderName::from_static(name), header_value(name, value)?);
            }
        }

        Ok(headers)
    }
}

fn header_value(name: &str, value: &str) -> RpcResult<HeaderValue> {
    let mut value = HeaderValue::from_str(value)
        .map_err(|_| RpcError::InvalidHeader(name.to_string()))?;
    if name == "authorization" {
        value.set_sensitive(true);
    }
    Ok(value)
}

#[async_trait]
impl RpcTransport for HttpTransport {
    async fn send(&self, request: &Value) -> RpcResult<Value> {
        let method = request.get("method").and_then(Value::as_str).unwrap_or("unknown");
        log::debug("rpc::transport", &format!("POST {} method={}", self.url, method));

        let response = self
            .http
            .post(&self.url)
            .json(request)
            .send()
            .await
            .map_err(|e| {
                log::error("rpc::transport", &format!("Request failed: {}", e));
                RpcError::Http(e)
            })?;

        let status = response.status();
        if status != StatusCode::OK {
            let message = status.canonical_reason().unwrap_or("Unknown status").to_string();
            log::warn(
                "rpc::transport",
                &format!("method={} returned HTTP {}", method, status.as_u16()),
            );
            return Err(RpcError::Status {
                status: status.as_u16(),
                message,
            });
        }

        let body: Value = response.json().await?;
        log::debug("rpc::transport", &format!("Response received for method={}", method));
        Ok(body)
    }
}
