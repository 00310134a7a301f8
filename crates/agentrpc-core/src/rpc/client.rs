//! JSON-RPC client
//!
//! Wraps a transport with request ids, envelope construction and response
//! validation.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use serde::{de::DeserializeOwned, Serialize};
use serde_json::{json, Value};
use thiserror::Error;

use super::transport::RpcTransport;
use crate::logging::file_logger as log;

/// Errors that can occur during RPC operations
#[derive(Error, Debug)]
pub enum RpcError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP {status}: {message}")]
    Status { status: u16, message: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("RPC error {code}: {message}")]
    Rpc {
        code: i64,
        message: String,
        data: Option<Value>,
    },

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Invalid value for header {0}")]
    InvalidHeader(String),
}

pub type RpcResult<T> = Result<T, RpcError>;

/// JSON-RPC 2.0 client over an `RpcTransport`
pub struct JsonRpcClient {
    transport: Arc<dyn RpcTransport>,
    request_id: AtomicU64,
}

impl JsonRpcClient {
    pub fn new(transport: Arc<dyn RpcTransport>) -> Self {
        Self {
            transport,
            request_id: AtomicU64::new(1),
        }
    }

    /// Send a request and decode its `result`
    pub async fn request<P: Serialize, R: DeserializeOwned>(
        &self,
        method: &str,
        params: P,
    ) -> RpcResult<R> {
        let id = self.request_id.fetch_add(1, Ordering::SeqCst);

        let request = json!({
            "jsonrpc": "2.0",
            "id": id,
            "method": method,
            "params": serde_json::to_value(params)?,
        });

        log::trace("rpc::client", &format!("-> {} (id={})", method, id));
        let response = self.transport.send(&request).await?;

        parse_response(id, response).map_err(|e| {
            log::error("rpc::client", &format!("{} failed: {}", method, e));
            e
        })
    }
}

fn parse_response<R: DeserializeOwned>(id: u64, mut response: Value) -> RpcResult<R> {
    match response.get("id") {
        None | Some(Value::Null) => {}
        Some(value) if value.as_u64() == Some(id) => {}
        Some(value) => {
            return Err(RpcError::InvalidResponse(format!(
                "Response id {} does not match request id {}",
                value, id
            )));
        }
    }

    if let Some(error) = response.get("error") {
        let code = error.get("code").and_then(Value::as_i64).unwrap_or(-1);
        let message = error
            .get("message")
            .and_then(Value::as_str)
            .unwrap_or("Unknown error")
            .to_string();
        let data = error.get("data").cloned();
        return Err(RpcError::Rpc { code, message, data });
    }

    let result = response
        .get_mut("result")
        .map(Value::take)
        .ok_or_else(|| RpcError::InvalidResponse("Missing result field".to_string()))?;

    Ok(serde_json::from_value(result)?)
}
