//! Scripted transport for unit tests

use async_trait::async_trait;
use parking_lot::Mutex;
use serde_json::{json, Value};

use super::client::{RpcError, RpcResult};
use super::transport::RpcTransport;

type Handler = dyn Fn(&str, &Value) -> Result<Value, RpcError> + Send + Sync;

/// Answers each request by calling `handler(method, params)`
///
/// `Ok(value)` becomes a success envelope with the request's id;
/// `Err(RpcError::Rpc { .. })` becomes an error envelope; any other error is
/// returned as a transport failure. Every request is recorded.
pub(crate) struct ScriptedTransport {
    handler: Box<Handler>,
    requests: Mutex<Vec<Value>>,
}

impl ScriptedTransport {
    pub(crate) fn new<F>(handler: F) -> Self
    where
        F: Fn(&str, &Value) -> Result<Value, RpcError> + Send + Sync + 'static,
    {
        Self {
            handler: Box::new(handler),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn requests(&self) -> Vec<Value> {
        self.requests.lock().clone()
    }

    pub(crate) fn methods(&self) -> Vec<String> {
        self.requests
            .lock()
            .iter()
            .filter_map(|r| r["method"].as_str().map(str::to_string))
            .collect()
    }
}

#[async_trait]
impl RpcTransport for ScriptedTransport {
    async fn send(&self, request: &Value) -> RpcResult<Value> {
        self.requests.lock().push(request.clone());

        let method = request["method"].as_str().unwrap_or_default();
        let id = request["id"].clone();

        match (self.handler)(method, &request["params"]) {
            Ok(result) => Ok(json!({ "jsonrpc": "2.0", "id": id, "result": result })),
            Err(RpcError::Rpc { code, message, .. }) => Ok(json!({
                "jsonrpc": "2.0",
                "id": id,
                "error": { "code": code, "message": message }
            })),
            Err(other) => Err(other),
        }
    }
}
