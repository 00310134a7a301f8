//! OpenAI-flavoured tool operations

use serde_json::json;

use super::agentrpc::AgentRpc;
use super::error::{AgentRpcError, AgentRpcResult};
use super::polling;
use crate::types::{ChatCompletionTool, RegisteredTool, ToolCall};
use crate::{log_info, log_warn};

/// Tool operations shaped for OpenAI chat completions
///
/// Borrowed from an `AgentRpc` via `AgentRpc::openai()`.
pub struct OpenAi<'a> {
    client: &'a AgentRpc,
}

impl<'a> OpenAi<'a> {
    pub(crate) fn new(client: &'a AgentRpc) -> Self {
        Self { client }
    }

    /// List the cluster's registered tools as OpenAI function tools
    ///
    /// A successful listing also refreshes `AgentRpc::tools()`.
    pub async fn get_tools(&self) -> AgentRpcResult<Vec<ChatCompletionTool>> {
        let registered: Vec<RegisteredTool> = self
            .client
            .rpc()
            .request("listTools", json!({ "clusterId": self.client.cluster_id() }))
            .await?;

        let tools = registered
            .into_iter()
            .map(to_chat_completion_tool)
            .collect::<AgentRpcResult<Vec<_>>>()?;

        self.client.tools().replace(tools.clone());
        log_info!(
            self.client.logger(),
            "Discovered {} tools: {}",
            tools.len(),
            self.client.tools().names().join(", ")
        );
        Ok(tools)
    }

    /// Run a tool call on the cluster and wait for its result
    ///
    /// Returns `{"type": <resultType>, "content": <result>}` as a JSON string.
    pub async fn execute_tool(&self, tool_call: &ToolCall) -> AgentRpcResult<String> {
        self.get_tools().await?;

        let tool = self.client.tools().find(tool_call.name()).ok_or_else(|| {
            log_warn!(self.client.logger(), "Tool not found: {}", tool_call.name());
            AgentRpcError::ToolNotFound(tool_call.name().to_string())
        })?;

        let input = tool_call
            .parse_arguments()
            .map_err(|source| AgentRpcError::InvalidToolArguments {
                tool: tool.name().to_string(),
                source,
            })?;

        log_info!(self.client.logger(), "Executing tool {} ({})", tool.name(), tool_call.id);
        let outcome = polling::create_and_poll_job(self.client, tool.name(), input).await?;

        outcome.to_json_string().map_err(AgentRpcError::Encode)
    }
}

fn to_chat_completion_tool(tool: RegisteredTool) -> AgentRpcResult<ChatCompletionTool> {
    let parameters = tool
        .parameters()
        .map_err(|source| AgentRpcError::InvalidToolSchema {
            tool: tool.name.clone(),
            source,
        })?;

    Ok(ChatCompletionTool::function(
        tool.name,
        tool.description.unwrap_or_default(),
        parameters,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::time::Duration;

    use serde_json::Value;

    use crate::config::ClientOptions;
    use crate::logging::NoOpLogger;
    use crate::rpc::testing::ScriptedTransport;
    use crate::rpc::RpcError;

    fn client(transport: Arc<ScriptedTransport>) -> AgentRpc {
        AgentRpc::with_transport(
            ClientOptions::new("sk_cluster1_abc"),
            transport,
            Arc::new(NoOpLogger::new()),
        )
        .unwrap()
        .with_poll_interval(Duration::ZERO)
    }

    fn weather_tools() -> Value {
        json!([
            {
                "name": "getWeather",
                "description": "Current weather for a city",
                "schema": "{\"type\":\"object\",\"properties\":{\"city\":{\"type\":\"string\"}}}",
                "config": null,
                "shouldExpire": false,
                "lastPingAt": null,
                "createdAt": "2025-03-01T10:00:00.000Z"
            },
            { "name": "ping", "description": null, "schema": null }
        ])
    }

    #[tokio::test]
    async fn test_get_tools_maps_to_openai_shape() {
        let transport = Arc::new(ScriptedTransport::new(|method, params| {
            assert_eq!(method, "listTools");
            assert_eq!(params, &json!({ "clusterId": "cluster1" }));
            Ok(weather_tools())
        }));
        let rpc = client(transport);

        let tools = rpc.openai().get_tools().await.unwrap();
        assert_eq!(tools.len(), 2);
        assert_eq!(
            serde_json::to_value(&tools[0]).unwrap(),
            json!({
                "type": "function",
                "function": {
                    "name": "getWeather",
                    "description": "Current weather for a city",
                    "parameters": {
                        "type": "object",
                        "properties": { "city": { "type": "string" } }
                    }
                }
            })
        );
        assert_eq!(tools[1].function.description, "");
        assert_eq!(tools[1].function.parameters, json!({}));
        assert_eq!(rpc.tools().names(), vec!["getWeather", "ping"]);
    }

    #[tokio::test]
    async fn test_get_tools_empty() {
        let rpc = client(Arc::new(ScriptedTransport::new(|_, _| Ok(json!([])))));
        assert!(rpc.openai().get_tools().await.unwrap().is_empty());
        assert!(rpc.tools().names().is_empty());
    }

    #[tokio::test]
    async fn test_get_tools_invalid_schema() {
        let rpc = client(Arc::new(ScriptedTransport::new(|_, _| {
            Ok(json!([{ "name": "broken", "schema": "{oops" }]))
        })));

        let err = rpc.openai().get_tools().await.unwrap_err();
        assert!(matches!(err, AgentRpcError::InvalidToolSchema { ref tool, .. } if tool == "broken"));
        assert!(rpc.tools().names().is_empty());
    }

    #[tokio::test]
    async fn test_get_tools_rpc_error() {
        let rpc = client(Arc::new(ScriptedTransport::new(|_, _| {
            Err(RpcError::Rpc {
                code: -32001,
                message: "Unauthorized".to_string(),
                data: None,
            })
        })));

        let err = rpc.openai().get_tools().await.unwrap_err();
        assert!(matches!(err, AgentRpcError::Rpc(RpcError::Rpc { code: -32001, .. })));
    }

    #[tokio::test]
    async fn test_execute_tool() {
        let transport = Arc::new(ScriptedTransport::new(|method, params| match method {
            "listTools" => Ok(weather_tools()),
            "createJob" => {
                assert_eq!(params["tool"], json!("getWeather"));
                assert_eq!(params["input"], json!({ "city": "Paris" }));
                assert_eq!(params["clusterId"], json!("cluster1"));
                assert_eq!(params["waitTime"], json!(20));
                Ok(json!({ "id": "job_1", "status": "pending" }))
            }
            "getJob" => {
                assert_eq!(params["jobId"], json!("job_1"));
                Ok(json!({ "status": "done", "result": { "temp": 21 }, "resultType": "resolution" }))
            }
            other => panic!("unexpected method {other}"),
        }));
        let rpc = client(transport.clone());

        let call = ToolCall::new("call_1", "getWeather", r#"{"city":"Paris"}"#);
        let output = rpc.openai().execute_tool(&call).await.unwrap();

        let output: Value = serde_json::from_str(&output).unwrap();
        assert_eq!(output, json!({ "type": "resolution", "content": { "temp": 21 } }));
        assert_eq!(transport.methods(), vec!["listTools", "createJob", "getJob"]);
    }

    #[tokio::test]
    async fn test_execute_unknown_tool() {
        let transport = Arc::new(ScriptedTransport::new(|_, _| Ok(weather_tools())));
        let rpc = client(transport.clone());

        let call = ToolCall::new("call_1", "deleteEverything", "{}");
        let err = rpc.openai().execute_tool(&call).await.unwrap_err();

        assert!(matches!(err, AgentRpcError::ToolNotFound(ref name) if name == "deleteEverything"));
        assert_eq!(transport.methods(), vec!["listTools"]);
    }

    #[tokio::test]
    async fn test_execute_invalid_arguments() {
        let rpc = client(Arc::new(ScriptedTransport::new(|_, _| Ok(weather_tools()))));

        let call = ToolCall::new("call_1", "getWeather", "city=Paris");
        let err = rpc.openai().execute_tool(&call).await.unwrap_err();
        assert!(matches!(err, AgentRpcError::InvalidToolArguments { .. }));
    }
}
