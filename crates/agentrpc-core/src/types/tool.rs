//! Tool types
//!
//! `RegisteredTool` is what the service returns from `listTools`;
//! `ChatCompletionTool` is the OpenAI function-tool shape handed to callers.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A tool as registered with the cluster
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisteredTool {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    /// JSON Schema of the input, itself encoded as a JSON string
    #[serde(default)]
    pub schema: Option<String>,
    #[serde(default)]
    pub config: Option<Value>,
    #[serde(default)]
    pub should_expire: Option<bool>,
    #[serde(default)]
    pub last_ping_at: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl RegisteredTool {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            schema: None,
            config: None,
            should_expire: None,
            last_ping_at: None,
            created_at: None,
        }
    }

    pub fn with_schema(mut self, schema: impl Into<String>) -> Self {
        self.schema = Some(schema.into());
        self
    }

    /// Decode the input schema; a missing schema is an empty object
    pub fn parameters(&self) -> Result<Value, serde_json::Error> {
        serde_json::from_str(self.schema.as_deref().unwrap_or("{}"))
    }
}

/// Kind of a chat-completion tool; only functions exist today
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ToolKind {
    #[default]
    Function,
}

/// Function signature inside a `ChatCompletionTool`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionDefinition {
    pub name: String,
    pub description: String,
    pub parameters: Value,
}

/// OpenAI-style function tool
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatCompletionTool {
    #[serde(rename = "type")]
    pub kind: ToolKind,
    pub function: FunctionDefinition,
}

impl ChatCompletionTool {
    pub fn function(name: impl Into<String>, description: impl Into<String>, parameters: Value) -> Self {
        Self {
            kind: ToolKind::Function,
            function: FunctionDefinition {
                name: name.into(),
                description: description.into(),
                parameters,
            },
        }
    }

    pub fn name(&self) -> &str {
        &self.function.name
    }
}

/// Function invocation inside a `ToolCall`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionCall {
    pub name: String,
    /// Arguments as a JSON-encoded object
    pub arguments: String,
}

/// A tool call produced by a chat completion
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolCall {
    pub id: String,
    #[serde(rename = "type", default)]
    pub kind: ToolKind,
    pub function: FunctionCall,
}

impl ToolCall {
    pub fn new(id: impl Into<String>, name: impl Into<String>, arguments: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind: ToolKind::Function,
            function: FunctionCall {
                name: name.into(),
                arguments: arguments.into(),
            },
        }
    }

    pub fn name(&self) -> &str {
        &self.function.name
    }

    /// Decode the arguments string
    pub fn parse_arguments(&self) -> Result<Value, serde_json::Error> {
        serde_json::from_str(&self.function.arguments)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_registered_tool_from_wire() {
        let tool: RegisteredTool = serde_json::from_value(json!({
            "name": "getWeather",
            "description": null,
            "schema": "{\"type\":\"object\"}",
            "config": null,
            "shouldExpire": true,
            "lastPingAt": null,
            "createdAt": "2025-03-01T10:00:00.000Z"
        }))
        .unwrap();

        assert_eq!(tool.name, "getWeather");
        assert_eq!(tool.description, None);
        assert_eq!(tool.should_expire, Some(true));
        assert_eq!(tool.parameters().unwrap(), json!({ "type": "object" }));
    }

    #[test]
    fn test_missing_schema_is_empty_object() {
        let tool: RegisteredTool = serde_json::from_value(json!({ "name": "ping" })).unwrap();
        assert_eq!(tool.parameters().unwrap(), json!({}));
    }

    #[test]
    fn test_invalid_schema() {
        let tool = RegisteredTool::new("broken").with_schema("{not json");
        assert!(tool.parameters().is_err());
    }

    #[test]
    fn test_chat_completion_tool_shape() {
        let tool = ChatCompletionTool::function("tool_a", "", json!({}));
        assert_eq!(
            serde_json::to_value(&tool).unwrap(),
            json!({
                "type": "function",
                "function": { "name": "tool_a", "description": "", "parameters": {} }
            })
        );
    }

    #[test]
    fn test_tool_call_arguments() {
        let call: ToolCall = serde_json::from_value(json!({
            "id": "call_1",
            "type": "function",
            "function": { "name": "getWeather", "arguments": "{\"city\":\"Paris\"}" }
        }))
        .unwrap();

        assert_eq!(call.name(), "getWeather");
        assert_eq!(call.parse_arguments().unwrap(), json!({ "city": "Paris" }));
        assert!(ToolCall::new("c", "t", "nope").parse_arguments().is_err());
    }
}
