//! Lists the tools registered with a cluster
//!
//! Two fallible steps, in order: build the client, then list the tools.
//! Either failure ends the run; nothing is retried.

use std::error::Error as _;
use std::io::{self, Write};

use agentrpc_core::{AgentRpcError, AgentRpcResult, ChatCompletionTool, ClientOptions, ToolsApi};
use thiserror::Error;

/// Printed once the client exists and before the remote call
pub const PROGRESS_LINE: &str = "Fetching registered tools...";

/// Prefix of the result line
pub const RESULT_PREFIX: &str = "Found tools: ";

#[derive(Debug, Error)]
pub enum RunError {
    /// The client could not be built; nothing was sent
    #[error("failed to create the AgentRPC client")]
    Construction(#[source] AgentRpcError),

    /// The tool listing call failed
    #[error("failed to list registered tools")]
    Invocation(#[source] AgentRpcError),

    #[error("failed to write output")]
    Output(#[from] io::Error),
}

/// Build a client with `connect`, list its tools and print them to `out`
pub async fn run<A, F, W>(options: ClientOptions, connect: F, out: &mut W) -> Result<(), RunError>
where
    A: ToolsApi,
    F: FnOnce(ClientOptions) -> AgentRpcResult<A>,
    W: Write,
{
    let api = connect(options).map_err(RunError::Construction)?;

    writeln!(out, "{}", PROGRESS_LINE)?;
    out.flush()?;

    let tools = api.get_tools().await.map_err(RunError::Invocation)?;

    writeln!(out, "{}{}", RESULT_PREFIX, render_tools(&tools)?)?;
    out.flush()?;
    Ok(())
}

/// Tools as a compact JSON array
pub fn render_tools(tools: &[ChatCompletionTool]) -> io::Result<String> {
    serde_json::to_string(tools).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}

/// The error followed by its cause chain, one per line
pub fn render_error(error: &RunError) -> String {
    let mut rendered = format!("Error: {}", error);
    let mut source = error.source();
    while let Some(cause) = source {
        rendered.push_str(&format!("\n  Caused by: {}", cause));
        source = cause.source();
    }
    rendered
}
