//! `agentrpc-call`: print the tools registered with an AgentRPC cluster
//!
//! Reads `AGENTRPC_API_SECRET` (and optionally `AGENTRPC_ENDPOINT`,
//! `MCP_UUID`, `MCP_APP`), then prints a progress line and the tool list.
//! Set `AGENTRPC_VERBOSE` for client diagnostics on stderr; a level name
//! (`warn`) narrows them.

mod runner;

use std::io;
use std::process::ExitCode;
use std::sync::Arc;

use agentrpc_core::{AgentRpc, ConsoleLogger, NoOpLogger, OptionsResolver, SharedLogger};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let logger: SharedLogger = match std::env::var("AGENTRPC_VERBOSE") {
        Ok(level) => Arc::new(ConsoleLogger::from_verbosity(&level)),
        Err(_) => Arc::new(NoOpLogger::new()),
    };

    let options = OptionsResolver::from_env().resolve();
    let mut out = io::stdout().lock();
    let result = runner::run(
        options,
        |options| AgentRpc::with_logger(options, logger),
        &mut out,
    )
    .await;

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", runner::render_error(&e));
            ExitCode::FAILURE
        }
    }
}
