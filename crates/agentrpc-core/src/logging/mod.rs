//! Logging abstractions
//!
//! Two layers, mirroring how the client is used:
//! - `Logger` trait objects handed to `AgentRpc` for user-facing diagnostics
//! - `file_logger` for transport-level tracing that must never reach stdout

mod traits;
mod noop;
mod console;
pub mod file_logger;

pub use traits::{Logger, SharedLogger};
pub use noop::NoOpLogger;
pub use console::ConsoleLogger;

pub use file_logger::{
    log, trace, debug, info, warn, error,
    log_file_path, LogLevel,
};
