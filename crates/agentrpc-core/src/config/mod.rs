//! Client configuration
//!
//! `ClientOptions` are handed to `AgentRpc::new` explicitly; the client
//! itself never reads the environment.

mod options;

pub use options::{ClientOptions, DEFAULT_ENDPOINT};
