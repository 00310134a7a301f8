//! Tool cache
//!
//! Holds the last listing fetched from the cluster so tool calls can be
//! matched against it without another round trip.

mod registry;

pub use registry::ToolRegistry;
