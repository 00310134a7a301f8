//! Wire and domain types

mod tool;
mod job;

pub use tool::{ChatCompletionTool, FunctionCall, FunctionDefinition, RegisteredTool, ToolCall, ToolKind};
pub use job::{CreatedJob, JobDetails, JobOutcome, JobStatus, DEFAULT_RESULT_TYPE};
pub(crate) use job::normalize;
