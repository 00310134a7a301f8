//! Cache of the tools registered with a cluster

use parking_lot::RwLock;

use crate::types::ChatCompletionTool;

/// Last successful tool listing
///
/// Empty until the first successful `get_tools`; a failed listing leaves
/// the previous contents in place.
#[derive(Debug, Default)]
pub struct ToolRegistry {
    tools: RwLock<Vec<ChatCompletionTool>>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the cached listing
    pub fn replace(&self, tools: Vec<ChatCompletionTool>) {
        *self.tools.write() = tools;
    }

    /// Find a tool by its function name
    pub fn find(&self, name: &str) -> Option<ChatCompletionTool> {
        self.tools.read().iter().find(|t| t.name() == name).cloned()
    }

    pub fn names(&self) -> Vec<String> {
        self.tools.read().iter().map(|t| t.name().to_string()).collect()
    }
}
