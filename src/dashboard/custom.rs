//! Session-scoped list of tools the user added.

use crate::domain::Tool;

/// Append-only list of custom tools, in submission order.
///
/// Entries are never edited, removed or reordered, so a card's position
/// in this list is a stable key for the whole session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CustomTools {
    tools: Vec<Tool>,
}

impl CustomTools {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a tool and return its index.
    pub(crate) fn append(&mut self, tool: Tool) -> usize {
        self.tools.push(tool);
        self.tools.len() - 1
    }

    pub fn tools(&self) -> &[Tool] {
        &self.tools
    }

    pub fn get(&self, index: usize) -> Option<&Tool> {
        self.tools.get(index)
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}
