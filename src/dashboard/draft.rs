//! In-progress input of the add-tool form.

use crate::domain::{Field, Tool};

/// Fill level of the draft, derived from which fields have text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftStatus {
    /// No field has text
    Empty,
    /// Some, but not all, fields have text
    PartiallyFilled,
    /// Every field has text; a submit will succeed
    FullyFilled,
}

/// The single Tool-shaped record the form edits.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draft {
    tool: Tool,
}

impl Draft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set one field. Any value is accepted, including the empty string.
    pub fn update_field(&mut self, field: Field, value: impl Into<String>) {
        self.tool.set_field(field, value);
    }

    pub fn field(&self, field: Field) -> &str {
        self.tool.field(field)
    }

    pub fn tool(&self) -> &Tool {
        &self.tool
    }

    pub fn status(&self) -> DraftStatus {
        if self.tool.is_blank() {
            DraftStatus::Empty
        } else if self.tool.is_complete() {
            DraftStatus::FullyFilled
        } else {
            DraftStatus::PartiallyFilled
        }
    }

    /// Take the current values if every field is filled, leaving the draft empty.
    ///
    /// An incomplete draft is left exactly as it was.
    pub(crate) fn take_complete(&mut self) -> Option<Tool> {
        if self.tool.is_complete() {
            Some(std::mem::take(&mut self.tool))
        } else {
            None
        }
    }
}
