//! The `Tool` record and the names of its editable fields.

use serde::{Deserialize, Serialize};

/// A named link shown as a card on the dashboard.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tool {
    /// Short label shown as the card title
    pub name: String,
    /// Free-form text shown under the title
    #[serde(default)]
    pub description: String,
    /// Web address opened by the card's link action
    pub url: String,
}

impl Tool {
    /// Create a tool from its three fields.
    pub fn new(name: impl Into<String>, description: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            url: url.into(),
        }
    }

    /// The all-empty tool a fresh form starts from.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Read a field by name.
    pub fn field(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Description => &self.description,
            Field::Url => &self.url,
        }
    }

    /// Overwrite a field by name, leaving the others alone.
    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::Name => &mut self.name,
            Field::Description => &mut self.description,
            Field::Url => &mut self.url,
        };
        *slot = value.into();
    }

    /// Fields that are currently empty, in form order.
    pub fn missing_fields(&self) -> Vec<Field> {
        Field::ALL.into_iter().filter(|f| self.field(*f).is_empty()).collect()
    }

    /// True when every field has some text.
    pub fn is_complete(&self) -> bool {
        Field::ALL.iter().all(|f| !self.field(*f).is_empty())
    }

    /// True when every field is empty.
    pub fn is_blank(&self) -> bool {
        Field::ALL.iter().all(|f| self.field(*f).is_empty())
    }
}

/// One of the three inputs of the add-tool form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Description,
    Url,
}

impl Field {
    /// All fields in the order the form shows them.
    pub const ALL: [Field; 3] = [Field::Name, Field::Description, Field::Url];

    /// Label shown above the input.
    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Tool Name",
            Self::Description => "Tool Description",
            Self::Url => "Tool URL",
        }
    }

    /// Field after this one, wrapping to the first.
    pub fn next(self) -> Self {
        match self {
            Self::Name => Self::Description,
            Self::Description => Self::Url,
            Self::Url => Self::Name,
        }
    }

    /// Field before this one, wrapping to the last.
    pub fn prev(self) -> Self {
        match self {
            Self::Name => Self::Url,
            Self::Description => Self::Name,
            Self::Url => Self::Description,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_tool_is_blank() {
        let tool = Tool::empty();
        assert!(tool.is_blank());
        assert!(!tool.is_complete());
        assert_eq!(tool.missing_fields(), Field::ALL.to_vec());
    }

    #[test]
    fn test_set_field_leaves_others() {
        let mut tool = Tool::new("ChatGPT", "chatbot", "https://chat.openai.com/");
        tool.set_field(Field::Description, "");
        assert_eq!(tool.name, "ChatGPT");
        assert_eq!(tool.description, "");
        assert_eq!(tool.url, "https://chat.openai.com/");
        assert_eq!(tool.missing_fields(), vec![Field::Description]);
    }

    #[test]
    fn test_complete_tool() {
        let tool = Tool::new("Notion AI", "AI writing helper", "https://notion.ai");
        assert!(tool.is_complete());
        assert!(!tool.is_blank());
        assert!(tool.missing_fields().is_empty());
    }

    #[test]
    fn test_field_cycle() {
        assert_eq!(Field::Name.next(), Field::Description);
        assert_eq!(Field::Url.next(), Field::Name);
        assert_eq!(Field::Name.prev(), Field::Url);
        assert_eq!(Field::Description.prev(), Field::Name);
    }

    #[test]
    fn test_field_labels() {
        assert_eq!(Field::Name.label(), "Tool Name");
        assert_eq!(Field::Description.label(), "Tool Description");
        assert_eq!(Field::Url.label(), "Tool URL");
    }

    #[test]
    fn test_deserialize_without_description() {
        let tool: Tool = serde_yaml::from_str("name: Perplexity\nurl: https://perplexity.ai\n").unwrap();
        assert_eq!(tool.name, "Perplexity");
        assert!(tool.description.is_empty());
    }
}
