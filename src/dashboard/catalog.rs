//! Catalog of preloaded tools
//!
//! The catalog is fixed when the dashboard starts and is never mutated
//! afterwards. It is either the built-in list or a replacement taken
//! from the config file.

use crate::domain::Tool;
use crate::error::{DashboardError, Result};

/// Built-in catalog entries as `(name, description, url)`.
const BUILTIN_TOOLS: [(&str, &str, &str); 5] = [
    (
        "ChatGPT",
        "An AI-powered chatbot for natural language conversations and task assistance.",
        "https://chat.openai.com/",
    ),
    (
        "Grammarly",
        "AI-driven writing assistant for grammar, spelling, and style improvements.",
        "https://www.grammarly.com/",
    ),
    (
        "InstaText",
        "AI tool for instant text improvement and professional editing.",
        "https://instatext.io/",
    ),
    (
        "NotebookLM",
        "AI-powered note-taking and knowledge management tool.",
        "https://notebooklm.google.com/",
    ),
    (
        "GitHub Copilot",
        "AI pair programmer that helps you write better code faster.",
        "https://github.com/features/copilot",
    ),
];

/// Read-only, ordered set of tools shown under the first tab.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    tools: Vec<Tool>,
}

impl Catalog {
    /// The catalog that ships with the dashboard.
    pub fn builtin() -> Self {
        let tools = BUILTIN_TOOLS
            .iter()
            .map(|(name, description, url)| Tool::new(*name, *description, *url))
            .collect();
        Self { tools }
    }

    /// Build a catalog from configured entries.
    ///
    /// Every entry needs a name and a url; the description may be empty.
    pub fn from_tools(tools: Vec<Tool>) -> Result<Self> {
        for (i, tool) in tools.iter().enumerate() {
            if tool.name.trim().is_empty() {
                return Err(DashboardError::Config(format!("catalog entry {} has an empty name", i + 1)));
            }
            if tool.url.trim().is_empty() {
                return Err(DashboardError::Config(format!(
                    "catalog entry '{}' has an empty url",
                    tool.name
                )));
            }
        }
        Ok(Self { tools })
    }

    /// Use the configured entries when there are any, the built-in list otherwise.
    pub fn from_config(configured: Option<&[Tool]>) -> Result<Self> {
        match configured {
            Some(tools) if !tools.is_empty() => {
                log::info!("Using {} catalog entries from config", tools.len());
                Self::from_tools(tools.to_vec())
            }
            _ => Ok(Self::builtin()),
        }
    }

    /// All tools in display order.
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

    /// Serialize the catalog as pretty JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.tools)?)
    }

    /// Serialize the catalog as YAML, in the shape the config file accepts.
    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(&self.tools)?)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}
