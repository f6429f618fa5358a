//! Dashboard state
//!
//! Owns the three pieces of state behind the UI:
//! - Catalog: preloaded tools, fixed for the session
//! - CustomTools: tools the user added, append-only
//! - Draft: the add-tool form's current input
//!
//! Rendering reads this state; only `update_field` and `submit` change it.

pub mod catalog;
pub mod custom;
pub mod draft;

pub use catalog::Catalog;
pub use custom::CustomTools;
pub use draft::{Draft, DraftStatus};

use crate::domain::{Field, Tool};
use log::{debug, info};

/// Result of submitting the add-tool form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The draft was appended to the custom list at `index`
    Added { index: usize },
    /// At least one field was empty; nothing changed
    Incomplete { missing: Vec<Field> },
}

impl SubmitOutcome {
    pub fn is_added(&self) -> bool {
        matches!(self, Self::Added { .. })
    }
}

/// All state for one dashboard session.
#[derive(Debug, Clone, Default)]
pub struct Dashboard {
    catalog: Catalog,
    custom: CustomTools,
    draft: Draft,
}

impl Dashboard {
    /// Start a session with an empty custom list and an empty draft.
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            custom: CustomTools::new(),
            draft: Draft::new(),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn custom_tools(&self) -> &CustomTools {
        &self.custom
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    /// Set one draft field, leaving the other two untouched.
    pub fn update_field(&mut self, field: Field, value: impl Into<String>) {
        self.draft.update_field(field, value);
    }

    /// Move a complete draft into the custom list and reset the form.
    ///
    /// With any field empty this is a no-op: neither the list nor the
    /// draft changes.
    pub fn submit(&mut self) -> SubmitOutcome {
        match self.draft.take_complete() {
            Some(tool) => {
                let name = tool.name.clone();
                let index = self.custom.append(tool);
                info!("Added custom tool '{}' at position {}", name, index);
                SubmitOutcome::Added { index }
            }
            None => {
                let missing = self.draft.tool().missing_fields();
                debug!("Ignoring incomplete submit, missing {:?}", missing);
                SubmitOutcome::Incomplete { missing }
            }
        }
    }

    /// Convenience accessor for the most recently added custom tool.
    pub fn last_added(&self) -> Option<&Tool> {
        self.custom.tools().last()
    }
}
