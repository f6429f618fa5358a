//! Display state for the TUI.
//!
//! Nothing here is dashboard data. These types track what is on screen:
//! - `Tab`: which list is visible
//! - `Mode`: browsing cards or typing into the form
//! - `FormInputs`: cursor-aware buffers mirroring the draft
//! - `AppState`: all of the above plus selection and status line

use super::input::TextInput;
use crate::domain::Field;

/// The two tabs of the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    /// Preloaded catalog
    #[default]
    Catalog,
    /// Tools added this session
    Custom,
}

impl Tab {
    pub const ALL: [Tab; 2] = [Tab::Catalog, Tab::Custom];

    /// Switch to the other tab.
    pub fn toggle(self) -> Self {
        match self {
            Tab::Catalog => Tab::Custom,
            Tab::Custom => Tab::Catalog,
        }
    }

    /// Label in the tab bar.
    pub fn title(self) -> &'static str {
        match self {
            Tab::Catalog => "AI Tools",
            Tab::Custom => "My Tools",
        }
    }

    /// Heading above the tab's content.
    pub fn heading(self) -> &'static str {
        match self {
            Tab::Catalog => "AI Tools for Employees",
            Tab::Custom => "My Custom Tools",
        }
    }

    pub fn index(self) -> usize {
        match self {
            Tab::Catalog => 0,
            Tab::Custom => 1,
        }
    }
}

/// Current input mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Moving between cards and tabs
    #[default]
    Browse,
    /// Typing into one of the form's fields
    Editing(Field),
}

/// One text buffer per form field.
#[derive(Debug, Clone, Default)]
pub struct FormInputs {
    pub name: TextInput,
    pub description: TextInput,
    pub url: TextInput,
}

impl FormInputs {
    pub fn get(&self, field: Field) -> &TextInput {
        match field {
            Field::Name => &self.name,
            Field::Description => &self.description,
            Field::Url => &self.url,
        }
    }

    pub fn get_mut(&mut self, field: Field) -> &mut TextInput {
        match field {
            Field::Name => &mut self.name,
            Field::Description => &mut self.description,
            Field::Url => &mut self.url,
        }
    }

    pub fn clear(&mut self) {
        for field in Field::ALL {
            self.get_mut(field).clear();
        }
    }
}

/// All mutable display state.
#[derive(Debug, Default)]
pub struct AppState {
    pub tab: Tab,
    pub mode: Mode,
    pub form: FormInputs,
    /// Selected card per tab, indexed by `Tab::index`
    pub selected: [usize; 2],
    /// Card columns at the last known terminal width
    pub columns: usize,
    pub status_message: Option<String>,
    pub show_help: bool,
    /// URL waiting to be opened by the runner
    pub pending_open: Option<String>,
    pub should_quit: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            columns: 1,
            ..Self::default()
        }
    }

    /// Selected card index on the visible tab.
    pub fn selected_card(&self) -> usize {
        self.selected[self.tab.index()]
    }

    pub fn set_selected_card(&mut self, index: usize) {
        self.selected[self.tab.index()] = index;
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.mode, Mode::Editing(_))
    }
}
