//! TUI Application
//!
//! Owns the dashboard and the display state and turns key presses into
//! state transitions. Nothing here touches the terminal, so every
//! transition can be driven from tests.

use crossterm::event::{KeyCode, KeyEvent};
use log::debug;

use super::input::is_force_quit;
use super::state::{AppState, Mode, Tab};
use crate::config::UiConfig;
use crate::dashboard::{Dashboard, SubmitOutcome};
use crate::domain::{Field, Tool};

/// Main TUI application
pub struct App {
    dashboard: Dashboard,
    state: AppState,
    show_submit_feedback: bool,
}

impl App {
    pub fn new(dashboard: Dashboard, ui: &UiConfig) -> Self {
        Self {
            dashboard,
            state: AppState::new(),
            show_submit_feedback: ui.show_submit_feedback,
        }
    }

    pub fn dashboard(&self) -> &Dashboard {
        &self.dashboard
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Tools listed on the visible tab.
    pub fn visible_tools(&self) -> &[Tool] {
        match self.state.tab {
            Tab::Catalog => self.dashboard.catalog().tools(),
            Tab::Custom => self.dashboard.custom_tools().tools(),
        }
    }

    /// Selected tool on the visible tab, if the tab has any.
    pub fn selected_tool(&self) -> Option<&Tool> {
        self.visible_tools().get(self.state.selected_card())
    }

    /// Record the terminal width so card navigation matches the drawn grid.
    pub fn resize(&mut self, width: u16) {
        self.state.columns = super::cards::grid_columns(width);
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.state.status_message = Some(message.into());
    }

    pub fn clear_status(&mut self) {
        self.state.status_message = None;
    }

    /// URL the user asked to open, if any. Clears the request.
    pub fn take_pending_open(&mut self) -> Option<String> {
        self.state.pending_open.take()
    }

    pub fn set_tab(&mut self, tab: Tab) {
        if self.state.tab != tab {
            debug!("Switching to tab {:?}", tab);
        }
        self.state.tab = tab;
        self.state.mode = Mode::Browse;
    }

    pub fn quit(&mut self) {
        self.state.should_quit = true;
    }

    /// Handle one key press.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if is_force_quit(&key) {
            self.quit();
            return;
        }
        match self.state.mode {
            Mode::Editing(field) => self.handle_editing_key(field, key),
            Mode::Browse => self.handle_browse_key(key),
        }
    }

    /// Insert pasted text into the focused field. Ignored while browsing.
    ///
    /// Line breaks in the paste never submit the form.
    pub fn handle_paste(&mut self, text: &str) {
        if let Mode::Editing(field) = self.state.mode {
            let input = self.state.form.get_mut(field);
            input.insert_str(text);
            let value = input.content().to_string();
            self.dashboard.update_field(field, value);
        }
    }

    fn handle_browse_key(&mut self, key: KeyEvent) {
        if self.state.show_help {
            // Any key closes the help overlay
            self.state.show_help = false;
            return;
        }
        self.clear_status();

        match key.code {
            KeyCode::Char('q') => self.quit(),
            KeyCode::Char('?') => self.state.show_help = true,
            KeyCode::Tab | KeyCode::BackTab => self.set_tab(self.state.tab.toggle()),
            KeyCode::Char('1') => self.set_tab(Tab::Catalog),
            KeyCode::Char('2') => self.set_tab(Tab::Custom),
            KeyCode::Char('i') | KeyCode::Char('a') => self.start_editing(),
            KeyCode::Left | KeyCode::Char('h') => self.move_selection(-1),
            KeyCode::Right | KeyCode::Char('l') => self.move_selection(1),
            KeyCode::Up | KeyCode::Char('k') => self.move_selection(-(self.state.columns.max(1) as isize)),
            KeyCode::Down | KeyCode::Char('j') => self.move_selection(self.state.columns.max(1) as isize),
            KeyCode::Enter | KeyCode::Char('o') => self.request_open(),
            _ => {}
        }
    }

    fn handle_editing_key(&mut self, field: Field, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.state.mode = Mode::Browse,
            KeyCode::Tab | KeyCode::Down => self.state.mode = Mode::Editing(field.next()),
            KeyCode::BackTab | KeyCode::Up => self.state.mode = Mode::Editing(field.prev()),
            KeyCode::Enter => self.submit(),
            _ => {
                let input = self.state.form.get_mut(field);
                if input.handle_key(&key) {
                    let value = input.content().to_string();
                    self.dashboard.update_field(field, value);
                }
            }
        }
    }

    /// Focus the form's first field. Only the custom tab has a form.
    fn start_editing(&mut self) {
        if self.state.tab == Tab::Custom {
            self.clear_status();
            self.state.mode = Mode::Editing(Field::Name);
        }
    }

    /// Submit the form, clearing the inputs only when the tool was added.
    pub fn submit(&mut self) {
        match self.dashboard.submit() {
            SubmitOutcome::Added { .. } => {
                self.state.form.clear();
                self.state.mode = Mode::Editing(Field::Name);
                if let Some(tool) = self.dashboard.last_added() {
                    let message = format!("Added {}", tool.name);
                    self.set_status(message);
                }
            }
            SubmitOutcome::Incomplete { missing } => {
                if self.show_submit_feedback {
                    let labels: Vec<&str> = missing.iter().map(|f| f.label()).collect();
                    self.set_status(format!("Fill in {} to add a tool", labels.join(", ")));
                }
            }
        }
    }

    fn move_selection(&mut self, delta: isize) {
        let count = self.visible_tools().len();
        if count == 0 {
            return;
        }
        let current = self.state.selected_card().min(count - 1) as isize;
        let next = (current + delta).clamp(0, count as isize - 1);
        self.state.set_selected_card(next as usize);
    }

    fn request_open(&mut self) {
        if let Some(url) = self.selected_tool().map(|t| t.url.clone()) {
            debug!("Requesting open of {}", url);
            self.state.pending_open = Some(url);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboard::{Catalog, DraftStatus};
    use crossterm::event::KeyModifiers;

    fn app() -> App {
        App::new(Dashboard::new(Catalog::builtin()), &UiConfig::default())
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    #[test]
    fn test_starts_on_catalog_tab() {
        let app = app();
        assert_eq!(app.state().tab, Tab::Catalog);
        assert_eq!(app.visible_tools().len(), 5);
        assert_eq!(app.selected_tool().map(|t| t.name.as_str()), Some("ChatGPT"));
    }

    #[test]
    fn test_tab_switching_leaves_lists_alone() {
        let mut app = app();
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.state().tab, Tab::Custom);
        press(&mut app, KeyCode::BackTab);
        assert_eq!(app.state().tab, Tab::Catalog);
        press(&mut app, KeyCode::Char('2'));
        press(&mut app, KeyCode::Char('1'));

        assert_eq!(app.dashboard().catalog().len(), 5);
        assert!(app.dashboard().custom_tools().is_empty());
    }

    #[test]
    fn test_editing_only_on_custom_tab() {
        let mut app = app();
        press(&mut app, KeyCode::Char('i'));
        assert_eq!(app.state().mode, Mode::Browse);

        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Char('i'));
        assert_eq!(app.state().mode, Mode::Editing(Field::Name));
    }

    #[test]
    fn test_add_tool_through_form() {
        let mut app = app();
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Char('a'));
        type_text(&mut app, "Notion AI");
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "AI writing helper");
        press(&mut app, KeyCode::Down);
        type_text(&mut app, "https://notion.ai");
        press(&mut app, KeyCode::Enter);

        assert_eq!(
            app.dashboard().custom_tools().tools(),
            &[Tool::new("Notion AI", "AI writing helper", "https://notion.ai")]
        );
        assert_eq!(app.dashboard().draft().status(), DraftStatus::Empty);
        assert_eq!(app.state().form.get(Field::Url).content(), "");
        assert_eq!(app.state().mode, Mode::Editing(Field::Name));
        assert_eq!(app.state().status_message.as_deref(), Some("Added Notion AI"));
    }

    #[test]
    fn test_incomplete_submit_is_silent_by_default() {
        let mut app = app();
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Char('i'));
        type_text(&mut app, "X");
        press(&mut app, KeyCode::Enter);

        assert!(app.dashboard().custom_tools().is_empty());
        assert_eq!(app.dashboard().draft().tool(), &Tool::new("X", "", ""));
        assert_eq!(app.state().form.get(Field::Name).content(), "X");
        assert!(app.state().status_message.is_none());
    }

    #[test]
    fn test_incomplete_submit_feedback_when_enabled() {
        let ui = UiConfig {
            show_submit_feedback: true,
        };
        let mut app = App::new(Dashboard::new(Catalog::builtin()), &ui);
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Char('i'));
        type_text(&mut app, "X");
        press(&mut app, KeyCode::Enter);

        assert_eq!(
            app.state().status_message.as_deref(),
            Some("Fill in Tool Description, Tool URL to add a tool")
        );
        assert!(app.dashboard().custom_tools().is_empty());
    }

    #[test]
    fn test_paste_with_newlines_does_not_submit() {
        let mut app = app();
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Char('i'));
        type_text(&mut app, "Notion AI");
        press(&mut app, KeyCode::Tab);
        app.handle_paste("AI writing\nhelper\n");
        press(&mut app, KeyCode::Tab);
        app.handle_paste("https://notion.ai\n");

        assert!(app.dashboard().custom_tools().is_empty());
        assert_eq!(app.dashboard().draft().field(Field::Description), "AI writing helper ");
        assert_eq!(app.dashboard().draft().field(Field::Url), "https://notion.ai ");
        assert_eq!(app.state().form.get(Field::Url).content(), "https://notion.ai ");
        assert_eq!(app.dashboard().draft().status(), DraftStatus::FullyFilled);
    }

    #[test]
    fn test_paste_while_browsing_is_ignored() {
        let mut app = app();
        app.handle_paste("q");
        assert!(!app.state().should_quit);
        assert_eq!(app.dashboard().draft().status(), DraftStatus::Empty);
    }

    #[test]
    fn test_backspace_updates_draft() {
        let mut app = app();
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Char('i'));
        type_text(&mut app, "ab");
        press(&mut app, KeyCode::Backspace);
        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.dashboard().draft().field(Field::Name), "");
        assert_eq!(app.dashboard().draft().status(), DraftStatus::Empty);
    }

    #[test]
    fn test_q_types_while_editing() {
        let mut app = app();
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Char('i'));
        press(&mut app, KeyCode::Char('q'));
        assert!(!app.state().should_quit);
        assert_eq!(app.dashboard().draft().field(Field::Name), "q");

        press(&mut app, KeyCode::Esc);
        assert_eq!(app.state().mode, Mode::Browse);
        press(&mut app, KeyCode::Char('q'));
        assert!(app.state().should_quit);
    }

    #[test]
    fn test_ctrl_c_quits_while_editing() {
        let mut app = app();
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Char('i'));
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.state().should_quit);
    }

    #[test]
    fn test_selection_moves_by_grid() {
        let mut app = app();
        app.resize(130);
        assert_eq!(app.state().columns, 3);

        press(&mut app, KeyCode::Down);
        assert_eq!(app.state().selected_card(), 3);
        press(&mut app, KeyCode::Right);
        assert_eq!(app.state().selected_card(), 4);
        press(&mut app, KeyCode::Right);
        assert_eq!(app.state().selected_card(), 4);
        press(&mut app, KeyCode::Up);
        assert_eq!(app.state().selected_card(), 1);
        press(&mut app, KeyCode::Char('h'));
        press(&mut app, KeyCode::Char('h'));
        assert_eq!(app.state().selected_card(), 0);
    }

    #[test]
    fn test_open_selected_card() {
        let mut app = app();
        press(&mut app, KeyCode::Char('j'));
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.take_pending_open().as_deref(), Some("https://www.grammarly.com/"));
        assert!(app.take_pending_open().is_none());
    }

    #[test]
    fn test_open_on_empty_custom_tab_does_nothing() {
        let mut app = app();
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Char('o'));
        assert!(app.take_pending_open().is_none());
    }

    #[test]
    fn test_help_overlay_closes_on_any_key() {
        let mut app = app();
        press(&mut app, KeyCode::Char('?'));
        assert!(app.state().show_help);
        press(&mut app, KeyCode::Char('q'));
        assert!(!app.state().show_help);
        assert!(!app.state().should_quit);
    }
}
