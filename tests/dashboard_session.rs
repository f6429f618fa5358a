//! Dashboard session integration tests
//!
//! Drives a whole session through the public API: config → catalog →
//! dashboard → TUI app, without a real terminal.

use std::io::Write;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tempfile::NamedTempFile;
use tools_dashboard::config::Config;
use tools_dashboard::dashboard::{Catalog, Dashboard, DraftStatus, SubmitOutcome};
use tools_dashboard::domain::{Field, Tool};
use tools_dashboard::tui::{App, Mode, Tab};

fn press(app: &mut App, code: KeyCode) {
    app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
}

fn type_text(app: &mut App, text: &str) {
    for c in text.chars() {
        press(app, KeyCode::Char(c));
    }
}

/// Scenario: a complete draft is added and the form resets
#[test]
fn test_add_notion_ai() {
    let mut dashboard = Dashboard::new(Catalog::builtin());
    dashboard.update_field(Field::Name, "Notion AI");
    dashboard.update_field(Field::Description, "AI writing helper");
    dashboard.update_field(Field::Url, "https://notion.ai");

    assert_eq!(dashboard.submit(), SubmitOutcome::Added { index: 0 });
    assert_eq!(
        dashboard.custom_tools().tools(),
        &[Tool::new("Notion AI", "AI writing helper", "https://notion.ai")]
    );
    assert_eq!(dashboard.draft().tool(), &Tool::new("", "", ""));
}

/// Scenario: a name-only draft is silently ignored
#[test]
fn test_name_only_submit_is_ignored() {
    let mut dashboard = Dashboard::new(Catalog::builtin());
    dashboard.update_field(Field::Name, "X");

    assert!(!dashboard.submit().is_added());
    assert!(dashboard.custom_tools().is_empty());
    assert_eq!(dashboard.draft().tool(), &Tool::new("X", "", ""));
    assert_eq!(dashboard.draft().status(), DraftStatus::PartiallyFilled);
}

/// Configured catalog replaces the built-in one and stays fixed
#[test]
fn test_session_with_configured_catalog() {
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        "catalog:\n  - name: Perplexity\n    description: Answer engine\n    url: https://perplexity.ai\n"
    )
    .unwrap();

    let path = file.path().to_path_buf();
    let config = Config::load(Some(&path)).unwrap();
    let catalog = Catalog::from_config(config.catalog.as_deref()).unwrap();
    let mut app = App::new(Dashboard::new(catalog.clone()), &config.ui);

    assert_eq!(app.visible_tools()[0].name, "Perplexity");

    press(&mut app, KeyCode::Tab);
    assert_eq!(app.state().tab, Tab::Custom);
    for name in ["A", "B", "C"] {
        press(&mut app, KeyCode::Char('i'));
        type_text(&mut app, name);
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "desc");
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "https://example.com");
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Esc);
    }

    assert_eq!(app.state().mode, Mode::Browse);
    let names: Vec<&str> = app.visible_tools().iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, vec!["A", "B", "C"]);
    assert_eq!(app.dashboard().catalog(), &catalog);

    press(&mut app, KeyCode::Tab);
    assert_eq!(app.state().tab, Tab::Catalog);
    assert_eq!(app.visible_tools().len(), 1);
    assert_eq!(app.dashboard().custom_tools().len(), 3);
}

/// Opening a custom card hands its url to the runner
#[test]
fn test_open_custom_card() {
    let mut app = App::new(Dashboard::new(Catalog::builtin()), &Config::default().ui);
    press(&mut app, KeyCode::Char('2'));
    press(&mut app, KeyCode::Char('a'));
    type_text(&mut app, "Notion AI");
    press(&mut app, KeyCode::Tab);
    type_text(&mut app, "AI writing helper");
    press(&mut app, KeyCode::Tab);
    type_text(&mut app, "https://notion.ai");
    press(&mut app, KeyCode::Enter);
    press(&mut app, KeyCode::Esc);
    press(&mut app, KeyCode::Char('o'));

    assert_eq!(app.take_pending_open().as_deref(), Some("https://notion.ai"));
}
