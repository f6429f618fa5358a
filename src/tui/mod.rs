//! Terminal User Interface for the tools dashboard.
//!
//! Two tabs:
//! - **AI Tools**: the preloaded catalog as a card grid
//! - **My Tools**: the add-tool form and the tools added this session

mod app;
mod cards;
mod events;
mod input;
mod runner;
mod state;
mod views;

pub use app::App;
pub use cards::{CardSlot, grid_columns, layout_grid};
pub use events::{Event, EventHandler};
pub use input::TextInput;
pub use runner::TuiRunner;
pub use state::{AppState, FormInputs, Mode, Tab};
pub use views::render;

use crossterm::{
    ExecutableCommand,
    event::{DisableBracketedPaste, EnableBracketedPaste},
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use eyre::{Context, Result};
use log::info;
use ratatui::prelude::*;
use std::io::{self, Stdout, stdout};

use crate::DashboardError;
use crate::browser::opener_from_config;
use crate::config::Config;
use crate::dashboard::{Catalog, Dashboard};

/// Type alias for our terminal backend.
pub type Tui = Terminal<CrosstermBackend<Stdout>>;

fn terminal_error(step: &'static str) -> impl FnOnce(io::Error) -> DashboardError {
    move |e| DashboardError::Terminal(format!("{}: {}", step, e))
}

/// Enable raw mode, switch to the alternate screen and turn on bracketed
/// paste so pasted line breaks arrive as text instead of Enter presses.
pub fn init_terminal() -> crate::Result<Tui> {
    enable_raw_mode().map_err(terminal_error("enable raw mode"))?;
    stdout()
        .execute(EnterAlternateScreen)
        .map_err(terminal_error("enter alternate screen"))?;
    stdout()
        .execute(EnableBracketedPaste)
        .map_err(terminal_error("enable bracketed paste"))?;
    let backend = CrosstermBackend::new(stdout());
    let terminal = Terminal::new(backend).map_err(terminal_error("create terminal"))?;
    Ok(terminal)
}

/// Undo `init_terminal`.
pub fn restore_terminal() -> crate::Result<()> {
    stdout()
        .execute(DisableBracketedPaste)
        .map_err(terminal_error("disable bracketed paste"))?;
    disable_raw_mode().map_err(terminal_error("disable raw mode"))?;
    stdout()
        .execute(LeaveAlternateScreen)
        .map_err(terminal_error("leave alternate screen"))?;
    Ok(())
}

/// Build a dashboard session from config and run it until the user quits.
///
/// The terminal is restored even when the loop fails.
pub async fn run(config: &Config) -> Result<()> {
    let catalog = Catalog::from_config(config.catalog.as_deref()).context("Invalid catalog in config")?;
    info!("Starting dashboard with {} catalog tool(s)", catalog.len());

    let app = App::new(Dashboard::new(catalog), &config.ui);
    let events = EventHandler::new(config.tui.tick_rate_ms);
    let opener = opener_from_config(&config.browser);

    let terminal = init_terminal().context("Failed to initialize terminal")?;
    let mut runner = TuiRunner::new(terminal, app, events, opener);
    let result = runner.run().await;

    restore_terminal().context("Failed to restore terminal")?;
    result
}

/// Dashboard colors.
pub mod colors {
    use ratatui::style::Color;

    pub const HEADER: Color = Color::Rgb(0, 255, 255); // Cyan
    pub const KEYBIND: Color = Color::Rgb(0, 255, 255); // Cyan
    pub const SELECTED: Color = Color::Rgb(255, 215, 0); // Gold
    pub const STATUS: Color = Color::Rgb(0, 255, 127); // Spring green
    pub const BORDER: Color = Color::Gray;
    pub const BUTTON_FG: Color = Color::Black;
    pub const BUTTON_BG: Color = Color::Rgb(230, 230, 230);
    pub const MUTED: Color = Color::Gray;
    pub const DIM: Color = Color::DarkGray;
}
