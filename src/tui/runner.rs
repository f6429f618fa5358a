//! TUI Runner - main event loop.
//!
//! The `TuiRunner` owns the terminal, app, event handler and URL opener.
//! It runs the main loop: render → handle event → open pending URL → repeat.

use super::Tui;
use super::app::App;
use super::events::{Event, EventHandler};
use super::views::render;
use crate::browser::UrlOpener;
use eyre::Result;
use log::{info, warn};

/// Main TUI runner that owns the event loop.
pub struct TuiRunner {
    terminal: Tui,
    app: App,
    event_handler: EventHandler,
    opener: Box<dyn UrlOpener>,
}

impl TuiRunner {
    pub fn new(terminal: Tui, app: App, event_handler: EventHandler, opener: Box<dyn UrlOpener>) -> Self {
        Self {
            terminal,
            app,
            event_handler,
            opener,
        }
    }

    /// Run until the user quits.
    pub async fn run(&mut self) -> Result<()> {
        info!("Starting TUI main loop");

        let size = self.terminal.size()?;
        self.app.resize(size.width);

        loop {
            self.terminal.draw(|f| render(&self.app, f))?;

            match self.event_handler.next().await? {
                Event::Key(key) => self.app.handle_key(key),
                Event::Paste(text) => self.app.handle_paste(&text),
                Event::Resize(width, _) => self.app.resize(width),
                Event::Tick => {}
            }

            if let Some(url) = self.app.take_pending_open() {
                open_url(&mut self.app, self.opener.as_ref(), &url);
            }

            if self.app.state().should_quit {
                break;
            }
        }

        info!(
            "TUI main loop ended with {} custom tool(s)",
            self.app.dashboard().custom_tools().len()
        );
        Ok(())
    }
}

/// Open `url` and report the result on the status line. Never changes dashboard data.
pub fn open_url(app: &mut App, opener: &dyn UrlOpener, url: &str) {
    match opener.open(url) {
        Ok(()) => {
            info!("Opened {} with {} opener", url, opener.name());
            app.set_status(format!("Opened {}", url));
        }
        Err(e) => {
            warn!("Failed to open {}: {}", url, e);
            app.set_status(format!("Could not open {}: {}", url, e));
        }
    }
}
