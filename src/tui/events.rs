//! Terminal events for the dashboard loop.
//!
//! - `Event`: key press, paste, resize or idle tick
//! - `EventHandler`: polls crossterm off the async runtime

use crossterm::event::{self, Event as CrosstermEvent, KeyEvent, KeyEventKind};
use eyre::Result;
use std::time::Duration;

/// Unified event type for the TUI.
#[derive(Debug, Clone)]
pub enum Event {
    /// Key press (releases and repeats are dropped)
    Key(KeyEvent),
    /// Bracketed paste, delivered as one piece
    Paste(String),
    /// Poll timeout with no input
    Tick,
    /// Terminal resized to (columns, rows)
    Resize(u16, u16),
}

impl Event {
    /// Translate a crossterm event, dropping ones the dashboard ignores.
    pub fn from_crossterm(event: CrosstermEvent) -> Self {
        match event {
            CrosstermEvent::Key(key) if key.kind == KeyEventKind::Press => Event::Key(key),
            CrosstermEvent::Paste(text) => Event::Paste(text),
            CrosstermEvent::Resize(w, h) => Event::Resize(w, h),
            _ => Event::Tick,
        }
    }
}

/// Polls for keyboard and resize events.
pub struct EventHandler {
    tick_rate: Duration,
}

impl EventHandler {
    pub fn new(tick_rate_ms: u64) -> Self {
        Self {
            tick_rate: Duration::from_millis(tick_rate_ms),
        }
    }

    /// Wait for the next event, or a `Tick` once the tick rate elapses.
    pub async fn next(&self) -> Result<Event> {
        let tick_rate = self.tick_rate;

        let event = tokio::task::spawn_blocking(move || -> Result<Event> {
            if event::poll(tick_rate)? {
                Ok(Event::from_crossterm(event::read()?))
            } else {
                Ok(Event::Tick)
            }
        })
        .await??;

        Ok(event)
    }
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new(250)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEventState, KeyModifiers};

    #[test]
    fn test_event_handler_creation() {
        let handler = EventHandler::new(100);
        assert_eq!(handler.tick_rate, Duration::from_millis(100));
    }

    #[test]
    fn test_event_handler_default() {
        let handler = EventHandler::default();
        assert_eq!(handler.tick_rate, Duration::from_millis(250));
    }

    #[test]
    fn test_key_press_passes_through() {
        let key = KeyEvent::new(KeyCode::Char('a'), KeyModifiers::NONE);
        assert!(matches!(Event::from_crossterm(CrosstermEvent::Key(key)), Event::Key(_)));
    }

    #[test]
    fn test_key_release_is_dropped() {
        let key = KeyEvent {
            code: KeyCode::Char('a'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert!(matches!(Event::from_crossterm(CrosstermEvent::Key(key)), Event::Tick));
    }

    #[test]
    fn test_paste_passes_through() {
        match Event::from_crossterm(CrosstermEvent::Paste("a\nb".to_string())) {
            Event::Paste(text) => assert_eq!(text, "a\nb"),
            other => panic!("expected paste, got {:?}", other),
        }
    }

    #[test]
    fn test_resize_passes_through() {
        assert!(matches!(
            Event::from_crossterm(CrosstermEvent::Resize(120, 40)),
            Event::Resize(120, 40)
        ));
    }
}
