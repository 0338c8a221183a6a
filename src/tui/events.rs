//! Event handling for the TUI.
//!
//! Provides the unified event type (keyboard, tick, resize) and an async
//! event stream that polls crossterm with a tick interval.

use crossterm::event::{self, Event as CrosstermEvent, KeyEvent, KeyEventKind};
use eyre::Result;
use std::time::Duration;

/// Unified event type for the TUI.
#[derive(Debug, Clone)]
pub enum Event {
    /// Keyboard input event
    Key(KeyEvent),
    /// Periodic tick for state refresh
    Tick,
    /// Terminal resize
    Resize(u16, u16),
}

/// Handles keyboard and tick events.
///
/// Polls for crossterm events; the tick is generated when the poll timeout
/// expires without an event.
pub struct EventHandler {
    tick_rate: Duration,
}

impl EventHandler {
    /// Create a new event handler with the given tick rate.
    pub fn new(tick_rate_ms: u64) -> Self {
        Self {
            tick_rate: Duration::from_millis(tick_rate_ms),
        }
    }

    /// Get the next event.
    pub async fn next(&self) -> Result<Event> {
        // Poll on a blocking thread so the async runtime stays free
        let tick_rate = self.tick_rate;

        let event = tokio::task::spawn_blocking(move || -> Result<Event> {
            if event::poll(tick_rate)? {
                match event::read()? {
                    CrosstermEvent::Key(key) => {
                        // Only key presses, not releases
                        if key.kind == KeyEventKind::Press {
                            Ok(Event::Key(key))
                        } else {
                            Ok(Event::Tick)
                        }
                    }
                    CrosstermEvent::Resize(w, h) => Ok(Event::Resize(w, h)),
                    _ => Ok(Event::Tick),
                }
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
