//! TUI runner - main event loop.
//!
//! The `TuiRunner` owns the terminal, app, event handler, and the
//! submission client. It runs the main loop: render → handle events →
//! drain pending submissions → repeat.

use std::sync::Arc;

use eyre::Result;
use log::info;

use super::Tui;
use super::app::App;
use super::events::{Event, EventHandler};
use super::views;
use crate::submit::Submitter;

/// Main TUI runner that owns the event loop.
pub struct TuiRunner {
    terminal: Tui,
    app: App,
    event_handler: EventHandler,
    submitter: Arc<dyn Submitter>,
}

impl TuiRunner {
    /// Create a new TUI runner.
    pub fn new(terminal: Tui, app: App, submitter: Arc<dyn Submitter>, tick_rate_ms: u64) -> Self {
        Self {
            terminal,
            app,
            event_handler: EventHandler::new(tick_rate_ms),
            submitter,
        }
    }

    /// Get a reference to the app.
    pub fn app(&self) -> &App {
        &self.app
    }

    /// Get a mutable reference to the app.
    pub fn app_mut(&mut self) -> &mut App {
        &mut self.app
    }

    /// Run the main TUI loop.
    pub async fn run(&mut self) -> Result<()> {
        info!("Starting TUI main loop");

        loop {
            // 1. Render current state
            self.terminal.draw(|f| views::render(&self.app, f))?;

            // 2. Handle events (keyboard, tick)
            match self.event_handler.next().await? {
                Event::Key(key) => {
                    if self.app.handle_key(key) {
                        break;
                    }
                }
                Event::Tick => {}
                Event::Resize(_, _) => {
                    // Terminal handles resize on next draw
                }
            }

            // 3. Drain any submission staged by the forms
            self.process_pending_submission().await;

            if self.app.should_quit {
                break;
            }
        }

        info!("TUI main loop ended");
        Ok(())
    }

    /// Send a staged form payload and surface the outcome inline.
    async fn process_pending_submission(&mut self) {
        let Some(payload) = self.app.pending_submission.take() else {
            return;
        };

        match self.submitter.submit(&payload).await {
            Ok(()) => {
                info!("Submission accepted ({})", payload.kind());
                self.app.submission_succeeded(&payload);
            }
            Err(e) => {
                info!("Submission failed: {}", e);
                self.app.submission_failed(e.to_string());
            }
        }
    }
}
