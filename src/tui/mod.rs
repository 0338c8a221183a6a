//! Terminal User Interface for geocat.
//!
//! A k9s-style interface with four views cycled with Tab:
//! - **Browse**: the searchable, filterable, paginated catalogue
//! - **About**: project description and contributor roster
//! - **Contribute**: proposal checklist and submission form
//! - **Contact**: contact form
//!
//! The TUI runs in the main process using tokio for async operations.

mod app;
mod events;
mod input;
mod runner;
mod views;

pub use app::{ActiveView, App, ContactForm, InteractionMode, ProposalForm, StatusMessage};
pub use events::{Event, EventHandler};
pub use input::TextInput;
pub use runner::TuiRunner;

use crossterm::{
    ExecutableCommand,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use eyre::Result;
use ratatui::prelude::*;
use std::io::{Stdout, stdout};

/// Type alias for our terminal backend.
pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Initialize the terminal for TUI mode.
///
/// Enables raw mode and switches to the alternate screen.
pub fn init_terminal() -> Result<Tui> {
    enable_raw_mode()?;
    stdout().execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout());
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

/// Restore the terminal to its original state.
///
/// Disables raw mode and leaves the alternate screen.
pub fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

/// Shared palette.
pub mod colors {
    use ratatui::style::Color;

    pub const HEADER: Color = Color::Rgb(0, 255, 255); // Cyan
    pub const ACCENT: Color = Color::Rgb(0, 255, 127); // Spring green
    pub const TAG: Color = Color::Rgb(186, 85, 211); // Orchid
    pub const STARS: Color = Color::Rgb(255, 215, 0); // Gold
    pub const SUCCESS: Color = Color::Rgb(50, 205, 50); // Lime green
    pub const ERROR: Color = Color::Rgb(220, 20, 60); // Crimson
    pub const WARNING: Color = Color::Rgb(255, 191, 0); // Amber
    pub const KEYBIND: Color = Color::Rgb(0, 255, 255); // Cyan
    pub const DIM: Color = Color::DarkGray;
}
