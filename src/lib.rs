//! geocat - a terminal catalogue of open-source geoscience tools
//!
//! A browsable, searchable, filterable directory of open geoscience
//! software, bundled into a single binary. The interactive TUI is the
//! default entry point; CLI subcommands expose the same catalogue view
//! model and form-submission client non-interactively.

pub mod catalog;
pub mod cli;
pub mod config;
pub mod content;
pub mod error;
pub mod submit;
pub mod tui;

pub use error::{GeocatError, Result};
