//! CLI module for geocat - command-line interface and subcommands.
//!
//! Provides the main entry point with subcommands for browsing the
//! catalogue non-interactively and sending form submissions; with no
//! subcommand the TUI launches.

pub mod commands;

pub use commands::Cli;
