//! CLI command definitions using clap.
//!
//! Defines the main CLI structure and subcommands:
//! - list: print the filtered, sorted catalogue
//! - tags: print the tag vocabulary
//! - show: print one tool's full record
//! - contact / submit: send a form payload to the configured endpoint

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// geocat - a terminal catalogue of open-source geoscience tools
#[derive(Parser, Debug)]
#[command(name = "geocat")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Optional config file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Check if verbose mode is enabled
    pub fn is_verbose(&self) -> bool {
        self.verbose
    }
}

/// Main subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List catalogue entries, filtered and sorted by name
    List {
        /// Case-insensitive text matched against name, description, and tags
        #[arg(short, long)]
        query: Option<String>,

        /// Show only tools carrying this exact tag
        #[arg(short, long)]
        tag: Option<String>,

        /// Maximum number of entries to print (defaults to one page)
        #[arg(short = 'n', long, conflicts_with = "all")]
        limit: Option<usize>,

        /// Print every matching entry
        #[arg(long)]
        all: bool,
    },

    /// Print the tag vocabulary with per-tag counts
    Tags,

    /// Show one tool's full record
    Show {
        /// Tool name (case-insensitive)
        name: String,
    },

    /// Send a contact message to the maintainers
    Contact {
        /// Your name
        #[arg(long)]
        name: String,

        /// Reply-to email address
        #[arg(long)]
        email: String,

        /// Message body
        #[arg(long)]
        message: String,
    },

    /// Propose a new tool for the catalogue
    Submit {
        /// Tool name
        #[arg(long)]
        name: String,

        /// Canonical repo or docs URL
        #[arg(long)]
        link: String,

        /// Short description
        #[arg(long)]
        description: Option<String>,

        /// Suggested tags, comma-separated
        #[arg(long, value_delimiter = ',')]
        tags: Vec<String>,

        /// Your name (optional)
        #[arg(long)]
        submitter: Option<String>,

        /// Contact email (optional)
        #[arg(long)]
        email: Option<String>,
    },
}
