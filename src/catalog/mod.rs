//! Catalogue data: the tool record type and dataset loading.
//!
//! The tool list ships inside the binary (`data/tools.json`) and is loaded
//! exactly once at startup. It is never mutated afterwards; every derived
//! view is a projection over it (see [`view`]).

pub mod view;

pub use view::{CatalogView, PAGE_SIZE};

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::config::DataConfig;
use crate::error::{GeocatError, Result};

/// Tool list compiled into the binary.
const BUNDLED_TOOLS: &str = include_str!("../../data/tools.json");

/// One catalogue entry describing an external geoscience software resource.
///
/// Every field defaults when absent so that a sparse or slightly malformed
/// record degrades to empty text/collections instead of failing the load.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tool {
    pub name: String,
    pub icon: String,
    pub description: String,
    pub link: String,
    pub category: String,
    pub tags: Vec<String>,
    pub stars: Option<u64>,
}

impl Tool {
    /// Hostname of the tool's link, without scheme or `www.` prefix.
    ///
    /// Returns `None` when the link has no recognizable host.
    pub fn hostname(&self) -> Option<&str> {
        let rest = self
            .link
            .strip_prefix("https://")
            .or_else(|| self.link.strip_prefix("http://"))?;
        let host = rest.split('/').next().unwrap_or("");
        let host = host.strip_prefix("www.").unwrap_or(host);
        if host.is_empty() { None } else { Some(host) }
    }
}

/// The immutable tool list, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Catalog {
    tools: Vec<Tool>,
}

impl Catalog {
    /// Parse the catalogue compiled into the binary.
    pub fn bundled() -> Result<Self> {
        Self::parse(BUNDLED_TOOLS, "bundled tools.json")
    }

    /// Load the catalogue from a file on disk.
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| GeocatError::Data(format!("{}: {}", path.display(), e)))?;
        Self::parse(&text, &path.display().to_string())
    }

    /// Load from the configured override path, or fall back to the bundled copy.
    pub fn load(config: &DataConfig) -> Result<Self> {
        match &config.tools_file {
            Some(path) => {
                log::info!("Loading tool catalogue from {}", path.display());
                Self::from_file(path)
            }
            None => Self::bundled(),
        }
    }

    fn parse(text: &str, source: &str) -> Result<Self> {
        let tools: Vec<Tool> = serde_json::from_str(text)
            .map_err(|e| GeocatError::Data(format!("{}: {}", source, e)))?;
        log::info!("Loaded {} tools from {}", tools.len(), source);
        Ok(Self { tools })
    }

    pub fn tools(&self) -> &[Tool] {
        &self.tools
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    /// Find a tool by name, case-insensitively.
    pub fn find(&self, name: &str) -> Option<&Tool> {
        let needle = name.to_lowercase();
        self.tools.iter().find(|t| t.name.to_lowercase() == needle)
    }

    /// Consume the catalog, yielding the tool list.
    pub fn into_tools(self) -> Vec<Tool> {
        self.tools
    }
}
