//! Configuration for geocat.
//!
//! A single YAML file with per-section defaults. Search order:
//! 1. Explicit path if provided (`--config`)
//! 2. .geocat.yml in the current directory (project config)
//! 3. ~/.config/geocat/geocat.yml (user config)
//! 4. Default values

use eyre::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub log_level: Option<String>,
    pub data: DataConfig,
    pub catalog: CatalogConfig,
    pub submit: SubmitConfig,
    pub tui: TuiConfig,
}

/// Override paths for the bundled data files. `None` means "use the copy
/// compiled into the binary".
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    pub tools_file: Option<PathBuf>,
    pub announcement_file: Option<PathBuf>,
    pub contributors_file: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Records revealed per pagination step
    pub page_size: usize,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self { page_size: 20 }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SubmitConfig {
    /// Script endpoint the contact/contribute forms post to
    pub endpoint: String,
    pub timeout_ms: u64,
}

impl Default for SubmitConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://scripts.digitalgeosciences.com/opengeo-submit".to_string(),
            timeout_ms: 10_000,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TuiConfig {
    pub tick_rate_ms: u64,
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self { tick_rate_ms: 250 }
    }
}

impl Config {
    /// Load configuration from the standard search paths.
    pub fn load(explicit_path: Option<&PathBuf>) -> Result<Self> {
        if let Some(path) = explicit_path {
            return Self::from_file(path);
        }

        let project = PathBuf::from(".geocat.yml");
        if project.exists() {
            return Self::from_file(&project);
        }

        if let Some(config_dir) = dirs::config_dir() {
            let user = config_dir.join("geocat").join("geocat.yml");
            if user.exists() {
                return Self::from_file(&user);
            }
        }

        Ok(Self::default())
    }

    /// Load configuration from a specific file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        let config: Config = serde_yaml::from_str(&text)
            .with_context(|| format!("Failed to parse config: {}", path.display()))?;
        log::debug!("Loaded config from {}", path.display());
        Ok(config)
    }
}
