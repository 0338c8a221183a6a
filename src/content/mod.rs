//! Site content: announcement banner and contributor roster.
//!
//! Both are small bundled JSON documents with dynamic shapes in the
//! original data, mapped here to explicit optional-field records validated
//! at load time.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::config::DataConfig;
use crate::error::{GeocatError, Result};

const BUNDLED_ANNOUNCEMENT: &str = include_str!("../../data/announcement.json");
const BUNDLED_CONTRIBUTORS: &str = include_str!("../../data/contributors.json");

/// Visual treatment of the announcement banner.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnnouncementVariant {
    #[default]
    Info,
    Success,
    Warning,
}

/// Announcement banner configuration.
///
/// The banner shows only when `active` is set and the message is non-blank;
/// the call-to-action needs both its text and URL.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Announcement {
    pub active: bool,
    pub title: Option<String>,
    pub message: String,
    pub cta_text: Option<String>,
    pub cta_url: Option<String>,
    pub variant: AnnouncementVariant,
}

impl Announcement {
    /// Parse the announcement compiled into the binary.
    pub fn bundled() -> Result<Self> {
        Self::parse(BUNDLED_ANNOUNCEMENT, "bundled announcement.json")
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| GeocatError::Data(format!("{}: {}", path.display(), e)))?;
        Self::parse(&text, &path.display().to_string())
    }

    /// Load from the configured override path, or fall back to the bundled copy.
    pub fn load(config: &DataConfig) -> Result<Self> {
        match &config.announcement_file {
            Some(path) => Self::from_file(path),
            None => Self::bundled(),
        }
    }

    fn parse(text: &str, source: &str) -> Result<Self> {
        serde_json::from_str(text).map_err(|e| GeocatError::Data(format!("{}: {}", source, e)))
    }

    /// Whether the banner should be shown at all.
    pub fn is_active(&self) -> bool {
        self.active && !self.message.trim().is_empty()
    }

    /// The call-to-action, when both text and URL are present.
    pub fn cta(&self) -> Option<(&str, &str)> {
        match (self.cta_text.as_deref(), self.cta_url.as_deref()) {
            (Some(text), Some(url)) => Some((text, url)),
            _ => None,
        }
    }
}

/// One entry in the maintainer roster shown on the About page.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Contributor {
    pub name: String,
    pub role: String,
    pub github: String,
    pub avatar: Option<String>,
    pub from: Option<u16>,
    pub to: Option<u16>,
}

impl Contributor {
    /// Up to two initials from the name, uppercased.
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .take(2)
            .collect::<String>()
            .to_uppercase()
    }

    /// Tenure label, e.g. "2021 – present". `None` when no start year is known.
    pub fn tenure(&self) -> Option<String> {
        let from = self.from?;
        Some(match self.to {
            Some(to) => format!("{from} \u{2013} {to}"),
            None => format!("{from} \u{2013} present"),
        })
    }
}

/// Load the contributor roster.
pub fn load_contributors(config: &DataConfig) -> Result<Vec<Contributor>> {
    let (text, source) = match &config.contributors_file {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .map_err(|e| GeocatError::Data(format!("{}: {}", path.display(), e)))?;
            (text, path.display().to_string())
        }
        None => (
            BUNDLED_CONTRIBUTORS.to_string(),
            "bundled contributors.json".to_string(),
        ),
    };
    serde_json::from_str(&text).map_err(|e| GeocatError::Data(format!("{}: {}", source, e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_announcement_loads() {
        let announcement = Announcement::bundled().unwrap();
        assert!(!announcement.message.is_empty());
    }

    #[test]
    fn test_inactive_when_flag_off() {
        let announcement: Announcement =
            serde_json::from_str(r#"{"active": false, "message": "hello"}"#).unwrap();
        assert!(!announcement.is_active());
    }

    #[test]
    fn test_inactive_when_message_blank() {
        let announcement: Announcement =
            serde_json::from_str(r#"{"active": true, "message": "   "}"#).unwrap();
        assert!(!announcement.is_active());
    }

    #[test]
    fn test_variant_defaults_to_info() {
        let announcement: Announcement =
            serde_json::from_str(r#"{"active": true, "message": "hi"}"#).unwrap();
        assert_eq!(announcement.variant, AnnouncementVariant::Info);
    }

    #[test]
    fn test_cta_requires_both_fields() {
        let announcement: Announcement = serde_json::from_str(
            r#"{"active": true, "message": "hi", "ctaText": "Go"}"#,
        )
        .unwrap();
        assert!(announcement.cta().is_none());

        let full: Announcement = serde_json::from_str(
            r#"{"active": true, "message": "hi", "ctaText": "Go", "ctaUrl": "https://x.example"}"#,
        )
        .unwrap();
        assert_eq!(full.cta(), Some(("Go", "https://x.example")));
    }

    #[test]
    fn test_bundled_contributors_load() {
        let contributors = load_contributors(&DataConfig::default()).unwrap();
        assert!(!contributors.is_empty());
        for person in &contributors {
            assert!(!person.name.is_empty());
            assert!(!person.github.is_empty());
        }
    }

    #[test]
    fn test_initials() {
        let person = Contributor {
            name: "Amira Haddad".to_string(),
            ..Default::default()
        };
        assert_eq!(person.initials(), "AH");

        let mononym = Contributor {
            name: "Cher".to_string(),
            ..Default::default()
        };
        assert_eq!(mononym.initials(), "C");

        let long = Contributor {
            name: "Ana Maria da Silva".to_string(),
            ..Default::default()
        };
        assert_eq!(long.initials(), "AM");
    }

    #[test]
    fn test_tenure() {
        let current = Contributor {
            from: Some(2021),
            to: None,
            ..Default::default()
        };
        assert_eq!(current.tenure().unwrap(), "2021 \u{2013} present");

        let past = Contributor {
            from: Some(2021),
            to: Some(2024),
            ..Default::default()
        };
        assert_eq!(past.tenure().unwrap(), "2021 \u{2013} 2024");

        let unknown = Contributor::default();
        assert!(unknown.tenure().is_none());
    }
}
