//! Application configuration structures.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};

/// Root application configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Data and output locations
    #[serde(default)]
    pub paths: PathsConfig,

    /// Presentation-adjacent knobs for the CLI
    #[serde(default)]
    pub display: DisplayConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Load configuration or return default if loading fails.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::load(&path).unwrap_or_else(|e| {
            log::warn!(
                "Config load failed from {:?}: {}. Using defaults.",
                path.as_ref(),
                e
            );
            Self::default()
        })
    }

    /// Validate configuration values for basic sanity.
    pub fn validate(&self) -> Result<()> {
        if self.paths.projects_dir.trim().is_empty() {
            return Err(AppError::config("paths.projects_dir is empty"));
        }
        if self.paths.keynotes_dir.trim().is_empty() {
            return Err(AppError::config("paths.keynotes_dir is empty"));
        }
        if self.paths.output.trim().is_empty() {
            return Err(AppError::config("paths.output is empty"));
        }
        if self.display.related_count == 0 {
            return Err(AppError::config("display.related_count must be > 0"));
        }
        if self.display.list_template.trim().is_empty() {
            return Err(AppError::config("display.list_template is empty"));
        }
        if url::Url::parse(&self.display.site_url).is_err() {
            return Err(AppError::config("display.site_url is not a valid URL"));
        }
        Ok(())
    }
}

/// Data and output locations, relative to the storage root.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathsConfig {
    /// Directory of project source-group files (one JSON array per file)
    #[serde(default = "defaults::projects_dir")]
    pub projects_dir: String,

    /// Directory of keynote files (one JSON object per file)
    #[serde(default = "defaults::keynotes_dir")]
    pub keynotes_dir: String,

    /// Exported catalog snapshot file
    #[serde(default = "defaults::output")]
    pub output: String,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            projects_dir: defaults::projects_dir(),
            keynotes_dir: defaults::keynotes_dir(),
            output: defaults::output(),
        }
    }
}

/// Presentation-adjacent settings used by the CLI.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Number of projects drawn for a related panel
    #[serde(default = "defaults::related_count")]
    pub related_count: usize,

    /// Template for one project line in list output
    #[serde(default = "defaults::list_template")]
    pub list_template: String,

    /// Base address share links are written against
    #[serde(default = "defaults::site_url")]
    pub site_url: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            related_count: defaults::related_count(),
            list_template: defaults::list_template(),
            site_url: defaults::site_url(),
        }
    }
}

mod defaults {
    pub fn projects_dir() -> String {
        "data/projects".into()
    }
    pub fn keynotes_dir() -> String {
        "data/keynotes".into()
    }
    pub fn output() -> String {
        "catalog.json".into()
    }
    pub fn related_count() -> usize {
        3
    }
    pub fn list_template() -> String {
        "{year}  {title} — {author}".into()
    }
    pub fn site_url() -> String {
        "https://showcase.local/projects".into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_default_config_ok() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn validate_rejects_zero_related_count() {
        let mut config = Config::default();
        config.display.related_count = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_empty_projects_dir() {
        let mut config = Config::default();
        config.paths.projects_dir = "  ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: Config = toml::from_str("[display]\nrelated_count = 5\n").unwrap();
        assert_eq!(config.display.related_count, 5);
        assert_eq!(config.paths.output, "catalog.json");
    }
}
