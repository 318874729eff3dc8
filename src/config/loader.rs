//! Configuration loader

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::debug;

use crate::error::{ConfigError, RuleDeckError};

use super::{
    default_nav, ClipboardConfig, HighlightConfig, NavEntryConfig, SanitizeConfig, ViewConfig,
};

pub const CONFIG_FILENAME: &str = ".ruledeck.toml";

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// View settings
    #[serde(default)]
    pub view: ViewConfig,

    /// Syntax highlighting settings
    #[serde(default)]
    pub highlight: HighlightConfig,

    /// Sanitizer allowlist adjustments
    #[serde(default)]
    pub sanitize: SanitizeConfig,

    /// Clipboard settings
    #[serde(default)]
    pub clipboard: ClipboardConfig,

    /// Navigation sidebar entries
    #[serde(default = "default_nav")]
    pub nav: Vec<NavEntryConfig>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            view: ViewConfig::default(),
            highlight: HighlightConfig::default(),
            sanitize: SanitizeConfig::default(),
            clipboard: ClipboardConfig::default(),
            nav: default_nav(),
        }
    }
}

impl Config {
    /// Load configuration from file or return default
    ///
    /// Looks for `.ruledeck.toml` in the working directory, then for
    /// `ruledeck/config.toml` in the user config directory.
    pub fn load_or_default() -> Result<Self, RuleDeckError> {
        for candidate in Self::search_paths() {
            if candidate.exists() {
                debug!(path = %candidate.display(), "Loading configuration");
                return Self::load_from_file(&candidate);
            }
        }

        debug!("No configuration file found, using defaults");
        Ok(Self::default())
    }

    /// Load from an explicit path when given, otherwise search
    pub fn resolve(explicit: Option<&Path>) -> Result<Self, RuleDeckError> {
        match explicit {
            Some(path) => Self::load_from_file(path),
            None => Self::load_or_default(),
        }
    }

    fn search_paths() -> Vec<PathBuf> {
        let mut paths = vec![PathBuf::from(CONFIG_FILENAME)];
        if let Some(dir) = dirs::config_dir() {
            paths.push(dir.join("ruledeck").join("config.toml"));
        }
        paths
    }

    /// Load configuration from a specific file
    pub fn load_from_file(path: &Path) -> Result<Self, RuleDeckError> {
        let content = fs::read_to_string(path).map_err(|e| {
            RuleDeckError::Config(ConfigError::FileRead {
                path: path.display().to_string(),
                source: e,
            })
        })?;

        toml::from_str(&content).map_err(Into::into)
    }

    /// Serialize configuration to TOML
    pub fn to_toml(&self) -> Result<String, RuleDeckError> {
        toml::to_string_pretty(self).map_err(Into::into)
    }

    /// Window during which the copy acknowledgement is shown
    pub fn copy_reset_window(&self) -> Duration {
        Duration::from_millis(self.clipboard.reset_after_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.view.nav_text_color, "#a19f99");
        assert_eq!(config.view.link_base, "/");
        assert!(config.highlight.enabled);
        assert_eq!(config.copy_reset_window(), Duration::from_millis(2000));
        assert_eq!(config.nav.len(), 2);
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let toml_content = r##"
[view]
link_base = "/catalog/"

[highlight]
enabled = false
"##;
        let config: Config = toml::from_str(toml_content).unwrap();
        assert_eq!(config.view.link_base, "/catalog/");
        assert_eq!(config.view.nav_text_color, "#a19f99");
        assert!(!config.highlight.enabled);
        assert_eq!(config.highlight.theme, "InspiredGitHub");
        assert_eq!(config.clipboard.reset_after_ms, 2000);
    }

    #[test]
    fn test_nav_entries_parsing() {
        let toml_content = r#"
[[nav]]
to = "/guides"
label = "Guides"
icon = "tag_faces"
"#;
        let config: Config = toml::from_str(toml_content).unwrap();
        assert_eq!(config.nav.len(), 1);
        assert_eq!(config.nav[0].to, "/guides");
        assert_eq!(config.nav[0].icon.as_deref(), Some("tag_faces"));
    }

    #[test]
    fn test_roundtrip_through_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(CONFIG_FILENAME);
        let mut config = Config::default();
        config.clipboard.command = vec!["xclip".to_string(), "-selection".to_string()];
        fs::write(&path, config.to_toml().unwrap()).unwrap();

        let loaded = Config::load_from_file(&path).unwrap();
        assert_eq!(loaded.clipboard.command, config.clipboard.command);
        assert_eq!(loaded.nav, config.nav);
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let result = Config::resolve(Some(Path::new("/nonexistent/ruledeck.toml")));
        assert!(matches!(
            result,
            Err(RuleDeckError::Config(ConfigError::FileRead { .. }))
        ));
    }
}
