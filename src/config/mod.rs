//! Configuration module

pub mod loader;

pub use loader::Config;

use serde::{Deserialize, Serialize};

use crate::view::icon::Icon;
use crate::view::nav_link::NavLinkItem;

/// View configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ViewConfig {
    /// Text colour of navigation labels
    #[serde(default = "default_nav_text_color")]
    pub nav_text_color: String,

    /// Prefix for the success/failure example links
    #[serde(default = "default_link_base")]
    pub link_base: String,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            nav_text_color: default_nav_text_color(),
            link_base: default_link_base(),
        }
    }
}

fn default_nav_text_color() -> String {
    "#a19f99".to_string()
}

fn default_link_base() -> String {
    "/".to_string()
}

fn default_true() -> bool {
    true
}

/// Syntax highlighting configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HighlightConfig {
    /// Whether code blocks are highlighted
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Highlighting theme (any theme bundled with syntect)
    #[serde(default = "default_theme")]
    pub theme: String,
}

impl Default for HighlightConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            theme: default_theme(),
        }
    }
}

fn default_theme() -> String {
    "InspiredGitHub".to_string()
}

/// Sanitizer configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SanitizeConfig {
    /// Tags allowed in addition to the default allowlist
    #[serde(default)]
    pub extra_tags: Vec<String>,

    /// Tags removed from the default allowlist
    #[serde(default)]
    pub remove_tags: Vec<String>,
}

/// Clipboard configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClipboardConfig {
    /// How long the "Copied!" acknowledgement stays visible
    #[serde(default = "default_reset_after_ms")]
    pub reset_after_ms: u64,

    /// Explicit clipboard helper command (auto-detected when empty)
    #[serde(default)]
    pub command: Vec<String>,
}

impl Default for ClipboardConfig {
    fn default() -> Self {
        Self {
            reset_after_ms: default_reset_after_ms(),
            command: Vec::new(),
        }
    }
}

fn default_reset_after_ms() -> u64 {
    2000
}

/// A navigation sidebar entry
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NavEntryConfig {
    /// Destination path
    pub to: String,

    /// Visible label
    #[serde(default)]
    pub label: String,

    /// Icon name
    #[serde(default)]
    pub icon: Option<String>,
}

impl NavEntryConfig {
    /// Build the navigation item described by this entry
    pub fn to_item(&self) -> NavLinkItem {
        let icon = self
            .icon
            .as_deref()
            .map(Icon::from_name)
            .unwrap_or(Icon::Rule);
        NavLinkItem::new(&self.to, &self.label, icon)
    }
}

pub(crate) fn default_nav() -> Vec<NavEntryConfig> {
    vec![
        NavEntryConfig {
            to: "/".to_string(),
            label: "Home".to_string(),
            icon: Some("home".to_string()),
        },
        NavEntryConfig {
            to: "/rules".to_string(),
            label: "Rules".to_string(),
            icon: Some("accessible".to_string()),
        },
    ]
}
