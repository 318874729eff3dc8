//! # Views
//!
//! Page components render typed inputs into [`node::Node`] trees.
//!
//! - [`nav_link`] - Sidebar navigation entries with selected state
//! - [`rule_detail`] - Rule detail page
//! - [`breadcrumbs`] - Location trail
//! - [`sanitize`] - Untrusted markup to [`sanitize::SafeHtml`]
//! - [`highlight`] - Code block highlighting
//!
//! Components reach their collaborators through [`ViewServices`], so tests
//! and other front ends can swap sanitizer, highlighter or breadcrumbs.

pub mod breadcrumbs;
pub mod highlight;
pub mod icon;
pub mod nav_link;
pub mod node;
pub mod rule_detail;
pub mod sanitize;

pub use nav_link::{NavLinkItem, NavStyle, Sidebar};
pub use node::{Element, Node};
pub use rule_detail::RuleDetailView;

use std::sync::Arc;

use crate::config::Config;
use crate::error::RenderError;
use breadcrumbs::{Breadcrumbs, PathBreadcrumbs};
use highlight::{Highlighter, PlainHighlighter, SyntectHighlighter};
use sanitize::{AmmoniaSanitizer, Sanitizer};

/// Collaborators shared by the page components
#[derive(Clone)]
pub struct ViewServices {
    pub sanitizer: Arc<dyn Sanitizer>,
    pub highlighter: Arc<dyn Highlighter>,
    pub breadcrumbs: Arc<dyn Breadcrumbs>,
}

impl ViewServices {
    pub fn from_config(config: &Config) -> Result<Self, RenderError> {
        let highlighter: Arc<dyn Highlighter> = if config.highlight.enabled {
            Arc::new(SyntectHighlighter::new(&config.highlight.theme)?)
        } else {
            Arc::new(PlainHighlighter)
        };

        Ok(Self {
            sanitizer: Arc::new(AmmoniaSanitizer::new(&config.sanitize)),
            highlighter,
            breadcrumbs: Arc::new(PathBreadcrumbs),
        })
    }
}

/// Sidebar described by the configuration
pub fn sidebar_from_config(config: &Config) -> Sidebar {
    Sidebar::new(
        config.nav.iter().map(|entry| entry.to_item()).collect(),
        NavStyle {
            text_color: config.view.nav_text_color.clone(),
        },
    )
}
