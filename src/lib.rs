//! RuleDeck Library
//!
//! Page components for browsing a catalog of accessibility rules: a
//! navigation sidebar, a rule detail page with sanitized and highlighted
//! resolution markup, and a copyable release notification payload.
//!
//! ```
//! use std::sync::Arc;
//! use std::time::Duration;
//! use tokio::sync::watch;
//!
//! use ruledeck::catalog::RuleRecord;
//! use ruledeck::clipboard::CopyState;
//! use ruledeck::config::Config;
//! use ruledeck::view::{RuleDetailView, ViewServices};
//!
//! let config = Config::default();
//! let rule = RuleRecord {
//!     name: "Contrast Ratio".to_string(),
//!     criteria: "1.4.3".to_string(),
//!     route: "contrast".to_string(),
//!     ..Default::default()
//! };
//! let (_tx, rx) = watch::channel(Some(Arc::new(rule)));
//! let mut view = RuleDetailView::new(
//!     rx,
//!     ViewServices::from_config(&config).unwrap(),
//!     "/",
//!     CopyState::new(Duration::from_millis(2000)),
//! );
//! let page = view.render("/1.4.3/contrast");
//! assert!(page.to_html().contains("Contrast Ratio"));
//! ```

pub mod catalog;
pub mod cli;
pub mod clipboard;
pub mod config;
pub mod error;
pub mod release;
pub mod routing;
pub mod view;

pub use cli::exit_codes;
pub use error::RuleDeckError;
