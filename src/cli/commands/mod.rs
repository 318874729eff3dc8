//! CLI commands module

pub mod copy;
pub mod generate_man;
pub mod init;
pub mod list;
pub mod nav;
pub mod payload;
pub mod render;
pub mod schema;

use clap::Args;
use colored::Colorize;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::watch;

use crate::catalog::{Catalog, RuleRecord};
use crate::clipboard::CopyState;
use crate::config::Config;
use crate::error::{OutputError, RuleDeckError};
use crate::view::{RuleDetailView, ViewServices};

/// Catalog selection shared by commands that read rules
#[derive(Args, Debug)]
pub struct CatalogArgs {
    /// Rule catalog file (.json, .yaml, .yml)
    #[arg(long, value_name = "FILE", env = "RULEDECK_CATALOG")]
    pub catalog: PathBuf,
}

/// Arguments for the init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Force overwrite existing configuration
    #[arg(short, long)]
    pub force: bool,
}

/// Arguments for the render command
#[derive(Args, Debug)]
pub struct RenderArgs {
    #[command(flatten)]
    pub catalog: CatalogArgs,

    /// Rule id, route, or criteria/route
    #[arg(short, long)]
    pub rule: String,

    /// Current location (defaults to the rule's own page path)
    #[arg(long, value_name = "PATH")]
    pub location: Option<String>,

    /// Output format (html, terminal, json)
    #[arg(short, long, default_value = "html")]
    pub format: PageFormat,

    /// Output file (defaults to stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

/// Arguments for the nav command
#[derive(Args, Debug)]
pub struct NavArgs {
    /// Current location
    #[arg(long, value_name = "PATH", default_value = "/")]
    pub location: String,

    /// Output format (html, terminal)
    #[arg(short, long, default_value = "terminal")]
    pub format: NavFormat,

    /// Output file (defaults to stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

/// Arguments for the list command
#[derive(Args, Debug)]
pub struct ListArgs {
    #[command(flatten)]
    pub catalog: CatalogArgs,
}

/// Arguments for the payload command
#[derive(Args, Debug)]
pub struct PayloadArgs {
    #[command(flatten)]
    pub catalog: CatalogArgs,

    /// Rule id, route, or criteria/route
    #[arg(short, long)]
    pub rule: String,

    /// Validate the payload against the JSON Schema before emitting
    #[arg(long)]
    pub validate: bool,
}

/// Arguments for the copy command
#[derive(Args, Debug)]
pub struct CopyArgs {
    #[command(flatten)]
    pub catalog: CatalogArgs,

    /// Rule id, route, or criteria/route
    #[arg(short, long)]
    pub rule: String,

    /// Print the payload instead of touching the system clipboard
    #[arg(long)]
    pub dry_run: bool,
}

/// Arguments for the schema command
#[derive(Args, Debug)]
pub struct SchemaArgs {
    /// Output file (defaults to stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

/// Arguments for the generate-man command
#[derive(Args, Debug)]
pub struct GenerateManArgs {
    /// Output directory
    #[arg(short, long, value_name = "DIR", default_value = ".")]
    pub output: PathBuf,
}

/// Output format for the render command
#[derive(Debug, Clone, PartialEq, Eq, clap::ValueEnum)]
pub enum PageFormat {
    Html,
    Terminal,
    Json,
}

/// Output format for the nav command
#[derive(Debug, Clone, PartialEq, Eq, clap::ValueEnum)]
pub enum NavFormat {
    Html,
    Terminal,
}

/// Load the catalog and look up `key`
pub(crate) fn find_rule(
    args: &CatalogArgs,
    key: &str,
) -> Result<Option<RuleRecord>, RuleDeckError> {
    let catalog = Catalog::load(&args.catalog)?;
    Ok(catalog.find(key).cloned())
}

/// Detail view fed once with `rule`
pub(crate) fn detail_view(
    config: &Config,
    services: ViewServices,
    rule: Option<RuleRecord>,
) -> RuleDetailView {
    // The sender is dropped at once: CLI renders are one-shot.
    let (_tx, rx) = watch::channel(rule.map(Arc::new));
    RuleDetailView::new(
        rx,
        services,
        config.view.link_base.clone(),
        CopyState::new(config.copy_reset_window()),
    )
}

/// Write to `path`, or print to stdout when no path is given
pub(crate) fn write_output(path: Option<&Path>, content: &str) -> Result<(), RuleDeckError> {
    match path {
        Some(path) => {
            std::fs::write(path, content).map_err(|e| OutputError::FileWrite {
                path: path.display().to_string(),
                source: e,
            })?;
            eprintln!(
                "{} Written to: {}",
                "Success:".green().bold(),
                path.display().to_string().cyan()
            );
        }
        None => println!("{content}"),
    }
    Ok(())
}
