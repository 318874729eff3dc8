//! # CLI Module
//!
//! This module defines the command-line interface for RuleDeck using `clap`.
//!
//! ## Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `init` | Initialize a new configuration file |
//! | `render` | Render a rule detail page |
//! | `nav` | Render the navigation sidebar |
//! | `list` | List the rules of a catalog |
//! | `payload` | Print a rule's release notification JSON |
//! | `copy` | Copy a rule's release notification JSON to the clipboard |
//! | `schema` | Display JSON Schema for the release notification |
//!
//! ## Submodules
//!
//! - [`commands`] - Command implementations
//! - [`exit_codes`] - Standardized exit codes
//! - [`output`] - Page output formatters (HTML, JSON, Terminal)
//!
//! ## Global Options
//!
//! All commands support these global options:
//!
//! - `-v, --verbose` - Increase verbosity level (use multiple times: -v, -vv, -vvv)
//! - `-c, --config <FILE>` - Path to configuration file
//! - `-C, --directory <DIR>` - Working directory (defaults to current directory)
//!
//! ## Examples
//!
//! ```bash
//! # Render the page of a rule to HTML
//! ruledeck render --catalog rules.json --rule contrast -o contrast.html
//!
//! # Show it in the terminal
//! ruledeck render --catalog rules.json --rule 1.4.3/contrast --format terminal
//!
//! # Copy the release notification
//! ruledeck copy --catalog rules.json --rule contrast
//! ```

pub mod commands;
pub mod exit_codes;
pub mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use commands::{
    CopyArgs, GenerateManArgs, InitArgs, ListArgs, NavArgs, PayloadArgs, RenderArgs, SchemaArgs,
};

/// RuleDeck - Render accessibility rule catalog pages
#[derive(Parser, Debug)]
#[command(name = "ruledeck")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Working directory (defaults to current directory)
    #[arg(short = 'C', long, global = true, value_name = "DIR")]
    pub directory: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new configuration file
    Init(InitArgs),

    /// Render a rule detail page
    Render(RenderArgs),

    /// Render the navigation sidebar
    Nav(NavArgs),

    /// List the rules of a catalog
    List(ListArgs),

    /// Print a rule's release notification JSON
    Payload(PayloadArgs),

    /// Copy a rule's release notification JSON to the clipboard
    Copy(CopyArgs),

    /// Display the JSON Schema for the release notification
    Schema(SchemaArgs),

    /// Generate man page (hidden, for packaging)
    #[command(hide = true)]
    GenerateMan(GenerateManArgs),
}
