//! Init command - Initialize a new configuration file

use anyhow::{Context, Result};
use colored::Colorize;
use std::fs;
use std::path::Path;

use super::InitArgs;
use crate::config::loader::CONFIG_FILENAME;
use crate::config::Config;
use crate::exit_codes;

/// Write the default configuration to `config_path`, or `.ruledeck.toml`
pub async fn execute(args: InitArgs, config_path: Option<&Path>) -> Result<i32> {
    let config_path = config_path.unwrap_or(Path::new(CONFIG_FILENAME));

    if config_path.exists() && !args.force {
        eprintln!(
            "{} {} already exists. Use --force to overwrite.",
            "Error:".red().bold(),
            config_path.display()
        );
        return Ok(exit_codes::INVALID_ARGS);
    }

    let config_content = Config::default()
        .to_toml()
        .context("Failed to serialize default configuration")?;
    fs::write(config_path, &config_content).with_context(|| {
        format!(
            "Failed to write configuration file {}",
            config_path.display()
        )
    })?;

    println!(
        "{} Created {}",
        "Success:".green().bold(),
        config_path.display().to_string().cyan()
    );

    println!("\nNext steps:");
    println!("  1. Review the [[nav]] entries and colors");
    println!(
        "  2. Run {} to render a page",
        "ruledeck render --catalog rules.json --rule <id>".cyan()
    );

    Ok(exit_codes::SUCCESS)
}
