//! Nav command - Render the navigation sidebar at a location

use colored::Colorize;
use std::path::Path;

use super::{write_output, NavArgs, NavFormat};
use crate::config::Config;
use crate::error::RuleDeckError;
use crate::exit_codes;
use crate::routing::{MemoryRouter, Router};
use crate::view::sidebar_from_config;

pub async fn execute(args: NavArgs, config_path: Option<&Path>) -> Result<i32, RuleDeckError> {
    let config = Config::resolve(config_path)?;
    let sidebar = sidebar_from_config(&config);
    let router = MemoryRouter::new(args.location.clone());

    let content = match args.format {
        NavFormat::Html => sidebar.render(&router).to_html(),
        NavFormat::Terminal => {
            let mut lines = vec![format!(
                "{} {}",
                "Location:".dimmed(),
                router.location().white()
            )];
            for item in &sidebar.items {
                let line = format!(
                    "{:<12} {}",
                    item.label,
                    item.destination_path.as_str().dimmed()
                );
                if item.is_selected(&router) {
                    lines.push(format!("{} {}", "▸".cyan(), line.bold()));
                } else {
                    lines.push(format!("  {}", line));
                }
            }
            lines.join("\n")
        }
    };

    write_output(args.output.as_deref(), &content)?;
    tracing::info!(location = %args.location, "Rendered navigation");
    Ok(exit_codes::SUCCESS)
}
