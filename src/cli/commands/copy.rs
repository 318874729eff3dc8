//! Copy command - Copy a rule's release notification JSON to the clipboard

use colored::Colorize;
use std::path::Path;
use std::sync::Arc;

use super::{detail_view, find_rule, CopyArgs};
use crate::clipboard::{Clipboard, CommandClipboard, MemoryClipboard};
use crate::config::Config;
use crate::error::{ClipboardError, RuleDeckError};
use crate::exit_codes;
use crate::view::rule_detail::NOT_FOUND_MESSAGE;
use crate::view::ViewServices;

pub async fn execute(args: CopyArgs, config_path: Option<&Path>) -> Result<i32, RuleDeckError> {
    let config = Config::resolve(config_path)?;
    let Some(rule) = find_rule(&args.catalog, &args.rule)? else {
        eprintln!("{} {}", NOT_FOUND_MESSAGE.yellow(), args.rule.dimmed());
        return Ok(exit_codes::NOT_FOUND);
    };

    let view = detail_view(&config, ViewServices::from_config(&config)?, Some(rule));

    let memory = MemoryClipboard::new();
    let clipboard: Arc<dyn Clipboard> = if args.dry_run {
        Arc::new(memory.clone())
    } else {
        let helper = CommandClipboard::from_config(&config.clipboard)?;
        tracing::debug!(program = helper.program(), "Using clipboard helper");
        Arc::new(helper)
    };

    let Some(write) = view.copy_to_clipboard(clipboard) else {
        return Ok(exit_codes::NOT_FOUND);
    };
    // The view acknowledges at once; the command still reports a failed write.
    write.await.map_err(ClipboardError::from)??;

    tracing::info!(dry_run = args.dry_run, "Copied release notification");

    if let Some(contents) = memory.contents() {
        println!("{contents}");
    }
    println!("{} {}", "✓".green().bold(), view.copy_state().tooltip());

    Ok(exit_codes::SUCCESS)
}
