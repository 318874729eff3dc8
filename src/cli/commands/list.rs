//! List command - Show the rules of a catalog

use colored::Colorize;

use super::ListArgs;
use crate::catalog::Catalog;
use crate::error::RuleDeckError;
use crate::exit_codes;

pub async fn execute(args: ListArgs) -> Result<i32, RuleDeckError> {
    let catalog = Catalog::load(&args.catalog.catalog)?;

    if catalog.is_empty() {
        println!("{}", "No rules in catalog".dimmed());
        return Ok(exit_codes::SUCCESS);
    }

    println!(
        "{} ({} rules)\n",
        args.catalog.catalog.display().to_string().cyan().bold(),
        catalog.len()
    );

    tracing::info!(rules = catalog.len(), "Listing catalog");
    for rule in catalog.rules() {
        println!(
            "  {:<12} {:<8} {:<4} {}  {}",
            rule.id.as_str().dimmed(),
            rule.criteria.yellow(),
            rule.wcag_level.blue(),
            rule.name.bold(),
            rule.page_path().cyan()
        );
    }

    Ok(exit_codes::SUCCESS)
}
