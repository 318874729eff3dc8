//! Payload command - Print a rule's release notification JSON

use colored::Colorize;

use super::{find_rule, PayloadArgs};
use crate::error::RuleDeckError;
use crate::exit_codes;
use crate::release::ReleaseNotification;
use crate::view::rule_detail::NOT_FOUND_MESSAGE;

pub async fn execute(args: PayloadArgs) -> Result<i32, RuleDeckError> {
    let Some(rule) = find_rule(&args.catalog, &args.rule)? else {
        eprintln!("{} {}", NOT_FOUND_MESSAGE.yellow(), args.rule.dimmed());
        return Ok(exit_codes::NOT_FOUND);
    };

    let notification = ReleaseNotification::for_rule(&rule);
    if args.validate {
        notification.validate()?;
        tracing::info!(rule = %rule.id, "Release notification is valid");
    }

    let json = notification.to_pretty_json()?;
    println!("{json}");

    Ok(exit_codes::SUCCESS)
}
