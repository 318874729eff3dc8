//! Render command - Render a rule detail page

use std::path::Path;
use tracing::{debug, info};

use super::{detail_view, find_rule, write_output, PageFormat, RenderArgs};
use crate::cli::output::{HtmlPage, JsonOutput, PageRenderer, RulePage, TerminalOutput};
use crate::config::Config;
use crate::error::RuleDeckError;
use crate::exit_codes;
use crate::routing::MemoryRouter;
use crate::view::{sidebar_from_config, ViewServices};

pub async fn execute(args: RenderArgs, config_path: Option<&Path>) -> Result<i32, RuleDeckError> {
    let config = Config::resolve(config_path)?;
    let rule = find_rule(&args.catalog, &args.rule)?;

    let location = match (&args.location, &rule) {
        (Some(location), _) => location.clone(),
        (None, Some(rule)) => rule.page_path(),
        (None, None) => format!("/{}", args.rule.trim_start_matches('/')),
    };
    debug!(location = %location, found = rule.is_some(), "Rendering rule page");

    let services = ViewServices::from_config(&config)?;
    let stylesheet = services.highlighter.stylesheet();
    let mut view = detail_view(&config, services, rule.clone());
    let body = view.render(&location);

    let router = MemoryRouter::new(location.clone());
    let sidebar = sidebar_from_config(&config).render(&router);

    let page = RulePage {
        location: &location,
        rule: rule.as_ref(),
        body: &body,
        sidebar: &sidebar,
        stylesheet,
        copy_reset_ms: config.clipboard.reset_after_ms,
    };

    let renderer: Box<dyn PageRenderer> = match args.format {
        PageFormat::Html => Box::new(HtmlPage::new()),
        PageFormat::Terminal => Box::new(TerminalOutput::new()),
        PageFormat::Json => Box::new(JsonOutput::new()),
    };
    let content = renderer.render_page(&page)?;
    write_output(args.output.as_deref(), &content)?;

    info!(stats = ?view.stats(), "Rendered rule page");

    Ok(if rule.is_some() {
        exit_codes::SUCCESS
    } else {
        exit_codes::NOT_FOUND
    })
}
