//! JSON output formatting

use serde::Serialize;

use super::{action_links, badge_labels, PageRenderer, RulePage};
use crate::catalog::RuleRecord;
use crate::error::{RenderError, RuleDeckError};
use crate::release::ReleaseNotification;

pub struct JsonOutput;

impl JsonOutput {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonOutput {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Serialize)]
struct PageOutput<'a> {
    version: &'static str,
    location: &'a str,
    found: bool,
    rule: Option<&'a RuleRecord>,
    badges: Vec<String>,
    links: Vec<LinkOutput>,
    release: Option<ReleaseNotification>,
    html: String,
}

#[derive(Serialize)]
struct LinkOutput {
    label: String,
    href: String,
}

impl PageRenderer for JsonOutput {
    fn render_page(&self, page: &RulePage<'_>) -> Result<String, RuleDeckError> {
        let output = PageOutput {
            version: env!("CARGO_PKG_VERSION"),
            location: page.location,
            found: page.rule.is_some(),
            rule: page.rule,
            badges: badge_labels(page.body),
            links: action_links(page.body)
                .into_iter()
                .map(|(label, href)| LinkOutput { label, href })
                .collect(),
            release: page.rule.map(ReleaseNotification::for_rule),
            html: page.body.to_html(),
        };

        serde_json::to_string_pretty(&output)
            .map_err(RenderError::from)
            .map_err(Into::into)
    }
}
