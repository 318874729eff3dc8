//! Terminal output formatting with colors

use colored::Colorize;

use super::{action_links, badge_labels, class_text, code_block_text, PageRenderer, RulePage};
use crate::error::RuleDeckError;
use crate::view::rule_detail::NOT_FOUND_MESSAGE;

pub struct TerminalOutput;

impl TerminalOutput {
    pub fn new() -> Self {
        Self
    }

    fn format_header(&self, location: &str) -> String {
        format!(
            "\n{} v{}\n{} {}\n",
            "ruledeck".cyan().bold(),
            env!("CARGO_PKG_VERSION"),
            "Location:".dimmed(),
            location.white()
        )
    }

    fn format_section(&self, title: &str, body: &str) -> String {
        let mut output = format!("\n{}\n", title.bold());
        for line in body.lines() {
            output.push_str(&format!("  {}\n", line));
        }
        output
    }
}

impl Default for TerminalOutput {
    fn default() -> Self {
        Self::new()
    }
}

impl PageRenderer for TerminalOutput {
    fn render_page(&self, page: &RulePage<'_>) -> Result<String, RuleDeckError> {
        let mut output = self.format_header(page.location);
        output.push_str(&format!("{}\n", "━".repeat(50).dimmed()));

        if page.rule.is_none() {
            output.push_str(&format!("\n  {}\n", NOT_FOUND_MESSAGE.dimmed()));
            return Ok(output);
        }

        let body = page.body;

        output.push_str(&format!(
            "\n{}\n{}\n",
            class_text(body, "rule-title").bold(),
            class_text(body, "rule-short-description").dimmed()
        ));

        let description = class_text(body, "rule-issue-description");
        if !description.is_empty() {
            output.push_str(&format!("\n{}\n", description));
        }

        let labels = badge_labels(body);
        if !labels.is_empty() {
            let badges: Vec<String> = labels
                .iter()
                .enumerate()
                .map(|(i, label)| {
                    let badge = format!("[{}]", label);
                    if i == 0 {
                        badge.yellow().to_string()
                    } else {
                        badge.blue().to_string()
                    }
                })
                .collect();
            output.push_str(&format!("\n{}\n", badges.join(" ")));
        }

        output.push_str(&self.format_section(
            "Issue Resolution:",
            &code_block_text(body, "issue-resolution"),
        ));

        output.push('\n');
        for (label, href) in action_links(body) {
            let label = if label == "Success" {
                format!("👍 {}", label).green().bold()
            } else {
                format!("👎 {}", label).red().bold()
            };
            output.push_str(&format!("  {} {} {}\n", label, "→".dimmed(), href.cyan()));
        }

        output.push_str(&self.format_section(
            "Rule Release JSON:",
            &code_block_text(body, "release-json"),
        ));

        if let Some(button) = body.find_by_class("copy-button") {
            if let Some(tooltip) = button.get_attr("title") {
                output.push_str(&format!("  {}\n", format!("({})", tooltip).dimmed()));
            }
        }

        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{RecordId, RuleRecord};
    use crate::clipboard::CopyState;
    use crate::view::{RuleDetailView, ViewServices};
    use crate::config::Config;
    use crate::view::{Element, Node};
    use std::sync::Arc;
    use std::time::Duration;
    use tokio::sync::watch;

    fn rule() -> RuleRecord {
        RuleRecord {
            id: RecordId::new("abc123"),
            name: "Contrast Ratio".to_string(),
            short_description: "Enough contrast".to_string(),
            issue_resolution_html: "<p>Use &lt;span&gt; wisely</p><script>bad()</script>"
                .to_string(),
            criteria: "1.4.3".to_string(),
            wcag_level: "AA".to_string(),
            route: "contrast".to_string(),
            ..Default::default()
        }
    }

    fn render(rule: Option<RuleRecord>) -> String {
        colored::control::set_override(false);
        let config = Config::default();
        let services = ViewServices::from_config(&config).unwrap();
        let (_tx, rx) = watch::channel(rule.clone().map(Arc::new));
        let mut view = RuleDetailView::new(
            rx,
            services,
            "/",
            CopyState::new(Duration::from_millis(2000)),
        );
        let body = view.render("/1.4.3/contrast");
        let sidebar: Node = Element::new("nav").into();
        let page = RulePage {
            location: "/1.4.3/contrast",
            rule: rule.as_ref(),
            body: &body,
            sidebar: &sidebar,
            stylesheet: String::new(),
            copy_reset_ms: 2000,
        };
        TerminalOutput::new().render_page(&page).unwrap()
    }

    #[test]
    fn test_renders_rule_sections() {
        let output = render(Some(rule()));
        assert!(output.contains("Contrast Ratio"));
        assert!(output.contains("[1.4.3] [WCAG: AA]"));
        assert!(output.contains("Use <span> wisely"));
        assert!(!output.contains("bad()"));
        assert!(output.contains("/1.4.3/contrast_success"));
        assert!(output.contains("/1.4.3/contrast_failure"));
        assert!(output.contains("\"ctaLink\": \"rules/abc123\""));
        assert!(output.contains("(Copy to clipboard)"));
    }

    #[test]
    fn test_renders_not_found() {
        let output = render(None);
        assert!(output.contains(NOT_FOUND_MESSAGE));
        assert!(!output.contains("Issue Resolution"));
    }
}
