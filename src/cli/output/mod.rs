//! Output formatting module for CLI

mod html;
mod json;
mod terminal;

pub use html::HtmlPage;
pub use json::JsonOutput;
pub use terminal::TerminalOutput;

use crate::catalog::RuleRecord;
use crate::error::RuleDeckError;
use crate::view::Node;

/// A rendered rule page and what surrounds it
pub struct RulePage<'a> {
    /// Location the page was rendered at
    pub location: &'a str,
    /// Record shown, `None` for the "No item found" page
    pub rule: Option<&'a RuleRecord>,
    /// Rule detail view output
    pub body: &'a Node,
    /// Navigation sidebar output
    pub sidebar: &'a Node,
    /// Stylesheet for highlighted code blocks
    pub stylesheet: String,
    /// How long the copy acknowledgement stays visible in the page
    pub copy_reset_ms: u64,
}

/// Trait for rendering page output
pub trait PageRenderer {
    fn render_page(&self, page: &RulePage<'_>) -> Result<String, RuleDeckError>;
}

/// Texts shown by a call-to-action, without its icon
pub(crate) fn action_links(body: &Node) -> Vec<(String, String)> {
    body.find_all(&|el| el.has_class("action"))
        .iter()
        .map(|el| {
            (
                el.own_text(),
                el.get_attr("href").unwrap_or_default().to_string(),
            )
        })
        .collect()
}

/// Label texts of the classification badges
pub(crate) fn badge_labels(body: &Node) -> Vec<String> {
    body.find_all(&|el| el.has_class("chip-label"))
        .iter()
        .map(|el| el.text_content())
        .collect()
}

/// Text of the code block inside the section carrying `class`
pub(crate) fn code_block_text(body: &Node, class: &str) -> String {
    body.find_by_class(class)
        .and_then(|section| {
            section
                .child_nodes()
                .iter()
                .flat_map(|child| child.find_all(&|el| el.tag == "code"))
                .next()
                .map(|code| code.text_content())
        })
        .unwrap_or_default()
}

/// Text of the first element carrying `class`
pub(crate) fn class_text(body: &Node, class: &str) -> String {
    body.find_by_class(class)
        .map(|el| el.text_content())
        .unwrap_or_default()
}
