//! # Rule Detail Page
//!
//! [`RuleDetailView`] renders one rule of the catalog: title, descriptions,
//! classification badges, the sanitized issue resolution, links to the
//! success and failure example pages, and the release notification preview
//! with its copy button.
//!
//! The view observes a `watch` channel of `Option<Arc<RuleRecord>>`. Call
//! [`RuleDetailView::changed`] to wait for new data and
//! [`RuleDetailView::render`] to produce the tree again.
//!
//! Every render sanitizes the issue resolution. Highlighting is redone only
//! when the record behind the channel is a different `Arc` than the one last
//! highlighted.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use std::sync::Arc;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use super::highlight::Language;
use super::icon::Icon;
use super::node::{Element, Node};
use super::sanitize::SafeHtml;
use super::ViewServices;
use crate::catalog::RuleRecord;
use crate::clipboard::{Clipboard, CopyState};
use crate::error::ClipboardError;
use crate::release::ReleaseNotification;
use crate::routing::Router;

pub const NOT_FOUND_MESSAGE: &str = "No item found";

/// Characters kept as-is in a link path segment
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Colour role of a badge or call-to-action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Primary,
    Warning,
    Success,
    Error,
}

impl Tone {
    fn class_name(self) -> &'static str {
        match self {
            Tone::Primary => "tone-primary",
            Tone::Warning => "tone-warning",
            Tone::Success => "tone-success",
            Tone::Error => "tone-error",
        }
    }
}

/// Link to one of the rule's example pages
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionLink {
    pub href: String,
    pub label: &'static str,
    pub icon: Icon,
    pub tone: Tone,
}

impl ActionLink {
    /// Success and failure example links for `rule`.
    ///
    /// `criteria` and `route` come from the catalog and are percent-encoded,
    /// so they can never change the link's scheme or escape the base path.
    pub fn for_rule(rule: &RuleRecord, link_base: &str) -> [ActionLink; 2] {
        let mut base = link_base.to_string();
        if !base.is_empty() && !base.ends_with('/') {
            base.push('/');
        }
        let criteria = utf8_percent_encode(&rule.criteria, PATH_SEGMENT).to_string();
        let route = utf8_percent_encode(&rule.route, PATH_SEGMENT).to_string();

        [
            ActionLink {
                href: format!("{base}{criteria}/{route}_success"),
                label: "Success",
                icon: Icon::ThumbUp,
                tone: Tone::Success,
            },
            ActionLink {
                href: format!("{base}{criteria}/{route}_failure"),
                label: "Failures",
                icon: Icon::ThumbDown,
                tone: Tone::Error,
            },
        ]
    }

    pub fn activate(&self, router: &mut dyn Router) {
        router.navigate(&self.href);
    }

    fn render(&self) -> Node {
        Element::new("a")
            .class("action")
            .class(self.tone.class_name())
            .attr("href", &self.href)
            .style("text-decoration: none")
            .child(self.icon.render())
            .text(self.label)
            .into()
    }
}

/// Counters describing the work done by a view
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderStats {
    pub renders: u64,
    pub sanitize_passes: u64,
    pub highlight_passes: u64,
}

struct HighlightedBlocks {
    rule: Arc<RuleRecord>,
    resolution: SafeHtml,
    release_json: SafeHtml,
}

/// Detail page of a single rule
pub struct RuleDetailView {
    rule: watch::Receiver<Option<Arc<RuleRecord>>>,
    services: ViewServices,
    link_base: String,
    copy: CopyState,
    highlighted: Option<HighlightedBlocks>,
    stats: RenderStats,
}

impl RuleDetailView {
    pub fn new(
        rule: watch::Receiver<Option<Arc<RuleRecord>>>,
        services: ViewServices,
        link_base: impl Into<String>,
        copy: CopyState,
    ) -> Self {
        Self {
            rule,
            services,
            link_base: link_base.into(),
            copy,
            highlighted: None,
            stats: RenderStats::default(),
        }
    }

    /// Wait until the observed record changes; false once the sender is gone
    pub async fn changed(&mut self) -> bool {
        self.rule.changed().await.is_ok()
    }

    pub fn stats(&self) -> RenderStats {
        self.stats
    }

    pub fn copy_state(&self) -> &CopyState {
        &self.copy
    }

    /// Release notification JSON for the current record
    pub fn release_json(&self) -> Option<String> {
        let rule = self.rule.borrow().clone()?;
        Some(release_json(&rule))
    }

    /// Copy the release JSON; `None` when there is no record or when called
    /// outside a tokio runtime, in which case nothing is written.
    ///
    /// The write runs in the background and the acknowledgement shows at once.
    pub fn copy_to_clipboard(
        &self,
        clipboard: Arc<dyn Clipboard>,
    ) -> Option<JoinHandle<Result<(), ClipboardError>>> {
        if tokio::runtime::Handle::try_current().is_err() {
            warn!("Copy requested outside a tokio runtime, ignoring");
            return None;
        }
        let text = self.release_json()?;
        Some(self.copy.copy(clipboard, text))
    }

    /// Render the page for the current record at `location`
    pub fn render(&mut self, location: &str) -> Node {
        self.stats.renders += 1;
        let current = self.rule.borrow_and_update().clone();

        let Some(rule) = current else {
            self.highlighted = None;
            return not_found();
        };

        let sanitized = self.services.sanitizer.sanitize(&rule.issue_resolution_html);
        self.stats.sanitize_passes += 1;

        let (resolution, release_block) = self.highlighted_blocks(&rule, &sanitized);

        Element::new("div")
            .class("container")
            .class("rule-page")
            .child(
                Element::new("div")
                    .class("paper")
                    .child(
                        Element::new("div")
                            .class("breadcrumb-box")
                            .child(self.services.breadcrumbs.render(location)),
                    )
                    .child(header(&rule))
                    .child(Element::new("hr").class("divider"))
                    .child(
                        Element::new("p")
                            .class("rule-issue-description")
                            .text(&rule.issue_description),
                    )
                    .child(badges(&rule))
                    .child(resolution_section(resolution))
                    .child(
                        Element::new("div").class("actions").children(
                            ActionLink::for_rule(&rule, &self.link_base)
                                .iter()
                                .map(ActionLink::render),
                        ),
                    )
                    .child(self.release_section(&rule, release_block)),
            )
            .into()
    }

    fn highlighted_blocks(
        &mut self,
        rule: &Arc<RuleRecord>,
        sanitized: &SafeHtml,
    ) -> (SafeHtml, SafeHtml) {
        let cached = matches!(&self.highlighted, Some(h) if Arc::ptr_eq(&h.rule, rule));

        if !cached {
            let highlighter = &self.services.highlighter;
            self.highlighted = Some(HighlightedBlocks {
                rule: Arc::clone(rule),
                resolution: highlighter.highlight_markup(sanitized, Language::Html),
                release_json: highlighter.highlight(&release_json(rule), Language::Json),
            });
            self.stats.highlight_passes += 1;
            debug!(rule = %rule.id, "Highlighted code blocks");
        }

        match &self.highlighted {
            Some(blocks) => (blocks.resolution.clone(), blocks.release_json.clone()),
            None => (SafeHtml::default(), SafeHtml::default()),
        }
    }

    fn release_section(&self, rule: &RuleRecord, highlighted: SafeHtml) -> Element {
        let tooltip = self.copy.tooltip();

        Element::new("section")
            .class("release-json")
            .style("position: relative")
            .child(
                Element::new("h2")
                    .class("subtitle")
                    .text("Rule Release JSON:"),
            )
            .child(
                Element::new("pre").child(
                    Element::new("code")
                        .class(Language::Json.class_name())
                        .child(highlighted),
                ),
            )
            .child(
                Element::new("span")
                    .class("tooltip")
                    .attr("data-tooltip", tooltip)
                    .child(
                        Element::new("button")
                            .class("copy-button")
                            .attr("type", "button")
                            .attr("title", tooltip)
                            .attr("aria-label", tooltip)
                            .attr("data-copy", release_json(rule))
                            .child(Icon::ContentPaste.render()),
                    ),
            )
    }
}

fn release_json(rule: &RuleRecord) -> String {
    ReleaseNotification::for_rule(rule)
        .to_pretty_json()
        .unwrap_or_default()
}

fn not_found() -> Node {
    Element::new("div")
        .class("container")
        .child(
            Element::new("p")
                .class("no-item")
                .style("text-align: center")
                .text(NOT_FOUND_MESSAGE),
        )
        .into()
}

fn header(rule: &RuleRecord) -> Element {
    Element::new("div")
        .class("rule-header")
        .child(Element::new("h1").class("rule-title").text(&rule.name))
        .child(
            Element::new("p")
                .class("rule-short-description")
                .text(&rule.short_description),
        )
}

fn badge(icon: Icon, label: String, tone: Tone) -> Node {
    Element::new("span")
        .class("chip")
        .class(tone.class_name())
        .child(icon.render())
        .child(Element::new("span").class("chip-label").text(label))
        .into()
}

fn badges(rule: &RuleRecord) -> Element {
    Element::new("div")
        .class("chips")
        .child(badge(Icon::TagFaces, rule.criteria.clone(), Tone::Warning))
        .child(badge(
            Icon::Accessible,
            format!("WCAG: {}", rule.wcag_level),
            Tone::Primary,
        ))
}

fn resolution_section(resolution: SafeHtml) -> Element {
    Element::new("section")
        .class("issue-resolution")
        .style("font-family: monospace; white-space: pre-wrap")
        .child(Element::new("h2").class("subtitle").text("Issue Resolution:"))
        .child(
            Element::new("pre").child(
                Element::new("code")
                    .class(Language::Html.class_name())
                    .child(resolution),
            ),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::RecordId;
    use crate::clipboard::MemoryClipboard;
    use crate::routing::MemoryRouter;
    use crate::view::breadcrumbs::PathBreadcrumbs;
    use crate::view::highlight::{PlainHighlighter, SyntectHighlighter};
    use crate::view::sanitize::AmmoniaSanitizer;
    use std::time::Duration;

    fn contrast_rule() -> RuleRecord {
        RuleRecord {
            id: RecordId::new("abc123"),
            name: "Contrast Ratio".to_string(),
            short_description: "Text needs sufficient contrast".to_string(),
            issue_description: "Low contrast text is hard to read".to_string(),
            issue_resolution_html: "<p>Use <b>4.5:1</b></p><script>alert(1)</script>"
                .to_string(),
            criteria: "1.4.3".to_string(),
            wcag_level: "AA".to_string(),
            route: "contrast".to_string(),
        }
    }

    fn services(highlighted: bool) -> ViewServices {
        let highlighter: Arc<dyn crate::view::highlight::Highlighter> = if highlighted {
            Arc::new(SyntectHighlighter::new("InspiredGitHub").unwrap())
        } else {
            Arc::new(PlainHighlighter)
        };
        ViewServices {
            sanitizer: Arc::new(AmmoniaSanitizer::default()),
            highlighter,
            breadcrumbs: Arc::new(PathBreadcrumbs),
        }
    }

    type RuleSender = watch::Sender<Option<Arc<RuleRecord>>>;

    fn view_with(rule: Option<RuleRecord>, highlighted: bool) -> (RuleSender, RuleDetailView) {
        let (tx, rx) = watch::channel(rule.map(Arc::new));
        let view = RuleDetailView::new(
            rx,
            services(highlighted),
            "/",
            CopyState::new(Duration::from_millis(2000)),
        );
        (tx, view)
    }

    #[test]
    fn test_absent_record_renders_only_not_found() {
        let (_tx, mut view) = view_with(None, true);
        let node = view.render("/");

        assert_eq!(node.text_content(), NOT_FOUND_MESSAGE);
        assert!(node.find_by_class("rule-page").is_none());
        assert_eq!(node.find_all(&|_| true).len(), 2);
        assert!(view.release_json().is_none());
    }

    #[test]
    fn test_action_links_point_to_examples() {
        let links = ActionLink::for_rule(&contrast_rule(), "/");
        assert_eq!(links[0].href, "/1.4.3/contrast_success");
        assert_eq!(links[1].href, "/1.4.3/contrast_failure");
        assert_eq!(links[0].icon, Icon::ThumbUp);
        assert_eq!(links[1].icon, Icon::ThumbDown);

        let relative = ActionLink::for_rule(&contrast_rule(), "");
        assert_eq!(relative[0].href, "1.4.3/contrast_success");
        let nested = ActionLink::for_rule(&contrast_rule(), "/catalog");
        assert_eq!(nested[1].href, "/catalog/1.4.3/contrast_failure");
    }

    #[test]
    fn test_action_links_encode_catalog_values() {
        let rule = RuleRecord {
            criteria: "javascript:alert(1)".to_string(),
            route: "../admin page".to_string(),
            ..contrast_rule()
        };
        let links = ActionLink::for_rule(&rule, "");
        assert_eq!(links[0].href, "javascript%3Aalert%281%29/..%2Fadmin%20page_success");
        assert!(!links[1].href.contains(':'));

        let (_tx, mut view) = view_with(Some(rule), false);
        let html = view.render("/").to_html();
        assert!(!html.contains(r#"href="javascript:"#));
    }

    #[test]
    fn test_copy_outside_runtime_is_ignored() {
        let (_tx, view) = view_with(Some(contrast_rule()), false);
        let clipboard = Arc::new(MemoryClipboard::new());

        assert!(view.copy_to_clipboard(clipboard.clone()).is_none());
        assert!(!view.copy_state().is_copied());
        assert_eq!(clipboard.write_count(), 0);
    }

    #[test]
    fn test_action_link_activation_navigates() {
        let mut router = MemoryRouter::new("/1.4.3/contrast");
        let [success, _] = ActionLink::for_rule(&contrast_rule(), "/");
        success.activate(&mut router);
        assert_eq!(router.location(), "/1.4.3/contrast_success");
    }

    #[test]
    fn test_renders_record_sections() {
        let (_tx, mut view) = view_with(Some(contrast_rule()), true);
        let node = view.render("/1.4.3/contrast");

        assert_eq!(
            node.find_by_class("rule-title").unwrap().text_content(),
            "Contrast Ratio"
        );
        assert_eq!(
            node.find_by_class("rule-short-description")
                .unwrap()
                .text_content(),
            "Text needs sufficient contrast"
        );

        let chips: Vec<String> = node
            .find_all(&|el| el.has_class("chip-label"))
            .iter()
            .map(|el| el.text_content())
            .collect();
        assert_eq!(chips, vec!["1.4.3".to_string(), "WCAG: AA".to_string()]);

        let hrefs: Vec<&str> = node
            .find_all(&|el| el.has_class("action"))
            .iter()
            .filter_map(|el| el.get_attr("href"))
            .collect();
        assert_eq!(hrefs, vec!["/1.4.3/contrast_success", "/1.4.3/contrast_failure"]);

        let json = node
            .find_by_class("release-json")
            .unwrap()
            .find_code_text();
        assert!(json.contains("Contrast Ratio"));
        assert!(json.contains("rules/abc123"));
        assert!(node.find_by_class("breadcrumbs").is_some());
    }

    #[test]
    fn test_resolution_is_sanitized_when_highlighted() {
        let (_tx, mut view) = view_with(Some(contrast_rule()), true);
        let html = view.render("/").to_html();
        assert!(!html.contains("<script"));
        assert!(!html.contains("alert(1)"));
        assert!(html.contains("4.5:1"));
    }

    #[test]
    fn test_resolution_markup_injected_when_not_highlighted() {
        let mut rule = contrast_rule();
        rule.issue_resolution_html = r#"<b>bold</b><img src="x.png" onerror="alert(1)">"#.to_string();
        let (_tx, mut view) = view_with(Some(rule), false);
        let html = view.render("/").to_html();

        assert!(html.contains(r#"<code class="language-html"><b>bold</b><img src="x.png"></code>"#));
        assert!(!html.contains("onerror"));
    }

    #[test]
    fn test_highlighting_follows_record_identity() {
        let (tx, mut view) = view_with(Some(contrast_rule()), true);

        view.render("/");
        view.render("/");
        assert_eq!(
            view.stats(),
            RenderStats {
                renders: 2,
                sanitize_passes: 2,
                highlight_passes: 1,
            }
        );

        // Equal content, new identity
        tx.send_replace(Some(Arc::new(contrast_rule())));
        view.render("/");
        assert_eq!(view.stats().highlight_passes, 2);
        assert_eq!(view.stats().sanitize_passes, 3);

        tx.send_replace(None);
        view.render("/");
        tx.send_replace(Some(Arc::new(contrast_rule())));
        view.render("/");
        assert_eq!(view.stats().highlight_passes, 3);
        assert_eq!(view.stats().renders, 5);
    }

    #[tokio::test]
    async fn test_changed_notifies_on_new_record() {
        let (tx, mut view) = view_with(None, false);
        assert_eq!(view.render("/").text_content(), NOT_FOUND_MESSAGE);

        tx.send_replace(Some(Arc::new(contrast_rule())));
        assert!(view.changed().await);
        let node = view.render("/");
        assert!(node.find_by_class("rule-page").is_some());

        drop(tx);
        assert!(!view.changed().await);
    }

    #[test]
    fn test_malformed_record_renders_empty_fields() {
        let (_tx, mut view) = view_with(Some(RuleRecord::default()), true);
        let node = view.render("/");
        assert_eq!(node.find_by_class("rule-title").unwrap().text_content(), "");
        let hrefs: Vec<&str> = node
            .find_all(&|el| el.has_class("action"))
            .iter()
            .filter_map(|el| el.get_attr("href"))
            .collect();
        assert_eq!(hrefs, vec!["//_success", "//_failure"]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_copy_updates_tooltip_then_resets() {
        let (_tx, mut view) = view_with(Some(contrast_rule()), false);
        let tooltip = |view: &mut RuleDetailView| {
            view.render("/")
                .find_by_class("copy-button")
                .and_then(|el| el.get_attr("title").map(str::to_string))
                .unwrap()
        };
        assert_eq!(tooltip(&mut view), "Copy to clipboard");

        let clipboard = MemoryClipboard::new();
        let write = view.copy_to_clipboard(Arc::new(clipboard.clone())).unwrap();
        assert!(view.copy_state().is_copied());
        assert_eq!(tooltip(&mut view), "Copied!");

        write.await.unwrap().unwrap();
        assert_eq!(clipboard.contents(), view.release_json());

        tokio::time::sleep(Duration::from_millis(2001)).await;
        assert!(!view.copy_state().is_copied());
        assert_eq!(tooltip(&mut view), "Copy to clipboard");
    }

    #[tokio::test]
    async fn test_copy_without_record_is_noop() {
        let (_tx, view) = view_with(None, false);
        assert!(view
            .copy_to_clipboard(Arc::new(MemoryClipboard::new()))
            .is_none());
        assert!(!view.copy_state().is_copied());
    }

    trait CodeText {
        fn find_code_text(&self) -> String;
    }

    impl CodeText for Element {
        fn find_code_text(&self) -> String {
            Node::Element(self.clone())
                .find_all(&|el| el.tag == "code")
                .first()
                .map(|el| el.text_content())
                .unwrap_or_default()
        }
    }
}
