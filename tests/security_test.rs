//! Security tests for untrusted rule content

use pretty_assertions::assert_eq;
use ruledeck::catalog::{RecordId, RuleRecord};
use ruledeck::clipboard::CopyState;
use ruledeck::config::Config;
use ruledeck::release::ReleaseNotification;
use ruledeck::view::sanitize::{AmmoniaSanitizer, Sanitizer};
use ruledeck::view::{RuleDetailView, ViewServices};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;

fn render(rule: RuleRecord, config: &Config) -> String {
    let (_tx, rx) = watch::channel(Some(Arc::new(rule)));
    let mut view = RuleDetailView::new(
        rx,
        ViewServices::from_config(config).unwrap(),
        "/",
        CopyState::new(Duration::from_millis(2000)),
    );
    view.render("/").to_html()
}

fn hostile_rule() -> RuleRecord {
    RuleRecord {
        id: RecordId::new("x1"),
        name: r#"Name with "quotes" and <tags>"#.to_string(),
        short_description: "<img src=x onerror=alert(1)>".to_string(),
        issue_description: "<script>alert('desc')</script>".to_string(),
        issue_resolution_html: concat!(
            "<p onclick=\"steal()\">Keep <b>bold</b></p>",
            "<script>alert('xss')</script>",
            "<a href=\"javascript:alert(1)\">link</a>",
            "<iframe src=\"https://evil.example\"></iframe>"
        )
        .to_string(),
        criteria: "1.4.3".to_string(),
        wcag_level: "AA".to_string(),
        route: "contrast".to_string(),
    }
}

#[test]
fn test_sanitizer_strips_active_content() {
    let clean = AmmoniaSanitizer::default().sanitize(&hostile_rule().issue_resolution_html);
    let html = clean.as_str();

    assert!(html.contains("<b>bold</b>"));
    assert!(!html.contains("<script"));
    assert!(!html.contains("alert('xss')"));
    assert!(!html.contains("onclick"));
    assert!(!html.contains("javascript:"));
    assert!(!html.contains("<iframe"));
}

#[test]
fn test_plain_fields_are_escaped() {
    let html = render(hostile_rule(), &Config::default());

    assert!(!html.contains("<script>alert('desc')"));
    assert!(html.contains("&lt;script&gt;alert('desc')&lt;/script&gt;"));
    assert!(!html.contains("<img src=x"));
    assert!(!html.contains("onerror=alert(1)>"));
}

#[test]
fn test_resolution_markup_without_highlighting() {
    let mut config = Config::default();
    config.highlight.enabled = false;
    let html = render(hostile_rule(), &config);

    assert!(html.contains("<b>bold</b>"));
    assert!(!html.contains("steal()"));
    assert!(!html.contains("alert('xss')"));
    assert!(!html.contains("javascript:"));
}

#[test]
fn test_sanitizer_config_cannot_allow_forbidden_tags() {
    let mut config = Config::default();
    config.sanitize.extra_tags = vec!["script".to_string(), "mark".to_string()];
    let sanitizer = AmmoniaSanitizer::new(&config.sanitize);

    let clean = sanitizer.sanitize("<mark>hi</mark><script>alert(1)</script>");
    assert!(clean.as_str().contains("<mark>hi</mark>"));
    assert!(!clean.as_str().contains("<script"));
}

#[test]
fn test_release_payload_survives_quotes() {
    let notification = ReleaseNotification::for_rule(&hostile_rule());
    let json = notification.to_pretty_json().unwrap();

    let parsed: ReleaseNotification = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, notification);
    assert!(notification.validate().is_ok());
}
