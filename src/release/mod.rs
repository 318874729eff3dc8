//! # Rule Release Notification
//!
//! When a rule's detection changes, a notification announcing it is posted
//! to the audit product. The rule page shows a preview of that payload and
//! lets editors copy it.
//!
//! The payload is a typed struct serialized with `serde_json`, so names
//! containing quotes or backslashes still produce valid JSON.
//!
//! ```rust
//! use ruledeck::catalog::{RecordId, RuleRecord};
//! use ruledeck::release::ReleaseNotification;
//!
//! let rule = RuleRecord {
//!     id: RecordId::new("abc123"),
//!     name: "Contrast Ratio".to_string(),
//!     ..Default::default()
//! };
//! let payload = ReleaseNotification::for_rule(&rule);
//! assert_eq!(payload.cta_link, "rules/abc123");
//! ```

use serde::{Deserialize, Serialize};

use crate::catalog::RuleRecord;
use crate::error::RenderError;

/// JSON Schema describing [`ReleaseNotification`]
pub const RELEASE_NOTIFICATION_SCHEMA: &str = r#"{
  "$schema": "https://json-schema.org/draft/2020-12/schema",
  "$id": "https://ruledeck.dev/schemas/release-notification.json",
  "title": "Rule release notification",
  "type": "object",
  "additionalProperties": false,
  "required": ["shortTextMarkdown", "bodyMarkdown", "ctaLink"],
  "properties": {
    "shortTextMarkdown": { "type": "string", "minLength": 1 },
    "bodyMarkdown": { "type": "string", "minLength": 1 },
    "ctaLink": { "type": "string", "pattern": "^rules/" }
  }
}"#;

const SHORT_TEXT: &str = "New rule updated";

/// Notification payload announcing an updated rule
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReleaseNotification {
    pub short_text_markdown: String,
    pub body_markdown: String,
    pub cta_link: String,
}

impl ReleaseNotification {
    pub fn for_rule(rule: &RuleRecord) -> Self {
        Self {
            short_text_markdown: SHORT_TEXT.to_string(),
            body_markdown: format!(
                "**{}** detection has been updated and may affect the number of issues found in your audit.",
                rule.name
            ),
            cta_link: format!("rules/{}", rule.id),
        }
    }

    /// Pretty-printed JSON, as shown in the preview and copied to the clipboard
    pub fn to_pretty_json(&self) -> Result<String, RenderError> {
        serde_json::to_string_pretty(self).map_err(Into::into)
    }

    /// Check the payload against [`RELEASE_NOTIFICATION_SCHEMA`]
    pub fn validate(&self) -> Result<(), RenderError> {
        let schema: serde_json::Value = serde_json::from_str(RELEASE_NOTIFICATION_SCHEMA)?;
        let validator =
            jsonschema::validator_for(&schema).map_err(|e| RenderError::SchemaValidation {
                message: e.to_string(),
            })?;

        let instance = serde_json::to_value(self)?;
        let errors: Vec<String> = validator
            .iter_errors(&instance)
            .map(|e| format!("{} at '{}'", e, e.instance_path))
            .collect();

        if errors.is_empty() {
            Ok(())
        } else {
            Err(RenderError::SchemaValidation {
                message: errors.join("; "),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::RecordId;
    use pretty_assertions::assert_eq;

    fn contrast_rule() -> RuleRecord {
        RuleRecord {
            id: RecordId::new("abc123"),
            name: "Contrast Ratio".to_string(),
            criteria: "1.4.3".to_string(),
            wcag_level: "AA".to_string(),
            route: "contrast".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_payload_fields() {
        let payload = ReleaseNotification::for_rule(&contrast_rule());
        assert_eq!(payload.short_text_markdown, "New rule updated");
        assert_eq!(
            payload.body_markdown,
            "**Contrast Ratio** detection has been updated and may affect the number of issues found in your audit."
        );
        assert_eq!(payload.cta_link, "rules/abc123");
    }

    #[test]
    fn test_pretty_json_shape() {
        let json = ReleaseNotification::for_rule(&contrast_rule())
            .to_pretty_json()
            .unwrap();
        assert!(json.starts_with("{\n  \"shortTextMarkdown\": \"New rule updated\","));
        assert!(json.contains("Contrast Ratio"));
        assert!(json.contains("\"ctaLink\": \"rules/abc123\""));
    }

    #[test]
    fn test_quotes_in_name_stay_valid_json() {
        let mut rule = contrast_rule();
        rule.name = r#"Say "hello" \ goodbye"#.to_string();
        let json = ReleaseNotification::for_rule(&rule).to_pretty_json().unwrap();

        let parsed: ReleaseNotification = serde_json::from_str(&json).unwrap();
        assert!(parsed.body_markdown.contains(r#"Say "hello" \ goodbye"#));
    }

    #[test]
    fn test_validates_against_schema() {
        assert!(ReleaseNotification::for_rule(&contrast_rule()).validate().is_ok());
    }

    #[test]
    fn test_schema_rejects_bad_link() {
        let mut payload = ReleaseNotification::for_rule(&contrast_rule());
        payload.cta_link = "https://elsewhere".to_string();
        let err = payload.validate().unwrap_err();
        assert!(err.to_string().contains("ctaLink"));
    }
}
