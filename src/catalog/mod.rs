//! # Rule Catalog
//!
//! Data structures for accessibility rule records and loading them from
//! catalog files.
//!
//! - [`RuleRecord`] - One rule as served by the catalog's data layer
//! - [`RecordId`] - Record identifier, plain or MongoDB extended JSON
//! - [`Catalog`] - An ordered set of records loaded from JSON or YAML
//!
//! ## Examples
//!
//! ```rust
//! use ruledeck::catalog::RuleRecord;
//!
//! let record: RuleRecord = serde_json::from_str(
//!     r#"{"_id": {"$oid": "abc123"}, "name": "Contrast Ratio", "WCAGLevel": "AA"}"#,
//! ).unwrap();
//!
//! assert_eq!(record.id.as_str(), "abc123");
//! assert_eq!(record.wcag_level, "AA");
//! assert_eq!(record.route, "");
//! ```

pub mod loader;

pub use loader::Catalog;

use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Identifier of a rule record.
///
/// The catalog API exports ids either as plain strings or as MongoDB
/// extended JSON (`{"$oid": "..."}`); both deserialize to the bare id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct RecordId(String);

impl RecordId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for RecordId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Oid {
                #[serde(rename = "$oid")]
                oid: String,
            },
            Plain(Scalar),
        }

        Ok(match Option::<Raw>::deserialize(deserializer)? {
            Some(Raw::Oid { oid }) => RecordId(oid),
            Some(Raw::Plain(scalar)) => RecordId(scalar.into_string()),
            None => RecordId::default(),
        })
    }
}

/// Any value a catalog editor might put in a text field
#[derive(Deserialize)]
#[serde(untagged)]
enum Scalar {
    Text(String),
    Integer(i64),
    Unsigned(u64),
    Float(f64),
    Flag(bool),
    Other(IgnoredAny),
}

impl Scalar {
    fn into_string(self) -> String {
        match self {
            Scalar::Text(text) => text,
            Scalar::Integer(n) => n.to_string(),
            Scalar::Unsigned(n) => n.to_string(),
            Scalar::Float(n) => n.to_string(),
            Scalar::Flag(b) => b.to_string(),
            Scalar::Other(_) => String::new(),
        }
    }
}

/// Text field that turns null into "" and numbers or booleans into their text
fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Scalar>::deserialize(deserializer)?
        .map(Scalar::into_string)
        .unwrap_or_default())
}

/// A single accessibility rule.
///
/// Every field defaults to empty so partial records still render: missing
/// keys, `null` and non-text values never fail the whole catalog.
/// `issue_resolution_html` is semi-trusted markup and must go through a
/// [`Sanitizer`](crate::view::sanitize::Sanitizer) before display.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuleRecord {
    #[serde(rename = "_id", alias = "id")]
    pub id: RecordId,

    #[serde(deserialize_with = "lenient_string")]
    pub name: String,

    #[serde(rename = "shortDescription", deserialize_with = "lenient_string")]
    pub short_description: String,

    #[serde(rename = "issueDescription", deserialize_with = "lenient_string")]
    pub issue_description: String,

    #[serde(
        rename = "issueResolution",
        alias = "issueResolutionHtml",
        deserialize_with = "lenient_string"
    )]
    pub issue_resolution_html: String,

    /// WCAG success criterion, e.g. "1.4.3"
    #[serde(deserialize_with = "lenient_string")]
    pub criteria: String,

    #[serde(rename = "WCAGLevel", deserialize_with = "lenient_string")]
    pub wcag_level: String,

    /// Route slug used for the example pages
    #[serde(deserialize_with = "lenient_string")]
    pub route: String,
}

impl RuleRecord {
    /// Path of the rule's own page, `/{criteria}/{route}`
    pub fn page_path(&self) -> String {
        format!("/{}/{}", self.criteria, self.route)
    }
}
