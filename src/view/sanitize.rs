//! # HTML Sanitization
//!
//! Rule remediation content comes from the catalog's editors and is only
//! semi-trusted. It reaches a page exclusively as [`SafeHtml`], and the only
//! public way to obtain a `SafeHtml` from arbitrary input is a [`Sanitizer`].
//!
//! [`AmmoniaSanitizer`] keeps structural and formatting markup (paragraphs,
//! lists, emphasis, code, links with safe schemes) and removes scripts,
//! event handler attributes, `javascript:` URLs, frames and embedded
//! objects.
//!
//! ```rust
//! use ruledeck::view::sanitize::{AmmoniaSanitizer, Sanitizer};
//!
//! let sanitizer = AmmoniaSanitizer::default();
//! let safe = sanitizer.sanitize(r#"<b onclick="steal()">bold</b><script>alert(1)</script>"#);
//! assert_eq!(safe.as_str(), "<b>bold</b>");
//! ```

use tracing::{debug, warn};

use crate::config::SanitizeConfig;

/// Tags that are never allowed, whatever the configuration says
const FORBIDDEN_TAGS: &[&str] = &[
    "script", "style", "iframe", "frame", "frameset", "object", "embed", "form", "input",
    "button", "textarea", "select", "meta", "link", "base",
];

/// Markup that may be placed in a page without escaping
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SafeHtml(String);

impl SafeHtml {
    /// Wrap markup this crate generated itself (highlighter output, escaped text)
    pub(crate) fn from_trusted(html: String) -> Self {
        Self(html)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Text the markup displays once parsed, tags removed and entities decoded.
    ///
    /// Only valid for serializer output (sanitized or generated markup), which
    /// never contains comments, CDATA or unquoted `<` in text.
    pub fn text_content(&self) -> String {
        let mut out = String::with_capacity(self.0.len());
        let mut chars = self.0.chars().peekable();
        let mut in_tag = false;
        let mut quote: Option<char> = None;

        while let Some(c) = chars.next() {
            if in_tag {
                match (quote, c) {
                    (Some(q), c) if c == q => quote = None,
                    (Some(_), _) => {}
                    (None, '"') | (None, '\'') => quote = Some(c),
                    (None, '>') => in_tag = false,
                    _ => {}
                }
                continue;
            }

            match c {
                '<' => in_tag = true,
                '&' => {
                    let mut entity = String::new();
                    while let Some(&next) = chars.peek() {
                        if next == ';'
                            || entity.len() > 10
                            || (!next.is_ascii_alphanumeric() && next != '#')
                        {
                            break;
                        }
                        entity.push(next);
                        chars.next();
                    }
                    if chars.peek() == Some(&';') {
                        if let Some(decoded) = decode_entity(&entity) {
                            chars.next();
                            out.push(decoded);
                            continue;
                        }
                    }
                    out.push('&');
                    out.push_str(&entity);
                }
                _ => out.push(c),
            }
        }

        out
    }
}

fn decode_entity(entity: &str) -> Option<char> {
    match entity {
        "amp" => Some('&'),
        "lt" => Some('<'),
        "gt" => Some('>'),
        "quot" => Some('"'),
        "apos" => Some('\''),
        "nbsp" => Some('\u{a0}'),
        _ => {
            let number = entity.strip_prefix('#')?;
            let code = match number.strip_prefix(['x', 'X']) {
                Some(hex) => u32::from_str_radix(hex, 16).ok()?,
                None => number.parse().ok()?,
            };
            char::from_u32(code)
        }
    }
}

/// HTML sanitization collaborator
pub trait Sanitizer: Send + Sync {
    /// Remove executable content from `raw`. Never fails; the result may be empty.
    fn sanitize(&self, raw: &str) -> SafeHtml;
}

/// Sanitizer backed by `ammonia`'s allowlist
#[derive(Debug, Clone, Default)]
pub struct AmmoniaSanitizer {
    extra_tags: Vec<String>,
    remove_tags: Vec<String>,
}

impl AmmoniaSanitizer {
    pub fn new(config: &SanitizeConfig) -> Self {
        let extra_tags = config
            .extra_tags
            .iter()
            .map(|t| t.trim().to_ascii_lowercase())
            .filter(|t| {
                let forbidden = FORBIDDEN_TAGS.contains(&t.as_str());
                if forbidden {
                    warn!(tag = %t, "Ignoring forbidden tag in sanitize.extra_tags");
                }
                !forbidden && !t.is_empty()
            })
            .collect();

        let mut remove_tags: Vec<String> = config
            .remove_tags
            .iter()
            .map(|t| t.trim().to_ascii_lowercase())
            .collect();
        remove_tags.extend(FORBIDDEN_TAGS.iter().map(|t| t.to_string()));

        Self {
            extra_tags,
            remove_tags,
        }
    }
}

impl Sanitizer for AmmoniaSanitizer {
    fn sanitize(&self, raw: &str) -> SafeHtml {
        let mut builder = ammonia::Builder::default();
        builder.add_tags(self.extra_tags.iter());
        builder.rm_tags(self.remove_tags.iter());

        let cleaned = builder.clean(raw).to_string();
        debug!(
            input_len = raw.len(),
            output_len = cleaned.len(),
            "Sanitized markup"
        );
        SafeHtml(cleaned)
    }
}
