//! Syntax highlighting of code blocks
//!
//! Highlighting is a post-processing step over text that is already safe to
//! show: the output of a [`Highlighter`] is escaped, class-annotated markup.

use lazy_static::lazy_static;
use syntect::highlighting::ThemeSet;
use syntect::html::{css_for_theme_with_class_style, ClassStyle, ClassedHTMLGenerator};
use syntect::parsing::SyntaxSet;
use syntect::util::LinesWithEndings;
use tracing::debug;

use super::node::escape_text;
use super::sanitize::SafeHtml;
use crate::error::RenderError;

lazy_static! {
    static ref SYNTAX_SET: SyntaxSet = SyntaxSet::load_defaults_newlines();
    static ref THEME_SET: ThemeSet = ThemeSet::load_defaults();
}

const CLASS_STYLE: ClassStyle = ClassStyle::SpacedPrefixed { prefix: "hl-" };

/// Languages used by code blocks on rule pages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Html,
    Json,
}

impl Language {
    /// CSS class placed on the `<code>` element
    pub fn class_name(self) -> &'static str {
        match self {
            Language::Html => "language-html",
            Language::Json => "language-json",
        }
    }

    fn extension(self) -> &'static str {
        match self {
            Language::Html => "html",
            Language::Json => "json",
        }
    }
}

/// Syntax highlighting collaborator
pub trait Highlighter: Send + Sync {
    /// Highlight plain source text
    fn highlight(&self, source: &str, language: Language) -> SafeHtml;

    /// Highlight a block whose content is markup.
    ///
    /// Like a client-side highlighter, this works on the text the markup
    /// displays, not on its tags.
    fn highlight_markup(&self, markup: &SafeHtml, language: Language) -> SafeHtml {
        self.highlight(&markup.text_content(), language)
    }

    /// Stylesheet the highlighted output relies on
    fn stylesheet(&self) -> String {
        String::new()
    }
}

/// Highlighter backed by syntect's bundled grammars and themes
#[derive(Debug, Clone)]
pub struct SyntectHighlighter {
    theme: String,
}

impl SyntectHighlighter {
    pub fn new(theme: &str) -> Result<Self, RenderError> {
        if !THEME_SET.themes.contains_key(theme) {
            return Err(RenderError::UnknownTheme {
                name: theme.to_string(),
            });
        }
        Ok(Self {
            theme: theme.to_string(),
        })
    }

    /// Names of the bundled themes
    pub fn available_themes() -> Vec<&'static str> {
        THEME_SET.themes.keys().map(String::as_str).collect()
    }
}

impl Highlighter for SyntectHighlighter {
    fn highlight(&self, source: &str, language: Language) -> SafeHtml {
        let syntax = SYNTAX_SET
            .find_syntax_by_extension(language.extension())
            .unwrap_or_else(|| SYNTAX_SET.find_syntax_plain_text());
        let mut generator =
            ClassedHTMLGenerator::new_with_class_style(syntax, &SYNTAX_SET, CLASS_STYLE);

        for line in LinesWithEndings::from(source) {
            if let Err(e) = generator.parse_html_for_line_which_includes_newline(line) {
                debug!(error = %e, language = language.class_name(), "Highlighting failed, using plain text");
                return SafeHtml::from_trusted(escape_text(source));
            }
        }

        SafeHtml::from_trusted(generator.finalize())
    }

    fn stylesheet(&self) -> String {
        THEME_SET
            .themes
            .get(&self.theme)
            .and_then(|theme| css_for_theme_with_class_style(theme, CLASS_STYLE).ok())
            .unwrap_or_default()
    }
}

/// Highlighter used when highlighting is disabled: text is escaped, markup
/// is passed through as sanitized
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainHighlighter;

impl Highlighter for PlainHighlighter {
    fn highlight(&self, source: &str, _language: Language) -> SafeHtml {
        SafeHtml::from_trusted(escape_text(source))
    }

    fn highlight_markup(&self, markup: &SafeHtml, _language: Language) -> SafeHtml {
        markup.clone()
    }
}
