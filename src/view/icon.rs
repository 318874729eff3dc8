//! Icon references

use super::node::{Element, Node};

/// An icon from the Material Icons font
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Icon {
    Home,
    Rule,
    ThumbUp,
    ThumbDown,
    ContentPaste,
    TagFaces,
    Accessible,
    /// Any other ligature name
    Named(String),
}

impl Icon {
    /// Parse a ligature name as written in configuration
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "home" => Icon::Home,
            "rule" => Icon::Rule,
            "thumb_up" | "thumb_up_alt" => Icon::ThumbUp,
            "thumb_down" | "thumb_down_alt" => Icon::ThumbDown,
            "content_paste" => Icon::ContentPaste,
            "tag_faces" => Icon::TagFaces,
            "accessible" => Icon::Accessible,
            other => Icon::Named(other.to_string()),
        }
    }

    pub fn ligature(&self) -> &str {
        match self {
            Icon::Home => "home",
            Icon::Rule => "rule",
            Icon::ThumbUp => "thumb_up",
            Icon::ThumbDown => "thumb_down",
            Icon::ContentPaste => "content_paste",
            Icon::TagFaces => "tag_faces",
            Icon::Accessible => "accessible",
            Icon::Named(name) => name,
        }
    }

    /// Decorative icon element; the surrounding control carries the label
    pub fn render(&self) -> Node {
        Element::new("span")
            .class("material-icons")
            .attr("aria-hidden", "true")
            .text(self.ligature())
            .into()
    }
}
