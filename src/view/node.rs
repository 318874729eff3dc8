//! Typed output tree
//!
//! Components render to [`Node`] trees rather than strings. Text and
//! attribute values are escaped when the tree is serialized; the only way
//! to place raw markup in a tree is [`Node::Markup`], which takes a
//! [`SafeHtml`] produced by the sanitizer or the highlighter.

use std::fmt::Write as _;

use super::sanitize::SafeHtml;

const VOID_ELEMENTS: &[&str] = &["br", "hr", "img", "input", "link", "meta"];

/// A node of the rendered tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    Text(String),
    Markup(SafeHtml),
}

impl Node {
    pub fn text(text: impl Into<String>) -> Self {
        Node::Text(text.into())
    }

    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(el) => Some(el),
            _ => None,
        }
    }

    /// Serialize the tree to HTML
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    fn write_html(&self, out: &mut String) {
        match self {
            Node::Text(text) => out.push_str(&escape_text(text)),
            Node::Markup(html) => out.push_str(html.as_str()),
            Node::Element(el) => el.write_html(out),
        }
    }

    /// Concatenated text of the tree, markup reduced to its text content
    pub fn text_content(&self) -> String {
        match self {
            Node::Text(text) => text.clone(),
            Node::Markup(html) => html.text_content(),
            Node::Element(el) => el.children.iter().map(Node::text_content).collect(),
        }
    }

    /// All elements in document order matching `pred`
    pub fn find_all<'a>(&'a self, pred: &dyn Fn(&Element) -> bool) -> Vec<&'a Element> {
        let mut found = Vec::new();
        self.collect(pred, &mut found);
        found
    }

    /// First element carrying `class`
    pub fn find_by_class(&self, class: &str) -> Option<&Element> {
        self.find_all(&|el| el.has_class(class)).into_iter().next()
    }

    fn collect<'a>(&'a self, pred: &dyn Fn(&Element) -> bool, found: &mut Vec<&'a Element>) {
        if let Node::Element(el) = self {
            if pred(el) {
                found.push(el);
            }
            for child in &el.children {
                child.collect(pred, found);
            }
        }
    }
}

impl From<Element> for Node {
    fn from(el: Element) -> Self {
        Node::Element(el)
    }
}

impl From<SafeHtml> for Node {
    fn from(html: SafeHtml) -> Self {
        Node::Markup(html)
    }
}

/// An HTML element with ordered attributes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub tag: &'static str,
    attrs: Vec<(String, String)>,
    children: Vec<Node>,
}

impl Element {
    pub fn new(tag: &'static str) -> Self {
        Self {
            tag,
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Set an attribute, replacing any previous value
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let name = name.into();
        let value = value.into();
        match self.attrs.iter_mut().find(|(n, _)| *n == name) {
            Some(slot) => slot.1 = value,
            None => self.attrs.push((name, value)),
        }
        self
    }

    /// Append a class name
    pub fn class(self, class: &str) -> Self {
        let classes = match self.get_attr("class") {
            Some(existing) if !existing.is_empty() => format!("{existing} {class}"),
            _ => class.to_string(),
        };
        self.attr("class", classes)
    }

    pub fn style(self, style: &str) -> Self {
        self.attr("style", style)
    }

    pub fn child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn text(self, text: impl Into<String>) -> Self {
        self.child(Node::Text(text.into()))
    }

    pub fn children(mut self, children: impl IntoIterator<Item = Node>) -> Self {
        self.children.extend(children);
        self
    }

    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.get_attr("class")
            .map(|c| c.split_whitespace().any(|c| c == class))
            .unwrap_or(false)
    }

    pub fn child_nodes(&self) -> &[Node] {
        &self.children
    }

    pub fn text_content(&self) -> String {
        self.children.iter().map(Node::text_content).collect()
    }

    /// Text of the direct text children, ignoring nested elements
    pub fn own_text(&self) -> String {
        self.children
            .iter()
            .filter_map(|child| match child {
                Node::Text(text) => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    fn write_html(&self, out: &mut String) {
        out.push('<');
        out.push_str(self.tag);
        for (name, value) in &self.attrs {
            let _ = write!(out, " {}=\"{}\"", name, escape_attr(value));
        }
        out.push('>');

        if VOID_ELEMENTS.contains(&self.tag) {
            return;
        }

        for child in &self.children {
            child.write_html(out);
        }
        let _ = write!(out, "</{}>", self.tag);
    }
}

/// Escape text for use between tags
pub fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

/// Escape text for use inside a double-quoted attribute
pub fn escape_attr(text: &str) -> String {
    escape_text(text).replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_renders_nested_elements() {
        let tree: Node = Element::new("div")
            .class("box")
            .child(Element::new("span").text("hi"))
            .child(Element::new("br"))
            .into();
        assert_eq!(tree.to_html(), r#"<div class="box"><span>hi</span><br></div>"#);
    }

    #[test]
    fn test_escapes_text_and_attributes() {
        let tree: Node = Element::new("a")
            .attr("title", r#"say "hi" <now>"#)
            .text("<script>alert(1)</script> & more")
            .into();
        assert_eq!(
            tree.to_html(),
            r#"<a title="say &quot;hi&quot; &lt;now&gt;">&lt;script&gt;alert(1)&lt;/script&gt; &amp; more</a>"#
        );
    }

    #[test]
    fn test_class_appends_and_attr_replaces() {
        let el = Element::new("a")
            .class("one")
            .class("two")
            .attr("href", "/a")
            .attr("href", "/b");
        assert!(el.has_class("one"));
        assert!(el.has_class("two"));
        assert!(!el.has_class("on"));
        assert_eq!(el.get_attr("href"), Some("/b"));
    }

    #[test]
    fn test_find_and_text_content() {
        let tree: Node = Element::new("ul")
            .child(Element::new("li").class("item").text("a"))
            .child(Element::new("li").class("item").text("b"))
            .into();
        assert_eq!(tree.find_all(&|el| el.has_class("item")).len(), 2);
        assert_eq!(tree.find_by_class("item").unwrap().text_content(), "a");
        assert_eq!(tree.text_content(), "ab");
        assert!(tree.find_by_class("missing").is_none());
    }

    #[test]
    fn test_own_text_skips_nested_elements() {
        let el = Element::new("a")
            .child(Element::new("span").text("thumb_up"))
            .text("Success");
        assert_eq!(el.own_text(), "Success");
        assert_eq!(el.text_content(), "thumb_upSuccess");
    }
}
