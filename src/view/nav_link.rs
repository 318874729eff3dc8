//! Navigation links
//!
//! [`NavLinkItem`] is a full-width sidebar entry that marks itself selected
//! when the router is at its destination. [`Sidebar`] lists several.

use super::icon::Icon;
use super::node::{Element, Node};
use crate::routing::Router;

/// Visual settings shared by navigation entries
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavStyle {
    /// Label colour
    pub text_color: String,
}

impl Default for NavStyle {
    fn default() -> Self {
        Self {
            text_color: "#a19f99".to_string(),
        }
    }
}

/// A clickable navigation entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavLinkItem {
    pub destination_path: String,
    pub label: String,
    pub icon: Icon,
}

impl NavLinkItem {
    pub fn new(destination_path: impl Into<String>, label: impl Into<String>, icon: Icon) -> Self {
        Self {
            destination_path: destination_path.into(),
            label: label.into(),
            icon,
        }
    }

    pub fn is_selected(&self, router: &dyn Router) -> bool {
        router.is_current(&self.destination_path)
    }

    /// Follow the link
    pub fn activate(&self, router: &mut dyn Router) {
        router.navigate(&self.destination_path);
    }

    pub fn render(&self, router: &dyn Router, style: &NavStyle) -> Node {
        let selected = self.is_selected(router);

        let mut button = Element::new("span")
            .class("list-item-button")
            .style("width: 100%");
        if selected {
            button = button.class("selected");
        }

        let button = button
            .child(Element::new("span").class("list-item-icon").child(self.icon.render()))
            .child(
                Element::new("span")
                    .class("list-item-text")
                    .style(&format!("color: {}", style.text_color))
                    .text(&self.label),
            );

        let mut link = Element::new("a")
            .class("nav-link")
            .attr("href", &self.destination_path)
            .style("text-decoration: none; width: 100%");
        if selected {
            link = link.attr("aria-current", "page");
        }

        link.child(button).into()
    }
}

/// Vertical list of navigation entries
#[derive(Debug, Clone, Default)]
pub struct Sidebar {
    pub items: Vec<NavLinkItem>,
    pub style: NavStyle,
}

impl Sidebar {
    pub fn new(items: Vec<NavLinkItem>, style: NavStyle) -> Self {
        Self { items, style }
    }

    /// The entry matching the current location, if any
    pub fn selected<'a>(&'a self, router: &dyn Router) -> Option<&'a NavLinkItem> {
        self.items.iter().find(|item| item.is_selected(router))
    }

    pub fn render(&self, router: &dyn Router) -> Node {
        Element::new("nav")
            .class("sidebar")
            .attr("aria-label", "Main")
            .child(
                Element::new("ul").class("nav-list").children(
                    self.items
                        .iter()
                        .map(|item| Node::from(Element::new("li").child(item.render(router, &self.style)))),
                ),
            )
            .into()
    }
}
