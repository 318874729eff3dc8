//! Breadcrumb trail

use super::node::{Element, Node};

/// Breadcrumb collaborator: turns a location into a trail
pub trait Breadcrumbs: Send + Sync {
    fn render(&self, location: &str) -> Node;
}

/// One crumb of a trail
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Crumb {
    pub label: String,
    pub href: String,
}

/// Trail derived from the segments of the location path:
/// `/1.4.3/contrast` becomes Home › 1.4.3 › contrast
#[derive(Debug, Clone, Default)]
pub struct PathBreadcrumbs;

impl PathBreadcrumbs {
    pub fn crumbs(location: &str) -> Vec<Crumb> {
        let mut crumbs = vec![Crumb {
            label: "Home".to_string(),
            href: "/".to_string(),
        }];

        let mut href = String::new();
        for segment in location.split('/').filter(|s| !s.is_empty()) {
            href.push('/');
            href.push_str(segment);
            crumbs.push(Crumb {
                label: segment.replace(['-', '_'], " "),
                href: href.clone(),
            });
        }

        crumbs
    }
}

impl Breadcrumbs for PathBreadcrumbs {
    fn render(&self, location: &str) -> Node {
        let crumbs = Self::crumbs(location);
        let last = crumbs.len() - 1;

        let items = crumbs.into_iter().enumerate().map(|(i, crumb)| {
            let item = Element::new("li").class("breadcrumb-item");
            let item = if i == last {
                item.attr("aria-current", "page").text(crumb.label)
            } else {
                item.child(Element::new("a").attr("href", crumb.href).text(crumb.label))
            };
            Node::from(item)
        });

        Element::new("nav")
            .class("breadcrumbs")
            .attr("aria-label", "breadcrumb")
            .child(Element::new("ol").children(items))
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_crumbs_from_path() {
        let crumbs = PathBreadcrumbs::crumbs("/1.4.3/color-contrast");
        let labels: Vec<_> = crumbs.iter().map(|c| c.label.as_str()).collect();
        let hrefs: Vec<_> = crumbs.iter().map(|c| c.href.as_str()).collect();
        assert_eq!(labels, vec!["Home", "1.4.3", "color contrast"]);
        assert_eq!(hrefs, vec!["/", "/1.4.3", "/1.4.3/color-contrast"]);
    }

    #[test]
    fn test_root_is_single_crumb() {
        assert_eq!(PathBreadcrumbs::crumbs("/").len(), 1);
        assert_eq!(PathBreadcrumbs::crumbs("").len(), 1);
    }

    #[test]
    fn test_last_crumb_is_not_a_link() {
        let node = PathBreadcrumbs.render("/1.4.3/contrast");
        let links = node.find_all(&|el| el.tag == "a");
        assert_eq!(links.len(), 2);
        let items = node.find_all(&|el| el.has_class("breadcrumb-item"));
        assert_eq!(items[2].get_attr("aria-current"), Some("page"));
        assert_eq!(items[2].text_content(), "contrast");
    }
}
