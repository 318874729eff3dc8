//! HTML page output

use chrono::Utc;
use minijinja::{context, Environment};

use super::{PageRenderer, RulePage};
use crate::error::{RenderError, RuleDeckError};
use crate::view::rule_detail::NOT_FOUND_MESSAGE;

const PAGE_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{{ title }} - RuleDeck</title>
    <link rel="stylesheet" href="https://fonts.googleapis.com/icon?family=Material+Icons">
    <style>
        :root {
            --primary: #1976d2;
            --warning: #ed6c02;
            --success: #2e7d32;
            --error: #d32f2f;
            --muted: #666;
        }
        * { box-sizing: border-box; }
        body {
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
            line-height: 1.6;
            color: #333;
            margin: 0;
            background: #f8f9fa;
        }
        .layout { display: flex; min-height: 100vh; }
        aside { width: 240px; background: #1e1e1e; padding: 1rem 0; }
        main { flex: 1; padding: 2rem; }
        .nav-list { list-style: none; margin: 0; padding: 0; }
        .nav-link { display: block; }
        .list-item-button { display: flex; align-items: center; gap: 1rem; padding: 0.5rem 1rem; }
        .list-item-button:hover { background: rgba(255,255,255,0.08); }
        .list-item-button.selected { background: rgba(25,118,210,0.24); }
        .container { max-width: 1200px; margin: 2rem auto; }
        .no-item { color: var(--muted); font-size: 1.25rem; }
        .paper {
            background: white;
            padding: 3rem;
            border-radius: 12px;
            box-shadow: 0 4px 12px rgba(0,0,0,0.15);
        }
        .breadcrumbs ol { list-style: none; display: flex; gap: 0.5rem; padding: 0; margin: 0 0 1.5rem; }
        .breadcrumb-item + .breadcrumb-item::before { content: "/"; padding-right: 0.5rem; color: var(--muted); }
        .breadcrumbs a { color: var(--muted); text-decoration: none; }
        .rule-title { margin: 0 0 0.5rem; }
        .rule-short-description { color: var(--muted); }
        .divider { border: 0; border-top: 1px solid #e0e0e0; margin: 1.5rem 0; }
        .chips { display: flex; gap: 0.5rem; margin-top: 1rem; }
        .chip {
            display: inline-flex;
            align-items: center;
            gap: 0.25rem;
            padding: 0.1rem 0.75rem;
            border: 1px solid;
            border-radius: 16px;
            font-size: 0.85rem;
        }
        .chip .material-icons { font-size: 18px; }
        .chip.tone-warning { color: var(--warning); }
        .chip.tone-primary { color: var(--primary); }
        .subtitle { font-size: 0.9rem; color: var(--muted); margin: 0 0 1rem; }
        .issue-resolution {
            margin-top: 2rem;
            padding: 1.5rem;
            background: #f5f5f5;
            border-radius: 8px;
            box-shadow: 0 2px 4px rgba(0,0,0,0.1);
            font-size: 0.9rem;
        }
        .actions { display: flex; justify-content: center; gap: 1.5rem; margin-top: 2rem; }
        .action {
            display: inline-flex;
            align-items: center;
            gap: 0.5rem;
            padding: 0.75rem 2rem;
            border-radius: 24px;
            color: white;
            font-weight: bold;
            box-shadow: 0 3px 6px rgba(0,0,0,0.2);
        }
        .action.tone-success { background: var(--success); }
        .action.tone-success:hover { background: #1b5e20; }
        .action.tone-error { background: var(--error); }
        .action.tone-error:hover { background: #c62828; }
        .release-json {
            margin-top: 2rem;
            padding: 1.5rem;
            border: 1px solid #e0e0e0;
            border-radius: 8px;
        }
        .tooltip { position: absolute; top: 8px; right: 8px; }
        .copy-button { border: 0; background: none; cursor: pointer; padding: 0.5rem; border-radius: 50%; }
        .copy-button:hover { background: rgba(0,0,0,0.06); }
        pre { margin: 0; overflow-x: auto; }
        footer { text-align: center; color: var(--muted); font-size: 0.8rem; padding: 1rem; }
{{ highlight_css|safe }}
    </style>
</head>
<body>
    <div class="layout">
        <aside>{{ sidebar|safe }}</aside>
        <main>{{ content|safe }}</main>
    </div>
    <footer>
        <p>Generated {{ generated }} by RuleDeck {{ version }}</p>
    </footer>
    <script>
        document.querySelectorAll(".copy-button").forEach(function (button) {
            var setLabel = function (label) {
                button.title = label;
                button.setAttribute("aria-label", label);
                button.parentElement.setAttribute("data-tooltip", label);
            };
            button.addEventListener("click", function () {
                navigator.clipboard.writeText(button.getAttribute("data-copy"));
                setLabel("Copied!");
                setTimeout(function () { setLabel("Copy to clipboard"); }, {{ reset_ms }});
            });
        });
    </script>
</body>
</html>
"#;

/// Full HTML document around a rendered page
pub struct HtmlPage;

impl HtmlPage {
    pub fn new() -> Self {
        Self
    }
}

impl Default for HtmlPage {
    fn default() -> Self {
        Self::new()
    }
}

impl PageRenderer for HtmlPage {
    fn render_page(&self, page: &RulePage<'_>) -> Result<String, RuleDeckError> {
        let mut env = Environment::new();
        env.add_template("page.html", PAGE_TEMPLATE)
            .map_err(RenderError::from)?;
        let template = env.get_template("page.html").map_err(RenderError::from)?;

        let title = match page.rule {
            Some(rule) => rule.name.as_str(),
            None => NOT_FOUND_MESSAGE,
        };

        let html = template
            .render(context! {
                title => title,
                highlight_css => page.stylesheet.as_str(),
                sidebar => page.sidebar.to_html(),
                content => page.body.to_html(),
                reset_ms => page.copy_reset_ms,
                generated => Utc::now().format("%Y-%m-%d %H:%M:%S UTC").to_string(),
                version => env!("CARGO_PKG_VERSION"),
            })
            .map_err(RenderError::from)?;

        Ok(html)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::RuleRecord;
    use crate::view::{Element, Node};

    fn render(rule: Option<&RuleRecord>, body: &Node) -> String {
        let sidebar: Node = Element::new("nav").class("sidebar").into();
        let page = RulePage {
            location: "/",
            rule,
            body,
            sidebar: &sidebar,
            stylesheet: ".hl-source { color: #333; }".to_string(),
            copy_reset_ms: 2000,
        };
        HtmlPage::new().render_page(&page).unwrap()
    }

    #[test]
    fn test_document_embeds_fragments() {
        let rule = RuleRecord {
            name: "Contrast Ratio".to_string(),
            ..Default::default()
        };
        let body: Node = Element::new("div").class("rule-page").text("body").into();
        let html = render(Some(&rule), &body);

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Contrast Ratio - RuleDeck</title>"));
        assert!(html.contains(r#"<div class="rule-page">body</div>"#));
        assert!(html.contains(r#"<nav class="sidebar"></nav>"#));
        assert!(html.contains(".hl-source { color: #333; }"));
        assert!(html.contains("}, 2000);"));
    }

    #[test]
    fn test_title_is_escaped() {
        let rule = RuleRecord {
            name: "<script>x</script>".to_string(),
            ..Default::default()
        };
        let body: Node = Element::new("div").into();
        let html = render(Some(&rule), &body);
        assert!(html.contains("<title>&lt;script&gt;x"));
        assert!(!html.contains("<script>x"));
    }

    #[test]
    fn test_not_found_title() {
        let body: Node = Element::new("div").into();
        let html = render(None, &body);
        assert!(html.contains("<title>No item found - RuleDeck</title>"));
    }
}
