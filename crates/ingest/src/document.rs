//! Parsed document access.
//!
//! Detection code never touches an HTML parser directly. It reads pages
//! through [`ProductDocument`], so any parser can sit behind the seam and tests
//! can supply canned documents. [`HtmlDocument`] is the `scraper`-backed
//! implementation used in production.

use scraper::{ElementRef, Html, Node, Selector};
use tracing::debug;

/// Selectors tried, in order, when collecting breadcrumb text.
const BREADCRUMB_SELECTORS: &[&str] = &[
    "nav[aria-label='breadcrumb'] li",
    "nav[aria-label='Breadcrumb'] li",
    ".breadcrumb li",
    ".breadcrumbs li",
    "[itemtype*='BreadcrumbList'] [itemprop='name']",
];

/// Elements whose text never counts as visible body text.
const INVISIBLE_ELEMENTS: &[&str] = &["script", "style", "noscript", "template"];

/// Read-only capabilities the detectors need from a parsed page.
///
/// Every method is infallible: a missing element or an unparsable selector
/// yields `None` or an empty value so detection can move on to its next strategy.
pub trait ProductDocument {
    /// Text content of every element matching `selector`, in document order.
    fn select_texts(&self, selector: &str) -> Vec<String>;

    /// Value of `attr` on the first element matching `selector` that carries it.
    fn select_attr(&self, selector: &str, attr: &str) -> Option<String>;

    /// The page `<title>`, trimmed.
    fn title(&self) -> Option<String>;

    /// Visible text of the `<body>`, whitespace-collapsed.
    fn body_text(&self) -> String;

    /// Raw contents of `<script>` blocks whose `type` matches, in document order.
    fn script_blocks(&self, script_type: &str) -> Vec<String>;

    /// Non-empty `content` of a `<meta>` tag keyed by `name` or `property`.
    fn meta_content(&self, key: &str) -> Option<String> {
        let selector = format!(r#"meta[name="{key}"], meta[property="{key}"]"#);
        self.select_attr(&selector, "content")
            .filter(|content| !content.trim().is_empty())
    }

    /// Breadcrumb trail joined with `" > "`, or empty if the page has none.
    fn breadcrumbs(&self) -> String {
        BREADCRUMB_SELECTORS
            .iter()
            .map(|selector| self.select_texts(selector))
            .find(|crumbs| !crumbs.is_empty())
            .map(|crumbs| crumbs.join(" > "))
            .unwrap_or_default()
    }
}

/// A [`ProductDocument`] backed by an already-fetched HTML string.
pub struct HtmlDocument {
    html: Html,
}

impl HtmlDocument {
    /// Parse a full HTML document.
    #[must_use]
    pub fn parse(source: &str) -> Self {
        Self {
            html: Html::parse_document(source),
        }
    }

    fn select<'a>(&'a self, selector: &str) -> Vec<ElementRef<'a>> {
        match Selector::parse(selector) {
            Ok(parsed) => self.html.select(&parsed).collect(),
            Err(e) => {
                debug!(selector, error = %e, "Skipping unparsable selector");
                Vec::new()
            }
        }
    }
}

impl ProductDocument for HtmlDocument {
    fn select_texts(&self, selector: &str) -> Vec<String> {
        self.select(selector)
            .into_iter()
            .map(|element| collapse_whitespace(element.text()))
            .filter(|text| !text.is_empty())
            .collect()
    }

    fn select_attr(&self, selector: &str, attr: &str) -> Option<String> {
        self.select(selector)
            .into_iter()
            .find_map(|element| element.value().attr(attr).map(str::to_owned))
    }

    fn title(&self) -> Option<String> {
        self.select("title")
            .first()
            .map(|element| collapse_whitespace(element.text()))
    }

    fn body_text(&self) -> String {
        let Some(body) = self.select("body").into_iter().next() else {
            return String::new();
        };

        let visible = body.descendants().filter_map(|node| {
            let Node::Text(text) = node.value() else {
                return None;
            };
            let hidden = node
                .parent()
                .and_then(|parent| parent.value().as_element().map(|el| el.name()))
                .is_some_and(|name| INVISIBLE_ELEMENTS.contains(&name));
            (!hidden).then_some(&**text)
        });
        collapse_whitespace(visible)
    }

    fn script_blocks(&self, script_type: &str) -> Vec<String> {
        self.select("script")
            .into_iter()
            .filter(|script| {
                script
                    .value()
                    .attr("type")
                    .is_some_and(|t| t.trim().eq_ignore_ascii_case(script_type))
            })
            .map(|script| script.text().collect::<String>())
            .collect()
    }
}

fn collapse_whitespace<'a>(parts: impl Iterator<Item = &'a str>) -> String {
    parts
        .flat_map(str::split_whitespace)
        .collect::<Vec<_>>()
        .join(" ")
}
