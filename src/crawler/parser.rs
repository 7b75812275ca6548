//! HTML parser for extracting anchors
//!
//! This module handles parsing HTML content and walking the resulting
//! element tree to collect `<a>` elements in document order.

use scraper::{Html, Node};

/// A parsed HTML page
///
/// Parsing never fails outright: malformed markup still yields a best-effort
/// tree, and the parser's diagnostics are kept in `errors`.
pub struct ParsedPage {
    /// The element tree
    pub document: Html,

    /// Diagnostics reported by the HTML tokenizer and tree builder
    pub errors: Vec<String>,
}

impl ParsedPage {
    /// Returns true if the parser reported any diagnostics
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// An anchor element found in a page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Anchor {
    /// Element name, always `a`
    pub tag: String,

    /// Attributes as `(name, value)` pairs
    pub attributes: Vec<(String, String)>,
}

impl Anchor {
    /// Returns the `href` attribute value, if any
    pub fn href(&self) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(name, _)| name == "href")
            .map(|(_, value)| value.as_str())
    }
}

/// Parses an HTML document
///
/// # Example
///
/// ```
/// use depth_crawler::crawler::parse_page;
///
/// let page = parse_page(r#"<!DOCTYPE html><html><body><a href="/page">Link</a></body></html>"#);
/// assert!(!page.has_errors());
/// ```
pub fn parse_page(body: &str) -> ParsedPage {
    let document = Html::parse_document(body);
    let errors = document.errors.iter().map(|e| e.to_string()).collect();

    ParsedPage { document, errors }
}

/// Collects every `<a>` element in document order
///
/// A node is visited before its descendants, and its descendants before its
/// next sibling. The walk keeps its own stack, so deeply nested markup does
/// not grow the call stack.
pub fn extract_anchors(document: &Html) -> Vec<Anchor> {
    let mut anchors = Vec::new();
    let mut stack = vec![document.tree.root()];

    while let Some(node) = stack.pop() {
        if let Node::Element(element) = node.value() {
            if element.name() == "a" {
                anchors.push(Anchor {
                    tag: element.name().to_string(),
                    attributes: element
                        .attrs()
                        .map(|(name, value)| (name.to_string(), value.to_string()))
                        .collect(),
                });
            }
        }

        // Reversed so the first child is popped first
        stack.extend(node.children().rev());
    }

    anchors
}

/// Collects the `href` value of every anchor, in document order
///
/// Anchors without an `href` attribute are skipped.
pub fn extract_hrefs(document: &Html) -> Vec<String> {
    extract_anchors(document)
        .into_iter()
        .filter_map(|anchor| anchor.href().map(str::to_string))
        .collect()
}

/// Parses `body` and returns its hrefs along with the parser diagnostics
pub fn links_on_page(body: &str) -> (Vec<String>, Vec<String>) {
    let page = parse_page(body);
    let hrefs = extract_hrefs(&page.document);
    (hrefs, page.errors)
}
