//! HTML → plain text for job postings.

use scraper::{ElementRef, Html};

/// Elements whose contents never reach the extracted text.
const SKIPPED_ELEMENTS: &[&str] = &["script", "style", "noscript", "template", "head"];

/// Elements that imply a word boundary even when the markup has no whitespace.
const BLOCK_ELEMENTS: &[&str] = &[
    "address", "article", "aside", "blockquote", "br", "dd", "div", "dl", "dt", "footer", "form",
    "h1", "h2", "h3", "h4", "h5", "h6", "header", "hr", "li", "main", "nav", "ol", "p", "pre",
    "section", "table", "td", "th", "tr", "ul",
];

/// Job description text: whitespace collapsed to single spaces, trimmed,
/// and at most `max_chars` characters long.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobDescription(String);

impl JobDescription {
    /// Normalizes arbitrary text and truncates it to `max_chars` characters.
    pub fn from_text(raw: &str, max_chars: usize) -> Self {
        let collapsed = raw.split_whitespace().collect::<Vec<_>>().join(" ");
        let truncated: String = collapsed.chars().take(max_chars).collect();
        Self(truncated.trim_end().to_string())
    }

    /// Parses an HTML document and keeps the visible text of its `<body>`.
    pub fn from_html(html: &str, max_chars: usize) -> Self {
        Self::from_text(&body_text(html), max_chars)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn char_count(&self) -> usize {
        self.0.chars().count()
    }
}

/// Raw text of the document. `<head>` and other non-rendered elements are
/// skipped, which leaves the body text.
fn body_text(html: &str) -> String {
    let document = Html::parse_document(html);
    let mut out = String::with_capacity(html.len() / 2);
    push_text(document.root_element(), &mut out);
    out
}

fn push_text(element: ElementRef<'_>, out: &mut String) {
    for child in element.children() {
        if let Some(text) = child.value().as_text() {
            out.push_str(text);
        } else if let Some(child_el) = ElementRef::wrap(child) {
            let name = child_el.value().name();
            if SKIPPED_ELEMENTS.contains(&name) {
                continue;
            }
            let block = BLOCK_ELEMENTS.contains(&name);
            if block {
                out.push(' ');
            }
            push_text(child_el, out);
            if block {
                out.push(' ');
            }
        }
    }
}
