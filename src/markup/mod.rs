pub mod html;

use regex::Regex;
use std::sync::LazyLock;

/// `href="..."` occurrences anywhere in the markup
static HREF_ATTRIBUTE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"href\s*=\s*"[^"]*""#).expect("href pattern is valid"));

/// OpenGraph properties a shareable page must declare
pub const REQUIRED_OPEN_GRAPH: [&str; 3] = ["og:title", "og:description", "og:image"];

/// Parsed view of a page's markup, built once and shared by every check
#[derive(Debug, Clone, Default)]
pub struct PageMarkup {
    /// Markup exactly as acquired
    pub raw: String,

    /// Trimmed `<title>` text, if present and non-empty
    pub title: Option<String>,

    /// Trimmed meta description content, if present and non-empty
    pub description: Option<String>,

    /// Whitespace-normalized text of the first `<h1>`, if present and non-empty
    pub h1: Option<String>,

    /// Visible body text with scripts and styles stripped, single-spaced
    pub text: String,

    /// OpenGraph properties declared through `<meta property=...>`
    pub open_graph: Vec<String>,
}

impl PageMarkup {
    /// Parses HTML into the view the checks work on
    pub fn parse(raw: &str) -> Self {
        html::parse(raw)
    }

    /// Number of whitespace-delimited tokens in the visible text
    pub fn word_count(&self) -> usize {
        self.text.split_whitespace().count()
    }

    /// Number of `href="..."` attributes in the raw markup
    pub fn href_count(&self) -> usize {
        HREF_ATTRIBUTE.find_iter(&self.raw).count()
    }

    /// Whether the markup carries a schema.org `@type` or `@context` marker
    pub fn has_structured_data(&self) -> bool {
        self.raw.contains("\"@type\"") || self.raw.contains("\"@context\"")
    }

    /// Required OpenGraph properties that the page does not declare
    pub fn missing_open_graph(&self) -> Vec<&'static str> {
        REQUIRED_OPEN_GRAPH
            .iter()
            .copied()
            .filter(|required| {
                !self
                    .open_graph
                    .iter()
                    .any(|declared| declared.eq_ignore_ascii_case(required))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_href_count_ignores_unquoted_and_other_attributes() {
        let page = PageMarkup::parse(
            r#"<html><body>
                <a href="/a">A</a>
                <a href = "/b">B</a>
                <a href=/c>C</a>
                <link rel="stylesheet" href="/site.css">
                <img src="/x.png">
            </body></html>"#,
        );
        assert_eq!(page.href_count(), 3);
    }

    #[test]
    fn test_structured_data_markers() {
        let with_type = PageMarkup::parse(
            r#"<script type="application/ld+json">{"@type": "Organization"}</script>"#,
        );
        assert!(with_type.has_structured_data());

        let without = PageMarkup::parse("<p>@type mentioned in prose</p>");
        assert!(!without.has_structured_data());
    }

    #[test]
    fn test_missing_open_graph() {
        let page = PageMarkup::parse(
            r#"<html><head>
                <meta property="og:title" content="T">
                <meta property="OG:IMAGE" content="/i.png">
            </head><body></body></html>"#,
        );
        assert_eq!(page.missing_open_graph(), vec!["og:description"]);
    }

    #[test]
    fn test_word_count() {
        let page = PageMarkup::parse("<body><p>one two</p><p>three</p></body>");
        assert_eq!(page.word_count(), 3);
    }
}
