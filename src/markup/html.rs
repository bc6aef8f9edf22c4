use crate::markup::PageMarkup;
use scraper::{ElementRef, Html, Selector};
use std::sync::LazyLock;

static TITLE: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("title").expect("title selector is valid"));
static META: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("meta").expect("meta selector is valid"));
static H1: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("h1").expect("h1 selector is valid"));
static BODY: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("body").expect("body selector is valid"));

/// Elements whose text never reaches the reader
const HIDDEN_ELEMENTS: [&str; 4] = ["script", "style", "noscript", "template"];

/// Parses HTML content into a [`PageMarkup`]
pub fn parse(html: &str) -> PageMarkup {
    let doc = Html::parse_document(html);

    let title = doc.select(&TITLE).next().and_then(|e| non_empty(&element_text(e)));
    let description = meta_description(&doc);
    let h1 = doc.select(&H1).next().and_then(|e| non_empty(&element_text(e)));
    let text = visible_text(&doc);
    let open_graph = open_graph_properties(&doc);

    ::log::debug!(
        "HTML parser found title={:?}, h1={:?}, {} words, {} OpenGraph tags",
        title,
        h1,
        text.split_whitespace().count(),
        open_graph.len()
    );

    PageMarkup {
        raw: html.to_string(),
        title,
        description,
        h1,
        text,
        open_graph,
    }
}

/// Whitespace-normalized text of an element
fn element_text(element: ElementRef<'_>) -> String {
    element
        .text()
        .flat_map(str::split_whitespace)
        .collect::<Vec<_>>()
        .join(" ")
}

fn non_empty(text: &str) -> Option<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Content of the first `<meta name="description">`
fn meta_description(doc: &Html) -> Option<String> {
    doc.select(&META)
        .find(|e| {
            e.value()
                .attr("name")
                .is_some_and(|name| name.eq_ignore_ascii_case("description"))
        })
        .and_then(|e| e.value().attr("content"))
        .and_then(non_empty)
}

/// OpenGraph properties declared on `<meta>` tags
fn open_graph_properties(doc: &Html) -> Vec<String> {
    doc.select(&META)
        .filter_map(|e| e.value().attr("property").or_else(|| e.value().attr("name")))
        .filter(|prop| {
            prop.len() > 3 && prop.get(..3).is_some_and(|p| p.eq_ignore_ascii_case("og:"))
        })
        .map(|prop| prop.to_string())
        .collect()
}

/// Body text excluding scripts, styles and other non-rendered content
fn visible_text(doc: &Html) -> String {
    let mut words = Vec::new();

    for body in doc.select(&BODY) {
        for node in body.descendants() {
            let Some(text) = node.value().as_text() else {
                continue;
            };
            let hidden = node.ancestors().any(|ancestor| {
                ancestor
                    .value()
                    .as_element()
                    .is_some_and(|e| HIDDEN_ELEMENTS.contains(&e.name()))
            });
            if !hidden {
                words.extend(text.split_whitespace());
            }
        }
    }

    words.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extracts_head_fields() {
        let page = parse(
            r#"<html><head>
                <title>  Capital Introduction Services  </title>
                <meta name="Description" content=" Connecting funds with allocators. ">
            </head><body><h1>Meet   the
            team</h1></body></html>"#,
        );
        assert_eq!(page.title.as_deref(), Some("Capital Introduction Services"));
        assert_eq!(
            page.description.as_deref(),
            Some("Connecting funds with allocators.")
        );
        assert_eq!(page.h1.as_deref(), Some("Meet the team"));
    }

    #[test]
    fn test_empty_elements_are_missing() {
        let page = parse(
            r#"<html><head><title>   </title><meta name="description" content=""></head>
            <body><h1></h1></body></html>"#,
        );
        assert_eq!(page.title, None);
        assert_eq!(page.description, None);
        assert_eq!(page.h1, None);
    }

    #[test]
    fn test_visible_text_skips_scripts_and_styles() {
        let page = parse(
            r#"<html><head><title>Ignored title</title></head><body>
                <p>Hello, world!</p>
                <script>var hidden = "not text";</script>
                <style>p { color: red; }</style>
                <noscript>enable js</noscript>
                <a href="https://example.com">Link</a>
            </body></html>"#,
        );
        assert_eq!(page.text, "Hello, world! Link");
    }

    #[test]
    fn test_only_first_h1_counts() {
        let page = parse("<body><h1>First heading</h1><h1>Second heading</h1></body>");
        assert_eq!(page.h1.as_deref(), Some("First heading"));
    }

    #[test]
    fn test_open_graph_properties() {
        let page = parse(
            r#"<head>
                <meta property="og:title" content="x">
                <meta name="og:image" content="y">
                <meta property="twitter:card" content="z">
            </head>"#,
        );
        assert_eq!(page.open_graph, vec!["og:title", "og:image"]);
    }

    #[test]
    fn test_malformed_markup_is_total() {
        let page = parse("<html><head><title>Unclosed <body><h1>Broken");
        assert!(page.title.is_some());
        assert_eq!(page.h1, None);
        assert_eq!(page.word_count(), 0);
        assert_eq!(page.raw, "<html><head><title>Unclosed <body><h1>Broken");
    }
}
