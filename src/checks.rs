//! The fixed battery of page checks.
//!
//! Every check is a total function over a parsed page: absent or malformed
//! markers count as failing conditions, never as errors. Checks are
//! independent of each other and run in [`Check::ALL`] order.

use crate::markup::PageMarkup;
use crate::urls;
use serde::{Deserialize, Serialize};

pub const TITLE_MIN: usize = 30;
pub const TITLE_MAX: usize = 60;
pub const DESCRIPTION_MIN: usize = 120;
pub const DESCRIPTION_MAX: usize = 160;
pub const H1_MIN: usize = 20;
pub const MIN_INTERNAL_LINKS: usize = 3;
pub const MIN_WORDS: usize = 300;

/// Kinds of check, in the order they run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Check {
    Title,
    Description,
    Heading,
    KeywordRelevance,
    StructuredData,
    OpenGraph,
    InternalLinks,
    ContentLength,
    UrlShape,
}

/// Where a failing check's message is recorded
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Routing {
    /// Critical: recorded in `issues`
    Issue,
    /// Advisory: recorded in `warnings`
    Warning,
    /// Advisory: recorded in `recommendations`
    Recommendation,
}

impl Check {
    pub const ALL: [Check; 9] = [
        Check::Title,
        Check::Description,
        Check::Heading,
        Check::KeywordRelevance,
        Check::StructuredData,
        Check::OpenGraph,
        Check::InternalLinks,
        Check::ContentLength,
        Check::UrlShape,
    ];

    /// Points deducted when the check fails
    pub fn weight(self) -> u32 {
        match self {
            Check::Title => 20,
            Check::Description => 15,
            Check::Heading => 15,
            Check::KeywordRelevance => 10,
            Check::StructuredData => 10,
            Check::OpenGraph => 10,
            Check::InternalLinks => 5,
            Check::ContentLength => 10,
            Check::UrlShape => 5,
        }
    }

    pub fn routing(self) -> Routing {
        match self {
            Check::KeywordRelevance | Check::OpenGraph => Routing::Warning,
            Check::InternalLinks | Check::UrlShape => Routing::Recommendation,
            _ => Routing::Issue,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Check::Title => "title",
            Check::Description => "meta description",
            Check::Heading => "H1 heading",
            Check::KeywordRelevance => "keyword relevance",
            Check::StructuredData => "structured data",
            Check::OpenGraph => "OpenGraph tags",
            Check::InternalLinks => "internal links",
            Check::ContentLength => "content length",
            Check::UrlShape => "URL shape",
        }
    }

    /// Site-wide fix to suggest when the check failed on some pages
    pub fn advice(self) -> &'static str {
        match self {
            Check::Title => "Give every page a unique 30-60 character title that leads with a target keyword",
            Check::Description => "Write 120-160 character meta descriptions that summarise each page",
            Check::Heading => "Add a single descriptive H1 of at least 20 characters to each page",
            Check::KeywordRelevance => "Work target keywords into page copy or URL slugs",
            Check::StructuredData => "Add JSON-LD structured data (Organization, Service, FAQPage) to each page",
            Check::OpenGraph => "Declare og:title, og:description and og:image for social sharing",
            Check::InternalLinks => "Link related service, pricing and FAQ pages to each other",
            Check::ContentLength => "Expand thin pages to at least 300 words of substantive copy",
            Check::UrlShape => "Use short, lower-case, hyphenated URLs without underscores or spaces",
        }
    }

    /// Runs this check against a page
    pub(crate) fn evaluate(self, page: &PageContext<'_>) -> CheckOutcome {
        match self {
            Check::Title => check_title(page),
            Check::Description => check_description(page.markup),
            Check::Heading => check_heading(page.markup),
            Check::KeywordRelevance => check_keyword_relevance(page),
            Check::StructuredData => check_structured_data(page.markup),
            Check::OpenGraph => check_open_graph(page.markup),
            Check::InternalLinks => check_internal_links(page.markup),
            Check::ContentLength => check_content_length(page.markup),
            Check::UrlShape => check_url_shape(page.url),
        }
    }
}

impl std::fmt::Display for Check {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Everything a check may look at
pub(crate) struct PageContext<'a> {
    pub markup: &'a PageMarkup,
    pub url: &'a str,
    pub keywords: &'a [String],
}

/// Result of a single check, consumed only by the validator
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct CheckOutcome {
    pub valid: bool,
    pub error: Option<String>,
    pub warning: Option<String>,
    pub suggestion: Option<String>,
}

impl CheckOutcome {
    fn pass() -> Self {
        Self {
            valid: true,
            error: None,
            warning: None,
            suggestion: None,
        }
    }

    fn pass_with_warning(warning: String) -> Self {
        Self {
            warning: Some(warning),
            ..Self::pass()
        }
    }

    fn fail(error: String) -> Self {
        Self {
            valid: false,
            error: Some(error),
            warning: None,
            suggestion: None,
        }
    }

    fn with_suggestion(mut self, suggestion: &str) -> Self {
        self.suggestion = Some(suggestion.to_string());
        self
    }
}

fn normalize_keyword(keyword: &str) -> String {
    keyword
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Whether any non-blank keyword occurs in the text, ignoring case.
/// An empty keyword list targets nothing, so it is trivially satisfied.
fn mentions_any_keyword(text: &str, keywords: &[String]) -> bool {
    let targets: Vec<String> = keywords
        .iter()
        .map(|k| normalize_keyword(k))
        .filter(|k| !k.is_empty())
        .collect();
    if targets.is_empty() {
        return true;
    }
    let haystack = text.to_lowercase();
    targets.iter().any(|k| haystack.contains(k.as_str()))
}

fn check_title(page: &PageContext<'_>) -> CheckOutcome {
    let Some(title) = &page.markup.title else {
        return CheckOutcome::fail("Missing <title> tag".to_string())
            .with_suggestion("Add a <title> of 30-60 characters including a target keyword");
    };

    let length = title.chars().count();
    if length < TITLE_MIN {
        return CheckOutcome::fail(format!(
            "Title too short ({} characters, minimum {})",
            length, TITLE_MIN
        ))
        .with_suggestion("Lengthen the title with the service name and a target keyword");
    }

    let mut reasons = Vec::new();
    if length > TITLE_MAX {
        reasons.push(format!(
            "Title is {} characters; search results truncate after {}",
            length, TITLE_MAX
        ));
    }
    if !mentions_any_keyword(title, page.keywords) {
        reasons.push("Title does not contain any target keyword".to_string());
    }

    if reasons.is_empty() {
        CheckOutcome::pass()
    } else {
        CheckOutcome::pass_with_warning(reasons.join("; "))
    }
}

fn check_description(markup: &PageMarkup) -> CheckOutcome {
    let Some(description) = &markup.description else {
        return CheckOutcome::fail("Missing meta description".to_string())
            .with_suggestion("Add a <meta name=\"description\"> of 120-160 characters");
    };

    let length = description.chars().count();
    if length < DESCRIPTION_MIN {
        return CheckOutcome::fail(format!(
            "Meta description too short ({} characters, minimum {})",
            length, DESCRIPTION_MIN
        ))
        .with_suggestion("Expand the meta description to summarise the page's offer");
    }

    if length > DESCRIPTION_MAX {
        return CheckOutcome::pass_with_warning(format!(
            "Meta description is {} characters; search results truncate after {}",
            length, DESCRIPTION_MAX
        ));
    }

    CheckOutcome::pass()
}

fn check_heading(markup: &PageMarkup) -> CheckOutcome {
    let Some(h1) = &markup.h1 else {
        return CheckOutcome::fail("Missing <h1> heading".to_string())
            .with_suggestion("Add one descriptive <h1> per page");
    };

    let length = h1.chars().count();
    if length < H1_MIN {
        return CheckOutcome::fail(format!(
            "H1 too short ({} characters, minimum {})",
            length, H1_MIN
        ));
    }

    CheckOutcome::pass()
}

fn check_keyword_relevance(page: &PageContext<'_>) -> CheckOutcome {
    let in_url = page
        .keywords
        .iter()
        .any(|k| urls::url_mentions_keyword(page.url, k));
    if in_url || mentions_any_keyword(&page.markup.text, page.keywords) {
        return CheckOutcome::pass();
    }

    CheckOutcome::fail("No target keyword found in URL or page content".to_string())
}

fn check_structured_data(markup: &PageMarkup) -> CheckOutcome {
    if markup.has_structured_data() {
        return CheckOutcome::pass();
    }

    CheckOutcome::fail("Missing structured data (no \"@type\" or \"@context\")".to_string())
        .with_suggestion("Embed a JSON-LD block describing the page")
}

fn check_open_graph(markup: &PageMarkup) -> CheckOutcome {
    let missing = markup.missing_open_graph();
    if missing.is_empty() {
        return CheckOutcome::pass();
    }

    CheckOutcome::fail(format!("Incomplete OpenGraph tags (missing {})", missing.join(", ")))
}

fn check_internal_links(markup: &PageMarkup) -> CheckOutcome {
    let links = markup.href_count();
    if links >= MIN_INTERNAL_LINKS {
        return CheckOutcome::pass();
    }

    CheckOutcome::fail(format!(
        "Add more internal links ({} found, at least {} recommended)",
        links, MIN_INTERNAL_LINKS
    ))
}

fn check_content_length(markup: &PageMarkup) -> CheckOutcome {
    let words = markup.word_count();
    if words >= MIN_WORDS {
        return CheckOutcome::pass();
    }

    CheckOutcome::fail(format!(
        "Thin content ({} words, minimum {})",
        words, MIN_WORDS
    ))
    .with_suggestion("Add substantive copy: process, eligibility, FAQs")
}

fn check_url_shape(url: &str) -> CheckOutcome {
    match urls::shape_problem(url) {
        None => CheckOutcome::pass(),
        Some(problem) => CheckOutcome::fail(problem),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keywords() -> Vec<String> {
        vec!["capital introduction".to_string(), "hedge fund".to_string()]
    }

    fn run(check: Check, html: &str, url: &str) -> CheckOutcome {
        let markup = PageMarkup::parse(html);
        let keywords = keywords();
        let page = PageContext {
            markup: &markup,
            url,
            keywords: &keywords,
        };
        check.evaluate(&page)
    }

    const URL: &str = "https://example.com/about";

    #[test]
    fn test_weights_sum_to_one_hundred() {
        let total: u32 = Check::ALL.iter().map(|c| c.weight()).sum();
        assert_eq!(total, 100);
    }

    #[test]
    fn test_title_missing() {
        let outcome = run(Check::Title, "<html><body></body></html>", URL);
        assert!(!outcome.valid);
        assert!(outcome.error.unwrap().contains("title"));
        assert!(outcome.suggestion.is_some());
    }

    #[test]
    fn test_title_too_short() {
        let outcome = run(Check::Title, "<title>Hedge fund</title>", URL);
        assert!(!outcome.valid);
        assert!(outcome.error.unwrap().contains("too short"));
    }

    #[test]
    fn test_title_too_long_is_only_a_warning() {
        let title = format!("Capital introduction {}", "x".repeat(50));
        let outcome = run(Check::Title, &format!("<title>{}</title>", title), URL);
        assert!(outcome.valid);
        assert!(outcome.warning.unwrap().contains("truncate"));
    }

    #[test]
    fn test_long_title_without_keyword_reports_both() {
        let title = "Welcome to our wonderful company website, serving clients since 1999";
        let outcome = run(Check::Title, &format!("<title>{}</title>", title), URL);
        assert!(outcome.valid);
        let warning = outcome.warning.unwrap();
        assert!(warning.contains("truncate"));
        assert!(warning.contains("target keyword"));
    }

    #[test]
    fn test_title_without_keyword_warns() {
        let outcome = run(
            Check::Title,
            "<title>Welcome to our wonderful company website</title>",
            URL,
        );
        assert!(outcome.valid);
        assert!(outcome.warning.unwrap().contains("keyword"));
    }

    #[test]
    fn test_title_keyword_is_case_insensitive() {
        let outcome = run(
            Check::Title,
            "<title>CAPITAL INTRODUCTION for Emerging Managers</title>",
            URL,
        );
        assert_eq!(outcome, CheckOutcome::pass());
    }

    #[test]
    fn test_description_bounds() {
        let short = run(
            Check::Description,
            r#"<meta name="description" content="Too short.">"#,
            URL,
        );
        assert!(!short.valid);

        let long = run(
            Check::Description,
            &format!(r#"<meta name="description" content="{}">"#, "d".repeat(161)),
            URL,
        );
        assert!(long.valid);
        assert!(long.warning.is_some());

        let exact = run(
            Check::Description,
            &format!(r#"<meta name="description" content="{}">"#, "d".repeat(120)),
            URL,
        );
        assert_eq!(exact, CheckOutcome::pass());
    }

    #[test]
    fn test_heading_too_short() {
        let outcome = run(Check::Heading, "<body><h1>About us</h1></body>", URL);
        assert!(!outcome.valid);
        assert!(outcome.error.unwrap().contains("H1"));
    }

    #[test]
    fn test_keyword_found_in_url_slug() {
        let outcome = run(
            Check::KeywordRelevance,
            "<body><p>Nothing relevant here</p></body>",
            "https://example.com/services/capital-introduction",
        );
        assert!(outcome.valid);
    }

    #[test]
    fn test_keyword_found_in_text() {
        let outcome = run(
            Check::KeywordRelevance,
            "<body><p>We serve Hedge   Fund managers</p></body>",
            URL,
        );
        assert!(outcome.valid);
    }

    #[test]
    fn test_keyword_missing_everywhere() {
        let outcome = run(
            Check::KeywordRelevance,
            "<body><p>Nothing relevant here</p></body>",
            URL,
        );
        assert!(!outcome.valid);
    }

    #[test]
    fn test_empty_keyword_list_is_satisfied() {
        assert!(mentions_any_keyword("anything", &[]));
        assert!(mentions_any_keyword("anything", &["  ".to_string()]));
    }

    #[test]
    fn test_structured_data() {
        let outcome = run(
            Check::StructuredData,
            r#"<script type="application/ld+json">{"@context": "https://schema.org"}</script>"#,
            URL,
        );
        assert!(outcome.valid);
        assert!(!run(Check::StructuredData, "<p>plain</p>", URL).valid);
    }

    #[test]
    fn test_open_graph_lists_missing_tags() {
        let outcome = run(
            Check::OpenGraph,
            r#"<meta property="og:title" content="t">"#,
            URL,
        );
        let error = outcome.error.unwrap();
        assert!(error.contains("og:description"));
        assert!(error.contains("og:image"));
        assert!(!error.contains("og:title"));
    }

    #[test]
    fn test_internal_links_threshold() {
        let two = r#"<a href="/a">a</a><a href="/b">b</a>"#;
        assert!(!run(Check::InternalLinks, two, URL).valid);
        let three = r#"<a href="/a">a</a><a href="/b">b</a><a href="/c">c</a>"#;
        assert!(run(Check::InternalLinks, three, URL).valid);
    }

    #[test]
    fn test_content_length_threshold() {
        let thin = format!("<body><p>{}</p></body>", "word ".repeat(299));
        assert!(!run(Check::ContentLength, &thin, URL).valid);
        let enough = format!("<body><p>{}</p></body>", "word ".repeat(300));
        assert!(run(Check::ContentLength, &enough, URL).valid);
    }

    #[test]
    fn test_url_shape() {
        assert!(run(Check::UrlShape, "", "https://example.com/fund-marketing").valid);
        assert!(!run(Check::UrlShape, "", "https://example.com/fund_marketing").valid);
    }

    #[test]
    fn test_routing() {
        assert_eq!(Check::Title.routing(), Routing::Issue);
        assert_eq!(Check::ContentLength.routing(), Routing::Issue);
        assert_eq!(Check::OpenGraph.routing(), Routing::Warning);
        assert_eq!(Check::KeywordRelevance.routing(), Routing::Warning);
        assert_eq!(Check::InternalLinks.routing(), Routing::Recommendation);
        assert_eq!(Check::UrlShape.routing(), Routing::Recommendation);
    }
}
