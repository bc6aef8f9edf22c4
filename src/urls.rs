use regex::Regex;
use std::sync::LazyLock;
use url::Url;

/// Longest page URL that still counts as short
pub const MAX_URL_LENGTH: usize = 100;

/// Underscores and encoded or literal spaces make for poor URL paths
static UNFRIENDLY_PATH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"_|%20| ").expect("URL shape pattern is valid"));

/// Resolve a configured page path (or absolute URL) against the site root
pub fn resolve_page(base_url: &Url, page: &str) -> Result<Url, url::ParseError> {
    let resolved = base_url.join(page)?;
    Ok(normalize_url(&resolved))
}

/// Create a normalized version of the URL (fragments removed)
pub fn normalize_url(url: &Url) -> Url {
    let mut normalized = url.clone();
    normalized.set_fragment(None);
    normalized
}

/// Hyphenated, lower-cased form of a keyword as it would appear in a URL slug
pub fn keyword_slug(keyword: &str) -> String {
    keyword
        .split_whitespace()
        .map(|w| w.to_lowercase())
        .collect::<Vec<_>>()
        .join("-")
}

/// Whether the slug form of the keyword occurs in the URL
pub fn url_mentions_keyword(url: &str, keyword: &str) -> bool {
    let slug = keyword_slug(keyword);
    !slug.is_empty() && url.to_lowercase().contains(&slug)
}

/// Describe what is wrong with the shape of a URL, if anything.
/// Only the path is held to the hyphen rule; query strings and hosts are not.
pub fn shape_problem(url: &str) -> Option<String> {
    let path = match Url::parse(url) {
        Ok(parsed) => parsed.path().to_string(),
        Err(_) => url.to_string(),
    };
    if UNFRIENDLY_PATH.is_match(&path) {
        return Some(format!(
            "URL \"{}\" contains underscores or spaces; use hyphens instead",
            url
        ));
    }

    let length = url.chars().count();
    if length > MAX_URL_LENGTH {
        return Some(format!(
            "URL is {} characters long; keep it under {}",
            length, MAX_URL_LENGTH
        ));
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_relative_path() {
        let base = Url::parse("https://example.com").unwrap();
        let url = resolve_page(&base, "/services/fund-marketing").unwrap();
        assert_eq!(url.as_str(), "https://example.com/services/fund-marketing");
    }

    #[test]
    fn test_resolve_drops_fragment() {
        let base = Url::parse("https://example.com/").unwrap();
        let url = resolve_page(&base, "/faq#pricing").unwrap();
        assert_eq!(url.as_str(), "https://example.com/faq");
    }

    #[test]
    fn test_resolve_absolute_url_wins() {
        let base = Url::parse("https://example.com/").unwrap();
        let url = resolve_page(&base, "https://other.example.org/landing").unwrap();
        assert_eq!(url.as_str(), "https://other.example.org/landing");
    }

    #[test]
    fn test_keyword_slug() {
        assert_eq!(keyword_slug("Capital  Introduction"), "capital-introduction");
        assert_eq!(keyword_slug("hedge fund"), "hedge-fund");
        assert_eq!(keyword_slug("   "), "");
    }

    #[test]
    fn test_url_mentions_keyword() {
        let url = "https://example.com/services/Capital-Introduction";
        assert!(url_mentions_keyword(url, "capital introduction"));
        assert!(!url_mentions_keyword(url, "family office"));
        assert!(!url_mentions_keyword(url, ""));
    }

    #[test]
    fn test_clean_url_has_no_problem() {
        assert_eq!(shape_problem("https://example.com/fund-marketing"), None);
    }

    #[test]
    fn test_underscore_and_spaces_flagged() {
        assert!(shape_problem("https://example.com/fund_marketing").is_some());
        assert!(shape_problem("https://example.com/fund%20marketing").is_some());
        assert!(shape_problem("https://example.com/fund marketing").is_some());
    }

    #[test]
    fn test_query_string_is_not_shape_checked() {
        assert_eq!(
            shape_problem("https://example.com/fund-marketing?utm_source=news%20letter"),
            None
        );
        assert!(shape_problem("https://example.com/fund_marketing?ref=home").is_some());
    }

    #[test]
    fn test_long_url_flagged() {
        let url = format!("https://example.com/{}", "a".repeat(MAX_URL_LENGTH));
        let problem = shape_problem(&url).unwrap();
        assert!(problem.contains("characters long"));
    }

    #[test]
    fn test_exactly_max_length_is_fine() {
        let prefix = "https://example.com/";
        let url = format!("{}{}", prefix, "a".repeat(MAX_URL_LENGTH - prefix.len()));
        assert_eq!(url.len(), MAX_URL_LENGTH);
        assert_eq!(shape_problem(&url), None);
    }
}
