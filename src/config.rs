use crate::error::{AuditError, Result};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Configuration for a launch-readiness audit
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditConfig {
    /// Site root that page paths are resolved against
    pub base_url: String,

    /// Ordered list of page paths to validate
    #[serde(default = "default_pages")]
    pub pages: Vec<String>,

    /// Target keywords used for title and relevance checks
    #[serde(default = "default_keywords")]
    pub keywords: Vec<String>,

    /// Maximum number of pages fetched at once
    #[serde(default = "default_max_concurrency")]
    pub max_concurrency: usize,

    /// Per-page acquisition timeout in seconds
    #[serde(default = "default_page_timeout_secs")]
    pub page_timeout_secs: u64,

    /// URL for the WebDriver instance
    #[serde(default = "default_webdriver_url")]
    pub webdriver_url: String,
}

/// Critical pages of the firm's marketing site, in report order
pub fn default_pages() -> Vec<String> {
    [
        "/",
        "/services",
        "/services/capital-introduction",
        "/services/investor-relations",
        "/services/fund-marketing",
        "/pricing",
        "/about",
        "/testimonials",
        "/faq",
        "/contact",
        "/privacy-policy",
        "/terms-of-service",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

/// Marketing keywords the site targets
pub fn default_keywords() -> Vec<String> {
    [
        "capital introduction",
        "investor introductions",
        "fund marketing",
        "capital raising",
        "investor relations",
        "hedge fund",
        "private equity",
        "family office",
        "institutional investors",
        "allocators",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

/// Default value for max_concurrency
fn default_max_concurrency() -> usize {
    4
}

/// Default value for page_timeout_secs
fn default_page_timeout_secs() -> u64 {
    30
}

/// Default value for webdriver_url
fn default_webdriver_url() -> String {
    "http://localhost:4444".to_string()
}

impl AuditConfig {
    /// Create a new configuration with default values
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.to_string(),
            pages: default_pages(),
            keywords: default_keywords(),
            max_concurrency: default_max_concurrency(),
            page_timeout_secs: default_page_timeout_secs(),
            webdriver_url: default_webdriver_url(),
        }
    }

    /// Load configuration from a file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut file = File::open(path)?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)?;

        Self::from_json(&contents)
    }

    /// Load configuration from a JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.check()?;
        Ok(config)
    }

    /// Reject configurations that cannot produce a meaningful report
    pub fn check(&self) -> Result<()> {
        if self.pages.is_empty() {
            return Err(AuditError::Config("page list is empty".to_string()));
        }
        if self.max_concurrency == 0 {
            return Err(AuditError::Config(
                "max_concurrency must be at least 1".to_string(),
            ));
        }
        if self.page_timeout_secs == 0 {
            return Err(AuditError::Config(
                "page_timeout_secs must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
