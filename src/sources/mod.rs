pub mod files;
pub mod webdriver;

use crate::error::AcquisitionError;
use std::collections::HashMap;
use std::future::Future;
use url::Url;

pub use files::ExportDirSource;
pub use webdriver::WebDriverSource;

/// Supplies rendered markup for a page
pub trait MarkupSource: Send + Sync {
    /// Fetch the markup of the page at `url`
    fn fetch_markup(
        &self,
        url: &Url,
    ) -> impl Future<Output = Result<String, AcquisitionError>> + Send;
}

/// Markup held in memory, keyed by absolute URL
///
/// Useful for previews of unpublished pages. URLs without an entry fail
/// as missing exports.
#[derive(Debug, Clone, Default)]
pub struct InMemorySource {
    pages: HashMap<String, String>,
}

impl InMemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register markup for a URL
    pub fn with_page(mut self, url: &str, markup: &str) -> Self {
        self.pages.insert(url.to_string(), markup.to_string());
        self
    }
}

impl MarkupSource for InMemorySource {
    async fn fetch_markup(&self, url: &Url) -> Result<String, AcquisitionError> {
        self.pages
            .get(url.as_str())
            .cloned()
            .ok_or_else(|| AcquisitionError::MissingExport {
                url: url.to_string(),
                looked_in: "in-memory pages".to_string(),
            })
    }
}
