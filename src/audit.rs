use crate::config::AuditConfig;
use crate::error::{AuditError, Result};
use crate::results::{LaunchReadinessReport, ValidationResult};
use crate::sources::MarkupSource;
use crate::urls;
use crate::validator::PageValidator;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use url::Url;

/// Builder for a launch-readiness audit over a fixed page list
pub struct Audit {
    config: AuditConfig,
}

impl Audit {
    /// Create an audit of the default page list for the given site root
    pub fn new(base_url: &str) -> Self {
        Self {
            config: AuditConfig::new(base_url),
        }
    }

    /// Create an audit from a full configuration
    pub fn with_config(config: AuditConfig) -> Self {
        Self { config }
    }

    /// Load configuration from a file
    pub fn from_config_file(path: impl AsRef<std::path::Path>) -> Result<Self> {
        Ok(Self::with_config(AuditConfig::from_file(path)?))
    }

    /// Replace the page list
    pub fn with_pages(mut self, pages: Vec<String>) -> Self {
        self.config.pages = pages;
        self
    }

    /// Replace the target keywords
    pub fn with_keywords(mut self, keywords: Vec<String>) -> Self {
        self.config.keywords = keywords;
        self
    }

    /// Set the maximum number of pages fetched at once
    pub fn with_max_concurrency(mut self, max_concurrency: usize) -> Self {
        self.config.max_concurrency = max_concurrency;
        self
    }

    /// Set the per-page acquisition timeout
    pub fn with_page_timeout(mut self, timeout_seconds: u64) -> Self {
        self.config.page_timeout_secs = timeout_seconds;
        self
    }

    pub fn config(&self) -> &AuditConfig {
        &self.config
    }

    /// Absolute URLs of the configured pages, in configured order
    pub fn page_urls(&self) -> Result<Vec<Url>> {
        let base = Url::parse(&self.config.base_url).map_err(|source| AuditError::BaseUrl {
            url: self.config.base_url.clone(),
            source,
        })?;

        self.config
            .pages
            .iter()
            .map(|page| {
                urls::resolve_page(&base, page).map_err(|source| AuditError::PagePath {
                    path: page.clone(),
                    source,
                })
            })
            .collect()
    }

    /// Validate every configured page and aggregate the results.
    ///
    /// Pages are fetched concurrently, at most `max_concurrency` at a time,
    /// each attempted once. The report lists pages in configured order
    /// regardless of completion order.
    pub async fn run<S>(&self, source: Arc<S>) -> Result<LaunchReadinessReport>
    where
        S: MarkupSource + 'static,
    {
        self.config.check()?;
        let page_urls = self.page_urls()?;
        let total = page_urls.len();
        let timeout = Duration::from_secs(self.config.page_timeout_secs);

        ::log::info!(
            "Validating {} pages of {} (concurrency {})",
            total,
            self.config.base_url,
            self.config.max_concurrency
        );
        let start_time = std::time::Instant::now();

        let validator = Arc::new(PageValidator::from_config(&self.config));
        let semaphore = Arc::new(Semaphore::new(self.config.max_concurrency));
        let mut tasks = JoinSet::new();

        for (index, url) in page_urls.iter().cloned().enumerate() {
            let validator = Arc::clone(&validator);
            let semaphore = Arc::clone(&semaphore);
            let source = Arc::clone(&source);

            tasks.spawn(async move {
                let result = match semaphore.acquire_owned().await {
                    Ok(_permit) => validator.validate_page(source.as_ref(), &url, timeout).await,
                    Err(_) => ValidationResult::acquisition_failed(
                        url.as_str(),
                        "worker pool closed before the page was fetched",
                    ),
                };
                (index, result)
            });
        }

        let mut slots: Vec<Option<ValidationResult>> = vec![None; total];
        let mut completed = 0;
        while let Some(joined) = tasks.join_next().await {
            match joined {
                Ok((index, result)) => {
                    completed += 1;
                    ::log::info!(
                        "[{}/{}] {} -> {}{}",
                        completed,
                        total,
                        result.page_url,
                        result.score,
                        if result.passed { " (passed)" } else { "" }
                    );
                    slots[index] = Some(result);
                }
                Err(e) => ::log::error!("Validation task failed: {}", e),
            }
        }

        let pages: Vec<ValidationResult> = slots
            .into_iter()
            .zip(page_urls.iter())
            .map(|(slot, url)| {
                slot.unwrap_or_else(|| {
                    ValidationResult::acquisition_failed(url.as_str(), "validation task aborted")
                })
            })
            .collect();

        let report = LaunchReadinessReport::from_pages(pages);
        ::log::info!(
            "Audit complete in {:.2} seconds: overall score {}, {}/{} pages passed, launch ready: {}",
            start_time.elapsed().as_secs_f64(),
            report.overall_score,
            report.passed_pages,
            report.total_pages,
            report.launch_ready
        );

        Ok(report)
    }
}
