use crate::checks::{Check, PageContext, Routing};
use crate::config::AuditConfig;
use crate::error::AcquisitionError;
use crate::markup::PageMarkup;
use crate::results::{self, PASSING_SCORE, ValidationResult};
use crate::sources::MarkupSource;
use std::time::Duration;
use url::Url;

#[cfg(test)]
mod tests;

/// Scores pages against the fixed check battery for a set of target keywords
#[derive(Debug, Clone)]
pub struct PageValidator {
    keywords: Vec<String>,
}

impl PageValidator {
    pub fn new(keywords: Vec<String>) -> Self {
        Self { keywords }
    }

    pub fn from_config(config: &AuditConfig) -> Self {
        Self::new(config.keywords.clone())
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    /// Score already-acquired markup. Pure apart from the timestamp.
    pub fn validate_markup(&self, page_url: &str, markup: &str) -> ValidationResult {
        let parsed = PageMarkup::parse(markup);
        let page = PageContext {
            markup: &parsed,
            url: page_url,
            keywords: &self.keywords,
        };

        let mut score: u32 = 100;
        let mut issues = Vec::new();
        let mut warnings = Vec::new();
        let mut recommendations = Vec::new();
        let mut failed_checks = Vec::new();

        for check in Check::ALL {
            let outcome = check.evaluate(&page);

            if outcome.valid {
                if let Some(warning) = outcome.warning {
                    warnings.push(warning);
                }
                continue;
            }

            score = score.saturating_sub(check.weight());
            failed_checks.push(check);

            let message = outcome
                .error
                .unwrap_or_else(|| format!("{} check failed", check.label()));
            match check.routing() {
                Routing::Issue => issues.push(message),
                Routing::Warning => warnings.push(message),
                Routing::Recommendation => recommendations.push(message),
            }
            if let Some(suggestion) = outcome.suggestion {
                recommendations.push(suggestion);
            }
        }

        ::log::debug!(
            "{} scored {} ({} failed checks)",
            page_url,
            score,
            failed_checks.len()
        );

        ValidationResult {
            passed: score >= PASSING_SCORE,
            score,
            issues,
            warnings,
            recommendations,
            page_url: page_url.to_string(),
            timestamp: results::now_millis(),
            failed_checks,
            unavailable: false,
        }
    }

    /// Acquire a page's markup and score it.
    ///
    /// Never fails: an acquisition error or timeout yields a zero-score
    /// result with a single issue describing the failure.
    pub async fn validate_page<S: MarkupSource>(
        &self,
        source: &S,
        url: &Url,
        timeout: Duration,
    ) -> ValidationResult {
        let fetched = match tokio::time::timeout(timeout, source.fetch_markup(url)).await {
            Ok(result) => result,
            Err(_) => Err(AcquisitionError::Timeout {
                url: url.to_string(),
                after: timeout,
            }),
        };

        match fetched {
            Ok(markup) => self.validate_markup(url.as_str(), &markup),
            Err(e) => {
                ::log::warn!("Could not acquire {}: {}", url, e);
                ValidationResult::acquisition_failed(url.as_str(), &e.to_string())
            }
        }
    }
}
