use crate::checks::Check;
use serde::{Deserialize, Serialize};

/// Minimum score for a page to pass, and for the site's mean score to be launchable
pub const PASSING_SCORE: u32 = 85;

/// Outcome of validating one page
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub passed: bool,

    /// 0-100 after deductions
    pub score: u32,

    /// Critical failures
    pub issues: Vec<String>,

    pub warnings: Vec<String>,

    pub recommendations: Vec<String>,

    /// Absolute URL of the page
    pub page_url: String,

    /// Epoch milliseconds when validation finished
    pub timestamp: i64,

    /// Checks that deducted points, in check order
    #[serde(default)]
    pub failed_checks: Vec<Check>,

    /// Set when the markup could not be acquired and no check ran
    #[serde(default)]
    pub unavailable: bool,
}

impl ValidationResult {
    /// Result for a page whose markup could not be acquired
    pub fn acquisition_failed(page_url: &str, reason: &str) -> Self {
        Self {
            passed: false,
            score: 0,
            issues: vec![format!("Page could not be validated: {}", reason)],
            warnings: Vec::new(),
            recommendations: Vec::new(),
            page_url: page_url.to_string(),
            timestamp: now_millis(),
            failed_checks: Vec::new(),
            unavailable: true,
        }
    }
}

/// Launch go/no-go across the configured page set
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LaunchReadinessReport {
    /// Rounded mean of page scores
    pub overall_score: u32,
    pub total_pages: usize,
    pub passed_pages: usize,

    /// Every page's issues as `"pageUrl: issue"`, in page order
    pub critical_issues: Vec<String>,

    /// Page results in configured order
    pub pages: Vec<ValidationResult>,

    /// Fixes for the problems found in this run
    pub recommendations: Vec<String>,

    pub launch_ready: bool,
}

impl LaunchReadinessReport {
    /// Aggregate page results, kept in the order given
    pub fn from_pages(pages: Vec<ValidationResult>) -> Self {
        let total_pages = pages.len();
        let passed_pages = pages.iter().filter(|p| p.passed).count();
        let overall_score = mean_score(&pages);

        let critical_issues = pages
            .iter()
            .flat_map(|page| {
                page.issues
                    .iter()
                    .map(move |issue| format!("{}: {}", page.page_url, issue))
            })
            .collect();

        let recommendations = derive_recommendations(&pages);
        let launch_ready = is_launch_ready(overall_score, passed_pages, total_pages);

        Self {
            overall_score,
            total_pages,
            passed_pages,
            critical_issues,
            pages,
            recommendations,
            launch_ready,
        }
    }
}

/// Arithmetic mean of page scores rounded to the nearest integer (halves round up)
pub fn mean_score(pages: &[ValidationResult]) -> u32 {
    if pages.is_empty() {
        return 0;
    }
    let total: u64 = pages.iter().map(|p| u64::from(p.score)).sum();
    (total as f64 / pages.len() as f64).round() as u32
}

/// Pages that must pass for launch: ceil(0.9 * total)
pub fn required_passes(total_pages: usize) -> usize {
    // integer form; 0.9 has no exact float representation
    (total_pages * 9).div_ceil(10)
}

pub fn is_launch_ready(overall_score: u32, passed_pages: usize, total_pages: usize) -> bool {
    total_pages > 0
        && overall_score >= PASSING_SCORE
        && passed_pages >= required_passes(total_pages)
}

/// One recommendation per failed check kind, in check order, with the number of
/// affected pages. Pages that could not be fetched get their own line.
fn derive_recommendations(pages: &[ValidationResult]) -> Vec<String> {
    let mut recommendations = Vec::new();

    for check in Check::ALL {
        let affected = pages
            .iter()
            .filter(|p| p.failed_checks.contains(&check))
            .count();
        if affected > 0 {
            recommendations.push(format!(
                "{} ({} of {} pages)",
                check.advice(),
                affected,
                pages.len()
            ));
        }
    }

    let unavailable = pages.iter().filter(|p| p.unavailable).count();
    if unavailable > 0 {
        recommendations.push(format!(
            "Make sure every page renders before launch ({} of {} pages could not be fetched)",
            unavailable,
            pages.len()
        ));
    }

    if recommendations.is_empty() {
        recommendations.push("No SEO action required before launch".to_string());
    }

    recommendations
}

pub(crate) fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}
