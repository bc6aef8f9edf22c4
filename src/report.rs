//! Rendering of launch-readiness reports.
//!
//! - Text: console summary followed by per-page details
//! - JSON: the report object as serialized by serde, camelCase fields

use crate::results::{LaunchReadinessReport, ValidationResult, required_passes};
use std::fmt::Write;

/// Output format for reports
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("Unknown output format: {}", other)),
        }
    }
}

/// Render a report in the requested format
pub fn render(
    report: &LaunchReadinessReport,
    format: OutputFormat,
) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Text => Ok(render_text(report)),
        OutputFormat::Json => serde_json::to_string_pretty(report),
    }
}

/// Human-readable console report
pub fn render_text(report: &LaunchReadinessReport) -> String {
    let mut out = String::new();

    out.push_str("=== SEO Launch Readiness Report ===\n\n");
    let _ = writeln!(out, "Overall score: {}/100", report.overall_score);
    let _ = writeln!(
        out,
        "Pages passed:  {}/{} (need {})",
        report.passed_pages,
        report.total_pages,
        required_passes(report.total_pages)
    );
    let _ = writeln!(
        out,
        "Launch ready:  {}\n",
        if report.launch_ready { "YES" } else { "NO" }
    );

    if !report.critical_issues.is_empty() {
        let _ = writeln!(out, "Critical issues ({}):", report.critical_issues.len());
        for issue in &report.critical_issues {
            let _ = writeln!(out, "  - {}", issue);
        }
        out.push('\n');
    }

    out.push_str("Pages:\n");
    for page in &report.pages {
        render_page(&mut out, page);
    }

    out.push_str("\nRecommendations:\n");
    for recommendation in &report.recommendations {
        let _ = writeln!(out, "  * {}", recommendation);
    }

    out
}

fn render_page(out: &mut String, page: &ValidationResult) {
    let status = if page.passed { "PASS" } else { "FAIL" };
    let _ = writeln!(out, "  [{}] {:>3}  {}", status, page.score, page.page_url);

    for warning in &page.warnings {
        let _ = writeln!(out, "        warning: {}", warning);
    }
    for recommendation in &page.recommendations {
        let _ = writeln!(out, "        suggest: {}", recommendation);
    }
}
