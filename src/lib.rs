//! SEO launch-readiness checks for a marketing site.
//!
//! A [`PageValidator`] scores one page's markup against a fixed battery of
//! nine weighted checks. An [`Audit`] runs the validator over a configured
//! page list, fetching markup through a [`MarkupSource`], and aggregates the
//! scores into a [`LaunchReadinessReport`].

pub mod audit;
pub mod checks;
pub mod config;
pub mod error;
pub mod markup;
pub mod report;
pub mod results;
pub mod sources;
pub mod urls;
pub mod validator;

// Re-export commonly used types for convenience
pub use audit::Audit;
pub use config::AuditConfig;
pub use results::{LaunchReadinessReport, ValidationResult};
pub use sources::{ExportDirSource, InMemorySource, MarkupSource, WebDriverSource};
pub use validator::PageValidator;
