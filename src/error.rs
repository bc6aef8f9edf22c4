use thiserror::Error;

/// Reasons a page's markup could not be obtained.
///
/// An acquisition error never aborts a batch; the validator turns it into a
/// zero-score result for that page only.
#[derive(Error, Debug)]
pub enum AcquisitionError {
    #[error("could not connect to WebDriver at {url}: {reason}")]
    Connect { url: String, reason: String },

    #[error("navigation to {url} failed: {reason}")]
    Navigation { url: String, reason: String },

    #[error("could not read page source of {url}: {reason}")]
    Source { url: String, reason: String },

    #[error("no exported file for {url} (looked in {looked_in})")]
    MissingExport { url: String, looked_in: String },

    #[error("IO error reading {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("timed out after {after:?} fetching {url}")]
    Timeout {
        url: String,
        after: std::time::Duration,
    },
}

/// Errors that stop an audit before any page is validated.
#[derive(Error, Debug)]
pub enum AuditError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid base URL {url}: {source}")]
    BaseUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("invalid page path {path}: {source}")]
    PagePath {
        path: String,
        #[source]
        source: url::ParseError,
    },

    #[error("configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, AuditError>;
