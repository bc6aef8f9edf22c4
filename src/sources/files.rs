use crate::error::AcquisitionError;
use crate::sources::MarkupSource;
use std::path::{Path, PathBuf};
use url::Url;

/// Reads pre-rendered pages from a static export directory
///
/// A page path `/services/fund-marketing` is looked up as
/// `services/fund-marketing.html`, then `services/fund-marketing/index.html`,
/// then `services/fund-marketing` as-is. The site root maps to `index.html`.
#[derive(Debug, Clone)]
pub struct ExportDirSource {
    root: PathBuf,
}

impl ExportDirSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Files that may hold the page, in lookup order
    pub fn candidates(&self, url: &Url) -> Vec<PathBuf> {
        let path = url.path().trim_matches('/');
        if path.is_empty() {
            return vec![self.root.join("index.html")];
        }

        let relative = PathBuf::from(path);
        vec![
            self.root.join(format!("{}.html", path)),
            self.root.join(&relative).join("index.html"),
            self.root.join(relative),
        ]
    }
}

impl MarkupSource for ExportDirSource {
    async fn fetch_markup(&self, url: &Url) -> Result<String, AcquisitionError> {
        for candidate in self.candidates(url) {
            match tokio::fs::read_to_string(&candidate).await {
                Ok(markup) => {
                    ::log::debug!("Read {} from {}", url, candidate.display());
                    return Ok(markup);
                }
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => continue,
                // a directory at the candidate path means try the next form
                Err(_)
                    if tokio::fs::metadata(&candidate)
                        .await
                        .is_ok_and(|m| m.is_dir()) =>
                {
                    continue;
                }
                Err(e) => {
                    return Err(AcquisitionError::Io {
                        path: candidate.display().to_string(),
                        source: e,
                    });
                }
            }
        }

        Err(AcquisitionError::MissingExport {
            url: url.to_string(),
            looked_in: self.root.display().to_string(),
        })
    }
}
