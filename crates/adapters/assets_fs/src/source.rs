//! `std::fs` implementation of [`AssetSource`].

use std::fs;
use std::path::{Path, PathBuf};

use casualtydash_app::ports::AssetSource;
use casualtydash_domain::error::DashboardError;
use casualtydash_domain::extension::Extension;

use crate::error::ScanError;

/// Lists category directories below a fixed assets root.
#[derive(Debug, Clone)]
pub struct FsAssetSource {
    root: PathBuf,
}

impl FsAssetSource {
    /// Create a source rooted at `root`. The directory is not touched until
    /// the first listing.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The assets root.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolve a `/`-separated category directory against the root.
    #[must_use]
    pub fn resolve(&self, directory: &str) -> PathBuf {
        directory
            .split('/')
            .filter(|segment| !segment.is_empty())
            .fold(self.root.clone(), |path, segment| path.join(segment))
    }

    /// List matching file names in `directory`.
    ///
    /// # Errors
    ///
    /// Returns a [`ScanError`] classified from the underlying I/O error.
    pub fn scan(&self, directory: &str, extension: &Extension) -> Result<Vec<String>, ScanError> {
        let path = self.resolve(directory);
        let entries = fs::read_dir(&path).map_err(|err| ScanError::from_io(&path, err))?;

        let mut files = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|err| ScanError::from_io(&path, err))?;
            let name = entry.file_name();
            let Some(name) = name.to_str() else {
                tracing::warn!(directory = %path.display(), name = ?name, "skipping non UTF-8 file name");
                continue;
            };
            if !extension.matches(name) {
                continue;
            }
            // follows symlinks
            match fs::metadata(entry.path()) {
                Ok(meta) if meta.is_dir() => {
                    tracing::trace!(directory = %path.display(), name, "skipping subdirectory");
                    continue;
                }
                Ok(_) => {}
                Err(err) => {
                    tracing::warn!(directory = %path.display(), name, %err, "skipping unreadable entry");
                    continue;
                }
            }
            files.push(name.to_string());
        }
        Ok(files)
    }
}

impl AssetSource for FsAssetSource {
    fn list(&self, directory: &str, extension: &Extension) -> Result<Vec<String>, DashboardError> {
        self.scan(directory, extension).map_err(DashboardError::from)
    }
}
