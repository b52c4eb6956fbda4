//! Filesystem-specific error type wrapping `std::io` errors.

use std::io;
use std::path::{Path, PathBuf};

use casualtydash_domain::error::{DashboardError, NotFoundError, PermissionDeniedError};

/// Errors originating from listing a directory on disk.
#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    /// The directory does not exist.
    #[error("asset directory not found: {}", .path.display())]
    NotFound { path: PathBuf },

    /// The directory exists but cannot be read.
    #[error("permission denied reading {}", .path.display())]
    PermissionDenied { path: PathBuf },

    /// Any other I/O failure, including the path not being a directory.
    #[error("failed to read {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ScanError {
    /// Classify an I/O error raised while reading `path`.
    pub fn from_io(path: &Path, source: io::Error) -> Self {
        let path = path.to_path_buf();
        match source.kind() {
            io::ErrorKind::NotFound => Self::NotFound { path },
            io::ErrorKind::PermissionDenied => Self::PermissionDenied { path },
            _ => Self::Io { path, source },
        }
    }
}

impl From<ScanError> for DashboardError {
    fn from(err: ScanError) -> Self {
        match err {
            ScanError::NotFound { path } => NotFoundError {
                kind: "Asset directory",
                id: path.display().to_string(),
            }
            .into(),
            ScanError::PermissionDenied { path } => PermissionDeniedError { path }.into(),
            err @ ScanError::Io { .. } => Self::Source(Box::new(err)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_classify_not_found() {
        let err = ScanError::from_io(
            Path::new("assets/missing"),
            io::Error::from(io::ErrorKind::NotFound),
        );
        assert!(matches!(err, ScanError::NotFound { .. }));
        assert!(matches!(
            DashboardError::from(err),
            DashboardError::NotFound(NotFoundError { kind: "Asset directory", .. })
        ));
    }

    #[test]
    fn should_classify_permission_denied() {
        let err = ScanError::from_io(
            Path::new("assets/locked"),
            io::Error::from(io::ErrorKind::PermissionDenied),
        );
        match DashboardError::from(err) {
            DashboardError::PermissionDenied(inner) => {
                assert_eq!(inner.path, PathBuf::from("assets/locked"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn should_wrap_other_io_errors_as_source() {
        let err = ScanError::from_io(
            Path::new("assets/file.png"),
            io::Error::other("not a directory"),
        );
        assert!(matches!(
            DashboardError::from(err),
            DashboardError::Source(_)
        ));
    }
}
