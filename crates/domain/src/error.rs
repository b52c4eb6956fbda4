//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`DashboardError`] via `#[from]`.

use std::path::PathBuf;

/// Top-level error for everything the dashboard core can fail on.
#[derive(Debug, thiserror::Error)]
pub enum DashboardError {
    /// A value did not satisfy a domain invariant.
    #[error("validation error")]
    Validation(#[from] ValidationError),

    /// A category directory or a looked-up item does not exist.
    #[error("not found")]
    NotFound(#[from] NotFoundError),

    /// A category directory exists but cannot be read.
    #[error("permission denied")]
    PermissionDenied(#[from] PermissionDeniedError),

    /// Any other failure reported by an asset source.
    #[error("asset source error")]
    Source(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Domain invariant violations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// The extension filter was empty.
    #[error("extension must not be empty")]
    EmptyExtension,
    /// The extension filter did not start with a dot.
    #[error("extension {0:?} must start with '.'")]
    MissingDot(String),
    /// The category slug is not one of the known categories.
    #[error("unknown category {0:?}")]
    UnknownCategory(String),
}

/// Something that was looked up does not exist.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind} not found: {id}")]
pub struct NotFoundError {
    /// What kind of thing was looked up (e.g. `"Asset directory"`).
    pub kind: &'static str,
    /// Identifier or path that was looked up.
    pub id: String,
}

/// A directory could not be read because access was refused.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("cannot read {}", .path.display())]
pub struct PermissionDeniedError {
    /// Directory that could not be read.
    pub path: PathBuf,
}
