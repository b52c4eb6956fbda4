//! Asset source port — lists the files of one category directory.

use casualtydash_domain::error::DashboardError;
use casualtydash_domain::extension::Extension;

/// Read-only access to the directories under the assets root.
///
/// Listing is synchronous: it runs once per category before the server
/// starts and never again.
pub trait AssetSource {
    /// List the names of entries directly inside `directory` (relative to
    /// the assets root) whose name ends with `extension`.
    ///
    /// Subdirectories are excluded. Names carry no path prefix. Order is
    /// whatever the underlying listing yields.
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError::NotFound`] when the directory is missing,
    /// [`DashboardError::PermissionDenied`] when it cannot be read, and
    /// [`DashboardError::Source`] for any other failure.
    fn list(&self, directory: &str, extension: &Extension) -> Result<Vec<String>, DashboardError>;
}

impl<T: AssetSource + ?Sized> AssetSource for &T {
    fn list(&self, directory: &str, extension: &Extension) -> Result<Vec<String>, DashboardError> {
        (**self).list(directory, extension)
    }
}
