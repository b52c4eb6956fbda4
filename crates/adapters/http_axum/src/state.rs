//! Shared application state for axum handlers.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use casualtydash_domain::catalog::AssetCatalog;
use casualtydash_domain::layout::Page;

/// Application state shared across all axum handlers.
///
/// Everything is computed before the server starts and never mutated, so
/// cloning only bumps the `Arc` counters.
#[derive(Clone)]
pub struct AppState {
    /// Files discovered for each category.
    pub catalog: Arc<AssetCatalog>,
    /// Page tree derived from the catalog.
    pub page: Arc<Page>,
    assets_root: Arc<PathBuf>,
}

impl AppState {
    /// Create the state from a freshly built catalog and the directory the
    /// asset files are served from.
    pub fn new(catalog: AssetCatalog, assets_root: impl Into<PathBuf>) -> Self {
        let page = Page::from_catalog(&catalog);
        Self {
            catalog: Arc::new(catalog),
            page: Arc::new(page),
            assets_root: Arc::new(assets_root.into()),
        }
    }

    /// Directory served under `/assets`.
    #[must_use]
    pub fn assets_root(&self) -> &Path {
        &self.assets_root
    }
}
