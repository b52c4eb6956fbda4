//! Catalog service — scans every category once and assembles the catalog.

use casualtydash_domain::catalog::AssetCatalog;
use casualtydash_domain::category::Category;
use casualtydash_domain::error::DashboardError;
use casualtydash_domain::time;

use crate::ports::AssetSource;

/// Builds the [`AssetCatalog`] from an [`AssetSource`].
pub struct CatalogService<S> {
    source: S,
    sort: bool,
}

impl<S: AssetSource> CatalogService<S> {
    /// Create a new service reading from `source`. Lists are sorted by
    /// default.
    pub fn new(source: S) -> Self {
        Self { source, sort: true }
    }

    /// Sort each category's file names, or keep the raw listing order.
    #[must_use]
    pub fn with_sorting(mut self, sort: bool) -> Self {
        self.sort = sort;
        self
    }

    /// Scan each category directory once, in [`Category::ALL`] order.
    ///
    /// The first failing category aborts the whole scan; there is no
    /// partial catalog.
    ///
    /// # Errors
    ///
    /// Propagates the first error returned by the source.
    #[tracing::instrument(skip(self), fields(sort = self.sort))]
    pub fn build_catalog(&self) -> Result<AssetCatalog, DashboardError> {
        let mut builder = AssetCatalog::builder(time::now());
        for category in Category::ALL {
            let mut files = self
                .source
                .list(category.directory(), &category.extension())
                .inspect_err(|err| {
                    tracing::error!(%category, directory = category.directory(), error = %err, "asset scan failed");
                })?;
            if self.sort {
                files.sort_unstable();
            }
            tracing::debug!(%category, count = files.len(), "scanned asset directory");
            builder = builder.category(category, files);
        }
        let catalog = builder.build();
        tracing::info!(total = catalog.total(), "asset catalog ready");
        Ok(catalog)
    }
}
