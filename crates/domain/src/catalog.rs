//! Asset catalog — the file names discovered for each category at startup.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::category::Category;
use crate::extension::Extension;
use crate::time::Timestamp;

/// Category → file-name mapping produced by one scan of the assets root.
///
/// Immutable once built; handlers share it behind an `Arc`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetCatalog {
    scanned_at: Timestamp,
    files: BTreeMap<Category, Vec<String>>,
}

impl AssetCatalog {
    /// Create a builder for constructing an [`AssetCatalog`].
    #[must_use]
    pub fn builder(scanned_at: Timestamp) -> AssetCatalogBuilder {
        AssetCatalogBuilder {
            scanned_at,
            files: BTreeMap::new(),
        }
    }

    /// When the scan happened.
    #[must_use]
    pub fn scanned_at(&self) -> Timestamp {
        self.scanned_at
    }

    /// Files found for `category`, empty if the category was never recorded.
    #[must_use]
    pub fn files(&self, category: Category) -> &[String] {
        self.files
            .get(&category)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Number of files across all categories.
    #[must_use]
    pub fn total(&self) -> usize {
        self.files.values().map(Vec::len).sum()
    }

    /// Serializable view of a single category.
    #[must_use]
    pub fn listing(&self, category: Category) -> CategoryListing<'_> {
        CategoryListing {
            category,
            directory: category.directory(),
            extension: category.extension(),
            files: self.files(category),
        }
    }

    /// Serializable view of the whole catalog, categories in scan order.
    #[must_use]
    pub fn view(&self) -> CatalogView<'_> {
        CatalogView {
            scanned_at: self.scanned_at,
            total: self.total(),
            categories: Category::ALL.iter().map(|c| self.listing(*c)).collect(),
        }
    }
}

/// Step-by-step builder for [`AssetCatalog`].
#[derive(Debug)]
pub struct AssetCatalogBuilder {
    scanned_at: Timestamp,
    files: BTreeMap<Category, Vec<String>>,
}

impl AssetCatalogBuilder {
    /// Record the files found for `category`, replacing any earlier entry.
    #[must_use]
    pub fn category(mut self, category: Category, files: Vec<String>) -> Self {
        self.files.insert(category, files);
        self
    }

    #[must_use]
    pub fn build(self) -> AssetCatalog {
        AssetCatalog {
            scanned_at: self.scanned_at,
            files: self.files,
        }
    }
}

/// JSON shape of one category.
#[derive(Debug, Serialize)]
pub struct CategoryListing<'a> {
    pub category: Category,
    pub directory: &'static str,
    pub extension: Extension,
    pub files: &'a [String],
}

/// JSON shape of the whole catalog.
#[derive(Debug, Serialize)]
pub struct CatalogView<'a> {
    pub scanned_at: Timestamp,
    pub total: usize,
    pub categories: Vec<CategoryListing<'a>>,
}
