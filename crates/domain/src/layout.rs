//! Declarative page layout built from an [`AssetCatalog`].
//!
//! The tree is plain data: a [`Page`] holds [`Row`]s, each row holds one
//! column of [`Embed`]s. Rendering it to HTML is the HTTP adapter's job.

use crate::catalog::AssetCatalog;
use crate::category::{Category, EmbedKind};
use crate::time::Timestamp;

/// Page heading.
pub const TITLE: &str = "2022 - 2025 Ukraine - Russo Mass Casualty Events Dashboard";

/// Paragraph shown under the heading.
pub const INTRO: &str = "This dashboard provides a visual representation of mass casualty \
events in the Ukraine - Russo war based on military and civilian casualties, along with the \
distribution of fatalities 2022 - 2025.";

/// Height of every embedded frame.
pub const FRAME_HEIGHT: &str = "600px";

/// Order in which category rows appear on the page, with their column
/// width (out of 12) and whether the block gets a white border.
const ROWS: [(Category, u8, bool); 6] = [
    (Category::HighFatalityMaps, 10, false),
    (Category::MilitaryFatalitiesHeatmap, 10, false),
    (Category::OverallMap, 10, false),
    (Category::AttackTypeCharts, 10, false),
    (Category::FatalitiesByYear, 8, true),
    (Category::TopActors, 8, true),
];

/// One embedded asset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Embed {
    /// Static chart rendered with `<img>`.
    Image { src: String },
    /// HTML fragment rendered inline with `<iframe>`.
    Frame { src: String, height: &'static str },
}

impl Embed {
    fn new(category: Category, file_name: &str) -> Self {
        let src = category.asset_url(file_name);
        match category.embed() {
            EmbedKind::Image => Self::Image { src },
            EmbedKind::Frame => Self::Frame {
                src,
                height: FRAME_HEIGHT,
            },
        }
    }

    #[must_use]
    pub fn src(&self) -> &str {
        match self {
            Self::Image { src } | Self::Frame { src, .. } => src,
        }
    }

    #[must_use]
    pub fn is_frame(&self) -> bool {
        matches!(self, Self::Frame { .. })
    }

    /// Frame height, empty for images.
    #[must_use]
    pub fn height(&self) -> &'static str {
        match self {
            Self::Image { .. } => "",
            Self::Frame { height, .. } => *height,
        }
    }
}

/// A full-width row holding one scrollable column of embeds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub category: Category,
    pub title: &'static str,
    /// Bootstrap column width (1..=12).
    pub width: u8,
    pub bordered: bool,
    pub embeds: Vec<Embed>,
}

/// The whole dashboard page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub title: &'static str,
    pub intro: &'static str,
    pub scanned_at: Timestamp,
    pub rows: Vec<Row>,
}

impl Page {
    /// Build the page tree with one embed per catalogued file.
    #[must_use]
    pub fn from_catalog(catalog: &AssetCatalog) -> Self {
        let rows = ROWS
            .iter()
            .map(|&(category, width, bordered)| Row {
                category,
                title: category.title(),
                width,
                bordered,
                embeds: catalog
                    .files(category)
                    .iter()
                    .map(|file| Embed::new(category, file))
                    .collect(),
            })
            .collect();

        Self {
            title: TITLE,
            intro: INTRO,
            scanned_at: catalog.scanned_at(),
            rows,
        }
    }

    /// Row for `category`.
    #[must_use]
    pub fn row(&self, category: Category) -> Option<&Row> {
        self.rows.iter().find(|row| row.category == category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::now;

    fn catalog() -> AssetCatalog {
        AssetCatalog::builder(now())
            .category(
                Category::HighFatalityMaps,
                vec!["2022.html".to_string(), "2023.html".to_string()],
            )
            .category(
                Category::AttackTypeCharts,
                vec!["drone.png".to_string(), "artillery.png".to_string()],
            )
            .category(Category::FatalitiesByYear, vec![])
            .build()
    }

    #[test]
    fn should_render_one_frame_per_map_file() {
        let page = Page::from_catalog(&catalog());
        let row = page.row(Category::HighFatalityMaps).unwrap();
        assert_eq!(
            row.embeds,
            vec![
                Embed::Frame {
                    src: "/assets/high_fatality_maps_by_year/2022.html".to_string(),
                    height: FRAME_HEIGHT,
                },
                Embed::Frame {
                    src: "/assets/high_fatality_maps_by_year/2023.html".to_string(),
                    height: FRAME_HEIGHT,
                },
            ]
        );
    }

    #[test]
    fn should_render_images_for_chart_files() {
        let page = Page::from_catalog(&catalog());
        let row = page.row(Category::AttackTypeCharts).unwrap();
        let srcs: Vec<_> = row.embeds.iter().map(Embed::src).collect();
        assert_eq!(
            srcs,
            [
                "/assets/attack_type_charts/PNG/drone.png",
                "/assets/attack_type_charts/PNG/artillery.png",
            ]
        );
        assert!(row.embeds.iter().all(|e| !e.is_frame()));
    }

    #[test]
    fn should_keep_row_for_empty_category() {
        let page = Page::from_catalog(&catalog());
        let row = page.row(Category::FatalitiesByYear).unwrap();
        assert!(row.embeds.is_empty());
        assert!(row.bordered);
        assert_eq!(row.width, 8);
    }

    #[test]
    fn should_order_rows_maps_first_then_charts() {
        let page = Page::from_catalog(&catalog());
        let order: Vec<_> = page.rows.iter().map(|row| row.category).collect();
        assert_eq!(
            order,
            [
                Category::HighFatalityMaps,
                Category::MilitaryFatalitiesHeatmap,
                Category::OverallMap,
                Category::AttackTypeCharts,
                Category::FatalitiesByYear,
                Category::TopActors,
            ]
        );
    }

    #[test]
    fn should_carry_scan_time_and_heading() {
        let catalog = catalog();
        let page = Page::from_catalog(&catalog);
        assert_eq!(page.scanned_at, catalog.scanned_at());
        assert_eq!(page.title, TITLE);
    }

    #[test]
    fn should_report_empty_height_for_images() {
        let embed = Embed::new(Category::TopActors, "a.png");
        assert_eq!(embed.height(), "");
        let frame = Embed::new(Category::OverallMap, "a.html");
        assert_eq!(frame.height(), FRAME_HEIGHT);
    }
}
