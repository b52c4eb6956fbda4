//! Category — one of the six fixed asset groupings shown on the dashboard.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::extension::Extension;

/// How the files of a category are embedded in the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmbedKind {
    /// `<img>` pointing at a static chart.
    Image,
    /// `<iframe>` pointing at an interactive HTML fragment.
    Frame,
}

/// A fixed asset grouping bound to a directory and a required extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    AttackTypeCharts,
    FatalitiesByYear,
    HighFatalityMaps,
    MilitaryFatalitiesHeatmap,
    OverallMap,
    TopActors,
}

impl Category {
    /// Every category, in scan order.
    pub const ALL: [Self; 6] = [
        Self::AttackTypeCharts,
        Self::FatalitiesByYear,
        Self::HighFatalityMaps,
        Self::MilitaryFatalitiesHeatmap,
        Self::OverallMap,
        Self::TopActors,
    ];

    /// Stable identifier used in URLs and JSON.
    #[must_use]
    pub fn slug(self) -> &'static str {
        match self {
            Self::AttackTypeCharts => "attack_type_charts",
            Self::FatalitiesByYear => "fatalities_by_year",
            Self::HighFatalityMaps => "high_fatality_maps",
            Self::MilitaryFatalitiesHeatmap => "military_fatalities_heatmap",
            Self::OverallMap => "overall_map",
            Self::TopActors => "top_actors",
        }
    }

    /// Directory relative to the assets root, using `/` separators.
    ///
    /// This is also the path segment used under `/assets/` when the file
    /// is served over HTTP.
    #[must_use]
    pub fn directory(self) -> &'static str {
        match self {
            Self::AttackTypeCharts => "attack_type_charts/PNG",
            Self::FatalitiesByYear => "fatalities_by_year_png",
            Self::HighFatalityMaps => "high_fatality_maps_by_year",
            Self::MilitaryFatalitiesHeatmap => "military_fatalities_heatmap",
            Self::OverallMap => "overall_map_grouped_by_year",
            Self::TopActors => "top_actors_by_fatality",
        }
    }

    /// Suffix a file must end with to belong to this category.
    #[must_use]
    pub fn extension(self) -> Extension {
        match self.embed() {
            EmbedKind::Image => Extension::known(Extension::PNG),
            EmbedKind::Frame => Extension::known(Extension::HTML),
        }
    }

    #[must_use]
    pub fn embed(self) -> EmbedKind {
        match self {
            Self::AttackTypeCharts | Self::FatalitiesByYear | Self::TopActors => EmbedKind::Image,
            Self::HighFatalityMaps | Self::MilitaryFatalitiesHeatmap | Self::OverallMap => {
                EmbedKind::Frame
            }
        }
    }

    /// Human-readable heading.
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::AttackTypeCharts => "Fatalities by attack type",
            Self::FatalitiesByYear => "Fatalities by year",
            Self::HighFatalityMaps => "High fatality events by year",
            Self::MilitaryFatalitiesHeatmap => "Military fatalities heatmap",
            Self::OverallMap => "All events grouped by year",
            Self::TopActors => "Top actors by fatalities",
        }
    }

    /// Public URL of `file_name` inside this category. The file name is
    /// percent-encoded as a single path segment.
    #[must_use]
    pub fn asset_url(self, file_name: &str) -> String {
        format!(
            "/assets/{}/{}",
            self.directory(),
            urlencoding::encode(file_name)
        )
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for Category {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|category| category.slug() == s)
            .ok_or_else(|| ValidationError::UnknownCategory(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn should_list_six_distinct_directories() {
        let dirs: HashSet<_> = Category::ALL.iter().map(|c| c.directory()).collect();
        assert_eq!(dirs.len(), 6);
    }

    #[test]
    fn should_expect_png_for_image_categories() {
        for category in Category::ALL {
            let expected = match category.embed() {
                EmbedKind::Image => ".png",
                EmbedKind::Frame => ".html",
            };
            assert_eq!(category.extension().as_str(), expected, "{category}");
        }
    }

    #[test]
    fn should_nest_attack_type_charts_under_png_folder() {
        assert_eq!(
            Category::AttackTypeCharts.directory(),
            "attack_type_charts/PNG"
        );
        assert_eq!(
            Category::AttackTypeCharts.asset_url("drone.png"),
            "/assets/attack_type_charts/PNG/drone.png"
        );
    }

    #[test]
    fn should_build_asset_url_from_directory() {
        assert_eq!(
            Category::HighFatalityMaps.asset_url("2022.html"),
            "/assets/high_fatality_maps_by_year/2022.html"
        );
    }

    #[test]
    fn should_percent_encode_reserved_characters_in_file_name() {
        assert_eq!(
            Category::TopActors.asset_url("a#1.png"),
            "/assets/top_actors_by_fatality/a%231.png"
        );
        assert_eq!(
            Category::TopActors.asset_url("q?.png"),
            "/assets/top_actors_by_fatality/q%3F.png"
        );
        assert_eq!(
            Category::OverallMap.asset_url("map 2024.html"),
            "/assets/overall_map_grouped_by_year/map%202024.html"
        );
    }

    #[test]
    fn should_parse_every_slug() {
        for category in Category::ALL {
            assert_eq!(category.slug().parse::<Category>().unwrap(), category);
        }
    }

    #[test]
    fn should_reject_unknown_slug() {
        assert_eq!(
            "casualties".parse::<Category>(),
            Err(ValidationError::UnknownCategory("casualties".to_string()))
        );
    }

    #[test]
    fn should_serialize_as_slug() {
        let json = serde_json::to_string(&Category::OverallMap).unwrap();
        assert_eq!(json, "\"overall_map\"");
    }
}
