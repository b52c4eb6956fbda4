//! Dashboard home page — every category row on one page.

use std::sync::Arc;

use askama::Template;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};

use casualtydash_domain::layout::Page;

use crate::state::AppState;

/// Home page template.
#[derive(Template)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    page: Arc<Page>,
}

impl IntoResponse for HomeTemplate {
    fn into_response(self) -> Response {
        match self.render() {
            Ok(html) => Html(html).into_response(),
            Err(err) => {
                tracing::error!(error = %err, "failed to render dashboard");
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
        }
    }
}

/// `GET /` — the dashboard.
pub async fn index(State(state): State<AppState>) -> HomeTemplate {
    HomeTemplate {
        page: Arc::clone(&state.page),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use casualtydash_domain::catalog::AssetCatalog;
    use casualtydash_domain::category::Category;
    use casualtydash_domain::time::now;

    fn render(catalog: &AssetCatalog) -> String {
        HomeTemplate {
            page: Arc::new(Page::from_catalog(catalog)),
        }
        .render()
        .unwrap()
    }

    #[test]
    fn should_render_one_iframe_per_map_file() {
        let catalog = AssetCatalog::builder(now())
            .category(
                Category::HighFatalityMaps,
                vec!["2022.html".to_string(), "2023.html".to_string()],
            )
            .build();

        let html = render(&catalog);

        assert_eq!(html.matches("<iframe").count(), 2);
        assert!(html.contains("2022.html"));
        assert!(html.contains("2023.html"));
        assert!(html.contains("high_fatality_maps_by_year"));
    }

    #[test]
    fn should_render_one_img_per_chart_file() {
        let catalog = AssetCatalog::builder(now())
            .category(
                Category::AttackTypeCharts,
                vec!["drone.png".to_string(), "artillery.png".to_string()],
            )
            .category(Category::TopActors, vec!["actors.png".to_string()])
            .build();

        let html = render(&catalog);

        assert_eq!(html.matches("<img").count(), 3);
        assert_eq!(html.matches("<iframe").count(), 0);
    }

    #[test]
    fn should_render_heading_and_theme() {
        let html = render(&AssetCatalog::builder(now()).build());

        assert!(html.contains("Mass Casualty Events Dashboard"));
        assert!(html.contains("bootstrap"));
    }

    #[test]
    fn should_escape_file_names() {
        let catalog = AssetCatalog::builder(now())
            .category(
                Category::TopActors,
                vec!["<script>.png".to_string()],
            )
            .build();

        let html = render(&catalog);

        assert!(!html.contains("<script>.png"));
    }
}
