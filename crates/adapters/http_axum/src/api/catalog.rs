//! JSON handlers exposing the asset catalog.

use axum::Json;
use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};

use casualtydash_domain::category::Category;

use crate::error::ApiError;
use crate::state::AppState;

/// `GET /api/catalog`
pub async fn list(State(state): State<AppState>) -> Response {
    Json(state.catalog.view()).into_response()
}

/// `GET /api/catalog/{category}`
pub async fn get(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Response, ApiError> {
    let category: Category = slug.parse()?;
    Ok(Json(state.catalog.listing(category)).into_response())
}
