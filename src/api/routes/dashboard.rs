//! Dashboard Routes
//!
//! - GET / - The dashboard page
//! - GET /api/v1/layout - Initial layout as JSON
//! - GET /api/v1/update?year= - Status text and map figure for a year
//! - GET /api/v1/dataset - Summary of the loaded dataset

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    response::Html,
    Json,
};
use std::sync::Arc;

use crate::api::error::{ApiError, ApiResult};
use crate::api::state::AppState;
use crate::api::UPDATE_PATH;
use crate::dataset::DatasetSummary;
use crate::view::{render_page, Layout, SelectionState, ViewUpdate};

/// GET /
pub async fn index(State(state): State<Arc<AppState>>) -> Html<String> {
    let layout = state.controller.initial_layout();
    Html(render_page(&layout, UPDATE_PATH))
}

/// GET /api/v1/layout
pub async fn get_layout(State(state): State<Arc<AppState>>) -> Json<Layout> {
    Json(state.controller.initial_layout())
}

/// GET /api/v1/update
///
/// Re-filters the dataset for the selected year and rebuilds the figure.
/// `year` defaults to the dropdown default when omitted.
pub async fn update_view(
    State(state): State<Arc<AppState>>,
    selection: Result<Query<SelectionState>, QueryRejection>,
) -> ApiResult<Json<ViewUpdate>> {
    let Query(selection) =
        selection.map_err(|e| ApiError::Validation(format!("Invalid year: {}", e.body_text())))?;

    Ok(Json(state.controller.on_year_selected(selection.year)))
}

/// GET /api/v1/dataset
pub async fn dataset_summary(State(state): State<Arc<AppState>>) -> Json<DatasetSummary> {
    Json(state.dataset().summary())
}
