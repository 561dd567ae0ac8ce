// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Dashboard page and its update endpoint.

use crate::error::{AppError, Result};
use crate::models::Summary;
use crate::render::{chart_figure_json, dashboard_page, data_table, summary_card};
use crate::AppState;
use axum::{
    extract::{Query, State},
    response::Html,
    routing::get,
    Json, Router,
};
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(index))
        .route("/api/dashboard", get(update_dashboard))
}

/// The page layout, with the category options found at startup.
async fn index(State(state): State<Arc<AppState>>) -> Html<String> {
    Html(dashboard_page(state.dashboard.schema(), &state.categories))
}

/// All output regions for one filter selection.
#[derive(Serialize)]
pub struct DashboardResponse {
    /// Plotly figures, one per chart panel in layout order
    pub figures: Vec<Value>,
    pub summary: Summary,
    pub summary_html: String,
    pub table_html: String,
}

/// Re-fetch the table and rebuild every output region.
///
/// The selection is every value of the query key named after the category
/// column (`?type=Run&type=Ride`). No values means no filtering; any other
/// key is rejected.
async fn update_dashboard(
    State(state): State<Arc<AppState>>,
    Query(params): Query<Vec<(String, String)>>,
) -> Result<Json<DashboardResponse>> {
    let schema = state.dashboard.schema();
    let selection = selection_from_params(schema.category_column.as_deref(), params)?;

    tracing::debug!(selection = ?selection, "Updating dashboard");

    let view = state.dashboard.render(&selection).await?;

    let figures = view
        .charts
        .iter()
        .map(|chart| chart_figure_json(chart, &schema.timestamp_column))
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Failed to encode figure: {}", e)))?;

    Ok(Json(DashboardResponse {
        figures,
        summary_html: summary_card(&view.summary).into_string(),
        table_html: data_table(&view.table).into_string(),
        summary: view.summary,
    }))
}

fn selection_from_params(
    category_column: Option<&str>,
    params: Vec<(String, String)>,
) -> Result<Vec<String>> {
    let mut selection = Vec::new();

    for (key, value) in params {
        if category_column != Some(key.as_str()) {
            return Err(AppError::BadRequest(format!(
                "Unknown filter parameter: {}",
                key
            )));
        }
        if !value.is_empty() {
            selection.push(value);
        }
    }

    Ok(selection)
}
