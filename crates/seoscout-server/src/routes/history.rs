//! Search-history routes: list, recent, lookup, stats, chart, export, clear.

use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Deserialize;

use seoscout_history::score_class;

use crate::state::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/history", get(list_history))
        .route("/history/recent", get(recent_history))
        .route("/history/stats", get(get_stats))
        .route("/history/chart", get(get_chart))
        .route("/history/export", get(export_history))
        .route("/history/search", get(search_history))
        .route("/history/clear", post(clear_history))
        .route("/history/{id}", get(get_entry))
}

/// GET /api/history — all entries, most recent first.
async fn list_history(State(state): State<Arc<AppState>>) -> Json<serde_json::Value> {
    Json(serde_json::json!({ "searches": state.history.history() }))
}

/// GET /api/history/{id} — one entry, with its display score class.
async fn get_entry(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<serde_json::Value>, (StatusCode, Json<serde_json::Value>)> {
    match state.history.search_by_id(&id) {
        Some(entry) => {
            let class = score_class(entry.seo_metrics.seo_score);
            Ok(Json(serde_json::json!({
                "entry": entry,
                "scoreClass": class,
            })))
        }
        None => Err((
            StatusCode::NOT_FOUND,
            Json(serde_json::json!({ "error": format!("No search with id {id}") })),
        )),
    }
}

#[derive(Debug, Deserialize)]
struct RecentQuery {
    #[serde(default = "default_recent_limit")]
    limit: usize,
}

fn default_recent_limit() -> usize {
    10
}

/// GET /api/history/recent?limit= — the newest entries, capped at `limit`.
async fn recent_history(
    State(state): State<Arc<AppState>>,
    Query(query): Query<RecentQuery>,
) -> Json<serde_json::Value> {
    let hits = state.history.recent_searches(query.limit);
    Json(serde_json::json!({ "searches": hits }))
}

#[derive(Debug, Deserialize)]
struct BusinessQuery {
    #[serde(default)]
    business: String,
}

/// GET /api/history/search?business= — substring match on business text.
async fn search_history(
    State(state): State<Arc<AppState>>,
    Query(query): Query<BusinessQuery>,
) -> Json<serde_json::Value> {
    let hits = state.history.searches_by_business(&query.business);
    Json(serde_json::json!({ "searches": hits }))
}

/// GET /api/history/stats — cross-entry aggregates.
async fn get_stats(State(state): State<Arc<AppState>>) -> Json<seoscout_history::SearchStats> {
    Json(state.history.stats())
}

/// GET /api/history/chart — contiguous daily series for charting.
async fn get_chart(State(state): State<Arc<AppState>>) -> Json<seoscout_history::ChartSeries> {
    Json(state.history.chart_series())
}

/// GET /api/history/export — full snapshot; saving it is the caller's job.
async fn export_history(State(state): State<Arc<AppState>>) -> Json<seoscout_history::ExportSnapshot> {
    Json(state.history.export_snapshot())
}

/// POST /api/history/clear — empty the store.
async fn clear_history(State(state): State<Arc<AppState>>) -> Json<serde_json::Value> {
    let cleared = state.history.clear();
    Json(serde_json::json!({ "cleared": cleared }))
}
