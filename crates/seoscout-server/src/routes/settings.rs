//! Settings routes — remote API key and endpoint override.

use std::sync::Arc;

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};

use seoscout_core::Settings;

use crate::state::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/settings", get(get_settings).put(put_settings))
}

/// GET /api/settings — the key itself is never echoed back, only whether
/// one is stored.
async fn get_settings(State(state): State<Arc<AppState>>) -> Json<serde_json::Value> {
    let settings = state.settings.read();
    Json(serde_json::json!({
        "hasApiKey": settings.api_key.is_some(),
        "endpoint": settings.endpoint,
    }))
}

/// PUT /api/settings — replace and persist the settings blob. A failed
/// write is reported but the in-memory settings still apply.
async fn put_settings(
    State(state): State<Arc<AppState>>,
    Json(new_settings): Json<Settings>,
) -> Json<serde_json::Value> {
    let saved = new_settings.save(&state.config.data_paths.settings_file);
    *state.settings.write() = new_settings;
    Json(serde_json::json!({ "saved": saved }))
}
