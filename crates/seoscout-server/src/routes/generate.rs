//! Keyword generation route.

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, Router};
use serde::Deserialize;
use tracing::info;

use seoscout_core::{validate::validate_request, KeywordFocus, SearchParams};
use seoscout_remote::GenerationSource;

use crate::state::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/generate-keywords", post(generate_keywords))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateRequest {
    #[serde(default)]
    business: String,
    #[serde(default)]
    industry: String,
    #[serde(default)]
    location: String,
    #[serde(default)]
    keyword_type: String,
}

/// POST /api/generate-keywords — validate, generate (remote with local
/// fallback), record the search, return the results plus the history id.
async fn generate_keywords(
    State(state): State<Arc<AppState>>,
    Json(request): Json<GenerateRequest>,
) -> Result<Json<serde_json::Value>, (StatusCode, Json<serde_json::Value>)> {
    let errors = validate_request(&request.business, &request.industry, &request.keyword_type);
    if !errors.is_empty() {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(serde_json::json!({ "errors": errors })),
        ));
    }

    let params = SearchParams {
        business: request.business,
        industry: request.industry,
        location: request.location,
        keyword_type: KeywordFocus::parse(&request.keyword_type),
    };

    let (results, source) = state.generator().generate(&params).await;
    let id = state.history.add_search(params, results.clone());
    info!(
        "Generated keywords via {:?} path, history entry {}",
        source, id
    );

    Ok(Json(serde_json::json!({
        "id": id,
        "source": match source {
            GenerationSource::Remote => "remote",
            GenerationSource::Local => "local",
        },
        "results": results,
    })))
}
