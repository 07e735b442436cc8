//! HTTP client for the remote keyword-generation worker.

use reqwest::Client;
use serde_json::Value;
use tracing::debug;

use seoscout_core::SearchParams;

/// What came back from the remote service.
///
/// Only `Ok` carries usable results; callers must run the local fallback
/// on every other variant.
#[derive(Debug)]
pub enum RemoteOutcome {
    /// Result payload, loosely typed: the service is duck-typed JSON.
    Ok(Value),
    /// The body was not interpretable as a result payload.
    ParseError(String),
    /// Transport or service-level failure. Status 0 means no response.
    ServiceError { status: u16, message: String },
}

/// Client for a deployed generation endpoint.
#[derive(Debug, Clone)]
pub struct RemoteClient {
    client: Client,
    endpoint: String,
    api_key: Option<String>,
}

impl RemoteClient {
    pub fn new(endpoint: impl Into<String>, api_key: Option<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
            api_key,
        }
    }

    /// Request keyword suggestions from the remote service.
    pub async fn generate(&self, params: &SearchParams) -> RemoteOutcome {
        debug!("Requesting remote generation from {}", self.endpoint);

        let mut request = self.client.post(&self.endpoint).json(params);
        if let Some(key) = &self.api_key {
            request = request.header("Authorization", format!("Bearer {key}"));
        }

        let response = match request.send().await {
            Ok(r) => r,
            Err(e) => {
                return RemoteOutcome::ServiceError {
                    status: 0,
                    message: format!("Request failed: {e}"),
                }
            }
        };

        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();
        interpret(status, &body)
    }
}

/// Classify a raw response into an outcome. Pure, so the error taxonomy
/// is testable without a live endpoint.
fn interpret(status: u16, body: &str) -> RemoteOutcome {
    if !(200..300).contains(&status) {
        return RemoteOutcome::ServiceError {
            status,
            message: format!("HTTP error! status: {status}"),
        };
    }

    let mut data: Value = match serde_json::from_str(body) {
        Ok(v) => v,
        Err(e) => return RemoteOutcome::ParseError(format!("Invalid JSON body: {e}")),
    };

    if let Some(message) = data
        .get("error")
        .and_then(|e| e.get("message"))
        .and_then(Value::as_str)
    {
        return RemoteOutcome::ServiceError {
            status,
            message: message.to_string(),
        };
    }

    match data.get_mut("result") {
        Some(result) if !result.is_null() => RemoteOutcome::Ok(result.take()),
        _ => RemoteOutcome::ParseError("Invalid response format: missing result data".to_string()),
    }
}

/// Build the prompt string the worker forwards to its text model.
pub fn create_prompt(params: &SearchParams) -> String {
    let location = if params.location.is_empty() {
        "Not specified"
    } else {
        &params.location
    };
    let keyword_type = serde_json::to_value(params.keyword_type)
        .ok()
        .and_then(|v| v.as_str().map(str::to_string))
        .unwrap_or_default();

    format!(
        "Generate SEO keyword suggestions for this business: \"{}\"\n\n\
         Industry: {}\nLocation: {}\nKeyword Type Focus: {}\n\n\
         Please provide a JSON response with this exact structure:\n\
         {{\n  \"primary_keywords\": [ {{ \"keyword\": \"keyword phrase\", \"search_volume\": \"estimated monthly searches\", \"competition\": \"easy|medium|hard\", \"intent\": \"commercial|informational|navigational\" }} ],\n\
           \"long_tail_keywords\": [ {{ \"keyword\": \"longer keyword phrase\", \"search_volume\": \"estimated monthly searches\", \"competition\": \"easy|medium|hard\", \"intent\": \"commercial|informational|navigational\" }} ],\n\
           \"local_keywords\": [ {{ \"keyword\": \"local keyword phrase\", \"search_volume\": \"estimated monthly searches\", \"competition\": \"easy|medium|hard\", \"intent\": \"commercial|informational|navigational\" }} ],\n\
           \"content_ideas\": [ {{ \"keyword\": \"content-focused keyword\", \"search_volume\": \"estimated monthly searches\", \"competition\": \"easy|medium|hard\", \"intent\": \"informational\" }} ],\n\
           \"seo_tips\": [ {{ \"tip\": \"specific implementation advice\", \"keyword_example\": \"example keyword to use\", \"placement\": \"where to use it (title, meta, content, etc.)\" }} ]\n}}\n\n\
         Generate 4-6 keywords per category. Focus on relevant, actionable keywords with realistic search volumes.",
        params.business, params.industry, location, keyword_type
    )
}
