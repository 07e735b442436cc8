//! Remote-first generation with guaranteed local fallback.

use serde_json::Value;
use tracing::warn;

use seoscout_core::SearchParams;
use seoscout_engine::LocalEngine;

use crate::client::{RemoteClient, RemoteOutcome};

/// Which path produced a result set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationSource {
    Remote,
    Local,
}

/// Tries the remote service when one is configured, and falls back to
/// the local engine on any non-Ok outcome. Never fails.
pub struct KeywordGenerator {
    remote: Option<RemoteClient>,
    engine: LocalEngine,
}

impl KeywordGenerator {
    pub fn new(remote: Option<RemoteClient>, engine: LocalEngine) -> Self {
        Self { remote, engine }
    }

    /// Local-only generator, for deployments without a remote endpoint.
    pub fn local_only(engine: LocalEngine) -> Self {
        Self {
            remote: None,
            engine,
        }
    }

    /// Produce a result set for the given inputs.
    ///
    /// The returned value is loosely typed because remote results are
    /// duck-typed JSON; local results serialize to the canonical shape.
    pub async fn generate(&self, params: &SearchParams) -> (Value, GenerationSource) {
        if let Some(remote) = &self.remote {
            match remote.generate(params).await {
                RemoteOutcome::Ok(results) => return (results, GenerationSource::Remote),
                RemoteOutcome::ParseError(message) => {
                    warn!("Remote result unparsable, falling back locally: {}", message);
                }
                RemoteOutcome::ServiceError { status, message } => {
                    warn!(
                        "Remote service failed (status {}), falling back locally: {}",
                        status, message
                    );
                }
            }
        }

        let results = self
            .engine
            .generate(
                &params.business,
                &params.industry,
                &params.location,
                params.keyword_type,
            )
            .await;
        let value = serde_json::to_value(results).unwrap_or_default();
        (value, GenerationSource::Local)
    }
}
