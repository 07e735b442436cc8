//! Shared application state.

use parking_lot::RwLock;

use seoscout_core::{Settings, SeoScoutConfig};
use seoscout_engine::LocalEngine;
use seoscout_history::SearchHistoryStore;
use seoscout_remote::{KeywordGenerator, RemoteClient};

pub struct AppState {
    pub config: SeoScoutConfig,
    pub history: SearchHistoryStore,
    pub engine: LocalEngine,
    pub settings: RwLock<Settings>,
}

impl AppState {
    pub fn new(config: SeoScoutConfig, history: SearchHistoryStore, settings: Settings) -> Self {
        Self {
            config,
            history,
            engine: LocalEngine::new(),
            settings: RwLock::new(settings),
        }
    }

    /// Build a generator reflecting the current settings: the settings
    /// endpoint overrides the configured one, and no endpoint at all
    /// means local-only generation.
    pub fn generator(&self) -> KeywordGenerator {
        let settings = self.settings.read();
        let endpoint = settings
            .endpoint
            .clone()
            .or_else(|| self.config.remote_endpoint.clone());

        match endpoint {
            Some(endpoint) => KeywordGenerator::new(
                Some(RemoteClient::new(endpoint, settings.api_key.clone())),
                self.engine.clone(),
            ),
            None => KeywordGenerator::local_only(self.engine.clone()),
        }
    }
}
