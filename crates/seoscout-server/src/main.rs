//! SeoScout — keyword-suggestion server with local fallback generation.

use std::path::PathBuf;
use std::sync::Arc;

use tracing::info;
use tracing_subscriber::EnvFilter;

mod routes;
mod state;

use state::AppState;

fn resolve_data_dir() -> PathBuf {
    std::env::var("SEOSCOUT_DATA_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("data"))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let data_dir = resolve_data_dir();
    info!("Data directory: {}", data_dir.display());

    let config = seoscout_core::SeoScoutConfig::from_env(&data_dir)?;
    let port = config.port;

    let backend = seoscout_history::JsonFileBackend::new(&config.data_paths.history_file);
    let history =
        seoscout_history::SearchHistoryStore::open(Box::new(backend), config.max_history_items);

    let settings = seoscout_core::Settings::load(&config.data_paths.settings_file);
    if config.remote_endpoint.is_some() || settings.endpoint.is_some() {
        info!("Remote generation enabled, local engine on standby");
    } else {
        info!("No remote endpoint configured, generating locally");
    }

    let state = Arc::new(AppState::new(config, history, settings));
    let app = routes::build_router(state);

    let addr = format!("0.0.0.0:{port}");
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("SeoScout server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
