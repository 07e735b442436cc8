//! Configuration and data directory management.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Paths to all SeoScout data files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataPaths {
    /// Root data directory (e.g., `data/`).
    pub root: PathBuf,
    /// Persisted search history (`data/search-history.json`).
    pub history_file: PathBuf,
    /// Persisted settings blob (`data/settings.json`).
    pub settings_file: PathBuf,
}

impl DataPaths {
    /// Create data paths from a root directory. Creates the directory if needed.
    pub fn new(root: impl AsRef<Path>) -> std::io::Result<Self> {
        let root = root.as_ref().to_path_buf();
        std::fs::create_dir_all(&root)?;
        Ok(Self {
            history_file: root.join("search-history.json"),
            settings_file: root.join("settings.json"),
            root,
        })
    }
}

/// Top-level SeoScout configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeoScoutConfig {
    /// HTTP server port.
    pub port: u16,
    /// Data directory paths.
    pub data_paths: DataPaths,
    /// History capacity: oldest entries are dropped past this count.
    pub max_history_items: usize,
    /// Remote generation endpoint, if one is deployed.
    pub remote_endpoint: Option<String>,
}

impl SeoScoutConfig {
    /// Create configuration from environment and defaults.
    pub fn from_env(data_dir: impl AsRef<Path>) -> std::io::Result<Self> {
        let port = std::env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(3004);

        let remote_endpoint = std::env::var("SEOSCOUT_REMOTE_ENDPOINT")
            .ok()
            .filter(|s| !s.is_empty());

        let data_paths = DataPaths::new(data_dir)?;

        Ok(Self {
            port,
            data_paths,
            max_history_items: 100,
            remote_endpoint,
        })
    }
}
