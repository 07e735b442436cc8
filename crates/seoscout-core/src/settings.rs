//! Persisted user settings (remote API key, endpoint override).
//!
//! Load/save failures are logged and swallowed: settings are a
//! convenience, never a reason to refuse a generation request.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::warn;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// API key forwarded to the remote generation service.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    /// Overrides the configured remote endpoint when set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,
}

impl Settings {
    /// Load settings from disk, defaulting on any failure.
    pub fn load(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(raw) => serde_json::from_str(&raw).unwrap_or_else(|e| {
                warn!("Failed to parse settings {}: {}", path.display(), e);
                Self::default()
            }),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Self::default(),
            Err(e) => {
                warn!("Failed to read settings {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Save settings to disk. Returns whether the write succeeded.
    pub fn save(&self, path: &Path) -> bool {
        let raw = match serde_json::to_string_pretty(self) {
            Ok(raw) => raw,
            Err(e) => {
                warn!("Failed to serialize settings: {}", e);
                return false;
            }
        };
        if let Err(e) = std::fs::write(path, raw) {
            warn!("Failed to write settings {}: {}", path.display(), e);
            return false;
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        let settings = Settings {
            api_key: Some("sk-test".into()),
            endpoint: None,
        };
        assert!(settings.save(&path));
        assert_eq!(Settings::load(&path), settings);
    }

    #[test]
    fn test_missing_file_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let loaded = Settings::load(&dir.path().join("nope.json"));
        assert_eq!(loaded, Settings::default());
    }
}
