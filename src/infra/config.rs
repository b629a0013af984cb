// src/infra/config.rs — Configuration loading (TOML)

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::infra::errors::TrackerError;
use crate::infra::paths;

/// Live backend used when neither the flag, the environment, nor the config
/// file names one.
pub const DEFAULT_BACKEND: &str =
    "https://ta-01k9q6mragsbpxqfhsmjsq3d3p-8000.wo-h636j8e6d9bkee4f8adbiz86u.w.modal.host";

/// Environment variable that overrides the configured backend origin.
pub const BACKEND_URL_ENV: &str = "ACADEMIC_TRACKER_BACKEND_URL";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub backend: BackendConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BackendConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Per-request timeout. Absent means requests may block indefinitely.
    #[serde(default)]
    pub timeout_seconds: Option<u64>,
}

fn default_base_url() -> String {
    DEFAULT_BACKEND.into()
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_seconds: None,
        }
    }
}

impl BackendConfig {
    /// Apply origin overrides: CLI flag first, then the environment value.
    /// Blank overrides are ignored.
    pub fn with_overrides(mut self, flag: Option<String>, env: Option<String>) -> Self {
        let chosen = flag
            .filter(|s| !s.trim().is_empty())
            .or_else(|| env.filter(|s| !s.trim().is_empty()));
        if let Some(url) = chosen {
            self.base_url = url;
        }
        self
    }
}

impl Config {
    /// Load config from file, falling back to defaults.
    pub fn load() -> Result<Self, TrackerError> {
        let path = paths::config_file_path();
        if path.exists() {
            Self::load_from(&path)
        } else {
            Ok(Self::default())
        }
    }

    pub fn load_from(path: &Path) -> Result<Self, TrackerError> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content)
            .map_err(|e| TrackerError::Config(format!("{}: {e}", path.display())))
    }
}
