// src/infra/paths.rs — Config path management
//
// ACADEMIC_TRACKER_HOME overrides the config directory for isolation.
// When unset, config lives under ~/.academic-tracker/.

use std::path::PathBuf;

pub const HOME_ENV: &str = "ACADEMIC_TRACKER_HOME";

fn tracker_home() -> Option<PathBuf> {
    std::env::var_os(HOME_ENV).map(PathBuf::from)
}

/// Configuration directory: $ACADEMIC_TRACKER_HOME/ or ~/.academic-tracker/
pub fn config_dir() -> PathBuf {
    if let Some(home) = tracker_home() {
        return home;
    }
    dirs_home().join(".academic-tracker")
}

/// Home directory, or the working directory when none can be determined.
pub fn dirs_home() -> PathBuf {
    directories::BaseDirs::new()
        .map(|dirs| dirs.home_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
}

pub fn config_file_path() -> PathBuf {
    config_dir().join("config.toml")
}
