use directories::ProjectDirs;
use std::path::PathBuf;

/// Environment variable that overrides the settings file location
pub const SETTINGS_ENV: &str = "SENTI_CONFIG";

/// Centralized application directory resolution
pub struct AppDirs;

impl AppDirs {
    pub fn settings_path() -> PathBuf {
        if let Some(path) = std::env::var_os(SETTINGS_ENV).filter(|p| !p.is_empty()) {
            return PathBuf::from(path);
        }
        ProjectDirs::from("", "", "senti")
            .map(|proj_dirs| proj_dirs.config_dir().join("settings.json"))
            .unwrap_or_else(|| PathBuf::from("senti_settings.json"))
    }
}
