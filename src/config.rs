use serde::{Deserialize, Deserializer, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

use crate::app_dirs::AppDirs;
use crate::error::Result;

/// Scoring and sampling knobs.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Settings {
    /// Confidence reported when no positive or negative word matched
    #[serde(deserialize_with = "saturating_percent")]
    pub baseline_confidence: u8,
    /// Lowest confidence reported once any positive or negative word matched
    #[serde(deserialize_with = "saturating_percent")]
    pub confidence_floor: u8,
    /// Words drawn by the `words` command when no count is given
    pub sample_count: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            baseline_confidence: 50,
            confidence_floor: 30,
            sample_count: 3,
        }
    }
}

impl Settings {
    /// Clamp percentages into `[0, 100]`.
    pub fn clamped(self) -> Self {
        Self {
            baseline_confidence: self.baseline_confidence.min(100),
            confidence_floor: self.confidence_floor.min(100),
            ..self
        }
    }
}

/// Reads any integer percentage, saturating it into `[0, 100]`.
fn saturating_percent<'de, D>(deserializer: D) -> std::result::Result<u8, D::Error>
where
    D: Deserializer<'de>,
{
    let value = i64::deserialize(deserializer)?;
    Ok(value.clamp(0, 100) as u8)
}

pub trait SettingsStore {
    fn load(&self) -> Settings;
    fn save(&self, settings: &Settings) -> Result<()>;
}

#[derive(Debug, Clone)]
pub struct FileSettingsStore {
    path: PathBuf,
}

impl FileSettingsStore {
    #[allow(clippy::new_without_default)]
    pub fn new() -> Self {
        Self {
            path: AppDirs::settings_path(),
        }
    }

    pub fn with_path<P: AsRef<Path>>(p: P) -> Self {
        Self {
            path: p.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for FileSettingsStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SettingsStore for FileSettingsStore {
    fn load(&self) -> Settings {
        let Ok(bytes) = fs::read(&self.path) else {
            return Settings::default();
        };
        match serde_json::from_slice::<Settings>(&bytes) {
            Ok(settings) => settings.clamped(),
            Err(err) => {
                warn!(path = %self.path.display(), %err, "ignoring malformed settings file");
                Settings::default()
            }
        }
    }

    fn save(&self, settings: &Settings) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let data = serde_json::to_vec_pretty(settings)?;
        fs::write(&self.path, data)?;
        Ok(())
    }
}
