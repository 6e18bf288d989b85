//! Persisted panel state (JSON settings file).

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::params::NoiseGridParams;

/// Default settings location, relative to the working directory
pub const DEFAULT_SETTINGS_PATH: &str = "settings/noise_grid.json";

/// Everything the panel restores on the next launch
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub params: NoiseGridParams,
    pub show_gui: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            params: NoiseGridParams::default(),
            show_gui: true,
        }
    }
}

impl Settings {
    /// Load settings from `path`.
    ///
    /// A missing file is not an error and yields `None`. Loaded values are
    /// clamped into their parameter ranges.
    pub fn load(path: &Path) -> Result<Option<Self>> {
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        let mut settings: Settings = serde_json::from_str(&text)?;
        settings.params = settings.params.clamped();
        Ok(Some(settings))
    }

    /// Load settings, falling back to defaults (with a warning) on failure
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(Some(settings)) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Ok(None) => {
                log::info!("No settings at {}, using defaults", path.display());
                Self::default()
            }
            Err(e) => {
                log::warn!("{} ({}), using defaults", e, path.display());
                Self::default()
            }
        }
    }

    /// Write settings to `path`, creating parent directories as needed
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let text = serde_json::to_string_pretty(self)?;
        fs::write(path, text)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;

    #[test]
    fn test_missing_file_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.json");
        assert!(Settings::load(&path).unwrap().is_none());
        assert_eq!(Settings::load_or_default(&path), Settings::default());
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/dir/noise_grid.json");

        let settings = Settings {
            params: NoiseGridParams {
                frequency: 0.5,
                time_frequency: 2.0,
                magnitude: 1.25,
                grid_size: 10.0,
                grid_resolution: 42,
            },
            show_gui: false,
        };
        settings.save(&path).unwrap();

        assert_eq!(Settings::load(&path).unwrap(), Some(settings));
    }

    #[test]
    fn test_loaded_values_are_clamped() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(
            &path,
            r#"{ "params": { "frequency": 9.0, "grid_resolution": 1 } }"#,
        )
        .unwrap();

        let settings = Settings::load(&path).unwrap().unwrap();
        assert_eq!(settings.params.frequency, 2.0);
        assert_eq!(settings.params.grid_resolution, 3);
        // Fields absent from the file keep their defaults
        assert_eq!(settings.params.magnitude, 0.3);
        assert!(settings.show_gui);
    }

    #[test]
    fn test_malformed_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        fs::write(&path, "{ not json").unwrap();

        assert!(matches!(
            Settings::load(&path),
            Err(AppError::SettingsFormat(_))
        ));
        assert_eq!(Settings::load_or_default(&path), Settings::default());
    }
}
