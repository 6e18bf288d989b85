//! Command-line argument parsing.

use std::path::PathBuf;

use clap::Parser;

use crate::params::{NoiseGridParams, RecordingConfig};
use crate::settings::{Settings, DEFAULT_SETTINGS_PATH};

/// Command line arguments
#[derive(Parser, Debug)]
#[command(name = "noise_grid")]
#[command(about = "Lattice of noise-driven streaks with live parameter tuning", long_about = None)]
pub struct Args {
    /// Settings file restored on launch and written on exit
    #[arg(long, value_name = "PATH", default_value = DEFAULT_SETTINGS_PATH)]
    pub settings: PathBuf,

    /// Noise seed
    #[arg(long, value_name = "SEED", default_value = "0")]
    pub seed: u32,

    /// Override the saved grid resolution (samples per axis, 3-100)
    #[arg(long, value_name = "N")]
    pub resolution: Option<u32>,

    /// Start with the parameter panel hidden
    #[arg(long)]
    pub hide_gui: bool,

    /// Start in borderless fullscreen
    #[arg(long)]
    pub fullscreen: bool,

    /// Record frames to PNG (duration in seconds)
    #[arg(long, value_name = "SECONDS")]
    pub record: Option<f32>,
}

impl Args {
    /// Apply command-line overrides on top of the loaded settings
    pub fn apply_overrides(&self, settings: &mut Settings) {
        if let Some(resolution) = self.resolution {
            settings.params = NoiseGridParams {
                grid_resolution: resolution,
                ..settings.params
            }
            .clamped();
            log::info!("Grid resolution: {}", settings.params.grid_resolution);
        }
        if self.hide_gui {
            settings.show_gui = false;
        }
    }

    /// Create recording configuration if recording mode is enabled
    pub fn create_recording_config(&self) -> Option<RecordingConfig> {
        self.record
            .filter(|duration| *duration > 0.0)
            .map(RecordingConfig::new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::parse_from(["noise_grid"]);
        assert_eq!(args.settings, PathBuf::from(DEFAULT_SETTINGS_PATH));
        assert_eq!(args.seed, 0);
        assert!(args.resolution.is_none());
        assert!(!args.hide_gui);
        assert!(args.create_recording_config().is_none());
    }

    #[test]
    fn test_overrides_are_clamped() {
        let args = Args::parse_from(["noise_grid", "--resolution", "500", "--hide-gui"]);
        let mut settings = Settings::default();
        args.apply_overrides(&mut settings);

        assert_eq!(settings.params.grid_resolution, 100);
        assert!(!settings.show_gui);
        assert_eq!(settings.params.frequency, 1.0);
    }

    #[test]
    fn test_overrides_leave_settings_file_alone() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("noise_grid.json");
        let saved = Settings::default();
        saved.save(&path).unwrap();

        let path_arg = path.to_str().unwrap();
        let args = Args::parse_from([
            "noise_grid",
            "--settings",
            path_arg,
            "--resolution",
            "100",
            "--hide-gui",
        ]);
        let mut settings = Settings::load_or_default(&args.settings);
        args.apply_overrides(&mut settings);
        assert_eq!(settings.params.grid_resolution, 100);

        // Only an explicit save writes the file
        assert_eq!(Settings::load(&path).unwrap(), Some(saved));
    }

    #[test]
    fn test_record_flag() {
        let args = Args::parse_from(["noise_grid", "--record", "2", "--seed", "7"]);
        let config = args.create_recording_config().unwrap();
        assert_eq!(config.total_frames(), 120);
        assert_eq!(args.seed, 7);
    }
}
