//! Settings persistence
//!
//! Reads and writes [`GameSettings`] as JSON. Settings are loaded in `main`
//! before the app is built because the window size depends on them; the
//! outcome is kept in [`SettingsSource`] and logged once logging is up.
//!
//! # File Location
//!
//! `--settings <PATH>` wins. Otherwise `settings.json` in the per-user config
//! directory (e.g. `~/.config/duelchess/settings.json`), falling back to the
//! working directory when no config directory can be resolved.
//!
//! # Error Handling
//!
//! - Missing file: defaults, not an error
//! - Unreadable or invalid file: defaults, error reported through [`SettingsSource`]
//! - Values outside [`GameSettings::validate`]'s ranges: same as an invalid file

use std::fs;
use std::path::{Path, PathBuf};

use bevy::prelude::*;
use directories::ProjectDirs;

use super::error::CoreResult;
use super::GameSettings;

/// Settings filename
const SETTINGS_FILENAME: &str = "settings.json";

/// Where the active settings came from
#[derive(Resource, Debug, Clone, PartialEq)]
pub enum SettingsSource {
    /// Parsed from this file
    File(PathBuf),
    /// No file at this path; defaults in use
    Defaults(PathBuf),
    /// The file exists but could not be used
    Fallback { path: PathBuf, reason: String },
}

/// Resolve the default settings file path
pub fn default_settings_path() -> PathBuf {
    match ProjectDirs::from("org", "duelchess", "duelchess") {
        Some(dirs) => dirs.config_dir().join(SETTINGS_FILENAME),
        None => PathBuf::from(SETTINGS_FILENAME),
    }
}

/// Read settings from `path`
///
/// Returns `Ok(None)` when the file does not exist. Settings that parse but
/// fail [`GameSettings::validate`] are an error.
pub fn read_settings(path: &Path) -> CoreResult<Option<GameSettings>> {
    if !path.exists() {
        return Ok(None);
    }
    let contents = fs::read_to_string(path)?;
    let settings: GameSettings = serde_json::from_str(&contents)?;
    settings.validate()?;
    Ok(Some(settings))
}

/// Load settings, falling back to defaults on any problem
pub fn load_settings(path: &Path) -> (GameSettings, SettingsSource) {
    match read_settings(path) {
        Ok(Some(settings)) => (settings, SettingsSource::File(path.to_path_buf())),
        Ok(None) => (GameSettings::default(), SettingsSource::Defaults(path.to_path_buf())),
        Err(e) => (
            GameSettings::default(),
            SettingsSource::Fallback {
                path: path.to_path_buf(),
                reason: e.to_string(),
            },
        ),
    }
}

/// Write settings to `path` as pretty JSON, creating parent directories
pub fn save_settings(settings: &GameSettings, path: &Path) -> CoreResult<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }
    let json = serde_json::to_string_pretty(settings)?;
    fs::write(path, json)?;
    Ok(())
}

/// Startup system reporting where the settings came from
pub fn log_settings_source(source: Res<SettingsSource>) {
    match source.as_ref() {
        SettingsSource::File(path) => {
            info!("[SETTINGS] Loaded settings from {:?}", path);
        }
        SettingsSource::Defaults(path) => {
            info!("[SETTINGS] No settings file found at {:?}. Using defaults.", path);
        }
        SettingsSource::Fallback { path, reason } => {
            error!(
                "[SETTINGS] Failed to load settings file at {:?}: {}. Using defaults.",
                path, reason
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PieceStyle;

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        let (settings, source) = load_settings(&path);
        assert_eq!(settings, GameSettings::default());
        assert_eq!(source, SettingsSource::Defaults(path));
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("settings.json");
        let settings = GameSettings {
            square_size: 72,
            piece_style: PieceStyle::Images {
                dir: PathBuf::from("images"),
            },
            ..default()
        };

        save_settings(&settings, &path).unwrap();
        let (loaded, source) = load_settings(&path);
        assert_eq!(loaded, settings);
        assert_eq!(source, SettingsSource::File(path));
    }

    #[test]
    fn test_invalid_file_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, "{ not json").unwrap();

        let (settings, source) = load_settings(&path);
        assert_eq!(settings, GameSettings::default());
        assert!(matches!(source, SettingsSource::Fallback { .. }));
        assert!(read_settings(&path).is_err());
    }

    #[test]
    fn test_out_of_range_file_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");

        for contents in [
            r#"{ "square_size": 600000000 }"#,
            r#"{ "square_size": 0 }"#,
            r#"{ "animation_fps": 0 }"#,
            r#"{ "side_panel_width": 100000 }"#,
        ] {
            fs::write(&path, contents).unwrap();
            let (settings, source) = load_settings(&path);
            assert_eq!(settings, GameSettings::default(), "{contents}");
            match source {
                SettingsSource::Fallback { reason, .. } => {
                    assert!(reason.contains("out of range"), "{reason}")
                }
                other => panic!("{contents} should fall back, got {other:?}"),
            }
            // Defaults are always usable for the window
            assert_eq!(settings.window_size(), (512 + 220, 512));
        }
    }
}
