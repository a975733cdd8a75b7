//! Game settings and preferences
//!
//! Presentation and headless-run tuning. The simulation constants themselves
//! live in [`crate::consts`] and are not configurable.

use std::fmt;
use std::path::{Path, PathBuf};

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Errors from loading or validating settings
#[derive(Debug)]
pub enum SettingsError {
    /// Settings file could not be read
    Io { path: PathBuf, source: std::io::Error },
    /// Settings JSON was malformed
    Parse(serde_json::Error),
    /// Settings could not be written out as JSON
    Serialize(serde_json::Error),
    /// A value is out of range
    Invalid(&'static str),
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::Io { path, source } => {
                write!(f, "failed to read settings {}: {}", path.display(), source)
            }
            SettingsError::Parse(e) => write!(f, "invalid settings JSON: {}", e),
            SettingsError::Serialize(e) => write!(f, "failed to serialize settings: {}", e),
            SettingsError::Invalid(what) => write!(f, "invalid setting: {}", what),
        }
    }
}

impl std::error::Error for SettingsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SettingsError::Io { source, .. } => Some(source),
            SettingsError::Parse(e) | SettingsError::Serialize(e) => Some(e),
            SettingsError::Invalid(_) => None,
        }
    }
}

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Window title shown by the host
    pub window_title: String,

    // === HUD ===
    /// Font asset, loaded once at startup
    pub font_path: PathBuf,
    /// Label font size (pixels)
    pub font_size: f32,
    /// Line spacing multiplier for labels
    pub line_spacing: f32,
    /// Top-left of the "Score" label
    pub score_label_pos: Vec2,
    /// Top-left of the "High Score" label
    pub high_score_label_pos: Vec2,

    // === Headless run ===
    /// Frames to simulate before exiting
    pub frames: u32,
    /// Autopilot RNG seed
    pub autopilot_seed: u64,
    /// Chance per frame that the autopilot lets go of the keys (0.0 - 1.0)
    pub autopilot_miss_chance: f64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            window_title: "Wall Ball".to_string(),

            font_path: PathBuf::from("assets/DejaVuSansMono.ttf"),
            font_size: 13.0,
            line_spacing: 1.5,
            score_label_pos: Vec2::new(10.0, 10.0),
            high_score_label_pos: Vec2::new(10.0, 30.0),

            // One minute at 60 fps
            frames: 3600,
            autopilot_seed: 12345,
            autopilot_miss_chance: 0.05,
        }
    }
}

impl Settings {
    /// Parse settings from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(json).map_err(SettingsError::Parse)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Serialize to JSON. Out-of-range settings are refused so the output
    /// always reads back.
    pub fn to_json(&self) -> Result<String, SettingsError> {
        self.validate()?;
        serde_json::to_string_pretty(self).map_err(SettingsError::Serialize)
    }

    /// Load settings from a JSON file
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Check value ranges
    pub fn validate(&self) -> Result<(), SettingsError> {
        if !(0.0..=1.0).contains(&self.autopilot_miss_chance) {
            return Err(SettingsError::Invalid("autopilot_miss_chance must be in 0.0..=1.0"));
        }
        if !(self.font_size.is_finite() && self.font_size > 0.0) {
            return Err(SettingsError::Invalid("font_size must be positive"));
        }
        if !(self.line_spacing.is_finite() && self.line_spacing > 0.0) {
            return Err(SettingsError::Invalid("line_spacing must be positive"));
        }
        Ok(())
    }
}
