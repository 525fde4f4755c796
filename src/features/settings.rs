//! Application settings
//!
//! Loads the step indicator configuration and display preferences. The file
//! is read once at startup and never written back.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::ui::primitives::step_indicator::{DisplayMode, StepStyle};

/// Application settings
#[derive(Debug, Clone, PartialEq, Deserialize, Default)]
pub struct Settings {
    /// Step indicator configuration
    #[serde(default)]
    pub stepper: StepperSettings,
    /// Display and interface settings
    #[serde(default)]
    pub display: DisplaySettings,
}

/// Step indicator configuration
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct StepperSettings {
    /// Number of steps (at least 2)
    pub point_count: usize,
    /// Current step, 0-based
    pub current_index: i32,
    pub display_mode: DisplayMode,
    /// Icon identifier per step index
    pub icons: BTreeMap<usize, String>,
    /// Directory of `<identifier>.png` files overriding the bundled icons
    pub icon_dir: Option<PathBuf>,
    /// Marker radius (0 = derive from height)
    pub radius: f32,
    /// Connector thickness (0 = derive from height)
    pub line_height: f32,
    pub font_size: f32,
    /// Canvas height in logical pixels
    pub height: f32,
}

/// Display-related settings
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct DisplaySettings {
    /// Dark mode enabled
    pub dark_mode: bool,
}

impl Default for StepperSettings {
    fn default() -> Self {
        let style = StepStyle::default();
        Self {
            point_count: 3,
            current_index: 1,
            display_mode: DisplayMode::Numeric,
            icons: (0..3).map(|i| (i, format!("step{}", i + 1))).collect(),
            icon_dir: None,
            radius: style.radius,
            line_height: style.line_height,
            font_size: style.font_size,
            height: 120.0,
        }
    }
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self { dark_mode: true }
    }
}

impl StepperSettings {
    /// Widget style with the configured sizes applied over the defaults
    pub fn style(&self) -> StepStyle {
        StepStyle {
            radius: self.radius,
            line_height: self.line_height,
            font_size: self.font_size,
            ..StepStyle::default()
        }
    }

    /// Override file for an icon identifier, if an icon directory is set
    pub fn icon_path(&self, identifier: &str) -> Option<PathBuf> {
        self.icon_dir
            .as_ref()
            .map(|dir| dir.join(format!("{}.png", identifier)))
    }
}

impl Settings {
    /// Get the settings file path
    pub fn file_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "stepper", "Stepper")
            .map(|dirs| dirs.config_dir().join("settings.json"))
    }

    /// Load settings from file, or return defaults if not found
    pub fn load() -> Self {
        Self::file_path()
            .and_then(|path| match Self::load_from_file(&path) {
                Ok(settings) => Some(settings),
                Err(SettingsError::Io(_)) => None,
                Err(e) => {
                    tracing::warn!("Ignoring settings at {}: {}", path.display(), e);
                    None
                }
            })
            .unwrap_or_default()
    }

    /// Load settings from a specific file
    pub fn load_from_file(path: &Path) -> Result<Self, SettingsError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| SettingsError::Io(e.to_string()))?;
        serde_json::from_str(&content).map_err(|e| SettingsError::Parse(e.to_string()))
    }
}

/// Errors that can occur with settings
#[derive(Debug, Clone)]
pub enum SettingsError {
    Io(String),
    Parse(String),
}

impl std::fmt::Display for SettingsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SettingsError::Io(e) => write!(f, "IO error: {}", e),
            SettingsError::Parse(e) => write!(f, "Parse error: {}", e),
        }
    }
}

impl std::error::Error for SettingsError {}
