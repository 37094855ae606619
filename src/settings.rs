use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::background::{AnimatorConfig, MAX_SHAPES, SHAPE_COUNT};

/// Returns the path to the settings file: `~/.config/geo-bg/settings.json`
fn settings_path() -> PathBuf {
    let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("geo-bg");
    path.push("settings.json");
    path
}

/// Persisted application settings.
///
/// Serialized as JSON to the platform config directory.
/// Fields use `#[serde(default)]` so that adding new settings
/// won't break existing config files.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct AppSettings {
    // Background
    pub shape_count: usize,
    pub palette: Vec<String>,
    pub alpha_min: f32,
    pub alpha_max: f32,
    /// Fixed seed for a repeatable layout; random each launch when absent
    pub seed: Option<u64>,
    pub show_grid: bool,
    pub show_connections: bool,

    // Page
    pub cursor_ring: bool,

    // Window
    pub window_width: f32,
    pub window_height: f32,
}

impl Default for AppSettings {
    fn default() -> Self {
        let animator = AnimatorConfig::default();
        Self {
            shape_count: SHAPE_COUNT,
            palette: animator.palette,
            alpha_min: animator.alpha_min,
            alpha_max: animator.alpha_max,
            seed: None,
            show_grid: true,
            show_connections: true,

            cursor_ring: true,

            window_width: 1100.0,
            window_height: 760.0,
        }
    }
}

impl AppSettings {
    /// Load settings from disk, falling back to defaults on any error.
    pub fn load() -> Self {
        Self::load_from(&settings_path())
    }

    fn load_from(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(contents) => match serde_json::from_str::<Self>(&contents) {
                Ok(mut settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    settings.clamp_shape_count();
                    settings
                }
                Err(e) => {
                    log::warn!("Failed to parse settings ({}), using defaults", e);
                    Self::default()
                }
            },
            Err(e) => {
                log::info!("No settings file found ({}), using defaults", e);
                Self::default()
            }
        }
    }

    /// Keep a hand-edited shape count within `MAX_SHAPES`
    fn clamp_shape_count(&mut self) {
        if self.shape_count > MAX_SHAPES {
            log::warn!(
                "Shape count {} exceeds the maximum, using {}",
                self.shape_count,
                MAX_SHAPES
            );
            self.shape_count = MAX_SHAPES;
        }
    }

    /// Save settings to disk as pretty JSON.
    pub fn save(&self) {
        self.save_to(&settings_path());
    }

    fn save_to(&self, path: &Path) {
        if let Some(parent) = path.parent() {
            if let Err(e) = std::fs::create_dir_all(parent) {
                log::warn!("Failed to create config directory: {}", e);
                return;
            }
        }
        match serde_json::to_string_pretty(self) {
            Ok(json) => {
                if let Err(e) = std::fs::write(path, json) {
                    log::warn!("Failed to write settings: {}", e);
                }
            }
            Err(e) => {
                log::warn!("Failed to serialize settings: {}", e);
            }
        }
    }

    /// Background configuration derived from these settings
    pub fn animator_config(&self) -> AnimatorConfig {
        AnimatorConfig {
            shape_count: self.shape_count.min(MAX_SHAPES),
            palette: self.palette.clone(),
            alpha_min: self.alpha_min,
            alpha_max: self.alpha_max,
            seed: self.seed,
            show_grid: self.show_grid,
            show_connections: self.show_connections,
        }
    }
}
