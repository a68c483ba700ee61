use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use super::style::{FontFamily, FontSize, TextColor, TextStyle};
use crate::app::infrastructure::error::AppError;

/// Startup configuration.
///
/// Read once when the editor starts. Style changes made from the menus are
/// not written back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppSettings {
    #[serde(default = "default_window_width")]
    pub window_width: i32,

    #[serde(default = "default_window_height")]
    pub window_height: i32,

    #[serde(default)]
    pub font_family: FontFamily,

    #[serde(default)]
    pub font_size: FontSize,

    #[serde(default)]
    pub text_color: TextColor,

    #[serde(default = "default_word_wrap")]
    pub word_wrap: bool,
}

fn default_window_width() -> i32 {
    800
}

fn default_window_height() -> i32 {
    600
}

fn default_word_wrap() -> bool {
    true
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            window_width: default_window_width(),
            window_height: default_window_height(),
            font_family: FontFamily::default(),
            font_size: FontSize::default(),
            text_color: TextColor::default(),
            word_wrap: default_word_wrap(),
        }
    }
}

impl AppSettings {
    /// Load settings from the platform config directory, falling back to defaults
    pub fn load() -> Self {
        Self::load_from(&Self::get_config_path())
    }

    /// Load settings from `path`. A missing or malformed file yields defaults.
    pub fn load_from(path: &Path) -> Self {
        match Self::read_from(path) {
            Ok(settings) => settings,
            Err(AppError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no settings file, using defaults");
                Self::default()
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), "Failed to load settings: {}. Using defaults.", e);
                Self::default()
            }
        }
    }

    pub fn read_from(path: &Path) -> Result<Self, AppError> {
        let contents = fs::read_to_string(path)?;
        let settings: Self = serde_json::from_str(&contents)?;
        Ok(settings.sanitized())
    }

    /// Style the document starts with
    pub fn initial_style(&self) -> TextStyle {
        TextStyle::new(self.font_family, self.font_size, self.text_color)
    }

    /// Get config file path (cross-platform)
    pub fn get_config_path() -> PathBuf {
        let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push("my-text-editor");
        path.push("settings.json");
        path
    }

    fn sanitized(mut self) -> Self {
        if self.window_width <= 0 {
            self.window_width = default_window_width();
        }
        if self.window_height <= 0 {
            self.window_height = default_window_height();
        }
        self
    }
}
