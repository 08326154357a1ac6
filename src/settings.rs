//! Persisted autoclicker settings
//!
//! Settings are a plain value: the worker receives a copy when it starts and
//! never observes later edits. Saving and reloading go through the JSON file.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Default settings file, relative to the working directory
pub const SETTINGS_FILE: &str = "settings.json";

pub const DEFAULT_IMAGE_NAME: &str = "images/exclamation.png";
pub const DEFAULT_BOX_SIZE: u32 = 200;
pub const DEFAULT_THRESHOLD: f32 = 0.75;
pub const DEFAULT_SHOW_PREVIEW: bool = true;

/// Allowed capture box edge length in pixels
pub const BOX_SIZE_MIN: u32 = 50;
pub const BOX_SIZE_MAX: u32 = 1000;

pub type SettingsResult<T> = Result<T, SettingsError>;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Settings file I/O failed: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    #[error("Settings file is not valid JSON: {source}")]
    Parse {
        #[from]
        source: serde_json::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Path of the template image to search for
    pub image_name: String,
    /// Edge length of the square capture region
    pub box_size: u32,
    /// Minimum confidence that triggers a click (0.0 to 1.0)
    pub threshold: f32,
    /// Whether to render the preview of the captured region
    pub show_preview: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            image_name: DEFAULT_IMAGE_NAME.to_string(),
            box_size: DEFAULT_BOX_SIZE,
            threshold: DEFAULT_THRESHOLD,
            show_preview: DEFAULT_SHOW_PREVIEW,
        }
    }
}

impl Settings {
    /// Read settings from `path`. Keys missing from the file take their default.
    pub fn load(path: impl AsRef<Path>) -> SettingsResult<Self> {
        let text = fs::read_to_string(path.as_ref())?;
        let settings: Settings = serde_json::from_str(&text)?;
        Ok(settings.sanitized())
    }

    /// Write settings as JSON indented with four spaces
    pub fn save(&self, path: impl AsRef<Path>) -> SettingsResult<()> {
        let mut buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
        self.serialize(&mut serializer)?;
        buf.push(b'\n');
        fs::write(path.as_ref(), buf)?;
        Ok(())
    }

    /// Load settings, falling back to defaults when the file is missing or unreadable.
    ///
    /// The defaults are written back so the next start finds a valid file.
    pub fn load_or_init(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::load(path) {
            Ok(settings) => return settings,
            Err(SettingsError::Io { source }) if source.kind() == std::io::ErrorKind::NotFound => {
                log::info!("No settings at {}, writing defaults", path.display());
            }
            Err(e) => {
                log::warn!("⚠️ Error reading {}, using defaults: {}", path.display(), e);
            }
        }

        let defaults = Self::default();
        if let Err(e) = defaults.save(path) {
            log::warn!("⚠️ Could not write default settings to {}: {}", path.display(), e);
        }
        defaults
    }

    /// Clamp values into the ranges the controls allow
    pub fn sanitized(mut self) -> Self {
        let box_size = self.box_size.clamp(BOX_SIZE_MIN, BOX_SIZE_MAX);
        if box_size != self.box_size {
            log::warn!(
                "box_size {} outside {}..={}, using {}",
                self.box_size,
                BOX_SIZE_MIN,
                BOX_SIZE_MAX,
                box_size
            );
            self.box_size = box_size;
        }

        let threshold = if self.threshold.is_nan() {
            DEFAULT_THRESHOLD
        } else {
            self.threshold.clamp(0.0, 1.0)
        };
        if threshold != self.threshold {
            log::warn!("threshold {} outside 0.0..=1.0, using {}", self.threshold, threshold);
            self.threshold = threshold;
        }

        self
    }
}
