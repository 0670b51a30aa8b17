//! Editor configuration.
//!
//! Every field has a default, so a partial JSON document such as
//! `{"device": "mobile"}` is a valid configuration.

use serde::{Deserialize, Serialize};

use crate::device::{DevicePreset, Orientation};
use crate::language::{validate_language_code, DEFAULT_LANGUAGE};
use crate::BuilderResult;

/// Default number of history snapshots kept before the oldest are dropped.
pub const DEFAULT_HISTORY_CAPACITY: usize = 1000;

/// Smallest allowed canvas zoom.
pub const MIN_ZOOM: f32 = 0.25;

/// Largest allowed canvas zoom.
pub const MAX_ZOOM: f32 = 3.0;

/// Startup configuration of an editor session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Initial device preset.
    pub device: DevicePreset,
    /// Initial orientation.
    pub orientation: Orientation,
    /// Initial display language.
    pub language: String,
    /// Maximum number of undo snapshots.
    pub history_capacity: usize,
    /// Lower zoom bound.
    pub min_zoom: f32,
    /// Upper zoom bound.
    pub max_zoom: f32,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            device: DevicePreset::default(),
            orientation: Orientation::default(),
            language: DEFAULT_LANGUAGE.to_string(),
            history_capacity: DEFAULT_HISTORY_CAPACITY,
            min_zoom: MIN_ZOOM,
            max_zoom: MAX_ZOOM,
        }
    }
}

impl EditorConfig {
    /// Parse a configuration from JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or the language code is invalid.
    pub fn from_json(json: &str) -> BuilderResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        validate_language_code(&config.language)?;
        Ok(config)
    }

    /// Clamp a zoom level to the configured bounds.
    #[must_use]
    pub fn clamp_zoom(&self, zoom: f32) -> f32 {
        let (lo, hi) = if self.min_zoom <= self.max_zoom {
            (self.min_zoom, self.max_zoom)
        } else {
            (self.max_zoom, self.min_zoom)
        };
        if zoom.is_nan() {
            return 1.0_f32.clamp(lo, hi);
        }
        zoom.clamp(lo, hi)
    }
}
