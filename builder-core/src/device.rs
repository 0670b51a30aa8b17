//! Device presets that size the editing canvas.

use serde::{Deserialize, Serialize};

/// Size of the canvas in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CanvasSize {
    /// Width in pixels.
    pub width: f32,
    /// Height in pixels.
    pub height: f32,
}

impl CanvasSize {
    /// Create a canvas size.
    #[must_use]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Simulated device the page is designed for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DevicePreset {
    /// Phone, 375x667.
    Mobile,
    /// Tablet, 768x1024.
    Tablet,
    /// Desktop browser, 1280x800.
    #[default]
    Desktop,
    /// Television, 1920x1080.
    Tv,
    /// Portrait kiosk, 1080x1920.
    Kiosk,
    /// Monitor, 1440x900.
    Monitor,
}

impl DevicePreset {
    /// Native (portrait) size of the device.
    #[must_use]
    pub const fn size(self) -> CanvasSize {
        match self {
            Self::Mobile => CanvasSize::new(375.0, 667.0),
            Self::Tablet => CanvasSize::new(768.0, 1024.0),
            Self::Desktop => CanvasSize::new(1280.0, 800.0),
            Self::Tv => CanvasSize::new(1920.0, 1080.0),
            Self::Kiosk => CanvasSize::new(1080.0, 1920.0),
            Self::Monitor => CanvasSize::new(1440.0, 900.0),
        }
    }

    /// Whether the device can be rotated to landscape.
    ///
    /// Fixed-orientation screens (tv, monitor, desktop) ignore the orientation.
    #[must_use]
    pub const fn supports_rotation(self) -> bool {
        !matches!(self, Self::Tv | Self::Monitor | Self::Desktop)
    }

    /// Canvas size for this device in the given orientation.
    #[must_use]
    pub const fn canvas_size(self, orientation: Orientation) -> CanvasSize {
        let size = self.size();
        match orientation {
            Orientation::Landscape if self.supports_rotation() => {
                CanvasSize::new(size.height, size.width)
            }
            _ => size,
        }
    }
}

/// Device orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    /// Native orientation.
    #[default]
    Portrait,
    /// Rotated by 90 degrees.
    Landscape,
}
