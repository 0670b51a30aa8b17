//! # Page Builder Core
//!
//! Element model and editor state for a visual page builder.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │                builder-core                 │
//! ├─────────────────────────────────────────────┤
//! │  Element Model   │  Editor State            │
//! │  - Kinds         │  - Action reducer        │
//! │  - Geometry      │  - Undo/redo history     │
//! │  - Content       │  - Drag protocol         │
//! ├─────────────────────────────────────────────┤
//! │  Devices         │  Media Library           │
//! │  - Presets       │  - Uploads (data URLs)   │
//! │  - Orientation   │  - External URLs         │
//! └─────────────────────────────────────────────┘
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod device;
pub mod element;
pub mod error;
pub mod history;
pub mod interaction;
pub mod language;
pub mod media;
pub mod patch;
pub mod state;

pub use config::EditorConfig;
pub use device::{CanvasSize, DevicePreset, Orientation};
pub use element::{
    Appearance, BackgroundImage, Content, Element, ElementId, ElementKind, ElementType, Geometry,
    GridPlacement, Rect, TextAlign, Typography, Unit, VerticalAlign,
};
pub use error::{BuilderError, BuilderResult};
pub use history::History;
pub use interaction::{DragState, Point};
pub use language::DEFAULT_LANGUAGE;
pub use media::{MediaItem, MediaKind, MediaLibrary, UploadedFile};
pub use patch::{ElementPatch, GridPatch, PlacementPatch};
pub use state::{Action, EditorState};

/// Builder core version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
