//! # Page Builder Export
//!
//! Code generation and template import for the page builder.
//!
//! ## Formats
//!
//! | Format | File | Import |
//! |--------|------|--------|
//! | HTML document | `template.html` | no |
//! | JSON records | `template.json` | yes |
//! | YAML layout | `template.yml` | yes |
//! | JSX component | `TemplateComponent.jsx` | no |
//!
//! All emitters skip grid items at the top level and render them inside
//! their grid.

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub(crate) mod css;

pub mod component;
pub mod error;
pub mod export;
pub mod html;
pub mod import;
pub mod json;
pub mod record;
pub mod yaml;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use error::{ExportError, ExportResult, ImportError, ImportResult};
pub use export::{ExportConfig, ExportFormat, TemplateExporter};
pub use import::{import_file, import_into, parse_records, records_to_elements, ImportFormat};
pub use record::{StyleMap, TemplateRecord, TextEntry, TextStyle};

/// Builder export version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
