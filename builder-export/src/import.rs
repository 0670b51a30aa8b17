//! Template import into an editor.
//!
//! Records become plain `div` elements with fresh IDs: position, size,
//! background color and per-language text are read back, everything else
//! takes the element defaults. Grid children are not imported.

use std::fmt;
use std::path::Path;

use builder_core::element::{Content, Element, ElementKind, Unit};
use builder_core::{Action, EditorState, DEFAULT_LANGUAGE};

use crate::error::{ImportError, ImportResult};
use crate::json::parse_json;
use crate::record::TemplateRecord;
use crate::yaml::parse_yaml;

const FALLBACK_X: f32 = 50.0;
const FALLBACK_Y: f32 = 50.0;
const FALLBACK_WIDTH: f32 = 200.0;
const FALLBACK_HEIGHT: f32 = 100.0;

/// Template text format accepted by the importer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportFormat {
    /// JSON array (or single object) of records.
    Json,
    /// YAML template layout.
    Yaml,
}

impl ImportFormat {
    /// Detect the format from a `.json`, `.yaml` or `.yml` file extension.
    ///
    /// # Errors
    ///
    /// Returns [`ImportError::UnsupportedFile`] for any other extension.
    pub fn from_path(path: &Path) -> ImportResult<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);
        match extension.as_deref() {
            Some("json") => Ok(Self::Json),
            Some("yaml" | "yml") => Ok(Self::Yaml),
            _ => Err(ImportError::UnsupportedFile(path.display().to_string())),
        }
    }

    /// Lowercase format name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Yaml => "yaml",
        }
    }
}

impl fmt::Display for ImportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parse template text into records.
///
/// # Errors
///
/// Returns an [`ImportError`] if the text is malformed or contains no records.
pub fn parse_records(format: ImportFormat, text: &str) -> ImportResult<Vec<TemplateRecord>> {
    match format {
        ImportFormat::Json => parse_json(text),
        ImportFormat::Yaml => parse_yaml(text),
    }
}

/// Build fresh `div` elements from records, numbering paint order from `first_z`.
#[must_use]
pub fn records_to_elements(records: &[TemplateRecord], first_z: i32) -> Vec<Element> {
    records
        .iter()
        .zip(first_z..)
        .map(|(record, z_index)| record_to_element(record, z_index))
        .collect()
}

fn record_to_element(record: &TemplateRecord, z_index: i32) -> Element {
    let mut element = Element::new(ElementKind::Div, z_index);
    if !record.name.is_empty() {
        element.name.clone_from(&record.name);
    }
    element.editable = record.editable;

    let style = &record.style;
    let geometry = &mut element.geometry;
    let (x, _) = length(style.get("left"), FALLBACK_X);
    let (y, _) = length(style.get("top"), FALLBACK_Y);
    let (width, width_unit) = length(style.get("width"), FALLBACK_WIDTH);
    let (height, height_unit) = length(style.get("height"), FALLBACK_HEIGHT);
    geometry.x = x;
    geometry.y = y;
    geometry.width = width;
    geometry.height = height;
    geometry.width_unit = width_unit;
    geometry.height_unit = height_unit;

    if let Some(color) = style.get("backgroundColor") {
        element.appearance.background_color = color.to_string();
    }

    if !record.text.is_empty() {
        let mut content = Content::new(
            record
                .text
                .get(DEFAULT_LANGUAGE)
                .map(|entry| entry.text.clone())
                .unwrap_or_default(),
        );
        for (language, entry) in &record.text {
            content.set(language.clone(), entry.text.clone());
        }
        element.content = content;

        let styled = record
            .text
            .get(DEFAULT_LANGUAGE)
            .or_else(|| record.text.values().next());
        if let Some(entry) = styled {
            if !entry.style.color.is_empty() {
                element.typography.text_color.clone_from(&entry.style.color);
            }
            if let Some(size) = parse_number(&entry.style.font_size) {
                element.typography.font_size = size;
            }
        }
    }
    element
}

/// Numeric value and unit of a CSS length, with a fallback for unparsable input.
fn length(value: Option<&str>, fallback: f32) -> (f32, Unit) {
    let Some(value) = value else {
        return (fallback, Unit::Px);
    };
    let unit = if value.trim_end().ends_with('%') {
        Unit::Percent
    } else {
        Unit::Px
    };
    (parse_number(value).unwrap_or(fallback), unit)
}

/// Leading decimal number of a string, ignoring any trailing unit.
fn parse_number(value: &str) -> Option<f32> {
    let value = value.trim_start();
    let mut end = 0;
    let mut seen_digit = false;
    let mut seen_dot = false;
    for (index, c) in value.char_indices() {
        match c {
            '+' | '-' if index == 0 => {}
            '0'..='9' => seen_digit = true,
            '.' if !seen_dot => seen_dot = true,
            _ => break,
        }
        end = index + c.len_utf8();
    }
    if !seen_digit {
        return None;
    }
    value[..end].trim_end_matches('.').parse().ok()
}

/// Parse `text` and append the resulting elements to the editor.
///
/// Returns the number of elements added. On error the editor is untouched.
///
/// # Errors
///
/// Returns an [`ImportError`] if the text is malformed or contains no records.
pub fn import_into(
    state: &mut EditorState,
    format: ImportFormat,
    text: &str,
) -> ImportResult<usize> {
    let records = parse_records(format, text).inspect_err(|err| {
        tracing::warn!("Template import failed: {err}");
    })?;

    #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
    let first_z = state.elements().len() as i32;
    let elements = records_to_elements(&records, first_z);
    let count = elements.len();
    state.dispatch(Action::AppendElements { elements });
    tracing::info!("Imported {count} elements from {format}");
    Ok(count)
}

/// Read a `.json`, `.yaml` or `.yml` template file and import it.
///
/// # Errors
///
/// Returns an [`ImportError`] if the extension is unsupported, the file
/// cannot be read, or its contents fail to parse.
pub fn import_file(state: &mut EditorState, path: &Path) -> ImportResult<usize> {
    let format = ImportFormat::from_path(path)?;
    let text = std::fs::read_to_string(path)?;
    import_into(state, format, &text)
}
