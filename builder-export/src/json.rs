//! JSON template format.

use builder_core::Element;

use crate::error::{ExportResult, ImportError, ImportResult};
use crate::record::{records, TemplateRecord};

/// Serialize the element list as a pretty-printed JSON array of records.
///
/// # Errors
///
/// Returns an error if JSON encoding fails.
pub fn to_json(elements: &[Element]) -> ExportResult<String> {
    Ok(serde_json::to_string_pretty(&records(elements))?)
}

/// Parse JSON template text into records.
///
/// A single object is treated as a one-record array.
///
/// # Errors
///
/// Returns [`ImportError::InvalidJson`] for malformed JSON or records of the
/// wrong shape, and [`ImportError::InvalidFormat`] for an empty array.
pub fn parse_json(text: &str) -> ImportResult<Vec<TemplateRecord>> {
    let value: serde_json::Value = serde_json::from_str(text)?;
    let parsed: Vec<TemplateRecord> = if value.is_array() {
        serde_json::from_value(value)?
    } else {
        vec![serde_json::from_value(value)?]
    };
    if parsed.is_empty() {
        return Err(ImportError::InvalidFormat);
    }
    Ok(parsed)
}
