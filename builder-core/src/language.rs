//! Display-language codes.

use crate::{BuilderError, BuilderResult};

/// The language every element always carries text for.
pub const DEFAULT_LANGUAGE: &str = "en";

/// Check a language code of the form `xx` or `xx-YY`.
#[must_use]
pub fn is_valid_language_code(code: &str) -> bool {
    let (primary, region) = match code.split_once('-') {
        Some((primary, region)) => (primary, Some(region)),
        None => (code, None),
    };
    let primary_ok = primary.len() == 2 && primary.bytes().all(|b| b.is_ascii_lowercase());
    let region_ok = region.map_or(true, |r| {
        r.len() == 2 && r.bytes().all(|b| b.is_ascii_alphabetic())
    });
    primary_ok && region_ok
}

/// Validate a language code.
///
/// # Errors
///
/// Returns [`BuilderError::InvalidLanguage`] if the code is malformed.
pub fn validate_language_code(code: &str) -> BuilderResult<()> {
    if is_valid_language_code(code) {
        Ok(())
    } else {
        Err(BuilderError::InvalidLanguage(code.to_string()))
    }
}
