// src/extractors/identifier.rs
use once_cell::sync::Lazy;
use regex::Regex;
use std::path::Path;

use super::attributes::MISSING;

// Digits glued to the `_Part_` token, e.g. `100234_Part_Bushing.pdf`
static PART_NUMBER_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(\d+)_Part_").expect("Failed to compile PART_NUMBER_RE")
});

/// Derives the document number from the file name of `path`.
/// Returns the `N/A` sentinel when the name carries no `<digits>_Part_` token.
pub fn extract_number<P: AsRef<Path>>(path: P) -> String {
    let path = path.as_ref();
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy())
        .unwrap_or_else(|| path.to_string_lossy());

    PART_NUMBER_RE
        .captures(&file_name)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .unwrap_or_else(|| MISSING.to_string())
}
