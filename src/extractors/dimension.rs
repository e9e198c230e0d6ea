// src/extractors/dimension.rs
use once_cell::sync::Lazy;
use regex::Regex;

// One or more trailing unit tokens: whitespace, letters, optional period.
static UNIT_SUFFIX_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:\s+[A-Za-z]+\.?)+\s*$").expect("Failed to compile UNIT_SUFFIX_RE")
});

/// Strips trailing unit tokens (`in.`, `mm`, `in max`) from a dimension value.
/// Whatever numeric or fractional text precedes the units is kept as written.
pub fn strip_units(value: &str) -> String {
    let trimmed = value.trim();
    UNIT_SUFFIX_RE.replace(trimmed, "").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_inch_suffixes() {
        assert_eq!(strip_units("12.75 in."), "12.75");
        assert_eq!(strip_units("3/4 in"), "3/4");
        assert_eq!(strip_units("10 in"), "10");
    }

    #[test]
    fn test_value_without_units_is_unchanged() {
        assert_eq!(strip_units("42"), "42");
        assert_eq!(strip_units("  42 "), "42");
    }

    #[test]
    fn test_keeps_embedded_spaces_and_slashes() {
        assert_eq!(strip_units("1 1/2 in."), "1 1/2");
        assert_eq!(strip_units("5.25 in. max"), "5.25");
    }

    #[test]
    fn test_sentinel_passes_through() {
        assert_eq!(strip_units("N/A"), "N/A");
    }
}
