//! Camel-style case transform applied by the format adapters on write.

use crate::value::{FLAG_SEPARATOR, NAME_SEPARATOR};

/// Camel-cases one name segment.
///
/// The first character is lowercased and the remainder is left untouched; an
/// empty segment stays empty and a single-character segment is therefore
/// fully lowercased.
#[must_use]
pub fn camel_case_segment(segment: &str) -> String {
    let mut chars = segment.chars();
    let Some(first) = chars.next() else {
        return String::new();
    };
    let mut out = String::with_capacity(segment.len());
    out.extend(first.to_lowercase());
    out.push_str(chars.as_str());
    out
}

/// Camel-cases every segment of a possibly composite name.
///
/// The name is split on the flag separator, each segment is trimmed and
/// transformed independently, and the results are rejoined with the
/// canonical `", "` separator.
#[must_use]
pub fn camel_case_name(name: &str) -> String {
    let segments: Vec<String> = name
        .split(FLAG_SEPARATOR)
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .map(camel_case_segment)
        .collect();
    segments.join(NAME_SEPARATOR)
}
