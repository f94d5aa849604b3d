//! Whitespace normalization for extracted field values.

/// Collapse runs of whitespace (including tabs and newlines) to a single
/// space and trim the result.
///
/// Returns `None` for empty or whitespace-only input, never an empty
/// string. Idempotent: normalizing twice equals normalizing once.
pub fn normalize(text: &str) -> Option<String> {
    let collapsed = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if collapsed.is_empty() {
        None
    } else {
        Some(collapsed)
    }
}

/// [`normalize`] lifted over optional field values.
pub fn normalize_field(text: Option<String>) -> Option<String> {
    text.as_deref().and_then(normalize)
}
