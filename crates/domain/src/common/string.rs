//! String helpers for optional form fields and case-insensitive search.

/// Turns an optional form field into `None` when it is empty or whitespace.
///
/// ```
/// use atelier_domain::common::optional_field;
///
/// assert_eq!(optional_field("Acme"), Some("Acme".to_string()));
/// assert_eq!(optional_field("  "), None);
/// ```
pub fn optional_field(value: impl Into<String>) -> Option<String> {
    let value = value.into();
    if is_blank(&value) {
        None
    } else {
        Some(value)
    }
}

/// True when the string has no non-whitespace characters.
pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Case-insensitive substring test. `needle` must already be lowercase.
///
/// Callers lowercase the query once and reuse it across a whole collection.
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}
