//! Room and door names.
//!
//! Typed arguments are normalized before lookup, so a name on the map is only
//! reachable if it is already in normal form: lowercase, single spaces, no
//! surrounding whitespace.

/// Returns `text` lowercased with runs of whitespace collapsed to one space.
#[must_use]
pub fn normalize_name(text: &str) -> String {
    text.split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Returns true if `name` is non-empty and equal to its normal form.
#[must_use]
pub fn is_normalized(name: &str) -> bool {
    !name.is_empty() && normalize_name(name) == name
}
