//! Identifier sanitization for the path-addressed store.

/// Normalizes a legacy identifier into a store-safe key.
///
/// Blank input yields the empty string. Everything else is trimmed,
/// uppercased, stripped of internal whitespace, and every character outside
/// `[A-Z0-9]` becomes `_`.
pub fn sanitize_id(value: &str) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return String::new();
    }
    trimmed
        .chars()
        .filter(|ch| !ch.is_whitespace())
        .map(|ch| {
            let upper = ch.to_ascii_uppercase();
            if upper.is_ascii_uppercase() || upper.is_ascii_digit() {
                upper
            } else {
                '_'
            }
        })
        .collect()
}

/// Replaces only the characters the store forbids in keys (`. # $ [ ] /`).
///
/// Narrower than [`sanitize_id`]: case and spacing survive, so the result
/// stays readable inside composite grouping keys.
pub fn store_safe_key(value: &str) -> String {
    value
        .chars()
        .map(|ch| match ch {
            '.' | '#' | '$' | '[' | ']' | '/' => '_',
            other => other,
        })
        .collect()
}
