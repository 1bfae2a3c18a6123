//! Shared text normalization helpers for behavioural test suites.

/// Strips one layer of matching single or double quotes from a value.
#[must_use]
pub fn unquote(value: &str) -> &str {
    let trimmed = value.trim();
    if let Some(stripped) = trimmed.strip_prefix('"').and_then(|v| v.strip_suffix('"')) {
        return stripped;
    }
    if let Some(stripped) = trimmed
        .strip_prefix('\'')
        .and_then(|v| v.strip_suffix('\''))
    {
        return stripped;
    }
    trimmed
}

/// Normalizes a scalar placeholder by trimming and unquoting one outer layer.
#[must_use]
pub fn normalize_scalar(value: &str) -> String {
    unquote(value).trim().to_owned()
}

/// Maps the placeholder `none` (any case) to `None`, otherwise returns the
/// normalized scalar.
#[must_use]
pub fn optional_scalar(value: &str) -> Option<String> {
    let scalar = normalize_scalar(value);
    if scalar.eq_ignore_ascii_case("none") {
        None
    } else {
        Some(scalar)
    }
}
