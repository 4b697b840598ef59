//! Identifier shape checks for type references and field names.

/// Separator between the segments of a type path.
pub const PATH_SEPARATOR: &str = "::";

/// Ensure a type reference looks like a type identifier.
///
/// Segments are `::`-separated, non-empty, ASCII word characters, and the
/// final segment starts with an uppercase letter. Existence of the type is
/// never checked.
pub(crate) fn validate_type_ident(ident: &str, max_len: usize) -> Result<(), String> {
    if ident.is_empty() {
        return Err("type name is empty".to_string());
    }
    if ident.len() > max_len {
        return Err(format!("type name exceeds max length {max_len}"));
    }

    let mut segments = ident.split(PATH_SEPARATOR).peekable();
    while let Some(segment) = segments.next() {
        if segment.is_empty() {
            return Err("type path has an empty segment".to_string());
        }
        if !segment.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
            return Err(format!("segment '{segment}' must be ASCII word characters"));
        }
        if segment.starts_with(|c: char| c.is_ascii_digit()) {
            return Err(format!("segment '{segment}' starts with a digit"));
        }

        // last segment names the type itself
        if segments.peek().is_none() && !segment.starts_with(|c: char| c.is_ascii_uppercase()) {
            return Err(format!("'{segment}' must start with an uppercase letter"));
        }
    }

    Ok(())
}

/// Final segment of a type path: `library::Publisher` names `Publisher`.
#[must_use]
pub fn base_name(ident: &str) -> &str {
    ident.rsplit(PATH_SEPARATOR).next().unwrap_or(ident)
}

/// Ensure a field name is a lowercase ASCII identifier within the length limit.
pub(crate) fn validate_field_ident(ident: &str, max_len: usize) -> Result<(), String> {
    if ident.is_empty() {
        return Err("field name is empty".to_string());
    }
    if ident.len() > max_len {
        return Err(format!("field name exceeds max length {max_len}"));
    }
    if !ident.starts_with(|c: char| c.is_ascii_lowercase() || c == '_') {
        return Err("must start with a lowercase letter or '_'".to_string());
    }
    if !ident
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
    {
        return Err("must contain only [a-z0-9_]".to_string());
    }

    Ok(())
}
