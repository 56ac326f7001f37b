//! Small Shared Helpers

/// Truncate to at most `max` characters, on a char boundary.
///
/// Byte-index slicing would panic on multi-byte content; file samples
/// and commit messages routinely contain it.
pub fn truncate_chars(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

/// Lowercased final extension segment of a file name.
///
/// Extensionless names ("Makefile") yield the whole lowercased name,
/// matching how the extension table treats them: unknown, generic.
pub fn extension_of(file_name: &str) -> String {
    file_name
        .rsplit('.')
        .next()
        .unwrap_or(file_name)
        .to_lowercase()
}
