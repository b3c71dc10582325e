//! Configuration file parsing utilities.
//!
//! Helpers for the `key = value` format used by `settings.conf`: comment
//! skipping, key normalization and inline comment stripping.

/// What: Check if a line should be skipped (empty or comment).
///
/// Inputs:
/// - `line`: Line to check
///
/// Output:
/// - `true` if the line should be skipped, `false` otherwise
///
/// Details:
/// - Skips empty lines and lines starting with `#`, `//`, or `;`
#[must_use]
pub fn skip_comment_or_empty(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.is_empty()
        || trimmed.starts_with('#')
        || trimmed.starts_with("//")
        || trimmed.starts_with(';')
}

/// What: Parse a key-value pair from a line.
///
/// Inputs:
/// - `line`: Line containing `key=value`
///
/// Output:
/// - `Some((key, value))` with a normalized key; `None` when there is no `=`
///
/// Details:
/// - Splits on the first `=` so URLs with query strings survive.
/// - Keys are lowercased and `.`, `-` and spaces become `_`.
/// - Inline comments are stripped from the value.
#[must_use]
pub fn parse_key_value(line: &str) -> Option<(String, String)> {
    let (raw_key, raw_val) = line.trim().split_once('=')?;
    let key = raw_key.trim().to_lowercase().replace(['.', '-', ' '], "_");
    if key.is_empty() {
        return None;
    }
    Some((key, strip_inline_comment(raw_val).to_string()))
}

/// What: Remove a trailing ` # comment` from a value.
///
/// Details:
/// - Only a `#` preceded by whitespace starts a comment, so URL fragments
///   such as `http://host/#x` are kept intact.
#[must_use]
pub fn strip_inline_comment(s: &str) -> &str {
    let bytes = s.as_bytes();
    for (i, b) in bytes.iter().enumerate() {
        if *b == b'#' && (i == 0 || bytes[i - 1].is_ascii_whitespace()) {
            return s[..i].trim();
        }
    }
    s.trim()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Comment and blank lines are skipped; regular lines are not.
    fn skip_comment_or_empty_detects_comments() {
        assert!(skip_comment_or_empty(""));
        assert!(skip_comment_or_empty("   "));
        assert!(skip_comment_or_empty("# note"));
        assert!(skip_comment_or_empty("// note"));
        assert!(skip_comment_or_empty("; note"));
        assert!(!skip_comment_or_empty("api_base_url = x"));
    }

    #[test]
    /// What: Keys are normalized and values keep everything after the first `=`.
    ///
    /// Inputs:
    /// - `"API-Base.URL = http://h:1/?a=b # local"`
    ///
    /// Output:
    /// - Key `api_base_url`, value `http://h:1/?a=b`.
    fn parse_key_value_normalizes_and_strips() {
        let (k, v) = parse_key_value("API-Base.URL = http://h:1/?a=b # local").expect("pair");
        assert_eq!(k, "api_base_url");
        assert_eq!(v, "http://h:1/?a=b");
        assert_eq!(parse_key_value("no equals here"), None);
        assert_eq!(parse_key_value(" = value"), None);
    }

    #[test]
    /// What: A `#` glued to the value is not a comment.
    fn strip_inline_comment_keeps_fragments() {
        assert_eq!(strip_inline_comment("http://h/#frag"), "http://h/#frag");
        assert_eq!(strip_inline_comment("42   # answer"), "42");
        assert_eq!(strip_inline_comment("#all comment"), "");
    }
}
