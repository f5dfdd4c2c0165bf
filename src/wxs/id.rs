//! Stable identifier derivation for descriptor elements.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use std::path::Path;

// Everything except ASCII alphanumerics and `- _ . ! ~ * ' ( )` is escaped,
// matching JavaScript's encodeURIComponent character set.
const ID_ESCAPE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Derives a stable, attribute-safe identifier from a relative path.
///
/// The mapping is deterministic (same path always yields the same
/// identifier), so identifiers are stable across runs, and unique because
/// relative paths within one tree are unique.
pub fn escape_id(path: &Path) -> String {
    utf8_percent_encode(&path.to_string_lossy(), ID_ESCAPE).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn separator_is_escaped() {
        assert_eq!(escape_id(Path::new("sub/b.txt")), "sub%2Fb.txt");
    }

    #[test]
    fn spaces_are_escaped() {
        assert_eq!(escape_id(Path::new("my app.exe")), "my%20app.exe");
    }

    #[test]
    fn unreserved_characters_pass_through() {
        let path = "a-b_c.d!e~f*g'h(i)j";
        assert_eq!(escape_id(Path::new(path)), path);
    }

    #[test]
    fn escaping_is_deterministic() {
        let path = Path::new("dir with spaces/file#1.txt");
        assert_eq!(escape_id(path), escape_id(path));
    }

    #[test]
    fn non_ascii_is_percent_encoded() {
        assert_eq!(escape_id(Path::new("ü.txt")), "%C3%BC.txt");
    }
}
