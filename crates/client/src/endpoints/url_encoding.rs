//! Percent-encoding for identifiers interpolated into API paths.
//!
//! Dashboard slugs are caller-supplied strings; numeric ids are encoded too so
//! every path is built the same way. A segment never introduces a new `/`,
//! query string or fragment.
//!
//! ```
//! use redash_client::endpoints::encode_path_segment;
//!
//! assert_eq!(encode_path_segment("service-slos"), "service-slos");
//! assert_eq!(encode_path_segment("a/b"), "a%2Fb");
//! ```

use percent_encoding::{AsciiSet, CONTROLS, percent_encode};

/// Characters percent-encoded inside a single path segment.
///
/// RFC 3986 reserved delimiters plus the characters reqwest/url would
/// otherwise reinterpret. `%` is included so pre-encoded input is not decoded
/// twice.
pub const PATH_SEGMENT_ENCODE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'[')
    .add(b'\\')
    .add(b']')
    .add(b'^')
    .add(b'`')
    .add(b'{')
    .add(b'|')
    .add(b'}')
    .add(b'+')
    .add(b',')
    .add(b';');

/// Percent-encode a value for use as one URL path segment.
pub fn encode_path_segment(segment: &str) -> String {
    percent_encode(segment.as_bytes(), PATH_SEGMENT_ENCODE_SET).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugs_pass_through() {
        assert_eq!(encode_path_segment("service-slos"), "service-slos");
        assert_eq!(encode_path_segment("new_dashboard.v2"), "new_dashboard.v2");
        assert_eq!(encode_path_segment("42"), "42");
    }

    #[test]
    fn test_path_delimiters_are_encoded() {
        assert_eq!(encode_path_segment("a/b"), "a%2Fb");
        assert_eq!(encode_path_segment("a?b=1"), "a%3Fb=1");
        assert_eq!(encode_path_segment("a#b"), "a%23b");
    }

    #[test]
    fn test_percent_is_not_double_decoded() {
        assert_eq!(encode_path_segment("a%20b"), "a%2520b");
    }

    #[test]
    fn test_space_and_unicode() {
        assert_eq!(encode_path_segment("my dash"), "my%20dash");
        assert_eq!(encode_path_segment("caf\u{00e9}"), "caf%C3%A9");
    }

    #[test]
    fn test_empty() {
        assert_eq!(encode_path_segment(""), "");
    }
}
