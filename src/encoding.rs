//! Percent-encoding and trimming helpers shared by the decoder, the
//! component types and the serializer.

use pct_str::PctStr;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, PercentEncode, percent_decode_str, utf8_percent_encode};

/// Bytes encoded in every serialized component.
///
/// Everything except ASCII alphanumerics and `. - _ ~ +` is escaped, so `/`
/// inside a segment value always becomes `%2F`.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'.')
    .remove(b'-')
    .remove(b'_')
    .remove(b'~')
    .remove(b'+');

/// Percent-encodes a decoded component value for the canonical form.
pub(crate) fn encode(value: &str) -> PercentEncode<'_> {
    utf8_percent_encode(value, COMPONENT)
}

/// Percent-decodes a raw component value.
///
/// Returns `None` when an escape is malformed (a `%` not followed by two hex
/// digits) or the decoded bytes are not UTF-8. `+` is kept as-is.
pub(crate) fn decode(raw: &str) -> Option<String> {
    if PctStr::new(raw).is_err() {
        return None;
    }
    percent_decode_str(raw)
        .decode_utf8()
        .ok()
        .map(std::borrow::Cow::into_owned)
}

/// Trims ASCII spaces and control characters from both ends.
///
/// Unicode whitespace such as U+2003 is data and is kept.
pub(crate) fn trim(value: &str) -> &str {
    value.trim_matches(|c: char| c <= ' ')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_keeps_unreserved() {
        assert_eq!(encode("a.b-c_d~e+f").to_string(), "a.b-c_d~e+f");
    }

    #[test]
    fn encode_escapes_separators() {
        assert_eq!(encode("a/b").to_string(), "a%2Fb");
        assert_eq!(encode("@scope").to_string(), "%40scope");
        assert_eq!(encode("sha256:abc").to_string(), "sha256%3Aabc");
        assert_eq!(encode("x y").to_string(), "x%20y");
        assert_eq!(encode("k=v&w").to_string(), "k%3Dv%26w");
    }

    #[test]
    fn encode_escapes_non_ascii_as_utf8() {
        assert_eq!(encode("é").to_string(), "%C3%A9");
    }

    #[test]
    fn decode_plain_and_escaped() {
        assert_eq!(decode("%40angular").as_deref(), Some("@angular"));
        assert_eq!(decode("%41%42%43").as_deref(), Some("ABC"));
        assert_eq!(decode("git+https").as_deref(), Some("git+https"));
        assert_eq!(decode("100%25").as_deref(), Some("100%"));
    }

    #[test]
    fn decode_rejects_malformed_escapes() {
        assert_eq!(decode("%GG"), None);
        assert_eq!(decode("abc%"), None);
        assert_eq!(decode("abc%4"), None);
        assert_eq!(decode("%%41"), None);
    }

    #[test]
    fn decode_rejects_malformed_escape_after_valid_one() {
        assert_eq!(decode("%41%G1"), None);
        assert_eq!(decode("ok%20then%"), None);
    }

    #[test]
    fn decode_rejects_invalid_utf8() {
        assert_eq!(decode("%80"), None);
    }

    #[test]
    fn trim_strips_ascii_blanks_only() {
        assert_eq!(trim(" \tname\r\n"), "name");
        assert_eq!(trim("\u{0}name\u{1f}"), "name");
        assert_eq!(trim("\u{2003}name\u{2003}"), "\u{2003}name\u{2003}");
        assert_eq!(trim("\u{a0}name"), "\u{a0}name");
        assert_eq!(trim(" \u{2003} "), "\u{2003}");
    }
}
