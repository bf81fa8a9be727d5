//! Response body decoding
//!
//! Fetched bytes are decoded according to the protocol-declared charset when
//! one is present, falling back to BOM sniffing and finally UTF-8.
//! Undecodable byte sequences become replacement characters rather than
//! failing the fetch.

use encoding_rs::{Encoding, UTF_8};

/// Extracts the charset parameter from a Content-Type header value
///
/// # Example
///
/// ```
/// use ladle::crawler::charset_from_content_type;
///
/// let charset = charset_from_content_type("text/html; charset=ISO-8859-1");
/// assert_eq!(charset.as_deref(), Some("iso-8859-1"));
/// ```
pub fn charset_from_content_type(content_type: &str) -> Option<String> {
    content_type.split(';').skip(1).find_map(|param| {
        let param = param.trim();
        let value = param.strip_prefix("charset=")?;
        let value = value.trim_matches('"').trim();
        (!value.is_empty()).then(|| value.to_lowercase())
    })
}

/// Decodes response bytes into text
///
/// Resolution order: the declared charset hint, then a byte-order mark,
/// then UTF-8. Returns the decoded text together with the name of the
/// encoding actually used (which may differ from the hint when the bytes
/// carry a BOM).
pub fn decode_body(bytes: &[u8], charset_hint: Option<&str>) -> (String, String) {
    let encoding = charset_hint
        .and_then(|label| Encoding::for_label(label.as_bytes()))
        .unwrap_or(UTF_8);

    let (text, used, _had_errors) = encoding.decode(bytes);
    (text.into_owned(), used.name().to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_charset_extracted_from_content_type() {
        assert_eq!(
            charset_from_content_type("text/html; charset=utf-8"),
            Some("utf-8".to_string())
        );
    }

    #[test]
    fn test_charset_quoted_and_mixed_case() {
        assert_eq!(
            charset_from_content_type(r#"text/html; charset="ISO-8859-1""#),
            Some("iso-8859-1".to_string())
        );
    }

    #[test]
    fn test_content_type_without_charset() {
        assert_eq!(charset_from_content_type("text/html"), None);
        assert_eq!(charset_from_content_type("text/html; boundary=x"), None);
    }

    #[test]
    fn test_decode_utf8_by_default() {
        let (text, encoding) = decode_body("crêpes".as_bytes(), None);
        assert_eq!(text, "crêpes");
        assert_eq!(encoding, "utf-8");
    }

    #[test]
    fn test_decode_with_declared_charset() {
        // "crêpes" in latin-1
        let bytes = [0x63, 0x72, 0xea, 0x70, 0x65, 0x73];
        let (text, encoding) = decode_body(&bytes, Some("iso-8859-1"));
        assert_eq!(text, "crêpes");
        assert_eq!(encoding, "windows-1252");
    }

    #[test]
    fn test_undecodable_bytes_replaced_not_fatal() {
        let bytes = [0x68, 0x69, 0xff, 0xfe];
        let (text, _) = decode_body(&bytes, Some("utf-8"));
        assert!(text.starts_with("hi"));
        assert!(text.contains('\u{fffd}'));
    }

    #[test]
    fn test_unknown_charset_label_falls_back_to_utf8() {
        let (text, encoding) = decode_body(b"plain", Some("no-such-charset"));
        assert_eq!(text, "plain");
        assert_eq!(encoding, "utf-8");
    }
}
