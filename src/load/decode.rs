//! Input decoding with a single Big5 fallback.
//!
//! The input is decoded as UTF-8 first, with a leading byte-order mark
//! removed. Bytes that are not valid UTF-8 get exactly one more attempt as
//! Big5. Both decoders are strict: malformed input is an error, never
//! replacement characters.

use std::borrow::Cow;

use encoding_rs::{Encoding, BIG5, UTF_8};
use strum_macros::Display;

/// Text encoding an input file was successfully decoded with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum TextEncoding {
    /// UTF-8, with or without a byte-order mark
    #[strum(serialize = "UTF-8")]
    Utf8,
    /// Traditional Chinese legacy encoding, tried only when UTF-8 fails
    #[strum(serialize = "Big5")]
    Big5,
}

impl TextEncoding {
    fn codec(self) -> &'static Encoding {
        match self {
            TextEncoding::Utf8 => UTF_8,
            TextEncoding::Big5 => BIG5,
        }
    }

    fn decode(self, bytes: &[u8]) -> Option<Cow<'_, str>> {
        self.codec()
            .decode_without_bom_handling_and_without_replacement(bytes)
    }
}

/// Decodes `bytes`, trying UTF-8 then Big5.
///
/// Returns the text and the encoding that succeeded, or `None` when neither
/// decoder accepts the input.
pub fn decode_with_fallback(bytes: &[u8]) -> Option<(Cow<'_, str>, TextEncoding)> {
    if let Some(text) = TextEncoding::Utf8.decode(strip_utf8_bom(bytes)) {
        return Some((text, TextEncoding::Utf8));
    }

    log::warn!("Input is not valid UTF-8, retrying as Big5");
    TextEncoding::Big5
        .decode(bytes)
        .map(|text| (text, TextEncoding::Big5))
}

fn strip_utf8_bom(bytes: &[u8]) -> &[u8] {
    match Encoding::for_bom(bytes) {
        Some((encoding, bom_len)) if encoding == UTF_8 => &bytes[bom_len..],
        _ => bytes,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_utf8() {
        let (text, encoding) = decode_with_fallback("level,keyword\n1,髒話\n".as_bytes())
            .expect("valid UTF-8 should decode");
        assert_eq!(encoding, TextEncoding::Utf8);
        assert_eq!(text, "level,keyword\n1,髒話\n");
    }

    #[test]
    fn test_utf8_bom_is_removed() {
        let mut bytes = vec![0xEF, 0xBB, 0xBF];
        bytes.extend_from_slice(b"level,keyword\n");
        let (text, encoding) = decode_with_fallback(&bytes).expect("BOM input should decode");
        assert_eq!(encoding, TextEncoding::Utf8);
        assert!(text.starts_with("level"));
    }

    #[test]
    fn test_big5_fallback() {
        let source = "level,keyword\nA,測試\n";
        let (encoded, _, had_errors) = BIG5.encode(source);
        assert!(!had_errors);
        assert!(std::str::from_utf8(&encoded).is_err());

        let (text, encoding) = decode_with_fallback(&encoded).expect("Big5 input should decode");
        assert_eq!(encoding, TextEncoding::Big5);
        assert_eq!(text, source);
    }

    #[test]
    fn test_undecodable_input() {
        assert!(decode_with_fallback(&[0x41, 0xFF, 0xFF, 0x0A]).is_none());
    }

    #[test]
    fn test_encoding_display() {
        assert_eq!(TextEncoding::Utf8.to_string(), "UTF-8");
        assert_eq!(TextEncoding::Big5.to_string(), "Big5");
    }
}
