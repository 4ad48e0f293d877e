use encoding_rs::{Encoding, UTF_8};

use crate::error::{ProjectorError, Result};

/// Resolve a WHATWG encoding label such as "iso-8859-1" or "utf-8".
pub fn resolve(label: &str) -> Result<&'static Encoding> {
    Encoding::for_label(label.as_bytes())
        .ok_or_else(|| ProjectorError::Config(format!("unknown encoding '{label}'")))
}

/// Decode raw file bytes under the given encoding.
///
/// Returns `None` when the bytes contain a sequence that is invalid under the
/// encoding, rather than substituting replacement characters.
pub fn decode(bytes: &[u8], encoding: &'static Encoding) -> Option<String> {
    let (text, _, had_errors) = encoding.decode(bytes);
    if had_errors {
        None
    } else {
        Some(text.into_owned())
    }
}

/// Encode text for writing under the given encoding.
///
/// Returns `None` when the encoding cannot represent a character in the text.
pub fn encode(text: &str, encoding: &'static Encoding) -> Option<Vec<u8>> {
    if encoding == UTF_8 {
        return Some(text.as_bytes().to_vec());
    }
    let (bytes, _, had_errors) = encoding.encode(text);
    if had_errors {
        None
    } else {
        Some(bytes.into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_common_labels() {
        assert!(resolve("utf-8").is_ok());
        assert!(resolve("iso-8859-1").is_ok());
        assert!(resolve("latin1").is_ok());
    }

    #[test]
    fn rejects_unknown_label() {
        let err = resolve("not-a-real-encoding").unwrap_err();
        assert!(err.to_string().contains("not-a-real-encoding"));
    }

    #[test]
    fn decodes_latin1_bytes() {
        let encoding = resolve("iso-8859-1").unwrap();
        // 0xE9 is 'é' in Latin-1
        let text = decode(&[b'c', b'a', b'f', 0xE9], encoding).unwrap();
        assert_eq!(text, "café");
    }

    #[test]
    fn encode_round_trips_latin1() {
        let encoding = resolve("iso-8859-1").unwrap();
        let bytes = encode("café", encoding).unwrap();
        assert_eq!(bytes, vec![b'c', b'a', b'f', 0xE9]);
    }

    #[test]
    fn encode_rejects_unrepresentable_characters() {
        let encoding = resolve("iso-8859-1").unwrap();
        assert!(encode("日本", encoding).is_none());
    }

    #[test]
    fn utf8_passes_everything_through() {
        let encoding = resolve("utf-8").unwrap();
        assert_eq!(encode("日本", encoding).unwrap(), "日本".as_bytes());
    }
}
