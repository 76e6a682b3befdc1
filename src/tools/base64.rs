//! Base64 text transcoding
//!
//! UTF-8 text to and from standard-alphabet Base64.

use base64::{engine::general_purpose::STANDARD, Engine};

use crate::error::{ToolboxError, ToolboxResult};

/// Encode UTF-8 text as Base64
pub fn encode_text(input: &str) -> String {
    STANDARD.encode(input.as_bytes())
}

/// Decode Base64 back to UTF-8 text
///
/// # Errors
///
/// Returns [`ToolboxError::InvalidInput`] when the input is not valid
/// Base64 or the decoded bytes are not valid UTF-8.
pub fn decode_text(input: &str) -> ToolboxResult<String> {
    let bytes = STANDARD
        .decode(input.trim())
        .map_err(|e| ToolboxError::InvalidInput(format!("not valid Base64: {}", e)))?;

    String::from_utf8(bytes)
        .map_err(|_| ToolboxError::InvalidInput("decoded data is not valid UTF-8 text".into()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode() {
        assert_eq!(encode_text("hello"), "aGVsbG8=");
        assert_eq!(encode_text(""), "");
    }

    #[test]
    fn test_decode() {
        assert_eq!(decode_text("aGVsbG8=").unwrap(), "hello");
        assert_eq!(decode_text("  aGVsbG8=  ").unwrap(), "hello");
    }

    #[test]
    fn test_round_trip_preserves_unicode() {
        let original = "héllo wörld 🎉";
        assert_eq!(decode_text(&encode_text(original)).unwrap(), original);
    }

    #[test]
    fn test_invalid_base64_rejected() {
        let err = decode_text("!!! not base64 !!!").unwrap_err();
        assert!(err.is_invalid_input());
    }

    #[test]
    fn test_non_utf8_payload_rejected() {
        // 0xFF 0xFE is not valid UTF-8
        let err = decode_text("//4=").unwrap_err();
        assert!(err.is_invalid_input());
    }
}
