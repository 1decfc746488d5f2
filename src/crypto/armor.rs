//! Base64 text form of envelopes
//!
//! For callers that keep envelopes in text files or JSON records. Decoding
//! only undoes the base64 layer; [`open`](super::open) still does all the
//! envelope validation.

use base64::{engine::general_purpose::STANDARD, Engine};

use crate::error::{KryptError, KryptResult};

/// Encode an envelope as standard base64
pub fn encode(envelope: &[u8]) -> String {
    STANDARD.encode(envelope)
}

/// Decode base64 text back into envelope bytes
pub fn decode(text: &str) -> KryptResult<Vec<u8>> {
    STANDARD
        .decode(text.trim())
        .map_err(|e| KryptError::Encoding(format!("Invalid envelope encoding: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::{open, seal};

    #[test]
    fn test_armored_envelope_opens() {
        let key = [9u8; 32];
        let envelope = seal(b"github.com: hunter2", &key).unwrap();

        let text = encode(&envelope);
        let decoded = decode(&text).unwrap();

        assert_eq!(decoded, envelope);
        assert_eq!(open(&decoded, &key).unwrap(), b"github.com: hunter2");
    }

    #[test]
    fn test_decode_trims_whitespace() {
        assert_eq!(decode("  aGVsbG8=\n").unwrap(), b"hello");
    }

    #[test]
    fn test_decode_invalid() {
        let result = decode("not*base64!");
        assert!(matches!(result, Err(KryptError::Encoding(_))));
    }

    #[test]
    fn test_short_decoded_envelope_still_malformed() {
        let decoded = decode(&encode(b"short")).unwrap();
        let err = open(&decoded, &[0u8; 32]).unwrap_err();
        assert!(err.is_malformed());
    }
}
