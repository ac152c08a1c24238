//! Hex byte sequence validation and decoding.

use crate::core::errors::{HexSequenceError, HexSequenceFault};
use crate::core::input::RawInput;
use crate::core::validation::{ensure, Validator};

impl Validator {
    /// Check an optionally `0x`-prefixed, even-length hex sequence. An empty
    /// body is allowed: it denotes zero bytes (e.g. empty calldata).
    pub fn hex_sequence(&self, input: &RawInput) -> Result<(), HexSequenceError> {
        use HexSequenceFault::*;
        let fail = |fault| self.reject_hex(fault, input);

        let text = match input.as_text() {
            Some(t) => t,
            None => return Err(fail(NotString)),
        };
        ensure(self.patterns.hex_sequence.is_match(text), || fail(BadFormat))?;

        tracing::trace!(hex = text, "hex sequence accepted");
        Ok(())
    }

    /// Validate and decode a hex sequence to bytes, stripping the optional
    /// prefix.
    pub fn decode_hex_sequence(&self, input: &RawInput) -> Result<Vec<u8>, HexSequenceError> {
        self.hex_sequence(input)?;
        let text = input.as_text().unwrap_or_default();
        let body = text.strip_prefix("0x").unwrap_or(text);
        // The format check above already guarantees decodability.
        hex::decode(body).map_err(|_| self.reject_hex(HexSequenceFault::Generic, input))
    }

    fn reject_hex(&self, fault: HexSequenceFault, input: &RawInput) -> HexSequenceError {
        let rendered = input.render();
        tracing::debug!(?fault, input = %rendered, "hex sequence rejected");
        HexSequenceError::new(fault, self.messages.hex_sequence.text(fault), rendered)
    }
}

/// Validate and decode a hex sequence with the default validator.
pub fn decode_hex_sequence(input: impl Into<RawInput>) -> Result<Vec<u8>, HexSequenceError> {
    crate::core::validation::DEFAULT_VALIDATOR.decode_hex_sequence(&input.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::validation::validate_hex_sequence;
    use test_case::test_case;

    #[test_case("0xdeadbeef")]
    #[test_case("deadbeef")]
    #[test_case("0xDEADBEEF"; "uppercase body with prefix")]
    #[test_case("0x"; "empty body with prefix")]
    #[test_case(""; "empty string")]
    fn accepts_well_formed(input: &str) {
        assert!(validate_hex_sequence(input).is_ok());
    }

    #[test_case("not-hex")]
    #[test_case("0xdeadbee"; "odd length body")]
    #[test_case("0x0x00"; "double prefix")]
    #[test_case("deadbeefg0"; "non hex char")]
    fn rejects_malformed(input: &str) {
        assert_eq!(
            validate_hex_sequence(input).unwrap_err().kind,
            HexSequenceFault::BadFormat
        );
    }

    #[test]
    fn rejects_non_string_input() {
        assert_eq!(
            validate_hex_sequence(42i64).unwrap_err().kind,
            HexSequenceFault::NotString
        );
    }

    #[test]
    fn decodes_with_and_without_prefix() {
        assert_eq!(decode_hex_sequence("0xdeadbeef").unwrap(), vec![0xde, 0xad, 0xbe, 0xef]);
        assert_eq!(decode_hex_sequence("48656c6c6f").unwrap(), b"Hello");
    }

    #[test]
    fn decodes_empty_body_to_no_bytes() {
        assert!(decode_hex_sequence("0x").unwrap().is_empty());
    }

    #[test]
    fn decode_propagates_format_fault() {
        assert_eq!(
            decode_hex_sequence("zz").unwrap_err().kind,
            HexSequenceFault::BadFormat
        );
    }
}
