//! BIP44 derivation path validation.
//!
//! Accepted shape: `m/44'/60'/0'/0` or `m/44'/60'/0'/0/0`. Header key `m`
//! (case-insensitive), hardened purpose 44, a hardened recognized coin type,
//! a hardened digits-only account, then change and at most one address index.

use crate::core::errors::{DerivationPathError, DerivationPathFault};
use crate::core::input::RawInput;
use crate::core::validation::{ensure, Validator};

impl Validator {
    /// Check a derivation path against the configured grammar.
    pub fn derivation_path(&self, input: &RawInput) -> Result<(), DerivationPathError> {
        use DerivationPathFault::*;
        let fail = |fault| self.reject_path(fault, input);

        let text = match input.as_text() {
            Some(t) => t,
            None => return Err(fail(NotString)),
        };

        // "m/44'/60'/0'/0/0" -> ["m/44", "60", "0", "0/0"]
        let segments: Vec<&str> = text.split(self.grammar.segment_delimiter.as_str()).collect();
        ensure(segments.len() == self.grammar.segment_count, || fail(WrongPartCount))?;

        let mut head = segments[0].split(self.grammar.piece_delimiter.as_str());
        let key = head.next().unwrap_or_default();
        ensure(key.to_lowercase() == self.grammar.header_key, || fail(BadHeaderKey))?;

        let purpose = head.next().and_then(|piece| piece.parse::<u32>().ok());
        ensure(purpose == Some(self.grammar.purpose), || fail(BadPurpose))?;

        let coin_type = segments[1].parse::<u32>().ok();
        ensure(
            coin_type.map_or(false, |coin| self.grammar.coin_types.contains(&coin)),
            || fail(BadCoinType),
        )?;

        ensure(self.patterns.digits.is_match(segments[2]), || fail(BadAccount))?;

        let tail: Vec<&str> = segments[3].split(self.grammar.piece_delimiter.as_str()).collect();
        ensure(
            tail.iter().all(|piece| self.patterns.digits.is_match(piece)),
            || fail(BadChangeIndex),
        )?;
        ensure(tail.len() <= self.grammar.max_tail_pieces, || fail(BadIndexCount))?;

        tracing::trace!(path = text, "derivation path accepted");
        Ok(())
    }

    fn reject_path(&self, fault: DerivationPathFault, input: &RawInput) -> DerivationPathError {
        let rendered = input.render();
        tracing::debug!(?fault, input = %rendered, "derivation path rejected");
        DerivationPathError::new(fault, self.messages.derivation_path.text(fault), rendered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::validation::validate_derivation_path;
    use test_case::test_case;

    fn fault_of(path: &str) -> DerivationPathFault {
        validate_derivation_path(path).unwrap_err().kind
    }

    #[test]
    fn accepts_change_only_and_change_plus_index() {
        assert!(validate_derivation_path("m/44'/60'/0'/0").is_ok());
        assert!(validate_derivation_path("m/44'/60'/0'/0/0").is_ok());
        assert!(validate_derivation_path("m/44'/60'/0'/1/12").is_ok());
    }

    #[test]
    fn accepts_testnet_coin_type() {
        assert!(validate_derivation_path("m/44'/1'/0'/0/0").is_ok());
    }

    #[test]
    fn header_key_is_case_insensitive() {
        assert!(validate_derivation_path("M/44'/60'/0'/0").is_ok());
    }

    #[test_case("x/44'/60'/0'/0", DerivationPathFault::BadHeaderKey; "wrong header key")]
    #[test_case("m/45'/60'/0'/0", DerivationPathFault::BadPurpose; "wrong purpose")]
    #[test_case("m/44'/99'/0'/0", DerivationPathFault::BadCoinType; "unrecognized coin type")]
    #[test_case("m/44'/60'/a'/0", DerivationPathFault::BadAccount; "non-digit account")]
    #[test_case("m/44'/60'/0'/x", DerivationPathFault::BadChangeIndex; "non-digit change")]
    #[test_case("m/44'/60'/0'/0/0/1", DerivationPathFault::BadIndexCount; "too many indices")]
    #[test_case("m/44'/60'/0'", DerivationPathFault::WrongPartCount; "missing change segment")]
    #[test_case("m/44'/60'/0'/0'/0'/0", DerivationPathFault::WrongPartCount; "too many segments")]
    #[test_case("", DerivationPathFault::WrongPartCount; "empty string")]
    fn rejects_with_expected_fault(path: &str, expected: DerivationPathFault) {
        assert_eq!(fault_of(path), expected);
    }

    #[test]
    fn rejects_non_string_input() {
        assert_eq!(
            validate_derivation_path(42i64).unwrap_err().kind,
            DerivationPathFault::NotString
        );
        assert_eq!(
            validate_derivation_path(None::<&str>).unwrap_err().kind,
            DerivationPathFault::NotString
        );
    }

    #[test]
    fn purpose_must_be_numeric() {
        assert_eq!(fault_of("m/aa'/60'/0'/0"), DerivationPathFault::BadPurpose);
        // header segment without a purpose piece at all
        assert_eq!(fault_of("m'/60'/0'/0/0"), DerivationPathFault::BadPurpose);
    }

    #[test]
    fn message_carries_offending_path() {
        let err = validate_derivation_path("m/45'/60'/0'/0").unwrap_err();
        assert!(err.message.ends_with("m/45'/60'/0'/0"));
    }
}
