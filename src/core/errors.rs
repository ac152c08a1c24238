//! Typed failures raised by the wallet input validators.
//!
//! Every validator owns one error struct carrying the failure kind and a
//! diagnostic message assembled from the message catalog plus a rendering of
//! the offending input. Callers that need to branch on the failure re-key on
//! `kind`, never on message text.

use thiserror::Error;

/// Failure kinds for the derivation path validator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DerivationPathFault {
    NotString,
    WrongPartCount,
    BadHeaderKey,
    BadPurpose,
    BadCoinType,
    BadAccount,
    BadChangeIndex,
    BadIndexCount,
    /// Defensive fallback; no reachable check produces it.
    Generic,
}

/// Failure kinds for the safe integer validator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SafeIntegerFault {
    NotNumber,
    Negative,
    Unsafe,
    /// Defensive fallback; no reachable check produces it.
    Generic,
}

/// Failure kinds for the big number validator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BigNumberFault {
    NotBigNumber,
    /// Defensive fallback; no reachable check produces it.
    Generic,
}

/// Failure kinds for the address validator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddressFault {
    NotString,
    BadLength,
    BadFormat,
    BadChecksum,
    /// Defensive fallback; no reachable check produces it.
    Generic,
}

/// Failure kinds for the hex sequence validator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HexSequenceFault {
    NotString,
    BadFormat,
    /// Defensive fallback, kept alive by the decode path.
    Generic,
}

/// Derivation path rejected.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{message}")]
pub struct DerivationPathError {
    pub kind: DerivationPathFault,
    pub message: String,
}

impl DerivationPathError {
    pub(crate) fn new(kind: DerivationPathFault, text: &str, rendered: String) -> Self {
        Self { kind, message: format!("{} {}", text, rendered) }
    }
}

/// Safe integer rejected.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{message}")]
pub struct SafeIntegerError {
    pub kind: SafeIntegerFault,
    pub message: String,
}

impl SafeIntegerError {
    pub(crate) fn new(kind: SafeIntegerFault, text: &str, rendered: String) -> Self {
        Self { kind, message: format!("{} {}", text, rendered) }
    }
}

/// Big number rejected.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{message}")]
pub struct BigNumberError {
    pub kind: BigNumberFault,
    pub message: String,
}

impl BigNumberError {
    pub(crate) fn new(kind: BigNumberFault, text: &str, rendered: String) -> Self {
        Self { kind, message: format!("{} {}", text, rendered) }
    }
}

/// Address rejected.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{message}")]
pub struct AddressError {
    pub kind: AddressFault,
    pub message: String,
}

impl AddressError {
    pub(crate) fn new(kind: AddressFault, text: &str, rendered: String) -> Self {
        Self { kind, message: format!("{} {}", text, rendered) }
    }
}

/// Hex sequence rejected.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{message}")]
pub struct HexSequenceError {
    pub kind: HexSequenceFault,
    pub message: String,
}

impl HexSequenceError {
    pub(crate) fn new(kind: HexSequenceFault, text: &str, rendered: String) -> Self {
        Self { kind, message: format!("{} {}", text, rendered) }
    }
}

/// Umbrella error for callers that funnel every check through one type.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error(transparent)]
    DerivationPath(#[from] DerivationPathError),
    #[error(transparent)]
    SafeInteger(#[from] SafeIntegerError),
    #[error(transparent)]
    BigNumber(#[from] BigNumberError),
    #[error(transparent)]
    Address(#[from] AddressError),
    #[error(transparent)]
    HexSequence(#[from] HexSequenceError),
}

impl ValidationError {
    /// True for the defensive fallback kinds that should never surface in
    /// normal operation.
    pub fn is_generic(&self) -> bool {
        match self {
            ValidationError::DerivationPath(e) => e.kind == DerivationPathFault::Generic,
            ValidationError::SafeInteger(e) => e.kind == SafeIntegerFault::Generic,
            ValidationError::BigNumber(e) => e.kind == BigNumberFault::Generic,
            ValidationError::Address(e) => e.kind == AddressFault::Generic,
            ValidationError::HexSequence(e) => e.kind == HexSequenceFault::Generic,
        }
    }
}

/// Configuration loading or compilation failures.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read validation config: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid validation config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Invalid pattern '{pattern}': {source}")]
    Pattern {
        pattern: String,
        source: regex::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_joins_catalog_text_and_input() {
        let err = AddressError::new(
            AddressFault::BadLength,
            "Address length is wrong:",
            "0x12".to_string(),
        );
        assert_eq!(err.kind, AddressFault::BadLength);
        assert_eq!(format!("{}", err), "Address length is wrong: 0x12");
    }

    #[test]
    fn umbrella_error_preserves_source_kind() {
        let err: ValidationError =
            HexSequenceError::new(HexSequenceFault::BadFormat, "Bad hex:", "zz".to_string()).into();
        match err {
            ValidationError::HexSequence(ref e) => assert_eq!(e.kind, HexSequenceFault::BadFormat),
            _ => panic!("expected HexSequence variant"),
        }
        assert!(!err.is_generic());
    }

    #[test]
    fn generic_kinds_are_flagged() {
        let err: ValidationError =
            BigNumberError::new(BigNumberFault::Generic, "unexpected:", "1".to_string()).into();
        assert!(err.is_generic());
    }
}
