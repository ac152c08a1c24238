//! The five wallet input validators.
//!
//! Each validator is a short-circuiting sequence of named checks routed
//! through [`ensure`]: the first failing check aborts the call with a typed
//! error built from the message catalog. Validators share no mutable state;
//! a `Validator` is immutable after construction and safe to share across
//! threads.

pub mod address;
pub mod hex;
pub mod numeric;
pub mod path;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::core::config::{PathGrammar, ValidationConfig};
use crate::core::errors::{
    AddressError, BigNumberError, ConfigError, DerivationPathError, HexSequenceError,
    SafeIntegerError,
};
use crate::core::input::RawInput;
use crate::core::messages::MessageCatalog;

pub use address::{checksum_matches, to_checksum_address};
pub use hex::decode_hex_sequence;
pub use numeric::MAX_SAFE_INTEGER;

/// Shared check primitive: `Ok(())` when the condition holds, otherwise the
/// constructed failure. Used with `?` so the first failing check wins.
pub(crate) fn ensure<E>(condition: bool, fail: impl FnOnce() -> E) -> Result<(), E> {
    if condition {
        Ok(())
    } else {
        Err(fail())
    }
}

/// Patterns compiled once at construction.
#[derive(Debug)]
pub(crate) struct CompiledPatterns {
    pub(crate) digits: Regex,
    pub(crate) address: Regex,
    pub(crate) hex_sequence: Regex,
}

impl CompiledPatterns {
    fn compile(config: &ValidationConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            digits: compile_pattern(&config.patterns.digits)?,
            address: compile_pattern(&config.patterns.address)?,
            hex_sequence: compile_pattern(&config.patterns.hex_sequence)?,
        })
    }
}

fn compile_pattern(pattern: &str) -> Result<Regex, ConfigError> {
    Regex::new(pattern).map_err(|source| ConfigError::Pattern {
        pattern: pattern.to_string(),
        source,
    })
}

/// The validation engine: grammar constants, compiled patterns, and the
/// message catalog, bundled so every check is a pure function of
/// (input, configuration).
#[derive(Debug)]
pub struct Validator {
    pub(crate) grammar: PathGrammar,
    pub(crate) messages: MessageCatalog,
    pub(crate) patterns: CompiledPatterns,
}

impl Validator {
    /// Build a validator from a config, compiling its patterns. A bad pattern
    /// fails construction here, never an individual validation call.
    pub fn new(config: ValidationConfig) -> Result<Self, ConfigError> {
        let patterns = CompiledPatterns::compile(&config)?;
        Ok(Self {
            grammar: config.grammar,
            messages: config.messages,
            patterns,
        })
    }

    /// The message catalog in effect.
    pub fn messages(&self) -> &MessageCatalog {
        &self.messages
    }
}

impl Default for Validator {
    fn default() -> Self {
        Self::new(ValidationConfig::default())
            .expect("default validation patterns should always compile")
    }
}

pub(crate) static DEFAULT_VALIDATOR: Lazy<Validator> = Lazy::new(Validator::default);

/// Validate a BIP44 derivation path against the default grammar.
pub fn validate_derivation_path(input: impl Into<RawInput>) -> Result<(), DerivationPathError> {
    DEFAULT_VALIDATOR.derivation_path(&input.into())
}

/// Validate a non-negative IEEE-754-safe integer.
pub fn validate_safe_integer(input: impl Into<RawInput>) -> Result<(), SafeIntegerError> {
    DEFAULT_VALIDATOR.safe_integer(&input.into())
}

/// Validate that the input is a big number instance.
pub fn validate_big_number(input: impl Into<RawInput>) -> Result<(), BigNumberError> {
    DEFAULT_VALIDATOR.big_number(&input.into())
}

/// Validate a 20-byte account address, including its EIP-55 checksum.
pub fn validate_address(input: impl Into<RawInput>) -> Result<(), AddressError> {
    DEFAULT_VALIDATOR.address(&input.into())
}

/// Validate an optionally `0x`-prefixed even-length hex sequence.
pub fn validate_hex_sequence(input: impl Into<RawInput>) -> Result<(), HexSequenceError> {
    DEFAULT_VALIDATOR.hex_sequence(&input.into())
}
