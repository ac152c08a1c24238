// src/lib.rs
//! Input validation core for a non-custodial HD wallet.
//!
//! Five independent checks over loosely-typed input (BIP44 derivation
//! paths, IEEE-754-safe integers, big numbers, EIP-55 checksummed account
//! addresses, and hex byte sequences) sharing one check primitive and one
//! injectable message catalog. Key derivation, signing, and transports live
//! elsewhere; this crate only decides pass or fail and says why.

pub mod core;

pub use crate::core::config::{
    PathGrammar, PatternSet, ValidationConfig, MAINNET_COIN_TYPE, TESTNET_COIN_TYPE,
};
pub use crate::core::errors::{
    AddressError, AddressFault, BigNumberError, BigNumberFault, ConfigError,
    DerivationPathError, DerivationPathFault, HexSequenceError, HexSequenceFault,
    SafeIntegerError, SafeIntegerFault, ValidationError,
};
pub use crate::core::input::{RawInput, ABSENT_TOKEN};
pub use crate::core::messages::MessageCatalog;
pub use crate::core::validation::{
    checksum_matches, decode_hex_sequence, to_checksum_address, validate_address,
    validate_big_number, validate_derivation_path, validate_hex_sequence,
    validate_safe_integer, Validator, MAX_SAFE_INTEGER,
};
