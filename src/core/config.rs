//! Validation configuration: path grammar constants, lexical patterns, and
//! the message catalog. Validators stay pure functions of (input, config);
//! retargeting the grammar for another coin means editing config, not code.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::core::errors::ConfigError;
use crate::core::messages::MessageCatalog;

/// SLIP-44 coin type for Ethereum mainnet.
pub const MAINNET_COIN_TYPE: u32 = 60;
/// Shared BIP44 coin type for testnets.
pub const TESTNET_COIN_TYPE: u32 = 1;

/// BIP44 path grammar constants.
///
/// A path such as `m/44'/60'/0'/0/0` splits on the hardened marker pair
/// (`'/`) into four segments; the first segment then splits on `/` into the
/// master key marker and the purpose.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathGrammar {
    /// Top-level segment delimiter, the hardened marker plus slash.
    #[serde(default = "PathGrammar::default_segment_delimiter")]
    pub segment_delimiter: String,
    /// Delimiter inside a segment (header/purpose, change/index).
    #[serde(default = "PathGrammar::default_piece_delimiter")]
    pub piece_delimiter: String,
    /// Master key marker, compared case-insensitively.
    #[serde(default = "PathGrammar::default_header_key")]
    pub header_key: String,
    /// BIP44 purpose level.
    #[serde(default = "PathGrammar::default_purpose")]
    pub purpose: u32,
    /// Recognized coin types (mainnet and testnet).
    #[serde(default = "PathGrammar::default_coin_types")]
    pub coin_types: Vec<u32>,
    /// Required number of top-level segments.
    #[serde(default = "PathGrammar::default_segment_count")]
    pub segment_count: usize,
    /// Maximum pieces in the final segment (change plus one address index).
    #[serde(default = "PathGrammar::default_max_tail_pieces")]
    pub max_tail_pieces: usize,
}

impl PathGrammar {
    fn default_segment_delimiter() -> String {
        "'/".to_string()
    }
    fn default_piece_delimiter() -> String {
        "/".to_string()
    }
    fn default_header_key() -> String {
        "m".to_string()
    }
    fn default_purpose() -> u32 {
        44
    }
    fn default_coin_types() -> Vec<u32> {
        vec![MAINNET_COIN_TYPE, TESTNET_COIN_TYPE]
    }
    fn default_segment_count() -> usize {
        4
    }
    fn default_max_tail_pieces() -> usize {
        2
    }
}

impl Default for PathGrammar {
    fn default() -> Self {
        Self {
            segment_delimiter: Self::default_segment_delimiter(),
            piece_delimiter: Self::default_piece_delimiter(),
            header_key: Self::default_header_key(),
            purpose: Self::default_purpose(),
            coin_types: Self::default_coin_types(),
            segment_count: Self::default_segment_count(),
            max_tail_pieces: Self::default_max_tail_pieces(),
        }
    }
}

/// Lexical patterns, kept as source strings so they can ship in config files.
/// They are compiled once at `Validator` construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatternSet {
    /// Digits-only path segment.
    #[serde(default = "PatternSet::default_digits")]
    pub digits: String,
    /// 20-byte hex address, optional `0x` prefix.
    #[serde(default = "PatternSet::default_address")]
    pub address: String,
    /// Even-length hex byte sequence, optional `0x` prefix.
    #[serde(default = "PatternSet::default_hex_sequence")]
    pub hex_sequence: String,
}

impl PatternSet {
    fn default_digits() -> String {
        r"^[0-9]+$".to_string()
    }
    fn default_address() -> String {
        r"^(0x)?[0-9a-fA-F]{40}$".to_string()
    }
    fn default_hex_sequence() -> String {
        r"^(0x)?(?:[0-9a-fA-F]{2})*$".to_string()
    }
}

impl Default for PatternSet {
    fn default() -> Self {
        Self {
            digits: Self::default_digits(),
            address: Self::default_address(),
            hex_sequence: Self::default_hex_sequence(),
        }
    }
}

/// Everything a `Validator` is built from.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ValidationConfig {
    #[serde(default)]
    pub grammar: PathGrammar,
    #[serde(default)]
    pub patterns: PatternSet,
    #[serde(default)]
    pub messages: MessageCatalog,
}

impl ValidationConfig {
    /// Parse a config from TOML text. Missing sections fall back to defaults.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Load a config from a TOML file.
    pub fn from_toml_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }
}
