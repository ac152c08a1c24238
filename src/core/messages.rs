//! Message catalog consumed by all validators.
//!
//! A static mapping from (validator, failure kind) to diagnostic text. The
//! catalog is injected configuration: deployments override individual entries
//! in the validation TOML without recompiling. Programs should branch on the
//! error `kind`, not on these strings.

use serde::{Deserialize, Serialize};

use crate::core::errors::{
    AddressFault, BigNumberFault, DerivationPathFault, HexSequenceFault, SafeIntegerFault,
};

/// Diagnostic texts for the derivation path validator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DerivationPathMessages {
    #[serde(default = "DerivationPathMessages::default_not_string")]
    pub not_string: String,
    #[serde(default = "DerivationPathMessages::default_wrong_part_count")]
    pub wrong_part_count: String,
    #[serde(default = "DerivationPathMessages::default_bad_header_key")]
    pub bad_header_key: String,
    #[serde(default = "DerivationPathMessages::default_bad_purpose")]
    pub bad_purpose: String,
    #[serde(default = "DerivationPathMessages::default_bad_coin_type")]
    pub bad_coin_type: String,
    #[serde(default = "DerivationPathMessages::default_bad_account")]
    pub bad_account: String,
    #[serde(default = "DerivationPathMessages::default_bad_change_index")]
    pub bad_change_index: String,
    #[serde(default = "DerivationPathMessages::default_bad_index_count")]
    pub bad_index_count: String,
    #[serde(default = "DerivationPathMessages::default_generic")]
    pub generic: String,
}

impl DerivationPathMessages {
    fn default_not_string() -> String {
        "Derivation path is not a string:".to_string()
    }
    fn default_wrong_part_count() -> String {
        "Derivation path does not have four hardened-delimited segments:".to_string()
    }
    fn default_bad_header_key() -> String {
        "Derivation path does not start with the master key marker:".to_string()
    }
    fn default_bad_purpose() -> String {
        "Derivation path purpose is not the wallet purpose:".to_string()
    }
    fn default_bad_coin_type() -> String {
        "Derivation path coin type is not a recognized network:".to_string()
    }
    fn default_bad_account() -> String {
        "Derivation path account is not a digit sequence:".to_string()
    }
    fn default_bad_change_index() -> String {
        "Derivation path change or address index is not a digit sequence:".to_string()
    }
    fn default_bad_index_count() -> String {
        "Derivation path has more than one address index:".to_string()
    }
    fn default_generic() -> String {
        "Derivation path failed validation:".to_string()
    }

    pub fn text(&self, fault: DerivationPathFault) -> &str {
        match fault {
            DerivationPathFault::NotString => &self.not_string,
            DerivationPathFault::WrongPartCount => &self.wrong_part_count,
            DerivationPathFault::BadHeaderKey => &self.bad_header_key,
            DerivationPathFault::BadPurpose => &self.bad_purpose,
            DerivationPathFault::BadCoinType => &self.bad_coin_type,
            DerivationPathFault::BadAccount => &self.bad_account,
            DerivationPathFault::BadChangeIndex => &self.bad_change_index,
            DerivationPathFault::BadIndexCount => &self.bad_index_count,
            DerivationPathFault::Generic => &self.generic,
        }
    }
}

impl Default for DerivationPathMessages {
    fn default() -> Self {
        Self {
            not_string: Self::default_not_string(),
            wrong_part_count: Self::default_wrong_part_count(),
            bad_header_key: Self::default_bad_header_key(),
            bad_purpose: Self::default_bad_purpose(),
            bad_coin_type: Self::default_bad_coin_type(),
            bad_account: Self::default_bad_account(),
            bad_change_index: Self::default_bad_change_index(),
            bad_index_count: Self::default_bad_index_count(),
            generic: Self::default_generic(),
        }
    }
}

/// Diagnostic texts for the safe integer validator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SafeIntegerMessages {
    #[serde(default = "SafeIntegerMessages::default_not_number")]
    pub not_number: String,
    #[serde(default = "SafeIntegerMessages::default_negative")]
    pub negative: String,
    #[serde(default = "SafeIntegerMessages::default_not_safe")]
    pub not_safe: String,
    #[serde(default = "SafeIntegerMessages::default_generic")]
    pub generic: String,
}

impl SafeIntegerMessages {
    fn default_not_number() -> String {
        "Value is not a number:".to_string()
    }
    fn default_negative() -> String {
        "Value is negative or has no ordering against zero:".to_string()
    }
    fn default_not_safe() -> String {
        "Value is not an exactly representable integer:".to_string()
    }
    fn default_generic() -> String {
        "Safe integer check failed:".to_string()
    }

    pub fn text(&self, fault: SafeIntegerFault) -> &str {
        match fault {
            SafeIntegerFault::NotNumber => &self.not_number,
            SafeIntegerFault::Negative => &self.negative,
            SafeIntegerFault::Unsafe => &self.not_safe,
            SafeIntegerFault::Generic => &self.generic,
        }
    }
}

impl Default for SafeIntegerMessages {
    fn default() -> Self {
        Self {
            not_number: Self::default_not_number(),
            negative: Self::default_negative(),
            not_safe: Self::default_not_safe(),
            generic: Self::default_generic(),
        }
    }
}

/// Diagnostic texts for the big number validator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BigNumberMessages {
    #[serde(default = "BigNumberMessages::default_not_big_number")]
    pub not_big_number: String,
    #[serde(default = "BigNumberMessages::default_generic")]
    pub generic: String,
}

impl BigNumberMessages {
    fn default_not_big_number() -> String {
        "Value is not a big number instance:".to_string()
    }
    fn default_generic() -> String {
        "Big number check failed:".to_string()
    }

    pub fn text(&self, fault: BigNumberFault) -> &str {
        match fault {
            BigNumberFault::NotBigNumber => &self.not_big_number,
            BigNumberFault::Generic => &self.generic,
        }
    }
}

impl Default for BigNumberMessages {
    fn default() -> Self {
        Self {
            not_big_number: Self::default_not_big_number(),
            generic: Self::default_generic(),
        }
    }
}

/// Diagnostic texts for the address validator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddressMessages {
    #[serde(default = "AddressMessages::default_not_string")]
    pub not_string: String,
    #[serde(default = "AddressMessages::default_bad_length")]
    pub bad_length: String,
    #[serde(default = "AddressMessages::default_bad_format")]
    pub bad_format: String,
    #[serde(default = "AddressMessages::default_bad_checksum")]
    pub bad_checksum: String,
    #[serde(default = "AddressMessages::default_generic")]
    pub generic: String,
}

impl AddressMessages {
    fn default_not_string() -> String {
        "Address is not a string:".to_string()
    }
    fn default_bad_length() -> String {
        "Address is not 40 or 42 characters long:".to_string()
    }
    fn default_bad_format() -> String {
        "Address is not a 20-byte hex string:".to_string()
    }
    fn default_bad_checksum() -> String {
        "Address casing does not match its checksum:".to_string()
    }
    fn default_generic() -> String {
        "Address failed validation:".to_string()
    }

    pub fn text(&self, fault: AddressFault) -> &str {
        match fault {
            AddressFault::NotString => &self.not_string,
            AddressFault::BadLength => &self.bad_length,
            AddressFault::BadFormat => &self.bad_format,
            AddressFault::BadChecksum => &self.bad_checksum,
            AddressFault::Generic => &self.generic,
        }
    }
}

impl Default for AddressMessages {
    fn default() -> Self {
        Self {
            not_string: Self::default_not_string(),
            bad_length: Self::default_bad_length(),
            bad_format: Self::default_bad_format(),
            bad_checksum: Self::default_bad_checksum(),
            generic: Self::default_generic(),
        }
    }
}

/// Diagnostic texts for the hex sequence validator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HexSequenceMessages {
    #[serde(default = "HexSequenceMessages::default_not_string")]
    pub not_string: String,
    #[serde(default = "HexSequenceMessages::default_bad_format")]
    pub bad_format: String,
    #[serde(default = "HexSequenceMessages::default_generic")]
    pub generic: String,
}

impl HexSequenceMessages {
    fn default_not_string() -> String {
        "Hex sequence is not a string:".to_string()
    }
    fn default_bad_format() -> String {
        "Hex sequence is not an even-length hex string:".to_string()
    }
    fn default_generic() -> String {
        "Hex sequence check failed:".to_string()
    }

    pub fn text(&self, fault: HexSequenceFault) -> &str {
        match fault {
            HexSequenceFault::NotString => &self.not_string,
            HexSequenceFault::BadFormat => &self.bad_format,
            HexSequenceFault::Generic => &self.generic,
        }
    }
}

impl Default for HexSequenceMessages {
    fn default() -> Self {
        Self {
            not_string: Self::default_not_string(),
            bad_format: Self::default_bad_format(),
            generic: Self::default_generic(),
        }
    }
}

/// The full catalog, one section per validator.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MessageCatalog {
    #[serde(default)]
    pub derivation_path: DerivationPathMessages,
    #[serde(default)]
    pub safe_integer: SafeIntegerMessages,
    #[serde(default)]
    pub big_number: BigNumberMessages,
    #[serde(default)]
    pub address: AddressMessages,
    #[serde(default)]
    pub hex_sequence: HexSequenceMessages,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_cover_every_fault() {
        let catalog = MessageCatalog::default();
        assert!(catalog
            .derivation_path
            .text(DerivationPathFault::BadPurpose)
            .contains("purpose"));
        assert!(catalog.address.text(AddressFault::BadChecksum).contains("checksum"));
        assert!(!catalog.hex_sequence.text(HexSequenceFault::Generic).is_empty());
    }

    #[test]
    fn partial_override_keeps_other_defaults() {
        let catalog: MessageCatalog = toml::from_str(
            r#"
            [address]
            bad_checksum = "checksum mismatch for"
            "#,
        )
        .unwrap();
        assert_eq!(catalog.address.text(AddressFault::BadChecksum), "checksum mismatch for");
        assert_eq!(
            catalog.address.text(AddressFault::NotString),
            AddressMessages::default().not_string
        );
    }
}
