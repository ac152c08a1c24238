//! Account address validation and EIP-55 checksum handling.
//!
//! The checksum hashes the lowercase 40-char hex body with Keccak-256; a hex
//! letter must be uppercase exactly when the matching hash nibble is >= 8.

use sha3::{Digest, Keccak256};

use crate::core::errors::{AddressError, AddressFault};
use crate::core::input::RawInput;
use crate::core::validation::{ensure, Validator};

impl Validator {
    /// Check a 20-byte hex address, optional `0x` prefix, strict EIP-55.
    pub fn address(&self, input: &RawInput) -> Result<(), AddressError> {
        use AddressFault::*;
        let fail = |fault| self.reject_address(fault, input);

        let text = match input.as_text() {
            Some(t) => t,
            None => return Err(fail(NotString)),
        };

        ensure(text.len() == 40 || text.len() == 42, || fail(BadLength))?;
        ensure(self.patterns.address.is_match(text), || fail(BadFormat))?;
        ensure(checksum_matches(text), || fail(BadChecksum))?;

        tracing::trace!(address = text, "address accepted");
        Ok(())
    }

    /// Normalize a format-valid address to its EIP-55 mixed-case form,
    /// `0x`-prefixed.
    pub fn to_checksum_address(&self, input: &RawInput) -> Result<String, AddressError> {
        use AddressFault::*;
        let fail = |fault| self.reject_address(fault, input);

        let text = match input.as_text() {
            Some(t) => t,
            None => return Err(fail(NotString)),
        };
        ensure(text.len() == 40 || text.len() == 42, || fail(BadLength))?;
        ensure(self.patterns.address.is_match(text), || fail(BadFormat))?;

        let body = text.strip_prefix("0x").unwrap_or(text);
        Ok(format!("0x{}", encode_checksum(body)))
    }

    fn reject_address(&self, fault: AddressFault, input: &RawInput) -> AddressError {
        let rendered = input.render();
        tracing::debug!(?fault, input = %rendered, "address rejected");
        AddressError::new(fault, self.messages.address.text(fault), rendered)
    }
}

/// True when the letter casing of `address` matches its EIP-55 checksum.
/// The `0x` prefix is optional; non-address strings return false.
pub fn checksum_matches(address: &str) -> bool {
    let body = address.strip_prefix("0x").unwrap_or(address);
    if body.len() != 40 || !body.chars().all(|c| c.is_ascii_hexdigit()) {
        return false;
    }
    body == encode_checksum(body)
}

/// Produce the checksum casing for a 40-char hex body.
fn encode_checksum(body: &str) -> String {
    let lower = body.to_lowercase();
    let mut hasher = Keccak256::new();
    hasher.update(lower.as_bytes());
    let digest = hasher.finalize();

    lower
        .chars()
        .enumerate()
        .map(|(i, ch)| {
            let nibble = (digest[i / 2] >> (4 * (1 - (i % 2)))) & 0x0f;
            if ch.is_ascii_alphabetic() && nibble >= 8 {
                ch.to_ascii_uppercase()
            } else {
                ch
            }
        })
        .collect()
}

/// Normalize an address to EIP-55 form with the default validator.
pub fn to_checksum_address(input: impl Into<RawInput>) -> Result<String, AddressError> {
    crate::core::validation::DEFAULT_VALIDATOR.to_checksum_address(&input.into())
}
