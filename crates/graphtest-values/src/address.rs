//! 20-byte account addresses.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{decode_hex, ValueError, ValueResult};

/// Length of an address in bytes
pub const ADDRESS_LENGTH: usize = 20;

/// An account or contract address
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Address([u8; ADDRESS_LENGTH]);

impl Address {
    /// The all-zero address
    pub const ZERO: Address = Address([0u8; ADDRESS_LENGTH]);

    pub fn new(bytes: [u8; ADDRESS_LENGTH]) -> Self {
        Self(bytes)
    }

    /// Builds an address from a slice that must be exactly 20 bytes long.
    pub fn from_slice(bytes: &[u8]) -> ValueResult<Self> {
        let raw: [u8; ADDRESS_LENGTH] = bytes.try_into().map_err(|_| ValueError::InvalidLength {
            expected: ADDRESS_LENGTH,
            actual: bytes.len(),
        })?;
        Ok(Self(raw))
    }

    /// Parses a `0x`-prefixed (or bare) hex address of exactly 40 digits.
    pub fn from_hex_string(input: &str) -> ValueResult<Self> {
        let bytes = decode_hex(input)?;
        Self::from_slice(&bytes)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn to_hex_string(&self) -> String {
        format!("0x{}", hex::encode(self.0))
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex_string())
    }
}

impl FromStr for Address {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex_string(s)
    }
}

impl From<[u8; ADDRESS_LENGTH]> for Address {
    fn from(bytes: [u8; ADDRESS_LENGTH]) -> Self {
        Self(bytes)
    }
}

impl From<Address> for String {
    fn from(address: Address) -> Self {
        address.to_hex_string()
    }
}

impl TryFrom<String> for Address {
    type Error = ValueError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_hex_string(&value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn parses_with_and_without_prefix() {
        let with_prefix = Address::from_hex_string("0x89205a3a3b2a69de6dbf7f01ed13b2108b2c43e7").unwrap();
        let bare = Address::from_hex_string("89205A3A3b2A69De6Dbf7f01ED13B2108B2c43e7").unwrap();
        assert_eq!(with_prefix, bare);
        assert_eq!(
            with_prefix.to_string(),
            "0x89205a3a3b2a69de6dbf7f01ed13b2108b2c43e7"
        );
    }

    #[test]
    fn rejects_wrong_length() {
        let result = Address::from_hex_string("0x1234");
        assert_matches!(result, Err(ValueError::InvalidLength { expected: 20, actual: 2 }));
    }

    #[test]
    fn rejects_truncated_address() {
        let result = Address::from_hex_string("0x89205a3a3b2a69de6dbf7f01ed13b2108b2c43e");
        assert_matches!(result, Err(ValueError::InvalidHex(_)));
    }

    #[test]
    fn rejects_overlong_address() {
        let result = Address::from_hex_string("0x89205a3a3b2a69de6dbf7f01ed13b2108b2c43e700");
        assert_matches!(result, Err(ValueError::InvalidLength { expected: 20, actual: 21 }));
    }

    #[test]
    fn rejects_bad_hex() {
        let result = Address::from_hex_string("0xzz205a3a3b2a69de6dbf7f01ed13b2108b2c43e7");
        assert_matches!(result, Err(ValueError::InvalidHex(_)));
    }

    #[test]
    fn serializes_as_hex_string() {
        let address = Address::new([0xab; ADDRESS_LENGTH]);
        let json = serde_json::to_string(&address).unwrap();
        assert_eq!(json, format!("\"0x{}\"", "ab".repeat(20)));

        let back: Address = serde_json::from_str(&json).unwrap();
        assert_eq!(back, address);
    }
}
