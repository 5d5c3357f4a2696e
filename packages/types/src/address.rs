// Sui account and object addresses

use core::fmt;
use core::str::FromStr;

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{Result, TypeError};

pub const ADDRESS_LENGTH: usize = 32;

/// A 32-byte Sui address. Object ids share the representation.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct SuiAddress([u8; ADDRESS_LENGTH]);

pub type ObjectId = SuiAddress;

// ============================================================
// WELL-KNOWN ADDRESSES
// ============================================================

pub const MOVE_STDLIB_ADDRESS: SuiAddress = SuiAddress::from_low_byte(0x1);
pub const SUI_FRAMEWORK_ADDRESS: SuiAddress = SuiAddress::from_low_byte(0x2);
pub const SUI_CLOCK_OBJECT_ID: ObjectId = SuiAddress::from_low_byte(0x6);

impl SuiAddress {
    pub const ZERO: Self = Self([0u8; ADDRESS_LENGTH]);

    pub const fn new(bytes: [u8; ADDRESS_LENGTH]) -> Self {
        Self(bytes)
    }

    const fn from_low_byte(byte: u8) -> Self {
        let mut bytes = [0u8; ADDRESS_LENGTH];
        bytes[ADDRESS_LENGTH - 1] = byte;
        Self(bytes)
    }

    /// Parse `0x`-prefixed hex of 1 to 64 digits, left-padding with zeros.
    pub fn from_hex_literal(literal: &str) -> Result<Self> {
        let digits = literal
            .strip_prefix("0x")
            .or_else(|| literal.strip_prefix("0X"))
            .ok_or_else(|| TypeError::InvalidAddress(literal.to_string()))?;
        if digits.is_empty() || digits.len() > ADDRESS_LENGTH * 2 {
            return Err(TypeError::InvalidAddress(literal.to_string()));
        }

        let padded = format!("{:0>width$}", digits, width = ADDRESS_LENGTH * 2);
        let mut bytes = [0u8; ADDRESS_LENGTH];
        hex::decode_to_slice(&padded, &mut bytes)
            .map_err(|_| TypeError::InvalidAddress(literal.to_string()))?;
        Ok(Self(bytes))
    }

    /// Full 64-digit form, `0x` prefixed.
    pub fn to_hex_literal(&self) -> String {
        format!("0x{}", hex::encode(self.0))
    }

    /// Leading zeros stripped: `0x2` for the framework address.
    pub fn short_str(&self) -> String {
        let full = hex::encode(self.0);
        let trimmed = full.trim_start_matches('0');
        if trimmed.is_empty() {
            "0x0".to_string()
        } else {
            format!("0x{}", trimmed)
        }
    }

    pub fn as_bytes(&self) -> &[u8; ADDRESS_LENGTH] {
        &self.0
    }

    pub fn into_bytes(self) -> [u8; ADDRESS_LENGTH] {
        self.0
    }

    pub fn to_vec(&self) -> Vec<u8> {
        self.0.to_vec()
    }
}

impl AsRef<[u8]> for SuiAddress {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<[u8; ADDRESS_LENGTH]> for SuiAddress {
    fn from(bytes: [u8; ADDRESS_LENGTH]) -> Self {
        Self(bytes)
    }
}

impl TryFrom<&[u8]> for SuiAddress {
    type Error = TypeError;

    fn try_from(bytes: &[u8]) -> Result<Self> {
        let bytes: [u8; ADDRESS_LENGTH] = bytes
            .try_into()
            .map_err(|_| TypeError::InvalidAddressLength(bytes.len()))?;
        Ok(Self(bytes))
    }
}

impl FromStr for SuiAddress {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex_literal(s.trim())
    }
}

impl fmt::Display for SuiAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#x}", self)
    }
}

impl fmt::Debug for SuiAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#x}", self)
    }
}

impl fmt::LowerHex for SuiAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            write!(f, "0x")?;
        }
        for byte in &self.0 {
            write!(f, "{:02x}", byte)?;
        }
        Ok(())
    }
}

impl Serialize for SuiAddress {
    fn serialize<S: Serializer>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error> {
        if serializer.is_human_readable() {
            serializer.serialize_str(&self.to_hex_literal())
        } else {
            self.0.serialize(serializer)
        }
    }
}

impl<'de> Deserialize<'de> for SuiAddress {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> core::result::Result<Self, D::Error> {
        if deserializer.is_human_readable() {
            let literal = String::deserialize(deserializer)?;
            Self::from_hex_literal(&literal).map_err(de::Error::custom)
        } else {
            <[u8; ADDRESS_LENGTH]>::deserialize(deserializer).map(Self)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_literals_are_left_padded() {
        let framework = SuiAddress::from_hex_literal("0x2").unwrap();
        assert_eq!(framework, SUI_FRAMEWORK_ADDRESS);
        assert_eq!(framework.short_str(), "0x2");
        assert_eq!(
            framework.to_hex_literal(),
            "0x0000000000000000000000000000000000000000000000000000000000000002"
        );
    }

    #[test]
    fn zero_short_str() {
        assert_eq!(SuiAddress::ZERO.short_str(), "0x0");
    }

    #[test]
    fn rejects_missing_prefix_and_bad_digits() {
        assert!(SuiAddress::from_hex_literal("2").is_err());
        assert!(SuiAddress::from_hex_literal("0x").is_err());
        assert!(SuiAddress::from_hex_literal("0xzz").is_err());
        assert!(SuiAddress::from_hex_literal(&format!("0x{}", "1".repeat(65))).is_err());
    }
}
