// SPDX-License-Identifier: MIT
// `suiprivkey` bech32 encoding

use bech32::{FromBase32, ToBase32, Variant};
use tracing::warn;

use crate::error::{KeyError, Result};

pub const SUI_PRIVATE_KEY_HRP: &str = "suiprivkey";
pub const SUI_PRIVATE_KEY_PREFIX: &str = "suiprivkey1";
pub const PRIVATE_KEY_LENGTH: usize = 32;

/// Signature scheme flag for Ed25519 keys and addresses.
pub const ED25519_FLAG: u8 = 0x00;

/// Decode a `suiprivkey1...` string into a 32-byte Ed25519 secret.
///
/// A 33-byte payload carries a leading scheme flag, which is dropped. A flag
/// other than Ed25519 is logged and the remaining bytes are still used as an
/// Ed25519 secret.
///
/// # Errors
/// - [`KeyError::InvalidPrefix`] if the string does not start with `suiprivkey1`
/// - [`KeyError::Bech32`] / [`KeyError::InvalidVariant`] on malformed bech32
/// - [`KeyError::InvalidLength`] unless the payload is 32 or 33 bytes
pub fn decode_sui_private_key(encoded: &str) -> Result<[u8; PRIVATE_KEY_LENGTH]> {
    if !encoded.starts_with(SUI_PRIVATE_KEY_PREFIX) {
        return Err(KeyError::InvalidPrefix);
    }

    let (_, words, variant) = bech32::decode(encoded)?;
    if variant != Variant::Bech32 {
        return Err(KeyError::InvalidVariant);
    }
    let payload = Vec::<u8>::from_base32(&words)?;

    let secret = match payload.len() {
        33 => {
            if payload[0] != ED25519_FLAG {
                warn!(flag = payload[0], "private key flag is not Ed25519, using key bytes as Ed25519");
            }
            &payload[1..]
        }
        PRIVATE_KEY_LENGTH => &payload[..],
        actual => {
            return Err(KeyError::InvalidLength {
                expected: PRIVATE_KEY_LENGTH,
                actual,
            })
        }
    };

    let mut bytes = [0u8; PRIVATE_KEY_LENGTH];
    bytes.copy_from_slice(secret);
    Ok(bytes)
}

/// Encode a 32-byte Ed25519 secret as `suiprivkey1...`, flag byte included.
pub fn encode_sui_private_key(secret: &[u8; PRIVATE_KEY_LENGTH]) -> Result<String> {
    let mut payload = Vec::with_capacity(PRIVATE_KEY_LENGTH + 1);
    payload.push(ED25519_FLAG);
    payload.extend_from_slice(secret);
    Ok(bech32::encode(
        SUI_PRIVATE_KEY_HRP,
        payload.to_base32(),
        Variant::Bech32,
    )?)
}
