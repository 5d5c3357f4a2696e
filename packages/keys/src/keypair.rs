// Ed25519 keypair

use core::fmt;

use blake2::digest::consts::U32;
use blake2::{Blake2b, Digest};
use ed25519_dalek::{Signer, SigningKey};
use msend_types::SuiAddress;

use crate::encoding::{
    decode_sui_private_key, encode_sui_private_key, ED25519_FLAG, PRIVATE_KEY_LENGTH,
};
use crate::error::{KeyError, Result};

type Blake2b256 = Blake2b<U32>;

/// Intent prefix of transaction data: scope, version, app id.
pub const TRANSACTION_INTENT: [u8; 3] = [0, 0, 0];

/// `flag || signature || public_key`
pub const SERIALIZED_SIGNATURE_LENGTH: usize = 1 + 64 + 32;

/// Digest a wallet signs for BCS-encoded transaction data.
pub fn transaction_digest(tx_bytes: &[u8]) -> [u8; 32] {
    let mut hasher = Blake2b256::new();
    hasher.update(TRANSACTION_INTENT);
    hasher.update(tx_bytes);
    let digest = hasher.finalize();

    let mut bytes = [0u8; 32];
    bytes.copy_from_slice(&digest);
    bytes
}

/// Sui address of an Ed25519 public key: `blake2b-256(flag || public_key)`.
pub fn address_from_public_key(public_key: &[u8; 32]) -> SuiAddress {
    let mut hasher = Blake2b256::new();
    hasher.update([ED25519_FLAG]);
    hasher.update(public_key);
    let digest = hasher.finalize();

    let mut bytes = [0u8; 32];
    bytes.copy_from_slice(&digest);
    SuiAddress::new(bytes)
}

pub struct SuiKeypair {
    signing_key: SigningKey,
}

impl SuiKeypair {
    pub fn from_secret(secret: &[u8; PRIVATE_KEY_LENGTH]) -> Self {
        Self {
            signing_key: SigningKey::from_bytes(secret),
        }
    }

    pub fn from_encoded(encoded: &str) -> Result<Self> {
        decode_sui_private_key(encoded).map(|secret| Self::from_secret(&secret))
    }

    /// Load from the `suiprivkey1...` string held in environment variable `var`.
    pub fn from_env(var: &str) -> Result<Self> {
        let encoded = std::env::var(var).map_err(|_| KeyError::MissingEnv(var.to_string()))?;
        Self::from_encoded(encoded.trim())
    }

    pub fn public_key(&self) -> [u8; 32] {
        self.signing_key.verifying_key().to_bytes()
    }

    pub fn address(&self) -> SuiAddress {
        address_from_public_key(&self.public_key())
    }

    /// Raw Ed25519 signature over `message`.
    pub fn sign(&self, message: &[u8]) -> [u8; 64] {
        self.signing_key.sign(message).to_bytes()
    }

    /// Serialized signature over the intent digest of `tx_bytes`, as
    /// `sui_executeTransactionBlock` expects it (before base64).
    pub fn sign_transaction(&self, tx_bytes: &[u8]) -> [u8; SERIALIZED_SIGNATURE_LENGTH] {
        let signature = self.sign(&transaction_digest(tx_bytes));
        let mut out = [0u8; SERIALIZED_SIGNATURE_LENGTH];
        out[0] = ED25519_FLAG;
        out[1..65].copy_from_slice(&signature);
        out[65..].copy_from_slice(&self.public_key());
        out
    }

    pub fn to_encoded(&self) -> Result<String> {
        encode_sui_private_key(&self.signing_key.to_bytes())
    }
}

impl fmt::Debug for SuiKeypair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SuiKeypair")
            .field("address", &self.address())
            .finish_non_exhaustive()
    }
}
