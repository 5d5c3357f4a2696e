//! Key decoding errors

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KeyError {
    #[error("invalid private key format: expected prefix `suiprivkey1`")]
    InvalidPrefix,
    #[error("bech32 decoding failed: {0}")]
    Bech32(#[from] bech32::Error),
    #[error("private key must use the bech32 checksum variant")]
    InvalidVariant,
    #[error("invalid private key length: expected {expected} bytes, got {actual}")]
    InvalidLength { expected: usize, actual: usize },
    #[error("environment variable `{0}` is not set")]
    MissingEnv(String),
}

pub type Result<T, E = KeyError> = core::result::Result<T, E>;
