//! Type parsing errors

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TypeError {
    // Addresses
    #[error("invalid address `{0}`")]
    InvalidAddress(String),
    #[error("invalid address length: expected 32 bytes, got {0}")]
    InvalidAddressLength(usize),

    // Type tags
    #[error("invalid identifier `{0}`")]
    InvalidIdentifier(String),
    #[error("invalid type tag `{input}`: {reason}")]
    InvalidTypeTag { input: String, reason: String },
}

pub type Result<T, E = TypeError> = core::result::Result<T, E>;
