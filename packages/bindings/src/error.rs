//! Binding error types

use msend_types::{ObjectId, TypeError};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BindingError {
    // Encoding
    #[error("bcs: {0}")]
    Bcs(#[from] bcs::Error),
    #[error("json: {0}")]
    Json(String),
    #[error(transparent)]
    Type(#[from] TypeError),

    // Type checks
    #[error("expected a `{expected}` object, got `{got}`")]
    WrongType { expected: String, got: String },
    #[error("type argument mismatch: expected {expected} type arguments but got {got}")]
    TypeArgCount { expected: usize, got: usize },
    #[error("type argument mismatch at position {position}: expected `{expected}` but got `{got}`")]
    TypeArgMismatch {
        position: usize,
        expected: String,
        got: String,
    },
    #[error("no binding registered for `{0}`")]
    UnknownType(String),

    // Parsed RPC content
    #[error("field `{field}`: {reason}")]
    Field { field: String, reason: String },

    // Transaction building
    #[error("too many {0} in one transaction")]
    TooMany(&'static str),
    #[error("invalid object digest `{0}`")]
    InvalidDigest(String),
    #[error("object input {0} has no resolved reference")]
    UnresolvedObject(ObjectId),
}

impl From<serde_json::Error> for BindingError {
    fn from(err: serde_json::Error) -> Self {
        BindingError::Json(err.to_string())
    }
}

impl BindingError {
    pub(crate) fn field(field: &str, reason: impl Into<String>) -> Self {
        BindingError::Field {
            field: field.to_string(),
            reason: reason.into(),
        }
    }
}

pub type Result<T, E = BindingError> = core::result::Result<T, E>;
