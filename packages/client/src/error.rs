//! Client error types

use msend_bindings::BindingError;
use msend_types::{ObjectId, SuiAddress};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("invalid rpc url `{0}`")]
    InvalidUrl(String),
    #[error("http: {0}")]
    Http(#[from] reqwest::Error),
    #[error("rpc error {code}: {message}")]
    Rpc { code: i64, message: String },
    #[error("malformed rpc response: {0}")]
    Response(String),

    #[error("object {0} not found")]
    ObjectNotFound(ObjectId),
    #[error("object {object_id}: {reason}")]
    ObjectError { object_id: ObjectId, reason: String },
    #[error("object {0} has neither bcs nor parsed content")]
    MissingContent(ObjectId),
    #[error("object {0} is not a move object")]
    NotMoveObject(ObjectId),
    #[error("object {0} was fetched without its owner")]
    MissingOwner(ObjectId),
    #[error("object {object_id} has an owner transactions cannot reference: {owner}")]
    UnsupportedOwner { object_id: ObjectId, owner: String },
    #[error("{owner} holds {available} MIST in spare SUI coins, below the {budget} MIST gas budget")]
    InsufficientGas {
        owner: SuiAddress,
        budget: u64,
        available: u64,
    },
    #[error("base64: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error(transparent)]
    Binding(#[from] BindingError),
}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        ClientError::Response(err.to_string())
    }
}

pub type Result<T, E = ClientError> = core::result::Result<T, E>;
