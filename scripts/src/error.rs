//! Script error types

use std::path::PathBuf;

use msend_bindings::BindingError;
use msend_client::ClientError;
use msend_math::MathError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("reading {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("parsing config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("config value `{0}` is required for this script")]
    Missing(&'static str),
    #[error("invalid config value `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

#[derive(Debug, Error)]
pub enum ScriptError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Math(#[from] MathError),
    #[error(transparent)]
    Binding(#[from] BindingError),
    #[error(transparent)]
    Client(#[from] ClientError),
    #[error("sqrt price {0} does not fit in u128")]
    SqrtPriceTooLarge(String),
    #[error("simulation failed: {0}")]
    Simulation(String),
    #[error("transaction {digest} failed: {reason}")]
    Execution { digest: String, reason: String },
}

pub type Result<T, E = ScriptError> = core::result::Result<T, E>;
