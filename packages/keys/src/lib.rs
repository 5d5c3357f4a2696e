// msend keys package
//
// Loads the wallet key scripts run with and signs their transactions.

pub mod encoding;
pub mod error;
pub mod keypair;

pub use encoding::{
    decode_sui_private_key, encode_sui_private_key, ED25519_FLAG, PRIVATE_KEY_LENGTH,
    SUI_PRIVATE_KEY_HRP, SUI_PRIVATE_KEY_PREFIX,
};
pub use error::{KeyError, Result};
pub use keypair::{
    address_from_public_key, transaction_digest, SuiKeypair, SERIALIZED_SIGNATURE_LENGTH,
    TRANSACTION_INTENT,
};
