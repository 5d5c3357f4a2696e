// msend client package
//
// Fetches objects from a Sui full node, decodes them into the bindings, and
// inspects and executes transactions.

pub mod decode;
pub mod error;
pub mod resolve;
pub mod rpc;
pub mod types;

pub use decode::{decode_any, decode_object};
pub use error::{ClientError, Result};
pub use rpc::{object_data, parse_response, SuiRpcClient};
pub use resolve::{object_arg, select_gas};
pub use types::{
    CoinPage, DevInspectResults, ExecutionStatus, GasCostSummary, Owner, SuiCoin, SuiObjectData,
    SuiObjectDataOptions, SuiObjectResponse, SuiParsedData, SuiRawData,
    SuiTransactionBlockResponse, TransactionEffects,
};
