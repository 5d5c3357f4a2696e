// JSON-RPC payloads: objects, coins, inspection and execution results

use msend_bindings::{ObjectDigest, ObjectRef};
use msend_types::{u64_string, ObjectId, SuiAddress};
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuiObjectDataOptions {
    pub show_type: bool,
    pub show_owner: bool,
    pub show_content: bool,
    pub show_bcs: bool,
}

impl SuiObjectDataOptions {
    /// Type, BCS and parsed content: everything decoding needs.
    pub fn decode() -> Self {
        Self {
            show_type: true,
            show_owner: false,
            show_content: true,
            show_bcs: true,
        }
    }

    /// Owner only, for turning an id into a transaction input.
    pub fn owner() -> Self {
        Self {
            show_owner: true,
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuiObjectResponse {
    #[serde(default)]
    pub data: Option<SuiObjectData>,
    #[serde(default)]
    pub error: Option<ObjectResponseError>,
}

/// Per-object error, e.g. `{ "code": "notExists", "object_id": "0x.." }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObjectResponseError {
    pub code: String,
    #[serde(flatten)]
    pub details: serde_json::Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuiObjectData {
    pub object_id: ObjectId,
    #[serde(with = "u64_string")]
    pub version: u64,
    pub digest: String,
    #[serde(rename = "type", default)]
    pub type_: Option<String>,
    #[serde(default)]
    pub owner: Option<Value>,
    #[serde(default)]
    pub bcs: Option<SuiRawData>,
    #[serde(default)]
    pub content: Option<SuiParsedData>,
}

impl SuiObjectData {
    pub fn object_ref(&self) -> Result<ObjectRef, msend_bindings::BindingError> {
        Ok(ObjectRef {
            object_id: self.object_id,
            version: self.version,
            digest: self.digest.parse::<ObjectDigest>()?,
        })
    }
}

/// Object ownership as the node reports it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Owner {
    AddressOwner(SuiAddress),
    ObjectOwner(SuiAddress),
    Shared {
        #[serde(with = "u64_string")]
        initial_shared_version: u64,
    },
    Immutable,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuiRawData {
    pub data_type: String,
    #[serde(rename = "type", default)]
    pub type_: Option<String>,
    #[serde(default)]
    pub bcs_bytes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuiParsedData {
    pub data_type: String,
    #[serde(rename = "type", default)]
    pub type_: Option<String>,
    #[serde(default)]
    pub fields: Option<Value>,
}

pub const MOVE_OBJECT: &str = "moveObject";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RpcRequest<'a> {
    pub jsonrpc: &'a str,
    pub id: u64,
    pub method: &'a str,
    pub params: Value,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RpcResponse<T> {
    pub result: Option<T>,
    #[serde(default)]
    pub error: Option<RpcErrorObject>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RpcErrorObject {
    pub code: i64,
    pub message: String,
}

/// One page of `suix_getCoins`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoinPage {
    pub data: Vec<SuiCoin>,
    #[serde(default)]
    pub next_cursor: Option<String>,
    pub has_next_page: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuiCoin {
    pub coin_type: String,
    pub coin_object_id: ObjectId,
    #[serde(with = "u64_string")]
    pub version: u64,
    pub digest: String,
    #[serde(with = "u64_string")]
    pub balance: u64,
}

impl SuiCoin {
    pub fn object_ref(&self) -> Result<ObjectRef, msend_bindings::BindingError> {
        Ok(ObjectRef {
            object_id: self.coin_object_id,
            version: self.version,
            digest: self.digest.parse::<ObjectDigest>()?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionStatus {
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ExecutionStatus {
    pub fn is_success(&self) -> bool {
        self.status == "success"
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GasCostSummary {
    #[serde(with = "u64_string")]
    pub computation_cost: u64,
    #[serde(with = "u64_string")]
    pub storage_cost: u64,
    #[serde(with = "u64_string")]
    pub storage_rebate: u64,
    #[serde(default, with = "u64_string")]
    pub non_refundable_storage_fee: u64,
}

/// Computation units of headroom added to an inspected budget.
pub const GAS_SAFE_OVERHEAD: u64 = 1_000;

impl GasCostSummary {
    /// Budget covering these costs at `gas_price`: computation plus a fixed
    /// overhead, plus storage net of the rebate, never below the computation
    /// part alone.
    pub fn budget(&self, gas_price: u64) -> u64 {
        let computation = self
            .computation_cost
            .saturating_add(GAS_SAFE_OVERHEAD.saturating_mul(gas_price));
        let total = computation
            .saturating_add(self.storage_cost)
            .saturating_sub(self.storage_rebate);
        total.max(computation)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionEffects {
    pub status: ExecutionStatus,
    #[serde(default)]
    pub gas_used: GasCostSummary,
}

/// `sui_devInspectTransactionBlock` result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DevInspectResults {
    pub effects: TransactionEffects,
    #[serde(default)]
    pub events: Vec<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub results: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl DevInspectResults {
    /// The failure reported by the node, if the transaction would abort.
    pub fn failure(&self) -> Option<String> {
        if let Some(error) = &self.error {
            return Some(error.clone());
        }
        if self.effects.status.is_success() {
            return None;
        }
        Some(
            self.effects
                .status
                .error
                .clone()
                .unwrap_or_else(|| self.effects.status.status.clone()),
        )
    }
}

/// `sui_executeTransactionBlock` result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuiTransactionBlockResponse {
    pub digest: String,
    #[serde(default)]
    pub effects: Option<TransactionEffects>,
    #[serde(default)]
    pub errors: Vec<String>,
}
