// Sui full-node JSON-RPC client

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use msend_bindings::{
    DecodedStruct, MoveObject, MoveStruct, ProgrammableTransaction, StructRegistry,
    TransactionKind,
};
use msend_types::{ObjectId, SuiAddress, TypeTag};
use reqwest::{Client, Url};
use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use tracing::{debug, info};

use crate::decode::{decode_any, decode_object};
use crate::error::{ClientError, Result};
use crate::resolve::object_arg;
use crate::types::{
    CoinPage, DevInspectResults, RpcRequest, RpcResponse, SuiCoin, SuiObjectData,
    SuiObjectDataOptions, SuiObjectResponse, SuiTransactionBlockResponse,
};

/// Coins fetched per `suix_getCoins` page.
const COIN_PAGE_LIMIT: usize = 50;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

pub struct SuiRpcClient {
    url: Url,
    client: Client,
    next_id: AtomicU64,
}

impl SuiRpcClient {
    pub fn new(url: &str) -> Result<Self> {
        let url = Url::parse(url).map_err(|_| ClientError::InvalidUrl(url.to_string()))?;
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self {
            url,
            client,
            next_id: AtomicU64::new(1),
        })
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    pub async fn call<T: DeserializeOwned>(&self, method: &str, params: Value) -> Result<T> {
        let request = RpcRequest {
            jsonrpc: "2.0",
            id: self.next_id.fetch_add(1, Ordering::Relaxed),
            method,
            params,
        };
        debug!(method, id = request.id, "rpc request");
        let body: Value = self
            .client
            .post(self.url.clone())
            .json(&request)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        parse_response(body)
    }

    /// `sui_getObject`
    ///
    /// # Errors
    /// - [`ClientError::ObjectNotFound`] if the node reports the object missing
    /// - [`ClientError::ObjectError`] for any other per-object error
    pub async fn get_object(
        &self,
        object_id: ObjectId,
        options: SuiObjectDataOptions,
    ) -> Result<SuiObjectData> {
        let response: SuiObjectResponse = self
            .call("sui_getObject", json!([object_id, options]))
            .await?;
        let data = object_data(object_id, response)?;
        info!(object_id = %object_id.short_str(), version = data.version, "fetched object");
        Ok(data)
    }

    /// `sui_multiGetObjects`, in the order of `object_ids`.
    pub async fn multi_get_objects(
        &self,
        object_ids: &[ObjectId],
        options: SuiObjectDataOptions,
    ) -> Result<Vec<SuiObjectData>> {
        let responses: Vec<SuiObjectResponse> = self
            .call("sui_multiGetObjects", json!([object_ids, options]))
            .await?;
        if responses.len() != object_ids.len() {
            return Err(ClientError::Response(format!(
                "asked for {} objects, got {}",
                object_ids.len(),
                responses.len()
            )));
        }
        object_ids
            .iter()
            .zip(responses)
            .map(|(id, response)| object_data(*id, response))
            .collect()
    }

    /// Look up every object input of `plan` and build the transaction a
    /// node will accept.
    pub async fn resolve(&self, plan: &ProgrammableTransaction) -> Result<TransactionKind> {
        let ids = plan.object_ids();
        let mut objects = HashMap::with_capacity(ids.len());
        if !ids.is_empty() {
            for data in self.multi_get_objects(&ids, SuiObjectDataOptions::owner()).await? {
                objects.insert(data.object_id, object_arg(&data)?);
            }
        }
        debug!(objects = objects.len(), "resolved object inputs");
        Ok(plan.resolve(&objects)?)
    }

    /// `sui_devInspectTransactionBlock`: run `kind` as `sender` without
    /// committing anything or needing gas coins.
    pub async fn dev_inspect(
        &self,
        sender: SuiAddress,
        kind: &TransactionKind,
    ) -> Result<DevInspectResults> {
        let tx_bytes = STANDARD.encode(kind.to_bcs()?);
        let results: DevInspectResults = self
            .call(
                "sui_devInspectTransactionBlock",
                json!([sender, tx_bytes, Value::Null, Value::Null]),
            )
            .await?;
        info!(
            %sender,
            status = %results.effects.status.status,
            computation_cost = results.effects.gas_used.computation_cost,
            "dev inspect"
        );
        Ok(results)
    }

    /// `suix_getReferenceGasPrice`
    pub async fn reference_gas_price(&self) -> Result<u64> {
        let price: Value = self.call("suix_getReferenceGasPrice", json!([])).await?;
        let parsed = match &price {
            Value::String(s) => s.parse().ok(),
            Value::Number(n) => n.as_u64(),
            _ => None,
        };
        parsed.ok_or_else(|| ClientError::Response(format!("unexpected gas price {}", price)))
    }

    /// First page of `owner`'s coins of `coin_type`.
    pub async fn get_coins(&self, owner: SuiAddress, coin_type: &str) -> Result<Vec<SuiCoin>> {
        let page: CoinPage = self
            .call(
                "suix_getCoins",
                json!([owner, coin_type, Value::Null, COIN_PAGE_LIMIT]),
            )
            .await?;
        debug!(%owner, coin_type, coins = page.data.len(), more = page.has_next_page, "fetched coins");
        Ok(page.data)
    }

    /// `sui_executeTransactionBlock` with serialized signatures, waiting for
    /// local execution.
    pub async fn execute(
        &self,
        tx_bytes: &[u8],
        signatures: &[&[u8]],
    ) -> Result<SuiTransactionBlockResponse> {
        let signatures: Vec<String> = signatures.iter().map(|sig| STANDARD.encode(sig)).collect();
        let response: SuiTransactionBlockResponse = self
            .call(
                "sui_executeTransactionBlock",
                json!([
                    STANDARD.encode(tx_bytes),
                    signatures,
                    { "showEffects": true },
                    "WaitForLocalExecution"
                ]),
            )
            .await?;
        info!(digest = %response.digest, "executed transaction");
        Ok(response)
    }

    /// Fetch and decode an object as `T` under `package` with `type_args`.
    pub async fn fetch<T: MoveStruct>(
        &self,
        package: &SuiAddress,
        type_args: &[TypeTag],
        object_id: ObjectId,
    ) -> Result<MoveObject<T>> {
        let data = self.get_object(object_id, SuiObjectDataOptions::decode()).await?;
        decode_object(&data, package, type_args)
    }

    /// Fetch an object and decode it through `registry`.
    pub async fn fetch_any(
        &self,
        registry: &StructRegistry,
        object_id: ObjectId,
    ) -> Result<DecodedStruct> {
        let data = self.get_object(object_id, SuiObjectDataOptions::decode()).await?;
        decode_any(&data, registry)
    }
}

/// Unwrap a JSON-RPC envelope into its result.
pub fn parse_response<T: DeserializeOwned>(body: Value) -> Result<T> {
    let response: RpcResponse<T> = serde_json::from_value(body)?;
    if let Some(error) = response.error {
        return Err(ClientError::Rpc {
            code: error.code,
            message: error.message,
        });
    }
    response
        .result
        .ok_or_else(|| ClientError::Response("neither result nor error".to_string()))
}

/// Object data out of a `sui_getObject` response.
pub fn object_data(object_id: ObjectId, response: SuiObjectResponse) -> Result<SuiObjectData> {
    if let Some(error) = response.error {
        return Err(match error.code.as_str() {
            "notExists" | "deleted" => ClientError::ObjectNotFound(object_id),
            _ => ClientError::ObjectError {
                object_id,
                reason: error.code,
            },
        });
    }
    response.data.ok_or(ClientError::ObjectNotFound(object_id))
}
