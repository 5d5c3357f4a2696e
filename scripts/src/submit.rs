// Simulate and execute a planned transaction against a full node
//
// Simulation resolves the plan's objects and dev-inspects it as the sender.
// Execution does the same, then prices gas from the inspected costs, pays
// with the sender's spare SUI coins and submits the signed transaction.

use msend_bindings::{ObjectRef, ProgrammableTransaction, TransactionData, TransactionKind};
use msend_client::{select_gas, DevInspectResults, SuiRpcClient, SuiTransactionBlockResponse};
use msend_keys::{SuiKeypair, SERIALIZED_SIGNATURE_LENGTH};
use msend_types::SuiAddress;
use tracing::{debug, info};

use crate::error::{Result, ScriptError};

pub const SUI_COIN_TYPE: &str = "0x2::sui::SUI";

#[derive(Debug, Clone)]
pub struct Simulation {
    pub kind: TransactionKind,
    pub results: DevInspectResults,
}

#[derive(Debug, Clone)]
pub struct SignedTransaction {
    pub tx_bytes: Vec<u8>,
    pub signature: [u8; SERIALIZED_SIGNATURE_LENGTH],
}

/// Resolve `plan` and dev-inspect it as `sender`.
///
/// # Errors
/// - [`ScriptError::Client`] if an object cannot be resolved or the node fails
/// - [`ScriptError::Simulation`] if the transaction would abort
pub async fn simulate(
    client: &SuiRpcClient,
    plan: &ProgrammableTransaction,
    sender: SuiAddress,
) -> Result<Simulation> {
    let kind = client.resolve(plan).await?;
    let results = client.dev_inspect(sender, &kind).await?;
    ensure_success(&results)?;
    Ok(Simulation { kind, results })
}

/// Simulate `plan`, then sign and execute it with `keypair`.
///
/// Without `gas_budget` the budget comes from the simulated gas use.
pub async fn execute(
    client: &SuiRpcClient,
    plan: &ProgrammableTransaction,
    keypair: &SuiKeypair,
    gas_budget: Option<u64>,
) -> Result<SuiTransactionBlockResponse> {
    let sender = keypair.address();
    let Simulation { kind, results } = simulate(client, plan, sender).await?;

    let gas_price = client.reference_gas_price().await?;
    let budget = gas_budget.unwrap_or_else(|| results.effects.gas_used.budget(gas_price));
    info!(%sender, gas_price, budget, "gas budget");

    let coins = client.get_coins(sender, SUI_COIN_TYPE).await?;
    let payment = select_gas(sender, &coins, budget, &plan.object_ids())?;

    let signed = sign(keypair, kind, payment, budget, gas_price)?;
    let response = client
        .execute(&signed.tx_bytes, &[signed.signature.as_slice()])
        .await?;
    ensure_executed(&response)?;
    Ok(response)
}

/// Wrap `kind` with gas data paid by the key's address and sign it.
pub fn sign(
    keypair: &SuiKeypair,
    kind: TransactionKind,
    gas_payment: Vec<ObjectRef>,
    gas_budget: u64,
    gas_price: u64,
) -> Result<SignedTransaction> {
    let data = TransactionData::new(kind, keypair.address(), gas_payment, gas_budget, gas_price);
    let tx_bytes = data.to_bcs()?;
    let signature = keypair.sign_transaction(&tx_bytes);
    debug!(bytes = tx_bytes.len(), "signed transaction");
    Ok(SignedTransaction { tx_bytes, signature })
}

pub fn ensure_success(results: &DevInspectResults) -> Result<()> {
    match results.failure() {
        Some(reason) => Err(ScriptError::Simulation(reason)),
        None => Ok(()),
    }
}

/// Fail unless the node reports the transaction executed successfully.
pub fn ensure_executed(response: &SuiTransactionBlockResponse) -> Result<()> {
    let failed = |reason: String| ScriptError::Execution {
        digest: response.digest.clone(),
        reason,
    };
    if !response.errors.is_empty() {
        return Err(failed(response.errors.join("; ")));
    }
    match &response.effects {
        Some(effects) if effects.status.is_success() => Ok(()),
        Some(effects) => Err(failed(
            effects
                .status
                .error
                .clone()
                .unwrap_or_else(|| effects.status.status.clone()),
        )),
        None => Err(failed("no effects returned".to_string())),
    }
}
