// Object references and gas payment for signable transactions

use msend_bindings::{ObjectArg, ObjectRef};
use msend_types::{ObjectId, SuiAddress, SUI_CLOCK_OBJECT_ID};
use tracing::debug;

use crate::error::{ClientError, Result};
use crate::types::{Owner, SuiCoin, SuiObjectData};

/// Transaction input for a fetched object.
///
/// Shared objects are taken mutably, except the clock, which the chain only
/// admits read-only.
pub fn object_arg(data: &SuiObjectData) -> Result<ObjectArg> {
    let owner = data
        .owner
        .as_ref()
        .ok_or(ClientError::MissingOwner(data.object_id))?;
    let owner: Owner =
        serde_json::from_value(owner.clone()).map_err(|_| ClientError::UnsupportedOwner {
            object_id: data.object_id,
            owner: owner.to_string(),
        })?;
    Ok(match owner {
        Owner::Shared {
            initial_shared_version,
        } => ObjectArg::SharedObject {
            id: data.object_id,
            initial_shared_version,
            mutable: data.object_id != SUI_CLOCK_OBJECT_ID,
        },
        Owner::AddressOwner(_) | Owner::ObjectOwner(_) | Owner::Immutable => {
            ObjectArg::ImmOrOwnedObject(data.object_ref()?)
        }
    })
}

/// Pick gas coins covering `budget`, largest first, skipping coins the
/// transaction already uses as inputs.
///
/// # Errors
/// [`ClientError::InsufficientGas`] if the spare coins do not add up to `budget`.
pub fn select_gas(
    owner: SuiAddress,
    coins: &[SuiCoin],
    budget: u64,
    exclude: &[ObjectId],
) -> Result<Vec<ObjectRef>> {
    let mut spare: Vec<&SuiCoin> = coins
        .iter()
        .filter(|coin| !exclude.contains(&coin.coin_object_id))
        .collect();
    spare.sort_by(|a, b| b.balance.cmp(&a.balance));

    let mut payment = Vec::new();
    let mut total = 0u64;
    for coin in spare {
        if total >= budget {
            break;
        }
        payment.push(coin.object_ref()?);
        total = total.saturating_add(coin.balance);
    }
    if total < budget || payment.is_empty() {
        return Err(ClientError::InsufficientGas {
            owner,
            budget,
            available: total,
        });
    }
    debug!(coins = payment.len(), total, budget, "selected gas");
    Ok(payment)
}
