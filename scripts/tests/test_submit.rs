use std::collections::HashMap;

use msend_bindings::{ObjectArg, ObjectRef, TransactionData};
use msend_client::{DevInspectResults, SuiTransactionBlockResponse};
use msend_keys::SuiKeypair;
use msend_scripts::*;
use serde_json::json;

const SAMPLE: &str = include_str!("../msend.toml");
const DIGEST: &str = "9WzSXdwbky8tNbH7juvyaui4QzMUYEjdCEKMrMgLhXHT";
const TX_DIGEST: &str = "C2QKmxrYPNBJjNmLtZrzFt9tVfq7wo2JZBmc5nQKYFdt";

fn object_ref(object_id: msend_types::ObjectId, version: u64) -> ObjectRef {
    ObjectRef {
        object_id,
        version,
        digest: DIGEST.parse().unwrap(),
    }
}

fn effects(status: serde_json::Value) -> serde_json::Value {
    json!({
        "status": status,
        "gasUsed": {
            "computationCost": "750000",
            "storageCost": "2000000",
            "storageRebate": "1000000"
        }
    })
}

// ============================================================
// SIGNING TESTS
// ============================================================

#[test]
fn test_signed_mint_transaction() {
    let keypair = SuiKeypair::from_secret(&[7; 32]);
    let config: Config = SAMPLE.parse().unwrap();
    let plan = build_plan(&config, Script::MintMtokens, keypair.address()).unwrap();

    let objects: HashMap<_, _> = plan
        .object_ids()
        .into_iter()
        .map(|id| (id, ObjectArg::ImmOrOwnedObject(object_ref(id, 11))))
        .collect();
    let kind = plan.resolve(&objects).unwrap();
    let gas = object_ref("0x77".parse().unwrap(), 3);

    let signed = sign(&keypair, kind.clone(), vec![gas], 4_000_000, 750).unwrap();

    let TransactionData::V1(data) = bcs::from_bytes(&signed.tx_bytes).unwrap();
    assert_eq!(data.kind, kind);
    assert_eq!(data.sender, keypair.address());
    assert_eq!(data.gas_data.owner, keypair.address());
    assert_eq!(data.gas_data.payment, vec![gas]);
    assert_eq!(data.gas_data.price, 750);
    assert_eq!(data.gas_data.budget, 4_000_000);

    assert_eq!(signed.signature, keypair.sign_transaction(&signed.tx_bytes));
    assert_eq!(signed.signature[0], 0);
    assert_eq!(&signed.signature[65..], &keypair.public_key());
}

// ============================================================
// RESULT CHECK TESTS
// ============================================================

#[test]
fn test_simulation_abort_is_an_error() {
    let ok: DevInspectResults = serde_json::from_value(json!({
        "effects": effects(json!({ "status": "success" })),
        "events": []
    }))
    .unwrap();
    assert!(ensure_success(&ok).is_ok());
    // Storage net of rebate on top of computation and the overhead at price 750
    assert_eq!(ok.effects.gas_used.budget(750), 2_500_000);

    let aborted: DevInspectResults = serde_json::from_value(json!({
        "effects": effects(json!({
            "status": "failure",
            "error": "InsufficientCoinBalance in command 0"
        })),
        "events": []
    }))
    .unwrap();
    match ensure_success(&aborted) {
        Err(ScriptError::Simulation(reason)) => {
            assert_eq!(reason, "InsufficientCoinBalance in command 0")
        }
        other => panic!("unexpected {:?}", other),
    }
}

#[test]
fn test_execution_status_is_checked() {
    let response = |body: serde_json::Value| -> SuiTransactionBlockResponse {
        serde_json::from_value(body).unwrap()
    };

    let ok = response(json!({
        "digest": TX_DIGEST,
        "effects": effects(json!({ "status": "success" }))
    }));
    assert!(ensure_executed(&ok).is_ok());

    let failed = response(json!({
        "digest": TX_DIGEST,
        "effects": effects(json!({ "status": "failure", "error": "MoveAbort in command 3" }))
    }));
    match ensure_executed(&failed) {
        Err(ScriptError::Execution { digest, reason }) => {
            assert_eq!(digest, TX_DIGEST);
            assert_eq!(reason, "MoveAbort in command 3");
        }
        other => panic!("unexpected {:?}", other),
    }

    let rejected = response(json!({
        "digest": TX_DIGEST,
        "errors": ["quorum unreachable", "retry later"]
    }));
    assert!(matches!(
        ensure_executed(&rejected),
        Err(ScriptError::Execution { reason, .. }) if reason == "quorum unreachable; retry later"
    ));

    let empty = response(json!({ "digest": TX_DIGEST }));
    assert!(ensure_executed(&empty).is_err());
}
