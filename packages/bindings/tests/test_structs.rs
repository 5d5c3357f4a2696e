use msend_bindings::*;
use msend_types::{StructTag, SuiAddress, TypeTag};
use serde_json::json;

const MTOKEN_PKG: &str = "0xd0d8ed2a83da2f0f171de7d60b0b128637d51e6dbfbec232447a764cdc6af627";
const MSEND_TYPE: &str =
    "0x1a98c181ce323d1571be1f805b3d5d19e98c1f79492aa32f592e7fd4575fd9e2::msend::MSEND";
const SEND_TYPE: &str =
    "0x1a98c181ce323d1571be1f805b3d5d19e98c1f79492aa32f592e7fd4575fd9e2::send::SEND";
const SUI_TYPE: &str = "0x2::sui::SUI";

fn pkg() -> SuiAddress {
    MTOKEN_PKG.parse().unwrap()
}

fn type_args() -> Vec<TypeTag> {
    [MSEND_TYPE, SEND_TYPE, SUI_TYPE]
        .iter()
        .map(|s| s.parse().unwrap())
        .collect()
}

fn tag(name: &str) -> StructTag {
    StructTag::new(pkg(), "mtoken", name, type_args()).unwrap()
}

fn vesting_manager() -> VestingManager {
    VestingManager {
        id: Uid::new(SuiAddress::new([3; 32])),
        vesting_balance: Balance { value: 1_000_000 },
        penalty_balance: Balance { value: 25 },
        mtoken_treasury_cap: TreasuryCap {
            id: Uid::new(SuiAddress::new([4; 32])),
            total_supply: Supply { value: 1_000_000 },
        },
        start_penalty_numerator: 10,
        end_penalty_numerator: 1,
        penalty_denominator: 100_000,
        start_time_s: 1733311191,
        end_time_s: 1734002391,
    }
}

// ============================================================
// BCS TESTS
// ============================================================

#[test]
fn test_admin_cap_bcs_layout() {
    let mut bytes = vec![1u8; 32];
    bytes.extend([2u8; 32]);
    let cap = MoveObject::<AdminCap>::from_bcs(tag("AdminCap"), &bytes).unwrap();
    assert_eq!(cap.fields.id.object_id(), SuiAddress::new([1; 32]));
    assert_eq!(cap.fields.manager.bytes, SuiAddress::new([2; 32]));
    assert_eq!(cap.package(), pkg());
    assert_eq!(cap.to_bcs().unwrap(), bytes);
}

#[test]
fn test_vesting_manager_bcs_layout() {
    let bytes = vesting_manager().to_bcs().unwrap();
    // id, two balances, treasury cap (id + supply), five u64 fields
    assert_eq!(bytes.len(), 32 + 8 + 8 + 32 + 8 + 5 * 8);
    assert_eq!(&bytes[32..40], &1_000_000u64.to_le_bytes());
    assert_eq!(&bytes[bytes.len() - 8..], &1734002391u64.to_le_bytes());

    let decoded = MoveObject::<VestingManager>::from_bcs(tag("VestingManager"), &bytes).unwrap();
    assert_eq!(decoded.fields, vesting_manager());
}

#[test]
fn test_bcs_rejects_truncated_bytes() {
    let result = MoveObject::<AdminCap>::from_bcs(tag("AdminCap"), &[1u8; 40]);
    assert!(matches!(result, Err(BindingError::Bcs(_))));
}

#[test]
fn test_wrong_struct_name() {
    let result = MoveObject::<AdminCap>::from_bcs(tag("VestingManager"), &[0u8; 64]);
    assert!(matches!(result, Err(BindingError::WrongType { .. })));
}

#[test]
fn test_wrong_type_arg_count() {
    let short = StructTag::new(pkg(), "mtoken", "AdminCap", type_args()[..2].to_vec()).unwrap();
    assert_eq!(
        MoveObject::<AdminCap>::from_bcs(short, &[0u8; 64]),
        Err(BindingError::TypeArgCount {
            expected: 3,
            got: 2
        })
    );
}

// ============================================================
// TYPE ARGUMENT CHECKS
// ============================================================

#[test]
fn test_type_args_compare_compressed() {
    let cap = MoveObject::new(pkg(), type_args(), AdminCap {
        id: Uid::new(SuiAddress::new([1; 32])),
        manager: Id::from(SuiAddress::new([2; 32])),
    })
    .unwrap();

    let full_sui: TypeTag = "0x0000000000000000000000000000000000000000000000000000000000000002::sui::SUI"
        .parse()
        .unwrap();
    let mut expected = type_args();
    expected[2] = full_sui;
    assert_eq!(cap.assert_type_args(&expected), Ok(()));

    expected.swap(0, 1);
    assert_eq!(
        cap.assert_type_args(&expected),
        Err(BindingError::TypeArgMismatch {
            position: 0,
            expected: "0x1a98c181ce323d1571be1f805b3d5d19e98c1f79492aa32f592e7fd4575fd9e2::send::SEND"
                .to_string(),
            got: MSEND_TYPE.to_string(),
        })
    );
}

#[test]
fn test_is_type_helpers() {
    let full = tag("VestingManager").to_string();
    assert!(is_vesting_manager(&full, &pkg()));
    assert!(!is_admin_cap(&full, &pkg()));
    assert!(VestingManager::is_type(&tag("VestingManager"), &pkg()));
    assert_eq!(
        AdminCap::type_name(&pkg()),
        format!("{}::mtoken::AdminCap", MTOKEN_PKG)
    );
}

// ============================================================
// JSON TESTS
// ============================================================

#[test]
fn test_to_json_shape() {
    let manager = MoveObject::new(pkg(), type_args(), vesting_manager()).unwrap();
    let json = manager.to_json().unwrap();

    assert_eq!(
        json[TYPE_NAME_KEY],
        json!(format!("{}::mtoken::VestingManager", MTOKEN_PKG))
    );
    assert_eq!(
        json[TYPE_ARGS_KEY],
        json!([
            MSEND_TYPE,
            SEND_TYPE,
            "0x0000000000000000000000000000000000000000000000000000000000000002::sui::SUI"
        ])
    );
    assert_eq!(json["startPenaltyNumerator"], json!("10"));
    assert_eq!(json["vestingBalance"], json!({ "value": "1000000" }));
    assert_eq!(json["mtokenTreasuryCap"]["totalSupply"]["value"], json!("1000000"));
    assert_eq!(
        json["id"],
        json!("0x0303030303030303030303030303030303030303030303030303030303030303")
    );

    assert_eq!(MoveObject::<VestingManager>::from_json(&json).unwrap(), manager);
}

#[test]
fn test_from_json_requires_type_keys() {
    let mut json = MoveObject::new(pkg(), type_args(), vesting_manager())
        .unwrap()
        .to_json()
        .unwrap();
    json.as_object_mut().unwrap().remove(TYPE_ARGS_KEY);
    assert!(matches!(
        MoveObject::<VestingManager>::from_json(&json),
        Err(BindingError::Field { .. })
    ));
}

#[test]
fn test_from_rpc_content() {
    let item = json!({
        "type": format!("{}::mtoken::VestingManager<{}, {}, {}>", MTOKEN_PKG, MSEND_TYPE, SEND_TYPE, SUI_TYPE),
        "fields": {
            "id": { "id": "0x0303030303030303030303030303030303030303030303030303030303030303" },
            "vesting_balance": "1000000",
            "penalty_balance": "25",
            "mtoken_treasury_cap": {
                "type": format!("0x2::coin::TreasuryCap<{}>", MSEND_TYPE),
                "fields": {
                    "id": { "id": "0x0404040404040404040404040404040404040404040404040404040404040404" },
                    "total_supply": {
                        "type": format!("0x2::balance::Supply<{}>", MSEND_TYPE),
                        "fields": { "value": "1000000" }
                    }
                }
            },
            "start_penalty_numerator": "10",
            "end_penalty_numerator": "1",
            "penalty_denominator": "100000",
            "start_time_s": "1733311191",
            "end_time_s": "1734002391"
        }
    });
    let manager = MoveObject::<VestingManager>::from_fields_with_types(&item).unwrap();
    assert_eq!(manager.fields, vesting_manager());
    assert_eq!(manager.assert_type_args(&type_args()), Ok(()));
}
