use msend_bindings::*;
use msend_types::SuiAddress;
use serde_json::json;

const MTOKEN_PKG: &str = "0xd0d8ed2a83da2f0f171de7d60b0b128637d51e6dbfbec232447a764cdc6af627";
const MSEND_TYPE: &str =
    "0x1a98c181ce323d1571be1f805b3d5d19e98c1f79492aa32f592e7fd4575fd9e2::msend::MSEND";

fn registry() -> StructRegistry {
    StructRegistry::with_mtoken(MTOKEN_PKG.parse().unwrap())
}

#[test]
fn test_registered_types() {
    let registry = registry();
    assert_eq!(registry.len(), 4);
    assert!(!registry.is_empty());
    assert!(StructRegistry::new().is_empty());
}

#[test]
fn test_decode_coin_bcs() {
    let mut bytes = vec![9u8; 32];
    bytes.extend(500u64.to_le_bytes());
    let decoded = registry()
        .decode_bcs(&format!("0x2::coin::Coin<{}>", MSEND_TYPE), &bytes)
        .unwrap();
    match &decoded {
        DecodedStruct::Coin(coin) => {
            assert_eq!(coin.fields.balance.value, 500);
            assert_eq!(coin.fields.id.object_id(), SuiAddress::new([9; 32]));
        }
        other => panic!("expected a coin, got {:?}", other),
    }
    assert_eq!(decoded.struct_tag().name, "Coin");
    assert_eq!(decoded.to_json().unwrap()["balance"], json!({ "value": "500" }));
}

#[test]
fn test_decode_admin_cap_fields_full_address() {
    // The 64-digit form of 0x2 and the package resolve to the same entries
    let type_str = format!(
        "{}::mtoken::AdminCap<{}, {}, 0x0000000000000000000000000000000000000000000000000000000000000002::sui::SUI>",
        MTOKEN_PKG, MSEND_TYPE, MSEND_TYPE
    );
    let fields = json!({ "id": { "id": "0x11" }, "manager": "0x22" });
    let decoded = registry().decode_fields(&type_str, &fields).unwrap();
    let DecodedStruct::AdminCap(cap) = decoded else {
        panic!("expected an admin cap");
    };
    assert_eq!(cap.fields.manager.bytes.short_str(), "0x22");
    assert_eq!(cap.type_args().len(), 3);
}

#[test]
fn test_unknown_type() {
    assert_eq!(
        registry().decode_bcs("0x2::coin::CoinMetadata<0x2::sui::SUI>", &[]),
        Err(BindingError::UnknownType("0x2::coin::CoinMetadata".to_string()))
    );
    // mtoken under a different package is not registered
    assert!(matches!(
        registry().decode_bcs("0x3::mtoken::AdminCap<u8, u8, u8>", &[]),
        Err(BindingError::UnknownType(_))
    ));
}

#[test]
fn test_arity_checked_before_decoding() {
    assert_eq!(
        registry().decode_bcs("0x2::coin::Coin", &[]),
        Err(BindingError::TypeArgCount {
            expected: 1,
            got: 0
        })
    );
}

#[test]
fn test_unparseable_type() {
    assert!(matches!(
        registry().decode_bcs("0x2::coin::Coin<", &[]),
        Err(BindingError::Type(_))
    ));
}
