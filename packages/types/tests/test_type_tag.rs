use msend_types::*;
use std::str::FromStr;

const MSEND: &str =
    "0x1a98c181ce323d1571be1f805b3d5d19e98c1f79492aa32f592e7fd4575fd9e2::msend::MSEND";
const SEND: &str =
    "0x1a98c181ce323d1571be1f805b3d5d19e98c1f79492aa32f592e7fd4575fd9e2::send::SEND";

// ============================================================
// PARSING TESTS
// ============================================================

#[test]
fn test_parse_primitives() {
    assert_eq!(TypeTag::from_str("u64"), Ok(TypeTag::U64));
    assert_eq!(TypeTag::from_str("  bool "), Ok(TypeTag::Bool));
    assert_eq!(TypeTag::from_str("u256"), Ok(TypeTag::U256));
    assert_eq!(
        TypeTag::from_str("vector<vector<u8>>"),
        Ok(TypeTag::Vector(Box::new(TypeTag::Vector(Box::new(TypeTag::U8)))))
    );
}

#[test]
fn test_parse_struct() {
    let tag = StructTag::from_str("0x2::sui::SUI").unwrap();
    assert_eq!(tag.address, SUI_FRAMEWORK_ADDRESS);
    assert_eq!(tag.module, "sui");
    assert_eq!(tag.name, "SUI");
    assert!(tag.type_params.is_empty());
}

#[test]
fn test_parse_nested_generics() {
    let input = format!("0xabc::mtoken::VestingManager<{}, {}, 0x2::sui::SUI>", MSEND, SEND);
    let tag = StructTag::from_str(&input).unwrap();
    assert_eq!(tag.type_params.len(), 3);
    assert_eq!(tag.type_params[0], TypeTag::from_str(MSEND).unwrap());

    let coin = StructTag::from_str("0x2::coin::Coin<0x2::balance::Balance<0x2::sui::SUI>>").unwrap();
    let inner = coin.type_params[0].as_struct().unwrap();
    assert_eq!(inner.name, "Balance");
    assert_eq!(inner.type_params.len(), 1);
}

#[test]
fn test_parse_errors() {
    for bad in [
        "",
        "0x2::sui",
        "0x2::sui::",
        "0x2::sui::SUI<",
        "0x2::sui::SUI<>",
        "0x2::sui::SUI>",
        "0x2:sui::SUI",
        "0xg::sui::SUI",
        "u7",
        "vector<u8",
        "0x2::9sui::SUI",
    ] {
        assert!(TypeTag::from_str(bad).is_err(), "should reject `{}`", bad);
    }
}

#[test]
fn test_struct_tag_rejects_primitive() {
    assert!(StructTag::from_str("u64").is_err());
}

// ============================================================
// NORMALISATION TESTS
// ============================================================

#[test]
fn test_short_and_long_address_forms_are_equal() {
    let short = TypeTag::from_str("0x2::sui::SUI").unwrap();
    let long = TypeTag::from_str(
        "0x0000000000000000000000000000000000000000000000000000000000000002::sui::SUI",
    )
    .unwrap();
    assert_eq!(short, long);
}

#[test]
fn test_display_uses_full_address() {
    let tag = TypeTag::from_str("0x2::coin::Coin<0x2::sui::SUI>").unwrap();
    assert_eq!(
        tag.to_string(),
        "0x0000000000000000000000000000000000000000000000000000000000000002::coin::Coin<0x0000000000000000000000000000000000000000000000000000000000000002::sui::SUI>"
    );
}

#[test]
fn test_compressed_string() {
    let tag = TypeTag::from_str(
        "0x0000000000000000000000000000000000000000000000000000000000000002::coin::Coin<0x0000000000000000000000000000000000000000000000000000000000000002::sui::SUI>",
    )
    .unwrap();
    assert_eq!(tag.to_compressed_string(), "0x2::coin::Coin<0x2::sui::SUI>");
    assert_eq!(compress_type_str("vector<0x02::sui::SUI>"), Ok("vector<0x2::sui::SUI>".to_string()));

    // Non-framework addresses keep every significant digit
    assert_eq!(compress_type_str(MSEND), Ok(MSEND.to_string()));
}

#[test]
fn test_display_round_trip() {
    let input = format!("0xabc::mtoken::AdminCap<{}, {}, 0x2::sui::SUI>", MSEND, SEND);
    let tag = TypeTag::from_str(&input).unwrap();
    assert_eq!(TypeTag::from_str(&tag.to_string()), Ok(tag.clone()));
    assert_eq!(TypeTag::from_str(&tag.to_compressed_string()), Ok(tag));
}

#[test]
fn test_type_name_drops_params() {
    let tag = StructTag::from_str("0x2::coin::TreasuryCap<0x2::sui::SUI>").unwrap();
    assert_eq!(tag.compressed_type_name(), "0x2::coin::TreasuryCap");
    assert!(tag.type_name().ends_with("0002::coin::TreasuryCap"));
}

// ============================================================
// SERDE TESTS
// ============================================================

#[test]
fn test_type_tag_json_is_string() {
    let tag = TypeTag::from_str("0x2::sui::SUI").unwrap();
    let json = serde_json::to_string(&tag).unwrap();
    assert_eq!(json, format!("\"{}\"", tag));
    let back: TypeTag = serde_json::from_str("\"0x2::sui::SUI\"").unwrap();
    assert_eq!(back, tag);
}

#[test]
fn test_type_tag_bcs_uses_move_layout() {
    assert_eq!(bcs::to_bytes(&TypeTag::U64).unwrap(), vec![2]);
    assert_eq!(bcs::to_bytes(&TypeTag::U16).unwrap(), vec![8]);
    assert_eq!(
        bcs::to_bytes(&TypeTag::from_str("vector<u8>").unwrap()).unwrap(),
        vec![6, 1]
    );

    let sui = TypeTag::from_str("0x2::sui::SUI").unwrap();
    let bytes = bcs::to_bytes(&sui).unwrap();
    let mut expected = vec![7];
    expected.extend(SUI_FRAMEWORK_ADDRESS.to_vec());
    expected.extend([3, b's', b'u', b'i', 3, b'S', b'U', b'I', 0]);
    assert_eq!(bytes, expected);
    assert_eq!(bcs::from_bytes::<TypeTag>(&bytes).unwrap(), sui);

    let nested = TypeTag::from_str(&format!("0x2::coin::Coin<{}>", MSEND)).unwrap();
    let bytes = bcs::to_bytes(&nested).unwrap();
    assert_eq!(bcs::from_bytes::<TypeTag>(&bytes).unwrap(), nested);
}

#[test]
fn test_struct_tag_bcs_rejects_bad_identifier() {
    let mut bytes = SUI_FRAMEWORK_ADDRESS.to_vec();
    bytes.extend([3, b's', b'-', b'i', 3, b'S', b'U', b'I', 0]);
    assert!(bcs::from_bytes::<StructTag>(&bytes).is_err());
}
