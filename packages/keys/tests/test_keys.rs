use msend_keys::*;
use proptest::prelude::*;

// Secret [7; 32] with the Ed25519 flag
const ENCODED: &str = "suiprivkey1qqrswpc8qurswpc8qurswpc8qurswpc8qurswpc8qurswpc8qurswxzszc4";
// Same secret without the flag byte
const ENCODED_NO_FLAG: &str = "suiprivkey1qurswpc8qurswpc8qurswpc8qurswpc8qurswpc8qurswpc8qursqsk8yj";
// Same secret under flag 0x01
const ENCODED_OTHER_FLAG: &str =
    "suiprivkey1qyrswpc8qurswpc8qurswpc8qurswpc8qurswpc8qurswpc8qurswua9amz";

const PUBLIC_KEY: &str = "ea4a6c63e29c520abef5507b132ec5f9954776aebebe7b92421eea691446d22c";
const ADDRESS: &str = "0xa0ccc8bcc83f6c628340134f8546a21e0618fd1aaa02432bba454c4a2c2233da";

// ============================================================
// DECODING TESTS
// ============================================================

#[test]
fn test_decode_with_flag() {
    assert_eq!(decode_sui_private_key(ENCODED), Ok([7u8; 32]));
}

#[test]
fn test_decode_without_flag() {
    assert_eq!(decode_sui_private_key(ENCODED_NO_FLAG), Ok([7u8; 32]));
}

#[test]
fn test_decode_strips_non_ed25519_flag() {
    assert_eq!(decode_sui_private_key(ENCODED_OTHER_FLAG), Ok([7u8; 32]));
}

#[test]
fn test_decode_rejects_prefix() {
    assert_eq!(decode_sui_private_key(""), Err(KeyError::InvalidPrefix));
    assert_eq!(
        decode_sui_private_key("suipubkey1qqrswpc8qurswpc8qurswpc8qurswpc8qurswpc8qurswpc8qurswuwzwtl"),
        Err(KeyError::InvalidPrefix)
    );
}

#[test]
fn test_decode_rejects_bad_checksum() {
    let mut corrupted = ENCODED.to_string();
    corrupted.pop();
    corrupted.push('q');
    assert!(matches!(
        decode_sui_private_key(&corrupted),
        Err(KeyError::Bech32(_))
    ));
}

#[test]
fn test_decode_rejects_short_payload() {
    // 31 zero bytes
    assert_eq!(
        decode_sui_private_key("suiprivkey1qqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqk4mgtr"),
        Err(KeyError::InvalidLength {
            expected: 32,
            actual: 31
        })
    );
}

#[test]
fn test_encode_matches_wallet_format() {
    assert_eq!(encode_sui_private_key(&[7u8; 32]).unwrap(), ENCODED);
}

// ============================================================
// KEYPAIR TESTS
// ============================================================

#[test]
fn test_keypair_public_key_and_address() {
    let keypair = SuiKeypair::from_encoded(ENCODED).unwrap();
    assert_eq!(hex::encode(keypair.public_key()), PUBLIC_KEY);
    assert_eq!(keypair.address().to_string(), ADDRESS);
    assert_eq!(keypair.to_encoded().unwrap(), ENCODED);
}

#[test]
fn test_keypair_signature() {
    let keypair = SuiKeypair::from_secret(&[7u8; 32]);
    assert_eq!(
        hex::encode(keypair.sign(b"msend")),
        "af01ed103b602906e8a3332dec2bb1dde8e568c23e3e789ddf6b950d0cbbac473b8f01396db31dea6d9f03b8ec3cef58a3781384138ab574ed2538d5b3462600"
    );
}

#[test]
fn test_transaction_signature_layout() {
    let keypair = SuiKeypair::from_secret(&[7u8; 32]);
    let digest = transaction_digest(b"msend");
    assert_eq!(
        hex::encode(digest),
        "9eb67331f836a40a274c745c2de5fb60b21359fccb1d39acc337e50208523fb2"
    );

    let serialized = keypair.sign_transaction(b"msend");
    assert_eq!(serialized.len(), SERIALIZED_SIGNATURE_LENGTH);
    assert_eq!(serialized[0], ED25519_FLAG);
    assert_eq!(serialized[65..], keypair.public_key());

    let signature = ed25519_dalek::Signature::from_bytes(serialized[1..65].try_into().unwrap());
    let verifying_key = ed25519_dalek::VerifyingKey::from_bytes(&keypair.public_key()).unwrap();
    assert!(verifying_key.verify_strict(&digest, &signature).is_ok());
    assert!(verifying_key.verify_strict(b"msend", &signature).is_err());
}

#[test]
fn test_keypair_debug_hides_secret() {
    let keypair = SuiKeypair::from_secret(&[7u8; 32]);
    let debug = format!("{:?}", keypair);
    assert!(debug.contains(ADDRESS));
    assert!(!debug.contains("0707"));
}

#[test]
fn test_keypair_from_env() {
    std::env::set_var("MSEND_KEYS_TEST_WALLET_KEY", ENCODED);
    let keypair = SuiKeypair::from_env("MSEND_KEYS_TEST_WALLET_KEY").unwrap();
    assert_eq!(keypair.address().to_string(), ADDRESS);

    assert_eq!(
        SuiKeypair::from_env("MSEND_KEYS_TEST_UNSET").unwrap_err(),
        KeyError::MissingEnv("MSEND_KEYS_TEST_UNSET".to_string())
    );
}

proptest! {
    /// Property: encode then decode returns the secret
    #[test]
    fn prop_encode_decode(secret in any::<[u8; 32]>()) {
        let encoded = encode_sui_private_key(&secret).unwrap();
        prop_assert!(encoded.starts_with(SUI_PRIVATE_KEY_PREFIX));
        prop_assert_eq!(decode_sui_private_key(&encoded), Ok(secret));
    }
}
