// Property-Based Testing with Proptest
// Run with: cargo test -p msend-bindings --test test_proptest

use msend_bindings::ProgrammableTransactionBuilder;
use msend_types::SuiAddress;
use proptest::prelude::*;

// ============================================================
// COMMAND LIST PROPERTIES
// ============================================================

proptest! {
    /// Property: an object referenced twice occupies a single input
    #[test]
    fn prop_objects_deduplicated(ids in prop::collection::vec(0u8..8, 1..32)) {
        let mut ptb = ProgrammableTransactionBuilder::new();
        for byte in &ids {
            ptb.object(SuiAddress::new([*byte; 32])).unwrap();
        }
        let mut distinct = ids.clone();
        distinct.sort_unstable();
        distinct.dedup();
        prop_assert_eq!(ptb.finish().inputs.len(), distinct.len());
    }
}
