// Property-Based Testing with Proptest
// Run with: cargo test -p msend-math --test test_proptest

use msend_math::*;
use num_bigint::BigUint;
use proptest::prelude::*;
use rust_decimal::Decimal;

// ============================================================
// Q64 PROPERTY TESTS
// ============================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(1000))]

    /// Property: multiplying by 1.0 in Q64.64 is the identity
    #[test]
    fn prop_mul_shr_identity(a in any::<u128>()) {
        prop_assert_eq!(mul_shr(a, Q64, 64), Ok(a));
    }

    /// Property: mul_shr(a, b, s) = mul_shr(b, a, s)
    #[test]
    fn prop_mul_shr_commutative(a in any::<u128>(), b in any::<u128>(), shift in 64u32..=128) {
        prop_assert_eq!(mul_shr(a, b, shift), mul_shr(b, a, shift));
    }
}

// ============================================================
// TICK SPACING PROPERTY TESTS
// ============================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(2000))]

    /// Property: aligned tick is a multiple of spacing, never above the tick,
    /// and less than one spacing below it
    #[test]
    fn prop_tick_spacing(tick in MIN_TICK..=MAX_TICK, spacing in 1i32..=16384) {
        let aligned = align_tick_to_spacing(tick, spacing).unwrap();
        prop_assert_eq!(aligned.rem_euclid(spacing), 0);
        prop_assert!(aligned <= tick);
        prop_assert!(tick - aligned < spacing);
    }

    /// Property: align(align(t)) = align(t)
    #[test]
    fn prop_tick_spacing_idempotent(tick in MIN_TICK..=MAX_TICK, spacing in 1i32..=16384) {
        let once = align_tick_to_spacing(tick, spacing).unwrap();
        prop_assert_eq!(align_tick_to_spacing(once, spacing), Ok(once));
    }

    /// Property: non-positive spacing is always rejected
    #[test]
    fn prop_tick_spacing_rejects_non_positive(tick in any::<i32>(), spacing in i32::MIN..=0) {
        prop_assert_eq!(
            align_tick_to_spacing(tick, spacing),
            Err(MathError::InvalidTickSpacing(spacing))
        );
    }
}

// ============================================================
// SQRT PRICE PROPERTY TESTS
// ============================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(300))]

    /// Property: get_tick_at_sqrt_price(get_sqrt_price_at_tick(t)) = t
    #[test]
    fn prop_tick_round_trip(tick in MIN_TICK..=MAX_TICK) {
        let sqrt_price = get_sqrt_price_at_tick(tick).unwrap();
        prop_assert_eq!(get_tick_at_sqrt_price(sqrt_price), Ok(tick));
    }

    /// Property: sqrt price is strictly increasing in tick
    #[test]
    fn prop_sqrt_price_monotonic(tick in MIN_TICK..MAX_TICK) {
        let lower = get_sqrt_price_at_tick(tick).unwrap();
        let upper = get_sqrt_price_at_tick(tick + 1).unwrap();
        prop_assert!(lower < upper);
    }

    /// Property: the found tick brackets the sqrt price
    #[test]
    fn prop_tick_brackets_sqrt_price(sqrt_price in MIN_SQRT_PRICE_X64..=MAX_SQRT_PRICE_X64) {
        let tick = get_tick_at_sqrt_price(sqrt_price).unwrap();
        prop_assert!(get_sqrt_price_at_tick(tick).unwrap() <= sqrt_price);
        if tick < MAX_TICK {
            prop_assert!(get_sqrt_price_at_tick(tick + 1).unwrap() > sqrt_price);
        }
    }
}

// ============================================================
// CLOSEST TICK PROPERTY TESTS
// ============================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(300))]

    /// Property: closest_sqrt_price is non-decreasing in price
    #[test]
    fn prop_closest_sqrt_price_monotonic(
        a in 1i64..1_000_000_000_000i64,
        b in 1i64..1_000_000_000_000i64,
        spacing in prop::sample::select(vec![1, 2, 10, 60, 200, 220]),
    ) {
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        let price_low = Decimal::new(low, 6);
        let price_high = Decimal::new(high, 6);
        let sqrt_low = closest_sqrt_price(price_low, 6, 9, spacing).unwrap();
        let sqrt_high = closest_sqrt_price(price_high, 6, 9, spacing).unwrap();
        prop_assert!(sqrt_low <= sqrt_high);
    }

    /// Property: the bound never exceeds the requested price
    #[test]
    fn prop_closest_sqrt_price_not_above_price(
        m in 1i64..1_000_000_000_000i64,
        spacing in 1i32..=1000,
    ) {
        let price = Decimal::new(m, 6);
        let exact = price_to_sqrt_price_x64(price, 9, 6).unwrap();
        let bound = closest_sqrt_price(price, 9, 6, spacing).unwrap();
        prop_assert!(bound <= BigUint::from(exact));
    }

    /// Property: closest_tick agrees with aligning the raw tick
    #[test]
    fn prop_closest_tick_is_aligned_raw_tick(
        m in 1i64..1_000_000_000_000i64,
        spacing in 1i32..=1000,
    ) {
        let price = Decimal::new(m, 4);
        let raw = price_to_tick_index(price, 6, 6).unwrap();
        let aligned = closest_tick(price, 6, 6, spacing).unwrap();
        prop_assert_eq!(aligned, align_tick_to_spacing(raw, spacing).unwrap());
        prop_assert!(raw - aligned < spacing);
    }
}
