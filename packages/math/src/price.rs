// SPDX-License-Identifier: MIT
// Decimal price <-> Q64.64 sqrt price conversions
//
// A human price is "units of token B per unit of token A". On chain the pool
// prices raw units, so the price is rescaled by 10^(decimals_b - decimals_a)
// before taking the square root. All intermediate math is exact big-integer
// arithmetic; no floating point is involved.

use num_bigint::BigUint;
use num_traits::{One, ToPrimitive};
use rust_decimal::Decimal;

use crate::constants::{MAX_DECIMALS, PRICE_DISPLAY_SCALE};
use crate::error::{MathError, Result};
use crate::sqrt_price::{get_sqrt_price_at_tick, get_tick_at_sqrt_price};

fn pow10(exponent: u32) -> BigUint {
    BigUint::from(10u32).pow(exponent)
}

fn check_decimals(decimals: u8) -> Result<()> {
    if decimals > MAX_DECIMALS {
        return Err(MathError::InvalidDecimals(decimals));
    }
    Ok(())
}

/// Convert a decimal price into a Q64.64 sqrt price, rounded down.
///
/// Computes `floor(sqrt(price * 10^(decimals_b - decimals_a)) * 2^64)`
/// exactly, as `isqrt(floor(price_raw * 2^128))`.
///
/// # Errors
/// - [`MathError::NonPositivePrice`] for zero or negative prices
/// - [`MathError::InvalidDecimals`] for decimals above 18
/// - [`MathError::PriceOutOfRange`] if the result does not fit in u128
pub fn price_to_sqrt_price_x64(price: Decimal, decimals_a: u8, decimals_b: u8) -> Result<u128> {
    check_decimals(decimals_a)?;
    check_decimals(decimals_b)?;
    if price <= Decimal::ZERO {
        return Err(MathError::NonPositivePrice(price));
    }

    let mut numerator = BigUint::from(price.mantissa().unsigned_abs()) << 128u32;
    let mut denominator = pow10(price.scale());
    if decimals_b >= decimals_a {
        numerator *= pow10(u32::from(decimals_b - decimals_a));
    } else {
        denominator *= pow10(u32::from(decimals_a - decimals_b));
    }

    (numerator / denominator)
        .sqrt()
        .to_u128()
        .ok_or(MathError::PriceOutOfRange(price))
}

/// Convert a Q64.64 sqrt price back into a decimal price, truncated to the
/// precision a [`Decimal`] can hold.
///
/// # Errors
/// - [`MathError::InvalidDecimals`] for decimals above 18
/// - [`MathError::Overflow`] if the price exceeds the `Decimal` range
pub fn sqrt_price_x64_to_price(
    sqrt_price_x64: u128,
    decimals_a: u8,
    decimals_b: u8,
) -> Result<Decimal> {
    check_decimals(decimals_a)?;
    check_decimals(decimals_b)?;

    let mut numerator = BigUint::from(sqrt_price_x64).pow(2) * pow10(PRICE_DISPLAY_SCALE);
    let mut denominator = BigUint::one() << 128u32;
    if decimals_a >= decimals_b {
        numerator *= pow10(u32::from(decimals_a - decimals_b));
    } else {
        denominator *= pow10(u32::from(decimals_b - decimals_a));
    }

    let limit = BigUint::from(Decimal::MAX.mantissa().unsigned_abs());
    let mut quotient = numerator / denominator;
    let mut scale = PRICE_DISPLAY_SCALE;
    while quotient > limit {
        if scale == 0 {
            return Err(MathError::Overflow("sqrt_price_x64_to_price"));
        }
        quotient /= 10u32;
        scale -= 1;
    }

    let mantissa = quotient
        .to_i128()
        .ok_or(MathError::Overflow("sqrt_price_x64_to_price"))?;
    Decimal::try_from_i128_with_scale(mantissa, scale)
        .map(|price| price.normalize())
        .map_err(|_| MathError::Overflow("sqrt_price_x64_to_price"))
}

/// Greatest tick whose price does not exceed `price`.
///
/// # Errors
/// Everything [`price_to_sqrt_price_x64`] rejects, plus
/// [`MathError::PriceOutOfRange`] when the price falls outside the tick range.
pub fn price_to_tick_index(price: Decimal, decimals_a: u8, decimals_b: u8) -> Result<i32> {
    let sqrt_price = price_to_sqrt_price_x64(price, decimals_a, decimals_b)?;
    get_tick_at_sqrt_price(sqrt_price).map_err(|err| match err {
        MathError::SqrtPriceOutOfRange(_) => MathError::PriceOutOfRange(price),
        other => other,
    })
}

/// Decimal price at a tick.
pub fn tick_index_to_price(tick: i32, decimals_a: u8, decimals_b: u8) -> Result<Decimal> {
    sqrt_price_x64_to_price(get_sqrt_price_at_tick(tick)?, decimals_a, decimals_b)
}
