// SPDX-License-Identifier: MIT
// Tick alignment and slippage-bound conversion

use num_bigint::BigUint;
use rust_decimal::Decimal;
use tracing::debug;

use crate::error::{MathError, Result};
use crate::price::price_to_tick_index;
use crate::sqrt_price::get_sqrt_price_at_tick;

/// Snap a tick down to the nearest multiple of `tick_spacing`.
///
/// Floor semantics: multiples are returned unchanged, everything else moves
/// toward negative infinity (`-1500` with spacing `1000` becomes `-2000`).
/// The result is never above `tick`, so a price bound built from it is never
/// more favourable than the one requested.
///
/// # Errors
/// - [`MathError::InvalidTickSpacing`] if `tick_spacing <= 0`
/// - [`MathError::Overflow`] if the aligned value leaves the i32 range
pub fn align_tick_to_spacing(tick: i32, tick_spacing: i32) -> Result<i32> {
    if tick_spacing <= 0 {
        return Err(MathError::InvalidTickSpacing(tick_spacing));
    }
    let rem = tick.rem_euclid(tick_spacing);
    tick.checked_sub(rem)
        .ok_or(MathError::Overflow("align_tick_to_spacing"))
}

/// Tick-aligned tick index for a slippage-bound price.
///
/// Maps the price to the greatest tick at or below it, then aligns that tick
/// down to `tick_spacing`.
///
/// # Errors
/// Errors from the price conversion surface first and unchanged, then
/// [`MathError::InvalidTickSpacing`] from the alignment.
pub fn closest_tick(
    price: Decimal,
    decimals_a: u8,
    decimals_b: u8,
    tick_spacing: i32,
) -> Result<i32> {
    let raw_tick = price_to_tick_index(price, decimals_a, decimals_b)?;
    let aligned = align_tick_to_spacing(raw_tick, tick_spacing)?;
    debug!(%price, raw_tick, aligned, tick_spacing, "aligned price to tick");
    Ok(aligned)
}

/// Q64.64 sqrt price of [`closest_tick`], as an arbitrary-precision integer.
///
/// # Errors
/// Everything [`closest_tick`] rejects, plus [`MathError::TickOutOfRange`]
/// when alignment pushes a price near the bottom of the range below
/// `MIN_TICK`.
pub fn closest_sqrt_price(
    price: Decimal,
    decimals_a: u8,
    decimals_b: u8,
    tick_spacing: i32,
) -> Result<BigUint> {
    let tick = closest_tick(price, decimals_a, decimals_b, tick_spacing)?;
    get_sqrt_price_at_tick(tick).map(BigUint::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn multiples_unchanged() {
        assert_eq!(align_tick_to_spacing(46000, 200), Ok(46000));
        assert_eq!(align_tick_to_spacing(-2000, 1000), Ok(-2000));
        assert_eq!(align_tick_to_spacing(0, 60), Ok(0));
    }

    #[test]
    fn positive_drops_remainder() {
        assert_eq!(align_tick_to_spacing(46123, 200), Ok(46000));
    }

    #[test]
    fn negative_floors() {
        assert_eq!(align_tick_to_spacing(-1500, 1000), Ok(-2000));
        assert_eq!(align_tick_to_spacing(-1, 60), Ok(-60));
    }

    #[test]
    fn spacing_must_be_positive() {
        assert_eq!(align_tick_to_spacing(10, 0), Err(MathError::InvalidTickSpacing(0)));
        assert_eq!(align_tick_to_spacing(10, -5), Err(MathError::InvalidTickSpacing(-5)));
    }

    #[test]
    fn closest_tick_reports_price_before_spacing() {
        assert_eq!(
            closest_tick(Decimal::ZERO, 6, 9, 0),
            Err(MathError::NonPositivePrice(Decimal::ZERO))
        );
        assert_eq!(closest_tick(Decimal::ONE, 19, 9, 0), Err(MathError::InvalidDecimals(19)));
        assert_eq!(closest_tick(Decimal::ONE, 6, 9, 0), Err(MathError::InvalidTickSpacing(0)));
        assert_eq!(
            closest_sqrt_price(Decimal::ONE, 6, 9, -200),
            Err(MathError::InvalidTickSpacing(-200))
        );
    }

    #[test]
    fn overflow_near_i32_min() {
        assert_eq!(
            align_tick_to_spacing(i32::MIN + 1, 200),
            Err(MathError::Overflow("align_tick_to_spacing"))
        );
    }
}
