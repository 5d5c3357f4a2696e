// SPDX-License-Identifier: MIT
// Sqrt Price Calculations

use crate::constants::{MAX_SQRT_PRICE_X64, MAX_TICK, MIN_SQRT_PRICE_X64, MIN_TICK, Q64, Q96};
use crate::error::{MathError, Result};
use crate::q64::mul_shr;

/// sqrt(1.0001^-(2^n)) * 2^64 for n = 0..=18, applied per set bit of |tick|.
const NEGATIVE_TICK_FACTORS_X64: [u128; 19] = [
    18445821805675392311,
    18444899583751176498,
    18443055278223354162,
    18439367220385604838,
    18431993317065449817,
    18417254355718160513,
    18387811781193591352,
    18329067761203520168,
    18212142134806087854,
    17980523815641551639,
    17526086738831147013,
    16651378430235024244,
    15030750278693429944,
    12247334978882834399,
    8131365268884726200,
    3584323654723342297,
    696457651847595233,
    26294789957452057,
    37481735321082,
];

/// sqrt(1.0001^(2^n)) * 2^96 for n = 0..=18. Positive ticks accumulate in
/// Q96 and drop to Q64 at the end, so the result is rounded once.
const POSITIVE_TICK_FACTORS_X96: [u128; 19] = [
    79232123823359799118286999567,
    79236085330515764027303304731,
    79244008939048815603706035061,
    79259858533276714757314932305,
    79291567232598584799939703904,
    79355022692464371645785046466,
    79482085999252804386437311141,
    79736823300114093921829183326,
    80248749790819932309965073892,
    81282483887344747381513967011,
    83390072131320151908154831281,
    87770609709833776024991924138,
    97234110755111693312479820773,
    119332217159966728226237229890,
    179736315981702064433883588727,
    407748233172238350107850275304,
    2098478828474011932436660412517,
    55581415166113811149459800483533,
    38992368544603139932233054999993551,
];

/// Whether `tick` lies inside `[MIN_TICK, MAX_TICK]`.
#[inline]
pub fn is_valid_tick(tick: i32) -> bool {
    (MIN_TICK..=MAX_TICK).contains(&tick)
}

/// Convert tick to sqrt price in Q64.64 format
/// Formula: sqrt(1.0001^tick) * 2^64
///
/// # Errors
/// [`MathError::TickOutOfRange`] outside `[MIN_TICK, MAX_TICK]`.
pub fn get_sqrt_price_at_tick(tick: i32) -> Result<u128> {
    if !is_valid_tick(tick) {
        return Err(MathError::TickOutOfRange(tick));
    }

    if tick < 0 {
        sqrt_price_at_negative_tick(tick.unsigned_abs())
    } else {
        sqrt_price_at_positive_tick(tick.unsigned_abs())
    }
}

fn sqrt_price_at_negative_tick(abs_tick: u32) -> Result<u128> {
    let mut ratio = if abs_tick & 0x1 != 0 {
        NEGATIVE_TICK_FACTORS_X64[0]
    } else {
        Q64
    };

    for (bit, factor) in NEGATIVE_TICK_FACTORS_X64.iter().enumerate().skip(1) {
        if abs_tick & (1 << bit) != 0 {
            ratio = mul_shr(ratio, *factor, 64)?;
        }
    }

    Ok(ratio)
}

fn sqrt_price_at_positive_tick(abs_tick: u32) -> Result<u128> {
    let mut ratio = if abs_tick & 0x1 != 0 {
        POSITIVE_TICK_FACTORS_X96[0]
    } else {
        Q96
    };

    for (bit, factor) in POSITIVE_TICK_FACTORS_X96.iter().enumerate().skip(1) {
        if abs_tick & (1 << bit) != 0 {
            ratio = mul_shr(ratio, *factor, 96)?;
        }
    }

    Ok(ratio >> 32)
}

/// Convert a Q64.64 sqrt price to the greatest tick whose sqrt price does
/// not exceed it.
///
/// Searches the tick range against [`get_sqrt_price_at_tick`] itself, so
/// `get_tick_at_sqrt_price(get_sqrt_price_at_tick(t)) == t` for every valid
/// tick.
///
/// # Errors
/// [`MathError::SqrtPriceOutOfRange`] outside
/// `[MIN_SQRT_PRICE_X64, MAX_SQRT_PRICE_X64]`.
pub fn get_tick_at_sqrt_price(sqrt_price_x64: u128) -> Result<i32> {
    if !(MIN_SQRT_PRICE_X64..=MAX_SQRT_PRICE_X64).contains(&sqrt_price_x64) {
        return Err(MathError::SqrtPriceOutOfRange(sqrt_price_x64));
    }

    let mut low = MIN_TICK;
    let mut high = MAX_TICK;
    if get_sqrt_price_at_tick(low)? > sqrt_price_x64 {
        return Err(MathError::SqrtPriceOutOfRange(sqrt_price_x64));
    }

    // Invariant: sqrt_price(low) <= sqrt_price_x64, answer in [low, high]
    while low < high {
        let mid = low + (high - low + 1) / 2;
        if get_sqrt_price_at_tick(mid)? <= sqrt_price_x64 {
            low = mid;
        } else {
            high = mid - 1;
        }
    }

    Ok(low)
}
