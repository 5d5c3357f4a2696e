// SPDX-License-Identifier: MIT
// Q64.64 Fixed-Point Arithmetic Operations

use ethnum::U256;

use crate::error::{MathError, Result};

/// Full 256-bit product of two u128 values.
#[inline]
pub fn full_mul(a: u128, b: u128) -> U256 {
    U256::from(a) * U256::from(b)
}

/// `(a * b) >> shift`, computed in 256 bits.
///
/// # Errors
/// [`MathError::Overflow`] if the shifted result does not fit in u128.
#[inline]
pub fn mul_shr(a: u128, b: u128, shift: u32) -> Result<u128> {
    let shifted = full_mul(a, b) >> shift;
    if shifted > U256::from(u128::MAX) {
        return Err(MathError::Overflow("mul_shr"));
    }
    Ok(shifted.as_u128())
}
