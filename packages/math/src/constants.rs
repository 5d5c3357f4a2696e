// Constants for the Q64.64 tick system used by concentrated-liquidity pools on Sui.

// ============================================================
// TICK CONSTANTS
// ============================================================

/// Minimum valid tick value.
/// Price at MIN_TICK ≈ 5.4e-20, the lowest sqrt price representable in Q64.64.
pub const MIN_TICK: i32 = -443636;

/// Maximum valid tick value.
/// Price at MAX_TICK ≈ 1.8e19
pub const MAX_TICK: i32 = 443636;

// ============================================================
// SQRT PRICE CONSTANTS (Q64.64 format)
// ============================================================

/// Sqrt price at MIN_TICK: sqrt(1.0001^-443636) * 2^64
pub const MIN_SQRT_PRICE_X64: u128 = 4295048016;

/// Sqrt price at MAX_TICK: sqrt(1.0001^443636) * 2^64
pub const MAX_SQRT_PRICE_X64: u128 = 79226673515401279992447579055;

// ============================================================
// DECIMAL CONSTANTS
// ============================================================

/// Largest token decimal count accepted by the price conversions.
pub const MAX_DECIMALS: u8 = 18;

/// Scale used when rendering a sqrt price back into a decimal price.
pub const PRICE_DISPLAY_SCALE: u32 = 28;

// ============================================================
// MATH CONSTANTS
// ============================================================

/// Q64 multiplier (2^64) for fixed-point math
pub const Q64: u128 = 1u128 << 64;

/// Q96 multiplier (2^96), the working precision for positive ticks
pub const Q96: u128 = 1u128 << 96;
