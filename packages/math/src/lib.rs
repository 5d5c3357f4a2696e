// msend math package
//
// Tick, sqrt-price and price conversions for Q64.64 concentrated-liquidity
// pools, plus the tick-aligned slippage bound used by swap calls.

pub mod constants;
pub mod error;
pub mod price;
pub mod q64;
pub mod sqrt_price;
pub mod tick;

// Re-export commonly used items from constants
pub use constants::*;

pub use error::{MathError, Result};

// Re-export Q64 arithmetic functions
pub use q64::{full_mul, mul_shr};

// Re-export sqrt price functions
pub use sqrt_price::{get_sqrt_price_at_tick, get_tick_at_sqrt_price, is_valid_tick};

// Re-export price conversions
pub use price::{
    price_to_sqrt_price_x64, price_to_tick_index, sqrt_price_x64_to_price, tick_index_to_price,
};

// Slippage bounds
pub use tick::{align_tick_to_spacing, closest_sqrt_price, closest_tick};
