// Error type shared by every conversion in this crate.

use rust_decimal::Decimal;
use thiserror::Error;

/// Errors raised by tick, sqrt-price and price conversions.
///
/// Nothing here is retried: the math is pure, so a failing input fails the
/// same way every time and the caller has to change it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MathError {
    /// Tick outside `[MIN_TICK, MAX_TICK]`
    #[error("tick {0} out of range [-443636, 443636]")]
    TickOutOfRange(i32),

    /// Sqrt price outside `[MIN_SQRT_PRICE_X64, MAX_SQRT_PRICE_X64]`
    #[error("sqrt price {0} out of range")]
    SqrtPriceOutOfRange(u128),

    /// Zero or negative price
    #[error("price must be positive, got {0}")]
    NonPositivePrice(Decimal),

    /// Price whose sqrt price does not fit the Q64.64 range
    #[error("price {0} maps outside the representable sqrt price range")]
    PriceOutOfRange(Decimal),

    #[error("tick spacing must be positive, got {0}")]
    InvalidTickSpacing(i32),

    #[error("token decimals must be 0..=18, got {0}")]
    InvalidDecimals(u8),

    #[error("arithmetic overflow in {0}")]
    Overflow(&'static str),
}

pub type Result<T, E = MathError> = core::result::Result<T, E>;
