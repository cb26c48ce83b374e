//! 256-bit helpers for products of two `u128` quantities.
//!
//! Reserve products, share numerators and the bootstrap square root all
//! multiply two 128-bit values.  The product always fits in 256 bits, so
//! it is computed exactly in [`U256`] and only the final quotient is
//! narrowed back, failing instead of truncating.

use ethnum::U256;

use crate::error::AmmError;

/// Exact product of two `u128` values.
///
/// Cannot overflow: `(2¹²⁸ − 1)² < 2²⁵⁶`.
#[must_use]
pub fn wide_mul(x: u128, y: u128) -> U256 {
    U256::from(x) * U256::from(y)
}

/// `floor(x * y / d)` with a 256-bit intermediate.
///
/// # Errors
///
/// - [`AmmError::DivisionByZero`] if `d == 0`.
/// - [`AmmError::Overflow`] with `context` if the quotient exceeds `u128`.
pub fn mul_div_floor(x: u128, y: u128, d: u128, context: &'static str) -> Result<u128, AmmError> {
    if d == 0 {
        return Err(AmmError::DivisionByZero);
    }
    narrow(wide_mul(x, y) / U256::from(d), context)
}

/// Narrows a 256-bit value to `u128`.
///
/// # Errors
///
/// Returns [`AmmError::Overflow`] with `context` if the high word is set.
pub fn narrow(value: U256, context: &'static str) -> Result<u128, AmmError> {
    let (high, low) = value.into_words();
    if high != 0 {
        return Err(AmmError::Overflow(context));
    }
    Ok(low)
}

/// Integer square root (floor) via the Babylonian method.
///
/// The result of a 256-bit input always fits in 128 bits.
#[must_use]
pub fn isqrt(n: U256) -> u128 {
    if n == U256::ZERO {
        return 0;
    }
    if n < U256::new(4) {
        return 1;
    }
    let mut x = n;
    let mut y = (n >> 1u32) + U256::ONE;
    while y < x {
        x = y;
        y = (n / x + x) >> 1u32;
    }
    // floor(sqrt(2^256 - 1)) = 2^128 - 1, so the high word is always zero.
    x.into_words().1
}
