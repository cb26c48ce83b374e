//! Binary fixed-point ratios with 112 fractional bits.
//!
//! Reserves are bounded to 112 bits, so `encode(reserve)` occupies at most
//! 224 bits and dividing it by the other reserve yields a ratio with 112
//! bits of integer range and 112 bits of fraction.  Multiplying that
//! ratio by a 32-bit elapsed time stays below 2²⁵⁶, which is what makes
//! the price accumulator representable in a single [`U256`].

use core::fmt;

use ethnum::U256;

use crate::error::AmmError;

/// Number of fractional bits.
pub const RESOLUTION: u32 = 112;

/// Largest value a reserve may hold: `2¹¹² − 1`.
pub const MAX_RESERVE: u128 = (1u128 << RESOLUTION) - 1;

/// An unsigned fixed-point number with 112 integer and 112 fractional bits.
///
/// Stored in a [`U256`]; accumulated sums of these values are allowed to
/// grow past 224 bits and wrap at 256.
///
/// # Examples
///
/// ```
/// use pairwise_amm::math::Uq112x112;
///
/// let half = Uq112x112::encode(1).checked_div(2).expect("non-zero divisor");
/// assert_eq!(half.integer_part(), 0);
/// assert_eq!(Uq112x112::encode(6).checked_div(3).expect("ok").integer_part(), 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Uq112x112(U256);

impl Uq112x112 {
    /// Zero.
    pub const ZERO: Self = Self(U256::ZERO);

    /// Wraps a raw 256-bit representation.
    #[must_use]
    pub const fn from_raw(raw: U256) -> Self {
        Self(raw)
    }

    /// Returns the raw 256-bit representation.
    #[must_use]
    pub const fn raw(&self) -> U256 {
        self.0
    }

    /// Encodes an integer as a fixed-point value: `y << 112`.
    ///
    /// Never overflows: a 128-bit input occupies at most 240 bits.
    #[must_use]
    pub fn encode(y: u128) -> Self {
        Self(U256::from(y) << RESOLUTION)
    }

    /// Divides by an integer, flooring.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::DivisionByZero`] if `divisor == 0`.
    pub fn checked_div(self, divisor: u128) -> Result<Self, AmmError> {
        if divisor == 0 {
            return Err(AmmError::DivisionByZero);
        }
        Ok(Self(self.0 / U256::from(divisor)))
    }

    /// Multiplies by an elapsed time, wrapping at 256 bits.
    #[must_use]
    pub fn wrapping_mul_elapsed(self, elapsed: u32) -> Self {
        Self(self.0.wrapping_mul(U256::from(elapsed)))
    }

    /// Accumulator addition, wrapping at 256 bits.
    #[must_use]
    pub fn wrapping_add(self, other: Self) -> Self {
        Self(self.0.wrapping_add(other.0))
    }

    /// Accumulator difference, wrapping at 256 bits.
    ///
    /// Wraparound of the accumulator between two samples cancels out here.
    #[must_use]
    pub fn wrapping_sub(self, other: Self) -> Self {
        Self(self.0.wrapping_sub(other.0))
    }

    /// Returns the integer part (floor), truncated to `u128`.
    #[must_use]
    pub fn integer_part(&self) -> u128 {
        (self.0 >> RESOLUTION).into_words().1
    }

    /// Lossy conversion for display and off-chain analytics.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn to_f64(&self) -> f64 {
        let (high, low) = self.0.into_words();
        let scale = 2f64.powi(RESOLUTION as i32);
        (high as f64 * 2f64.powi(128) + low as f64) / scale
    }
}

impl fmt::Display for Uq112x112 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_f64())
    }
}
