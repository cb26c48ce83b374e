//! Truncated 32-bit timestamp used by the price accumulator.

use core::fmt;

/// A Unix timestamp truncated to its low 32 bits.
///
/// The accumulator only ever consumes the *difference* between two
/// `BlockTime`s, computed with wrapping subtraction, so the clock rolling
/// over every 2³² seconds (~136 years) does not disturb elapsed-time
/// arithmetic as long as two samples are less than one period apart.
///
/// # Examples
///
/// ```
/// use pairwise_amm::domain::BlockTime;
///
/// let before = BlockTime::from_unix(u64::from(u32::MAX) - 4);
/// let after = BlockTime::from_unix(u64::from(u32::MAX) + 6);
/// assert_eq!(after.elapsed_since(before), 10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BlockTime(u32);

impl BlockTime {
    /// Creates a `BlockTime` from an already truncated value.
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Truncates a full Unix timestamp (seconds) to 32 bits.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub const fn from_unix(seconds: u64) -> Self {
        Self(seconds as u32)
    }

    /// Returns the raw truncated value.
    #[must_use]
    pub const fn get(&self) -> u32 {
        self.0
    }

    /// Seconds elapsed since `earlier`, wrapping over the 32-bit clock.
    #[must_use]
    pub const fn elapsed_since(&self, earlier: Self) -> u32 {
        self.0.wrapping_sub(earlier.0)
    }
}

impl fmt::Display for BlockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
