//! Pool-share units.

use core::fmt;

/// A quantity of pool shares: fungible claims on a pool's reserves.
///
/// Distinct from [`Amount`](super::Amount) because shares measure proportional ownership
/// of both reserves, not a quantity of either asset.  All `u128` values
/// are valid.
///
/// # Examples
///
/// ```
/// use pairwise_amm::domain::Shares;
///
/// let a = Shares::new(1_000);
/// let b = Shares::new(2_000);
/// assert_eq!(a.checked_add(&b), Some(Shares::new(3_000)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Shares(u128);

impl Shares {
    /// No shares.
    pub const ZERO: Self = Self(0);

    /// Creates a new `Shares` from a raw `u128` value.
    pub const fn new(value: u128) -> Self {
        Self(value)
    }

    /// Returns the underlying `u128` value.
    #[must_use]
    pub const fn get(&self) -> u128 {
        self.0
    }

    /// Returns `true` if the quantity is zero.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checked addition. Returns `None` on overflow.
    #[must_use]
    pub const fn checked_add(&self, other: &Self) -> Option<Self> {
        match self.0.checked_add(other.0) {
            Some(v) => Some(Self(v)),
            None => None,
        }
    }

    /// Checked subtraction. Returns `None` on underflow.
    #[must_use]
    pub const fn checked_sub(&self, other: &Self) -> Option<Self> {
        match self.0.checked_sub(other.0) {
            Some(v) => Some(Self(v)),
            None => None,
        }
    }
}

impl fmt::Display for Shares {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
