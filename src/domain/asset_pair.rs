//! Canonically ordered pair of distinct assets.

use super::Address;
use crate::error::AmmError;

/// An ordered pair of distinct, non-null assets, sorted by identifier.
///
/// The canonical ordering guarantees `first() < second()`, so `(X, Y)` and
/// `(Y, X)` collapse to the same pair and therefore to the same pool.
/// Because the lower identifier is checked against the null sentinel, the
/// higher one can never be null either.
///
/// # Examples
///
/// ```
/// use pairwise_amm::domain::{Address, AssetPair};
///
/// let x = Address::from_bytes([1u8; 32]);
/// let y = Address::from_bytes([2u8; 32]);
///
/// let pair = AssetPair::new(y, x).expect("distinct, non-null assets");
/// assert_eq!(pair.first(), x);
/// assert_eq!(pair.second(), y);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AssetPair {
    asset_a: Address,
    asset_b: Address,
}

impl AssetPair {
    /// Creates a canonically ordered pair from two assets in any order.
    ///
    /// # Errors
    ///
    /// - [`AmmError::IdenticalAssets`] if `x == y`.
    /// - [`AmmError::ZeroAddress`] if the lower identifier is the null
    ///   sentinel.
    pub fn new(x: Address, y: Address) -> Result<Self, AmmError> {
        if x == y {
            return Err(AmmError::IdenticalAssets);
        }

        let (asset_a, asset_b) = if x < y { (x, y) } else { (y, x) };

        if asset_a.is_zero() {
            return Err(AmmError::ZeroAddress);
        }

        Ok(Self { asset_a, asset_b })
    }

    /// Returns the lower asset (the pool's asset A).
    #[must_use]
    pub const fn first(&self) -> Address {
        self.asset_a
    }

    /// Returns the higher asset (the pool's asset B).
    #[must_use]
    pub const fn second(&self) -> Address {
        self.asset_b
    }

    /// Returns `true` if `asset` is either side of the pair.
    #[must_use]
    pub fn contains(&self, asset: &Address) -> bool {
        self.asset_a == *asset || self.asset_b == *asset
    }
}
