//! Chain-agnostic account and asset identifier.

use core::fmt;

/// A 32-byte identifier naming either an asset or an account holding
/// assets (a user, a pool custody account, the locked-share sink).
///
/// All 32-byte sequences are valid, so construction is infallible.  The
/// all-zero value is the null sentinel: pools start with both asset slots
/// unset and the registry refuses pairs whose lower side is zero.
///
/// Ordering is lexicographic over the bytes; the registry relies on it to
/// derive the canonical order of a pair.
///
/// # Examples
///
/// ```
/// use pairwise_amm::domain::Address;
///
/// let addr = Address::from_bytes([1u8; 32]);
/// assert_eq!(addr.as_bytes(), [1u8; 32]);
/// assert!(Address::zero().is_zero());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Address([u8; 32]);

impl Address {
    /// Creates an `Address` from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Returns the underlying 32-byte representation.
    #[must_use]
    pub const fn as_bytes(&self) -> [u8; 32] {
        self.0
    }

    /// Returns the all-zero null sentinel.
    #[must_use]
    pub const fn zero() -> Self {
        Self([0u8; 32])
    }

    /// Returns `true` for the null sentinel.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0 == [0u8; 32]
    }
}

impl fmt::Display for Address {
    /// Short hex form: the first four bytes, enough for log lines.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "0x{:02x}{:02x}{:02x}{:02x}..",
            self.0[0], self.0[1], self.0[2], self.0[3]
        )
    }
}
