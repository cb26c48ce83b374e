//! Raw asset amount with checked arithmetic.

use core::fmt;

/// A raw asset amount in the smallest unit.
///
/// `Amount` never interprets decimals.  All `u128` values are valid
/// amounts; the narrower reserve bound (see
/// [`MAX_RESERVE`](crate::math::MAX_RESERVE)) is enforced by the pool when
/// it synchronizes, not here.
///
/// Arithmetic methods are checked: they return `None` on overflow,
/// underflow, or division by zero instead of panicking.
///
/// # Examples
///
/// ```
/// use pairwise_amm::domain::Amount;
///
/// let a = Amount::new(100);
/// let b = Amount::new(200);
/// assert_eq!(a.checked_add(&b), Some(Amount::new(300)));
/// assert_eq!(b.checked_sub(&a), Some(Amount::new(100)));
/// assert_eq!(a.checked_sub(&b), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[must_use]
pub struct Amount(u128);

impl Amount {
    /// Zero amount.
    pub const ZERO: Self = Self(0);

    /// Maximum representable amount.
    pub const MAX: Self = Self(u128::MAX);

    /// Creates a new `Amount` from a raw `u128` value.
    pub const fn new(value: u128) -> Self {
        Self(value)
    }

    /// Returns the underlying `u128` value.
    #[must_use]
    pub const fn get(&self) -> u128 {
        self.0
    }

    /// Returns `true` if the amount is zero.
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

    /// Subtraction clamped at zero.
    ///
    /// Used where a negative difference carries no meaning, such as the
    /// inferred swap input on the output-only side.
    pub const fn saturating_sub(&self, other: &Self) -> Self {
        Self(self.0.saturating_sub(other.0))
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // -- Construction & accessors -------------------------------------------

    #[test]
    fn new_and_get() {
        assert_eq!(Amount::new(42).get(), 42);
    }

    #[test]
    fn constants() {
        assert_eq!(Amount::ZERO.get(), 0);
        assert_eq!(Amount::MAX.get(), u128::MAX);
        assert_eq!(Amount::default(), Amount::ZERO);
    }

    #[test]
    fn is_zero() {
        assert!(Amount::ZERO.is_zero());
        assert!(!Amount::new(1).is_zero());
    }

    #[test]
    fn display() {
        assert_eq!(format!("{}", Amount::new(1_000_000)), "1000000");
    }

    // -- checked arithmetic -------------------------------------------------

    #[test]
    fn add_overflow() {
        assert_eq!(Amount::MAX.checked_add(&Amount::new(1)), None);
    }

    #[test]
    fn sub_underflow() {
        assert_eq!(Amount::new(1).checked_sub(&Amount::new(2)), None);
    }

    #[test]
    fn saturating_sub_clamps() {
        assert_eq!(Amount::new(1).saturating_sub(&Amount::new(5)), Amount::ZERO);
        assert_eq!(Amount::new(7).saturating_sub(&Amount::new(5)), Amount::new(2));
    }

    #[test]
    fn ordering() {
        assert!(Amount::new(1) < Amount::new(2));
    }
}
