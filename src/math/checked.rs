//! Checked arithmetic trait for domain wrapper types.
//!
//! The [`CheckedArithmetic`] trait provides fallible arithmetic that
//! returns [`Result<Self, AmmError>`](crate::error::AmmError) instead of
//! `Option`, so ledgers can propagate failures with `?`.
//!
//! # Implementations
//!
//! - [`Amount`] — asset quantities (`u128`)
//! - [`Shares`] — pool share quantities (`u128`)
//!
//! # Examples
//!
//! ```
//! use pairwise_amm::domain::Amount;
//! use pairwise_amm::math::CheckedArithmetic;
//!
//! let sum = Amount::new(100).safe_add(&Amount::new(200));
//! assert_eq!(sum, Ok(Amount::new(300)));
//! assert!(Amount::new(1).safe_sub(&Amount::new(2)).is_err());
//! ```

use crate::domain::{Amount, Shares};
use crate::error::AmmError;

/// Fallible arithmetic for domain wrapper types.
///
/// # Contract
///
/// - **No panics** — all error conditions produce `Err`.
/// - **No saturation** — saturation hides bugs; errors propagate instead.
pub trait CheckedArithmetic: Sized {
    /// Checked addition.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::Overflow`] if the result exceeds `u128`.
    fn safe_add(&self, other: &Self) -> Result<Self, AmmError>;

    /// Checked subtraction.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::Underflow`] if the result would be negative.
    fn safe_sub(&self, other: &Self) -> Result<Self, AmmError>;
}

impl CheckedArithmetic for Amount {
    #[inline]
    fn safe_add(&self, other: &Self) -> Result<Self, AmmError> {
        self.checked_add(other)
            .ok_or(AmmError::Overflow("amount addition overflow"))
    }

    #[inline]
    fn safe_sub(&self, other: &Self) -> Result<Self, AmmError> {
        self.checked_sub(other)
            .ok_or(AmmError::Underflow("amount subtraction underflow"))
    }
}

impl CheckedArithmetic for Shares {
    #[inline]
    fn safe_add(&self, other: &Self) -> Result<Self, AmmError> {
        self.checked_add(other)
            .ok_or(AmmError::Overflow("share addition overflow"))
    }

    #[inline]
    fn safe_sub(&self, other: &Self) -> Result<Self, AmmError> {
        self.checked_sub(other)
            .ok_or(AmmError::Underflow("share subtraction underflow"))
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    mod amount {
        use super::*;

        #[test]
        fn add_ok() {
            let Ok(r) = Amount::new(100).safe_add(&Amount::new(200)) else {
                panic!("expected Ok");
            };
            assert_eq!(r, Amount::new(300));
        }

        #[test]
        fn add_overflow() {
            let Err(AmmError::Overflow(_)) = Amount::MAX.safe_add(&Amount::new(1)) else {
                panic!("expected Overflow");
            };
        }

        #[test]
        fn sub_underflow() {
            let Err(AmmError::Underflow(_)) = Amount::new(1).safe_sub(&Amount::new(2)) else {
                panic!("expected Underflow");
            };
        }

        #[test]
        fn chaining_works() {
            let result = Amount::new(100)
                .safe_add(&Amount::new(200))
                .and_then(|v| v.safe_sub(&Amount::new(50)));
            assert_eq!(result, Ok(Amount::new(250)));
        }
    }

    mod shares {
        use super::*;

        #[test]
        fn add_ok() {
            assert_eq!(
                Shares::new(1).safe_add(&Shares::new(2)),
                Ok(Shares::new(3))
            );
        }

        #[test]
        fn add_overflow() {
            let Err(AmmError::Overflow(_)) = Shares::new(u128::MAX).safe_add(&Shares::new(1))
            else {
                panic!("expected Overflow");
            };
        }

        #[test]
        fn sub_underflow() {
            let Err(AmmError::Underflow(_)) = Shares::ZERO.safe_sub(&Shares::new(1)) else {
                panic!("expected Underflow");
            };
        }
    }
}
