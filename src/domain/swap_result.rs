//! Outcome of a swap operation.

use core::fmt;

use super::Amount;
use crate::error::AmmError;

/// The amounts a committed swap moved on each side of the pool.
///
/// Inputs are never passed to the engine; they are inferred from the
/// custody balance delta and reported back here.
///
/// # Invariants
///
/// - At least one output is non-zero.
/// - At least one input is non-zero.
///
/// # Examples
///
/// ```
/// use pairwise_amm::domain::{Amount, SwapResult};
///
/// let result = SwapResult::new(
///     Amount::new(100), Amount::ZERO,
///     Amount::ZERO, Amount::new(180),
/// );
/// assert!(result.is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SwapResult {
    amount_a_in: Amount,
    amount_b_in: Amount,
    amount_a_out: Amount,
    amount_b_out: Amount,
}

impl SwapResult {
    /// Creates a new `SwapResult` with validated invariants.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InsufficientOutputAmount`] if both outputs are zero.
    /// - [`AmmError::InsufficientInputAmount`] if both inputs are zero.
    pub const fn new(
        amount_a_in: Amount,
        amount_b_in: Amount,
        amount_a_out: Amount,
        amount_b_out: Amount,
    ) -> crate::error::Result<Self> {
        if amount_a_out.is_zero() && amount_b_out.is_zero() {
            return Err(AmmError::InsufficientOutputAmount);
        }
        if amount_a_in.is_zero() && amount_b_in.is_zero() {
            return Err(AmmError::InsufficientInputAmount);
        }
        Ok(Self {
            amount_a_in,
            amount_b_in,
            amount_a_out,
            amount_b_out,
        })
    }

    /// Asset A inferred as pushed in.
    pub const fn amount_a_in(&self) -> Amount {
        self.amount_a_in
    }

    /// Asset B inferred as pushed in.
    pub const fn amount_b_in(&self) -> Amount {
        self.amount_b_in
    }

    /// Asset A sent to the recipient.
    pub const fn amount_a_out(&self) -> Amount {
        self.amount_a_out
    }

    /// Asset B sent to the recipient.
    pub const fn amount_b_out(&self) -> Amount {
        self.amount_b_out
    }
}

impl fmt::Display for SwapResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "SwapResult(in=({}, {}), out=({}, {}))",
            self.amount_a_in, self.amount_b_in, self.amount_a_out, self.amount_b_out
        )
    }
}
