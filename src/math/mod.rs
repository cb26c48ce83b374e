//! Arithmetic utilities for pool calculations.
//!
//! This module provides [`CheckedArithmetic`] for error-returning
//! operations on domain newtypes, exact 256-bit helpers for products of
//! two 128-bit quantities, the bootstrap integer square root, and the
//! [`Uq112x112`] fixed-point type behind the price accumulator.
//!
//! | Item | Use |
//! |------|-----|
//! | [`wide_mul`] | reserve products for the `k` check |
//! | [`mul_div_floor`] | share issuance and redemption |
//! | [`isqrt`] | first-deposit share supply |
//! | [`Uq112x112`] | instantaneous price and cumulative price |

mod checked;
mod uq112x112;
mod wide;

pub use checked::CheckedArithmetic;
pub use uq112x112::{Uq112x112, MAX_RESERVE, RESOLUTION};
pub use wide::{isqrt, mul_div_floor, narrow, wide_mul};
