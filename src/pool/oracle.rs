//! Time-weighted average prices from the cumulative accumulators.
//!
//! A consumer samples [`Pool::observe`] twice and divides the
//! accumulator growth by the elapsed time:
//!
//! ```text
//! twap_a = (cumulative_a(t1) − cumulative_a(t0)) / (t1 − t0)
//! ```
//!
//! Subtraction wraps at 256 bits and the elapsed time wraps at 32, so a
//! window remains valid across either overflow as long as it is shorter
//! than 2³² seconds.

use crate::domain::BlockTime;
use crate::error::AmmError;
use crate::math::Uq112x112;
use crate::traits::{Clock, ShareLedger};

use super::reserves::price_increments;
use super::Pool;

/// A snapshot of a pool's price accumulators at a point in time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PriceObservation {
    price_a_cumulative: Uq112x112,
    price_b_cumulative: Uq112x112,
    timestamp: BlockTime,
}

impl PriceObservation {
    /// Accumulator of the price of A in B.
    #[must_use]
    pub const fn price_a_cumulative(&self) -> Uq112x112 {
        self.price_a_cumulative
    }

    /// Accumulator of the price of B in A.
    #[must_use]
    pub const fn price_b_cumulative(&self) -> Uq112x112 {
        self.price_b_cumulative
    }

    /// When the snapshot was taken.
    #[must_use]
    pub const fn timestamp(&self) -> BlockTime {
        self.timestamp
    }

    /// Average prices `(a_in_b, b_in_a)` over the window from `earlier`
    /// to `self`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::DivisionByZero`] if both snapshots share a
    /// timestamp.
    pub fn average_since(&self, earlier: &Self) -> Result<(Uq112x112, Uq112x112), AmmError> {
        let elapsed = self.timestamp.elapsed_since(earlier.timestamp);
        let price_a = self
            .price_a_cumulative
            .wrapping_sub(earlier.price_a_cumulative)
            .checked_div(u128::from(elapsed))?;
        let price_b = self
            .price_b_cumulative
            .wrapping_sub(earlier.price_b_cumulative)
            .checked_div(u128::from(elapsed))?;
        Ok((price_a, price_b))
    }
}

impl<S: ShareLedger> Pool<S> {
    /// The accumulators as they would read if the pool synchronized now.
    ///
    /// Read-only: the stored accumulators and clock are not touched, so
    /// a consumer gets current values without paying for a sync.
    ///
    /// # Errors
    ///
    /// Never fails for reserves within 112 bits; the `Result` carries
    /// the fixed-point division through.
    pub fn observe<K: Clock>(&self, clock: &K) -> Result<PriceObservation, AmmError> {
        let now = clock.block_time();
        let mut observation = PriceObservation {
            price_a_cumulative: self.price_a_cumulative,
            price_b_cumulative: self.price_b_cumulative,
            timestamp: now,
        };
        let elapsed = now.elapsed_since(self.last_sync);
        if let Some((inc_a, inc_b)) = price_increments(self.reserve_a, self.reserve_b, elapsed)? {
            observation.price_a_cumulative = observation.price_a_cumulative.wrapping_add(inc_a);
            observation.price_b_cumulative = observation.price_b_cumulative.wrapping_add(inc_b);
        }
        Ok(observation)
    }
}
