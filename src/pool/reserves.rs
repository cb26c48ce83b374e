//! Reserve synchronization, the price accumulator, and the two
//! maintenance operations built on them.
//!
//! | Operation | Effect |
//! |-----------|--------|
//! | [`Pool::skim`] | sends custody balances above the reserves to a recipient |
//! | [`Pool::sync_reserves`] | overwrites reserves with custody balances |

use crate::domain::{Address, Amount, BlockTime, PoolEvent};
use crate::error::AmmError;
use crate::math::{CheckedArithmetic, Uq112x112, MAX_RESERVE};
use crate::traits::{AssetCustody, Clock, ShareLedger};

use super::Pool;

/// Accumulator increments for `elapsed` seconds at reserves `(a, b)`.
///
/// Returns `None` when either reserve is zero: an empty pool has no price.
pub(super) fn price_increments(
    reserve_a: Amount,
    reserve_b: Amount,
    elapsed: u32,
) -> Result<Option<(Uq112x112, Uq112x112)>, AmmError> {
    if elapsed == 0 || reserve_a.is_zero() || reserve_b.is_zero() {
        return Ok(None);
    }
    let price_a = Uq112x112::encode(reserve_b.get()).checked_div(reserve_a.get())?;
    let price_b = Uq112x112::encode(reserve_a.get()).checked_div(reserve_b.get())?;
    Ok(Some((
        price_a.wrapping_mul_elapsed(elapsed),
        price_b.wrapping_mul_elapsed(elapsed),
    )))
}

impl<S: ShareLedger> Pool<S> {
    /// Overwrites the reserves with observed balances.
    ///
    /// Before the overwrite, the stored (prior) reserves' prices are
    /// integrated over the time since the last synchronization.  The
    /// accumulators wrap at 256 bits and the elapsed time wraps at 32.
    pub(super) fn sync(
        &mut self,
        balance_a: Amount,
        balance_b: Amount,
        now: BlockTime,
    ) -> Result<(), AmmError> {
        if balance_a.get() > MAX_RESERVE || balance_b.get() > MAX_RESERVE {
            return Err(AmmError::BalanceOverflow);
        }

        let elapsed = now.elapsed_since(self.last_sync);
        if let Some((inc_a, inc_b)) = price_increments(self.reserve_a, self.reserve_b, elapsed)? {
            self.price_a_cumulative = self.price_a_cumulative.wrapping_add(inc_a);
            self.price_b_cumulative = self.price_b_cumulative.wrapping_add(inc_b);
        }

        self.reserve_a = balance_a;
        self.reserve_b = balance_b;
        self.last_sync = now;
        self.emit(PoolEvent::Sync {
            reserve_a: balance_a,
            reserve_b: balance_b,
        });
        Ok(())
    }
}

impl<S: ShareLedger + Clone> Pool<S> {
    /// Sends any custody balance above the reserves to `to`.
    ///
    /// Reserves, the clock and the accumulators are left untouched.
    /// Returns the amounts sent.
    ///
    /// # Errors
    ///
    /// - [`AmmError::NotInitialized`] if the pool has no assets yet.
    /// - [`AmmError::Underflow`] if custody holds less than a reserve.
    /// - [`AmmError::TransferFailed`] if custody refuses a transfer.
    pub fn skim<C>(&mut self, custody: &mut C, to: &Address) -> Result<(Amount, Amount), AmmError>
    where
        C: AssetCustody,
    {
        self.transact(custody, |pool, custody| {
            let pair = pool.assets()?;
            let (balance_a, balance_b) = pool.custody_balances(custody, &pair);
            let excess_a = balance_a.safe_sub(&pool.reserve_a)?;
            let excess_b = balance_b.safe_sub(&pool.reserve_b)?;

            if !excess_a.is_zero() {
                custody.safe_transfer(&pair.first(), &pool.address, to, excess_a)?;
            }
            if !excess_b.is_zero() {
                custody.safe_transfer(&pair.second(), &pool.address, to, excess_b)?;
            }
            tracing::debug!(pool = %pool.address, %to, %excess_a, %excess_b, "skimmed");
            Ok((excess_a, excess_b))
        })
    }

    /// Forces the reserves to match custody balances.
    ///
    /// Recovers a pool whose custody balances drifted (donations, or
    /// assets that change balance on their own).
    ///
    /// # Errors
    ///
    /// - [`AmmError::NotInitialized`] if the pool has no assets yet.
    /// - [`AmmError::BalanceOverflow`] if a balance exceeds 2¹¹² − 1.
    pub fn sync_reserves<C, K>(&mut self, custody: &mut C, clock: &K) -> Result<(), AmmError>
    where
        C: AssetCustody,
        K: Clock,
    {
        let now = clock.block_time();
        self.transact(custody, |pool, custody| {
            let pair = pool.assets()?;
            let (balance_a, balance_b) = pool.custody_balances(custody, &pair);
            pool.sync(balance_a, balance_b, now)?;
            tracing::debug!(pool = %pool.address, %balance_a, %balance_b, "reserves forced to balances");
            Ok(())
        })
    }
}
