//! Zero-fee constant-product swaps.
//!
//! The caller names the outputs it wants and pushes whatever inputs it
//! believes are needed beforehand.  Inputs are inferred as
//! `balance − (reserve − output)` per side, and the trade is accepted iff
//! the post-trade balance product does not fall below the pre-trade
//! reserve product.  Both products are compared exactly in 256 bits.

use crate::domain::{Address, Amount, BlockTime, PoolEvent, SwapResult};
use crate::error::AmmError;
use crate::math::wide_mul;
use crate::traits::{AssetCustody, Clock, ShareLedger};

use super::Pool;

impl<S: ShareLedger + Clone> Pool<S> {
    /// Sends `amount_a_out` and `amount_b_out` to `recipient`, provided the
    /// assets already pushed into custody keep `balance_a · balance_b ≥
    /// reserve_a · reserve_b`.
    ///
    /// Reserves are synchronized to the post-trade balances before the
    /// outputs are transferred.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InsufficientOutputAmount`] if both outputs are zero.
    /// - [`AmmError::NotInitialized`] if the pool has no assets yet.
    /// - [`AmmError::InsufficientLiquidity`] if an output is not strictly
    ///   below its reserve.
    /// - [`AmmError::InvalidRecipient`] if `recipient` is one of the
    ///   pool's assets.
    /// - [`AmmError::InsufficientInputAmount`] if nothing was pushed in.
    /// - [`AmmError::InvalidK`] if the reserve product would shrink.
    /// - [`AmmError::TransferFailed`] if custody refuses an output.
    pub fn swap<C, K>(
        &mut self,
        custody: &mut C,
        clock: &K,
        amount_a_out: Amount,
        amount_b_out: Amount,
        recipient: &Address,
    ) -> Result<SwapResult, AmmError>
    where
        C: AssetCustody,
        K: Clock,
    {
        if amount_a_out.is_zero() && amount_b_out.is_zero() {
            return Err(AmmError::InsufficientOutputAmount);
        }
        let now = clock.block_time();
        self.transact(custody, |pool, custody| {
            pool.swap_staged(custody, now, amount_a_out, amount_b_out, recipient)
        })
    }

    fn swap_staged<C: AssetCustody>(
        &mut self,
        custody: &mut C,
        now: BlockTime,
        amount_a_out: Amount,
        amount_b_out: Amount,
        recipient: &Address,
    ) -> Result<SwapResult, AmmError> {
        let pair = self.assets()?;
        let (reserve_a, reserve_b) = (self.reserve_a, self.reserve_b);
        if amount_a_out >= reserve_a || amount_b_out >= reserve_b {
            return Err(AmmError::InsufficientLiquidity);
        }
        if pair.contains(recipient) {
            return Err(AmmError::InvalidRecipient);
        }

        let (held_a, held_b) = self.custody_balances(custody, &pair);
        let balance_a = held_a
            .checked_sub(&amount_a_out)
            .ok_or(AmmError::InsufficientLiquidity)?;
        let balance_b = held_b
            .checked_sub(&amount_b_out)
            .ok_or(AmmError::InsufficientLiquidity)?;

        // reserve − output cannot underflow past the liquidity check
        let amount_a_in = balance_a.saturating_sub(&reserve_a.saturating_sub(&amount_a_out));
        let amount_b_in = balance_b.saturating_sub(&reserve_b.saturating_sub(&amount_b_out));
        let result = SwapResult::new(amount_a_in, amount_b_in, amount_a_out, amount_b_out)?;

        if wide_mul(balance_a.get(), balance_b.get()) < wide_mul(reserve_a.get(), reserve_b.get()) {
            tracing::warn!(
                pool = %self.address,
                %balance_a,
                %balance_b,
                %reserve_a,
                %reserve_b,
                "swap rejected: reserve product would shrink"
            );
            return Err(AmmError::InvalidK);
        }

        self.sync(balance_a, balance_b, now)?;
        if !amount_a_out.is_zero() {
            custody.safe_transfer(&pair.first(), &self.address, recipient, amount_a_out)?;
        }
        if !amount_b_out.is_zero() {
            custody.safe_transfer(&pair.second(), &self.address, recipient, amount_b_out)?;
        }

        tracing::debug!(pool = %self.address, %recipient, %result, "swap executed");
        self.emit(PoolEvent::Swap {
            amount_a_in,
            amount_b_in,
            amount_a_out,
            amount_b_out,
            recipient: *recipient,
        });
        Ok(result)
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::super::test_support::*;
    use super::*;

    fn seeded_1_2() -> (Pool, crate::ledger::Vault, crate::ledger::ManualClock) {
        seeded(E18, 2 * E18)
    }

    // -- acceptance -----------------------------------------------------------

    #[test]
    fn fair_swap_accepted() {
        let (mut pool, mut vault, clock) = seeded_1_2();
        push(&mut vault, &pool, E18 / 10, 0);
        let out = Amount::new(18 * E18 / 100);
        let Ok(result) = pool.swap(&mut vault, &clock, Amount::ZERO, out, &bob()) else {
            panic!("swap");
        };
        assert_eq!(result.amount_a_in(), Amount::new(E18 / 10));
        assert_eq!(result.amount_b_in(), Amount::ZERO);
        assert_eq!(result.amount_b_out(), out);
        assert_eq!(vault.balance_of(&asset_b(), &bob()), out);
        assert_eq!(pool.reserves().0, Amount::new(11 * E18 / 10));
        assert_eq!(pool.reserves().1, Amount::new(2 * E18 - 18 * E18 / 100));
    }

    #[test]
    fn greedy_swap_rejected_with_invalid_k() {
        let (mut pool, mut vault, clock) = seeded_1_2();
        push(&mut vault, &pool, E18 / 10, 0);
        let before = pool.clone();
        assert_eq!(
            pool.swap(&mut vault, &clock, Amount::ZERO, Amount::new(36 * E18 / 100), &bob()),
            Err(AmmError::InvalidK)
        );
        assert_eq!(pool, before);
        assert!(vault.balance_of(&asset_b(), &bob()).is_zero());
    }

    #[test]
    fn exact_product_boundary_accepted() {
        // 100 * 400 == 80 * 500
        let (mut pool, mut vault, clock) = seeded(100_000, 400_000);
        push(&mut vault, &pool, 0, 100_000);
        assert!(pool
            .swap(&mut vault, &clock, Amount::new(20_000), Amount::ZERO, &bob())
            .is_ok());
        assert_eq!(pool.reserves().0, Amount::new(80_000));
        assert_eq!(pool.reserves().1, Amount::new(500_000));
    }

    #[test]
    fn output_repaid_in_same_asset() {
        let (mut pool, mut vault, clock) = seeded(10_000, 10_000);
        push(&mut vault, &pool, 5_000, 0);
        let Ok(result) = pool.swap(&mut vault, &clock, Amount::new(5_000), Amount::ZERO, &bob())
        else {
            panic!("swap");
        };
        assert_eq!(result.amount_a_in(), Amount::new(5_000));
        assert_eq!(result.amount_a_out(), Amount::new(5_000));
        assert_eq!(pool.reserves().0, Amount::new(10_000));
    }

    // -- rejection ------------------------------------------------------------

    #[test]
    fn zero_outputs_rejected() {
        let (mut pool, mut vault, clock) = seeded_1_2();
        assert_eq!(
            pool.swap(&mut vault, &clock, Amount::ZERO, Amount::ZERO, &bob()),
            Err(AmmError::InsufficientOutputAmount)
        );
    }

    #[test]
    fn output_equal_to_reserve_rejected() {
        let (mut pool, mut vault, clock) = seeded_1_2();
        push(&mut vault, &pool, 100 * E18, 0);
        assert_eq!(
            pool.swap(&mut vault, &clock, Amount::ZERO, Amount::new(2 * E18), &bob()),
            Err(AmmError::InsufficientLiquidity)
        );
    }

    #[test]
    fn recipient_cannot_be_an_asset() {
        let (mut pool, mut vault, clock) = seeded_1_2();
        push(&mut vault, &pool, E18, 0);
        assert_eq!(
            pool.swap(&mut vault, &clock, Amount::ZERO, Amount::new(1), &asset_a()),
            Err(AmmError::InvalidRecipient)
        );
    }

    #[test]
    fn nothing_pushed_rejected() {
        let (mut pool, mut vault, clock) = seeded_1_2();
        assert_eq!(
            pool.swap(&mut vault, &clock, Amount::new(1), Amount::ZERO, &bob()),
            Err(AmmError::InsufficientInputAmount)
        );
    }

    #[test]
    fn swap_on_empty_pool_fails() {
        let mut pool = fresh_pool();
        let mut vault = crate::ledger::Vault::new();
        let clock = crate::ledger::ManualClock::new(START);
        assert_eq!(
            pool.swap(&mut vault, &clock, Amount::new(1), Amount::ZERO, &bob()),
            Err(AmmError::InsufficientLiquidity)
        );
    }

    #[test]
    fn swap_emits_sync_then_swap() {
        let (mut pool, mut vault, clock) = seeded(10_000, 10_000);
        push(&mut vault, &pool, 0, 2_000);
        let Ok(_) = pool.swap(&mut vault, &clock, Amount::new(1_000), Amount::ZERO, &bob()) else {
            panic!("swap");
        };
        assert_eq!(
            pool.take_events(),
            vec![
                PoolEvent::Sync {
                    reserve_a: Amount::new(9_000),
                    reserve_b: Amount::new(12_000),
                },
                PoolEvent::Swap {
                    amount_a_in: Amount::ZERO,
                    amount_b_in: Amount::new(2_000),
                    amount_a_out: Amount::new(1_000),
                    amount_b_out: Amount::ZERO,
                    recipient: bob(),
                },
            ]
        );
    }
}
