//! Share issuance and redemption.
//!
//! # First deposit
//!
//! `shares = ⌊√(a · b)⌋ − minimum_locked_shares`, and the locked minimum
//! is minted to the configured sink.  Supply therefore never returns to
//! zero once a pool has been seeded.
//!
//! # Later deposits
//!
//! `shares = min(⌊a · T / reserve_a⌋, ⌊b · T / reserve_b⌋)`.  The side
//! contributed in excess of the current ratio is kept by the pool and
//! accrues to every holder.
//!
//! # Redemption
//!
//! A burn redeems the withdrawer's whole share balance for
//! `⌊shares · balance / T⌋` of each asset.

use crate::domain::{Address, Amount, BlockTime, PoolEvent, Shares};
use crate::error::AmmError;
use crate::math::{isqrt, mul_div_floor, wide_mul, CheckedArithmetic};
use crate::traits::{AssetCustody, Clock, ShareLedger};

use super::Pool;

impl<S: ShareLedger + Clone> Pool<S> {
    /// Issues shares to `depositor` for assets already pushed into custody.
    ///
    /// # Errors
    ///
    /// - [`AmmError::NotInitialized`] if the pool has no assets yet.
    /// - [`AmmError::Underflow`] if custody holds less than a reserve.
    /// - [`AmmError::InsufficientLiquidityMinted`] if the computed share
    ///   amount is zero (including a first deposit whose root does not
    ///   exceed the locked minimum).
    /// - [`AmmError::BalanceOverflow`] if a balance exceeds 2¹¹² − 1.
    pub fn mint<C, K>(
        &mut self,
        custody: &mut C,
        clock: &K,
        depositor: &Address,
    ) -> Result<Shares, AmmError>
    where
        C: AssetCustody,
        K: Clock,
    {
        let now = clock.block_time();
        self.transact(custody, |pool, custody| pool.mint_staged(custody, now, depositor))
    }

    /// Redeems `withdrawer`'s entire share balance, sending both assets to
    /// `withdrawer`.  Returns `(amount_a, amount_b)`.
    ///
    /// Shares the withdrawer wants redeemed must already sit in its own
    /// balance; moving them there is the share ledger's business.
    ///
    /// # Errors
    ///
    /// - [`AmmError::NotInitialized`] if the pool has no assets yet.
    /// - [`AmmError::LockedShares`] if `withdrawer` is the locked sink.
    /// - [`AmmError::InsufficientLiquidityBurned`] if either payout
    ///   rounds to zero.
    /// - [`AmmError::TransferFailed`] if custody refuses a payout.
    pub fn burn<C, K>(
        &mut self,
        custody: &mut C,
        clock: &K,
        withdrawer: &Address,
    ) -> Result<(Amount, Amount), AmmError>
    where
        C: AssetCustody,
        K: Clock,
    {
        let now = clock.block_time();
        self.transact(custody, |pool, custody| pool.burn_staged(custody, now, withdrawer))
    }

    fn mint_staged<C: AssetCustody>(
        &mut self,
        custody: &mut C,
        now: BlockTime,
        depositor: &Address,
    ) -> Result<Shares, AmmError> {
        let pair = self.assets()?;
        let (reserve_a, reserve_b) = (self.reserve_a, self.reserve_b);
        let (balance_a, balance_b) = self.custody_balances(custody, &pair);
        let amount_a = balance_a.safe_sub(&reserve_a)?;
        let amount_b = balance_b.safe_sub(&reserve_b)?;

        let total = self.shares.total_shares();
        let minted = if total.is_zero() {
            let minimum = self.config.minimum_locked_shares();
            let root = isqrt(wide_mul(amount_a.get(), amount_b.get()));
            if root <= minimum.get() {
                return Err(AmmError::InsufficientLiquidityMinted);
            }
            let sink = self.config.locked_share_sink();
            self.shares.mint_shares(&sink, minimum)?;
            Shares::new(root - minimum.get())
        } else {
            let by_a = mul_div_floor(amount_a.get(), total.get(), reserve_a.get(), "mint share ratio")?;
            let by_b = mul_div_floor(amount_b.get(), total.get(), reserve_b.get(), "mint share ratio")?;
            Shares::new(by_a.min(by_b))
        };

        if minted.is_zero() {
            return Err(AmmError::InsufficientLiquidityMinted);
        }
        self.shares.mint_shares(depositor, minted)?;
        self.sync(balance_a, balance_b, now)?;

        tracing::debug!(
            pool = %self.address,
            %depositor,
            %amount_a,
            %amount_b,
            shares = %minted,
            "liquidity added"
        );
        self.emit(PoolEvent::Mint {
            depositor: *depositor,
            amount_a,
            amount_b,
            shares: minted,
        });
        Ok(minted)
    }

    fn burn_staged<C: AssetCustody>(
        &mut self,
        custody: &mut C,
        now: BlockTime,
        withdrawer: &Address,
    ) -> Result<(Amount, Amount), AmmError> {
        let pair = self.assets()?;
        if *withdrawer == self.config.locked_share_sink() {
            return Err(AmmError::LockedShares);
        }

        let (balance_a, balance_b) = self.custody_balances(custody, &pair);
        let liquidity = self.shares.share_balance(withdrawer);
        let total = self.shares.total_shares();
        if liquidity.is_zero() || total.is_zero() {
            return Err(AmmError::InsufficientLiquidityBurned);
        }

        let amount_a = Amount::new(mul_div_floor(
            liquidity.get(),
            balance_a.get(),
            total.get(),
            "burn payout",
        )?);
        let amount_b = Amount::new(mul_div_floor(
            liquidity.get(),
            balance_b.get(),
            total.get(),
            "burn payout",
        )?);
        if amount_a.is_zero() || amount_b.is_zero() {
            return Err(AmmError::InsufficientLiquidityBurned);
        }

        self.shares.burn_shares(withdrawer, liquidity)?;
        custody.safe_transfer(&pair.first(), &self.address, withdrawer, amount_a)?;
        custody.safe_transfer(&pair.second(), &self.address, withdrawer, amount_b)?;

        let (after_a, after_b) = self.custody_balances(custody, &pair);
        self.sync(after_a, after_b, now)?;

        tracing::debug!(
            pool = %self.address,
            %withdrawer,
            %amount_a,
            %amount_b,
            shares = %liquidity,
            "liquidity removed"
        );
        self.emit(PoolEvent::Burn {
            withdrawer: *withdrawer,
            amount_a,
            amount_b,
            shares: liquidity,
        });
        Ok((amount_a, amount_b))
    }
}
