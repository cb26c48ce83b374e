//! Pool-share bookkeeping capability consumed by the engine.
//!
//! The engine never stores share balances itself.  It asks a
//! [`ShareLedger`] for the current supply and a holder's balance, and
//! instructs it to mint, burn or move shares.  A ledger owned by a
//! [`Pool`](crate::pool::Pool) is only reachable through the pool, which
//! refuses to move the locked minimum out of its sink.
//!
//! # Supply Invariant
//!
//! `total_shares()` must equal the sum of all balances after every call,
//! and only [`ShareLedger::mint_shares`] / [`ShareLedger::burn_shares`]
//! may change it.

use crate::domain::{Address, Shares};
use crate::error::AmmError;

/// Fungible share accounting for a single pool.
///
/// # Implementors
///
/// - [`ShareBook`](crate::ledger::ShareBook) — in-memory balances with
///   transfers and allowances.
pub trait ShareLedger {
    /// Credits `amount` new shares to `owner`, growing total supply.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::Overflow`] if supply or the balance overflows.
    fn mint_shares(&mut self, owner: &Address, amount: Shares) -> Result<(), AmmError>;

    /// Destroys `amount` of `owner`'s shares, shrinking total supply.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::Underflow`] if `owner` holds fewer shares.
    fn burn_shares(&mut self, owner: &Address, amount: Shares) -> Result<(), AmmError>;

    /// Total shares outstanding.
    #[must_use]
    fn total_shares(&self) -> Shares;

    /// Shares held by `owner`.
    #[must_use]
    fn share_balance(&self, owner: &Address) -> Shares;

    /// Moves `amount` of `from`'s shares to `to`.  Supply is unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::Underflow`] if `from` holds fewer shares, or
    /// [`AmmError::Overflow`] if the receiving balance overflows.
    fn transfer_shares(&mut self, from: &Address, to: &Address, amount: Shares) -> Result<(), AmmError>;

    /// Sets how many of `owner`'s shares `spender` may move.
    fn approve_shares(&mut self, owner: &Address, spender: &Address, amount: Shares);

    /// Remaining allowance of `spender` over `owner`'s shares.
    #[must_use]
    fn share_allowance(&self, owner: &Address, spender: &Address) -> Shares;

    /// Moves shares out of `from` on `spender`'s allowance.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::Underflow`] if the allowance or the balance is
    /// too small.
    fn transfer_shares_from(
        &mut self,
        spender: &Address,
        from: &Address,
        to: &Address,
        amount: Shares,
    ) -> Result<(), AmmError>;
}
