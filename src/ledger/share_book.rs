//! In-memory share ledger.

use std::collections::HashMap;

use crate::domain::{Address, Shares};
use crate::error::AmmError;
use crate::math::CheckedArithmetic;
use crate::traits::ShareLedger;

/// Share balances, allowances and total supply for one pool.
///
/// Zero balances are pruned so two books with the same holdings compare
/// equal regardless of history.
///
/// # Examples
///
/// ```
/// use pairwise_amm::domain::{Address, Shares};
/// use pairwise_amm::ledger::ShareBook;
/// use pairwise_amm::traits::ShareLedger;
///
/// let alice = Address::from_bytes([1u8; 32]);
/// let bob = Address::from_bytes([2u8; 32]);
///
/// let mut book = ShareBook::new();
/// book.mint_shares(&alice, Shares::new(100)).expect("mint");
/// book.transfer(&alice, &bob, Shares::new(40)).expect("transfer");
///
/// assert_eq!(book.share_balance(&bob), Shares::new(40));
/// assert_eq!(book.total_shares(), Shares::new(100));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ShareBook {
    balances: HashMap<Address, Shares>,
    allowances: HashMap<(Address, Address), Shares>,
    total: Shares,
}

impl ShareBook {
    /// Creates an empty book.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of accounts holding a non-zero balance.
    #[must_use]
    pub fn holder_count(&self) -> usize {
        self.balances.len()
    }

    /// Moves shares between holders.  Supply is unchanged.
    ///
    /// # Errors
    ///
    /// - [`AmmError::Underflow`] if `from` holds fewer than `amount`.
    /// - [`AmmError::Overflow`] if the receiving balance overflows.
    pub fn transfer(&mut self, from: &Address, to: &Address, amount: Shares) -> Result<(), AmmError> {
        let debited = self.share_balance(from).safe_sub(&amount)?;
        if from == to {
            return Ok(());
        }
        let credited = self.share_balance(to).safe_add(&amount)?;
        self.set_balance(from, debited);
        self.set_balance(to, credited);
        Ok(())
    }

    /// Sets the amount `spender` may move out of `owner`'s balance.
    pub fn approve(&mut self, owner: &Address, spender: &Address, amount: Shares) {
        if amount.is_zero() {
            self.allowances.remove(&(*owner, *spender));
        } else {
            self.allowances.insert((*owner, *spender), amount);
        }
    }

    /// Remaining allowance of `spender` over `owner`'s shares.
    #[must_use]
    pub fn allowance(&self, owner: &Address, spender: &Address) -> Shares {
        self.allowances
            .get(&(*owner, *spender))
            .copied()
            .unwrap_or_default()
    }

    /// Moves shares on behalf of `from`, consuming `spender`'s allowance.
    ///
    /// # Errors
    ///
    /// - [`AmmError::Underflow`] if the allowance or the balance is too
    ///   small.
    /// - [`AmmError::Overflow`] if the receiving balance overflows.
    pub fn transfer_from(
        &mut self,
        spender: &Address,
        from: &Address,
        to: &Address,
        amount: Shares,
    ) -> Result<(), AmmError> {
        let remaining = self
            .allowance(from, spender)
            .checked_sub(&amount)
            .ok_or(AmmError::Underflow("share allowance exceeded"))?;
        self.transfer(from, to, amount)?;
        self.approve(from, spender, remaining);
        Ok(())
    }

    fn set_balance(&mut self, owner: &Address, balance: Shares) {
        if balance.is_zero() {
            self.balances.remove(owner);
        } else {
            self.balances.insert(*owner, balance);
        }
    }
}

impl ShareLedger for ShareBook {
    fn mint_shares(&mut self, owner: &Address, amount: Shares) -> Result<(), AmmError> {
        let total = self.total.safe_add(&amount)?;
        let balance = self.share_balance(owner).safe_add(&amount)?;
        self.total = total;
        self.set_balance(owner, balance);
        Ok(())
    }

    fn burn_shares(&mut self, owner: &Address, amount: Shares) -> Result<(), AmmError> {
        let balance = self.share_balance(owner).safe_sub(&amount)?;
        let total = self.total.safe_sub(&amount)?;
        self.total = total;
        self.set_balance(owner, balance);
        Ok(())
    }

    fn total_shares(&self) -> Shares {
        self.total
    }

    fn share_balance(&self, owner: &Address) -> Shares {
        self.balances.get(owner).copied().unwrap_or_default()
    }

    fn transfer_shares(&mut self, from: &Address, to: &Address, amount: Shares) -> Result<(), AmmError> {
        self.transfer(from, to, amount)
    }

    fn approve_shares(&mut self, owner: &Address, spender: &Address, amount: Shares) {
        self.approve(owner, spender, amount);
    }

    fn share_allowance(&self, owner: &Address, spender: &Address) -> Shares {
        self.allowance(owner, spender)
    }

    fn transfer_shares_from(
        &mut self,
        spender: &Address,
        from: &Address,
        to: &Address,
        amount: Shares,
    ) -> Result<(), AmmError> {
        self.transfer_from(spender, from, to, amount)
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    fn addr(b: u8) -> Address {
        Address::from_bytes([b; 32])
    }

    fn funded(owner: u8, amount: u128) -> ShareBook {
        let mut book = ShareBook::new();
        let Ok(()) = book.mint_shares(&addr(owner), Shares::new(amount)) else {
            panic!("mint failed");
        };
        book
    }

    #[test]
    fn mint_grows_supply_and_balance() {
        let book = funded(1, 500);
        assert_eq!(book.total_shares(), Shares::new(500));
        assert_eq!(book.share_balance(&addr(1)), Shares::new(500));
        assert_eq!(book.holder_count(), 1);
    }

    #[test]
    fn mint_overflow_leaves_book_untouched() {
        let mut book = funded(1, u128::MAX);
        let before = book.clone();
        let Err(AmmError::Overflow(_)) = book.mint_shares(&addr(2), Shares::new(1)) else {
            panic!("expected Overflow");
        };
        assert_eq!(book, before);
    }

    #[test]
    fn burn_shrinks_supply_and_prunes() {
        let mut book = funded(1, 500);
        let Ok(()) = book.burn_shares(&addr(1), Shares::new(500)) else {
            panic!("burn failed");
        };
        assert!(book.total_shares().is_zero());
        assert_eq!(book.holder_count(), 0);
        assert_eq!(book, ShareBook::new());
    }

    #[test]
    fn burn_more_than_held_underflows() {
        let mut book = funded(1, 10);
        let Err(AmmError::Underflow(_)) = book.burn_shares(&addr(1), Shares::new(11)) else {
            panic!("expected Underflow");
        };
        assert_eq!(book.total_shares(), Shares::new(10));
    }

    #[test]
    fn transfer_moves_balance() {
        let mut book = funded(1, 100);
        let Ok(()) = book.transfer(&addr(1), &addr(2), Shares::new(30)) else {
            panic!("transfer failed");
        };
        assert_eq!(book.share_balance(&addr(1)), Shares::new(70));
        assert_eq!(book.share_balance(&addr(2)), Shares::new(30));
        assert_eq!(book.total_shares(), Shares::new(100));
    }

    #[test]
    fn self_transfer_is_noop() {
        let mut book = funded(1, 100);
        let Ok(()) = book.transfer(&addr(1), &addr(1), Shares::new(100)) else {
            panic!("transfer failed");
        };
        assert_eq!(book.share_balance(&addr(1)), Shares::new(100));
    }

    #[test]
    fn transfer_from_consumes_allowance() {
        let mut book = funded(1, 100);
        book.approve(&addr(1), &addr(9), Shares::new(50));
        let Ok(()) = book.transfer_from(&addr(9), &addr(1), &addr(2), Shares::new(20)) else {
            panic!("transfer_from failed");
        };
        assert_eq!(book.allowance(&addr(1), &addr(9)), Shares::new(30));
        assert_eq!(book.share_balance(&addr(2)), Shares::new(20));
    }

    #[test]
    fn transfer_from_over_allowance_fails() {
        let mut book = funded(1, 100);
        book.approve(&addr(1), &addr(9), Shares::new(5));
        let Err(AmmError::Underflow(_)) =
            book.transfer_from(&addr(9), &addr(1), &addr(2), Shares::new(6))
        else {
            panic!("expected Underflow");
        };
        assert_eq!(book.share_balance(&addr(1)), Shares::new(100));
        assert_eq!(book.allowance(&addr(1), &addr(9)), Shares::new(5));
    }
}
