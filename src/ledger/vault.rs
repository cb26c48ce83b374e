//! In-memory asset custody.

use std::collections::HashMap;

use crate::domain::{Address, Amount};
use crate::error::AmmError;
use crate::math::CheckedArithmetic;
use crate::traits::{AssetCustody, TransferOutcome};

/// Balances of every asset for every holder, keyed by `(asset, holder)`.
///
/// Transfers between existing accounts always complete when the sender
/// is funded, so a pool can always reverse the transfers of an
/// operation it abandons.
///
/// # Examples
///
/// ```
/// use pairwise_amm::domain::{Address, Amount};
/// use pairwise_amm::ledger::Vault;
/// use pairwise_amm::traits::{AssetCustody, TransferOutcome};
///
/// let usdc = Address::from_bytes([1u8; 32]);
/// let alice = Address::from_bytes([2u8; 32]);
/// let bob = Address::from_bytes([3u8; 32]);
///
/// let mut vault = Vault::new();
/// vault.credit(&usdc, &alice, Amount::new(100)).expect("credit");
///
/// let outcome = vault.transfer(&usdc, &alice, &bob, Amount::new(60));
/// assert_eq!(outcome, TransferOutcome::Completed);
/// assert_eq!(vault.balance_of(&usdc, &bob), Amount::new(60));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Vault {
    balances: HashMap<(Address, Address), Amount>,
}

impl Vault {
    /// Creates an empty vault.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Issues new units of `asset` to `holder` out of thin air.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::Overflow`] if the balance overflows.
    pub fn credit(&mut self, asset: &Address, holder: &Address, amount: Amount) -> Result<(), AmmError> {
        let balance = self.balance_of(asset, holder).safe_add(&amount)?;
        self.set_balance(asset, holder, balance);
        Ok(())
    }

    /// Destroys units of `asset` held by `holder`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::Underflow`] if `holder` has less than `amount`.
    pub fn debit(&mut self, asset: &Address, holder: &Address, amount: Amount) -> Result<(), AmmError> {
        let balance = self.balance_of(asset, holder).safe_sub(&amount)?;
        self.set_balance(asset, holder, balance);
        Ok(())
    }

    fn set_balance(&mut self, asset: &Address, holder: &Address, balance: Amount) {
        if balance.is_zero() {
            self.balances.remove(&(*asset, *holder));
        } else {
            self.balances.insert((*asset, *holder), balance);
        }
    }
}

impl AssetCustody for Vault {
    fn balance_of(&self, asset: &Address, holder: &Address) -> Amount {
        self.balances
            .get(&(*asset, *holder))
            .copied()
            .unwrap_or_default()
    }

    fn transfer(
        &mut self,
        asset: &Address,
        from: &Address,
        to: &Address,
        amount: Amount,
    ) -> TransferOutcome {
        let Some(debited) = self.balance_of(asset, from).checked_sub(&amount) else {
            return TransferOutcome::Rejected;
        };
        if from == to {
            return TransferOutcome::Completed;
        }
        let Some(credited) = self.balance_of(asset, to).checked_add(&amount) else {
            return TransferOutcome::Rejected;
        };
        self.set_balance(asset, from, debited);
        self.set_balance(asset, to, credited);
        TransferOutcome::Completed
    }
}
