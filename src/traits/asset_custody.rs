//! Asset custody capability consumed by the engine.
//!
//! Pools hold their assets in an external custody system addressed by
//! `(asset, holder)`.  The engine reads balances to infer what was pushed
//! in and asks custody to move assets out.  A pool's *reserves* are its
//! own last-synchronized record; custody balances are the ground truth
//! they lag behind.
//!
//! # Transfer Semantics
//!
//! [`AssetCustody::transfer`] reports one of three outcomes.  The engine
//! only accepts [`TransferOutcome::Completed`]: a rejection or an
//! ambiguous answer aborts the whole operation with
//! [`AmmError::TransferFailed`] via [`AssetCustody::safe_transfer`].
//!
//! # Rollback
//!
//! Custody is never copied.  When a pool operation fails after custody
//! completed some of its transfers, the pool asks custody to move each
//! of them back (same asset and amount, sender and receiver swapped),
//! newest first.  Implementations must accept such a compensating
//! transfer for an operation to stay all-or-nothing; a refusal is logged
//! and the original error is still returned.

use crate::domain::{Address, Amount};
use crate::error::AmmError;

/// What a custody system reported for a transfer request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransferOutcome {
    /// The transfer happened.
    Completed,
    /// The transfer was refused (insufficient funds, frozen asset, ...).
    Rejected,
    /// The transfer returned something that cannot be read as success.
    Ambiguous,
}

impl TransferOutcome {
    /// Returns `true` only for [`TransferOutcome::Completed`].
    #[must_use]
    pub const fn is_completed(&self) -> bool {
        matches!(self, Self::Completed)
    }
}

/// Balance queries and transfers over `(asset, holder)` accounts.
///
/// # Implementors
///
/// - [`Vault`](crate::ledger::Vault) — in-memory custody.
pub trait AssetCustody {
    /// Balance of `asset` held by `holder`.
    #[must_use]
    fn balance_of(&self, asset: &Address, holder: &Address) -> Amount;

    /// Moves `amount` of `asset` from `from` to `to`.
    fn transfer(
        &mut self,
        asset: &Address,
        from: &Address,
        to: &Address,
        amount: Amount,
    ) -> TransferOutcome;

    /// Moves assets and fails unless the transfer definitely completed.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::TransferFailed`] for
    /// [`TransferOutcome::Rejected`] and [`TransferOutcome::Ambiguous`].
    fn safe_transfer(
        &mut self,
        asset: &Address,
        from: &Address,
        to: &Address,
        amount: Amount,
    ) -> Result<(), AmmError> {
        let outcome = self.transfer(asset, from, to, amount);
        if outcome.is_completed() {
            Ok(())
        } else {
            tracing::warn!(
                %asset,
                %from,
                %to,
                %amount,
                ?outcome,
                "custody refused transfer"
            );
            Err(AmmError::TransferFailed)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Scripted(TransferOutcome);

    impl AssetCustody for Scripted {
        fn balance_of(&self, _asset: &Address, _holder: &Address) -> Amount {
            Amount::ZERO
        }

        fn transfer(
            &mut self,
            _asset: &Address,
            _from: &Address,
            _to: &Address,
            _amount: Amount,
        ) -> TransferOutcome {
            self.0
        }
    }

    fn call(outcome: TransferOutcome) -> Result<(), AmmError> {
        let a = Address::from_bytes([1u8; 32]);
        Scripted(outcome).safe_transfer(&a, &a, &a, Amount::new(1))
    }

    #[test]
    fn completed_is_ok() {
        assert_eq!(call(TransferOutcome::Completed), Ok(()));
    }

    #[test]
    fn rejected_fails() {
        assert_eq!(call(TransferOutcome::Rejected), Err(AmmError::TransferFailed));
    }

    #[test]
    fn ambiguous_fails() {
        assert_eq!(call(TransferOutcome::Ambiguous), Err(AmmError::TransferFailed));
    }
}
