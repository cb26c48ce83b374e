//! Append-only observations emitted by pools and the registry.
//!
//! Events are the audit trail of the engine.  They are produced only by
//! operations that commit; a failed operation emits nothing.  The engine
//! never reads them back.

use super::{Address, Amount, AssetPair, Shares};

/// An observation emitted by a pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PoolEvent {
    /// Liquidity was added and shares issued to `depositor`.
    Mint {
        /// Account credited with the new shares.
        depositor: Address,
        /// Asset A contributed (custody balance above reserve).
        amount_a: Amount,
        /// Asset B contributed (custody balance above reserve).
        amount_b: Amount,
        /// Shares issued to the depositor, excluding any locked minimum.
        shares: Shares,
    },
    /// Shares were redeemed and assets sent out.
    Burn {
        /// Account whose whole share balance was redeemed.
        withdrawer: Address,
        /// Asset A sent to the withdrawer.
        amount_a: Amount,
        /// Asset B sent to the withdrawer.
        amount_b: Amount,
        /// Shares destroyed.
        shares: Shares,
    },
    /// Assets were exchanged against the pool.
    Swap {
        /// Asset A inferred as pushed in.
        amount_a_in: Amount,
        /// Asset B inferred as pushed in.
        amount_b_in: Amount,
        /// Asset A sent out.
        amount_a_out: Amount,
        /// Asset B sent out.
        amount_b_out: Amount,
        /// Receiver of the outputs.
        recipient: Address,
    },
    /// Reserves were overwritten with observed balances.
    Sync {
        /// New reserve of asset A.
        reserve_a: Amount,
        /// New reserve of asset B.
        reserve_b: Amount,
    },
}

impl PoolEvent {
    /// Short lowercase name, used as a log field.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Mint { .. } => "mint",
            Self::Burn { .. } => "burn",
            Self::Swap { .. } => "swap",
            Self::Sync { .. } => "sync",
        }
    }
}

/// Emitted by the registry when a new pool is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PoolCreated {
    /// The canonically ordered pair the pool serves.
    pub pair: AssetPair,
    /// Derived custody address of the new pool.
    pub pool: Address,
    /// Number of pools registered after this creation.
    pub pool_count: usize,
}
