//! Convenience re-exports for common types and traits.
//!
//! ```rust
//! use pairwise_amm::prelude::*;
//! ```

pub use crate::config::{PoolConfig, MINIMUM_LOCKED_SHARES};
pub use crate::domain::{
    Address, Amount, AssetPair, BlockTime, PoolCreated, PoolEvent, Shares, SwapResult,
};
pub use crate::error::{AmmError, Result};
pub use crate::exchange::{Exchange, ExchangeEvent, SharedExchange};
pub use crate::ledger::{ManualClock, ShareBook, SystemClock, Vault};
pub use crate::math::{CheckedArithmetic, Uq112x112};
pub use crate::pool::{Pool, PriceObservation};
pub use crate::registry::PoolRegistry;
pub use crate::traits::{AssetCustody, Clock, ShareLedger, TransferOutcome};
