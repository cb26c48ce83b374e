//! Fundamental domain value types used throughout the engine.
//!
//! This module contains the value types that model the pair domain:
//! identifiers, asset amounts, pool shares, the truncated clock, swap
//! outcomes and emitted observations.  All types use newtypes with
//! validated constructors to enforce invariants.

mod address;
mod amount;
mod asset_pair;
mod block_time;
mod event;
mod shares;
mod swap_result;

pub use address::Address;
pub use amount::Amount;
pub use asset_pair::AssetPair;
pub use block_time::BlockTime;
pub use event::{PoolCreated, PoolEvent};
pub use shares::Shares;
pub use swap_result::SwapResult;
