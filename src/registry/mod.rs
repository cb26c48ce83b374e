//! Pool creation and lookup.
//!
//! The [`PoolRegistry`] is the only way pools come into existence.  It
//! canonicalizes pairs, refuses duplicates, derives each pool's custody
//! address deterministically with [`derive_pool_address`], and
//! initializes the new pool exactly once.

mod pool_registry;

pub use pool_registry::{derive_pool_address, PoolRegistry};
