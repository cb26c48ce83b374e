//! Time source for the price accumulator.

use std::sync::Arc;

use crate::domain::BlockTime;

/// A source of Unix time in seconds.
///
/// The engine only needs the truncated 32-bit value; see
/// [`Clock::block_time`].
pub trait Clock {
    /// Current Unix time in seconds.
    #[must_use]
    fn unix_seconds(&self) -> u64;

    /// Current time truncated to 32 bits.
    #[must_use]
    fn block_time(&self) -> BlockTime {
        BlockTime::from_unix(self.unix_seconds())
    }
}

impl<K: Clock + ?Sized> Clock for &K {
    fn unix_seconds(&self) -> u64 {
        (**self).unix_seconds()
    }
}

impl<K: Clock + ?Sized> Clock for Arc<K> {
    fn unix_seconds(&self) -> u64 {
        (**self).unix_seconds()
    }
}
