//! Wall-clock and manually driven time sources.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::traits::Clock;

/// Reads the host's wall clock.
///
/// A clock set before the Unix epoch reads as zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn unix_seconds(&self) -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or_default()
    }
}

/// A clock that only moves when told to.
///
/// Interior mutability lets one instance be shared (for example behind an
/// `Arc`) between a test and the exchange it drives.
///
/// # Examples
///
/// ```
/// use pairwise_amm::ledger::ManualClock;
/// use pairwise_amm::traits::Clock;
///
/// let clock = ManualClock::new(1_000);
/// clock.advance(15);
/// assert_eq!(clock.unix_seconds(), 1_015);
/// ```
#[derive(Debug, Default)]
pub struct ManualClock {
    now: AtomicU64,
}

impl ManualClock {
    /// Creates a clock reading `unix_seconds`.
    #[must_use]
    pub const fn new(unix_seconds: u64) -> Self {
        Self {
            now: AtomicU64::new(unix_seconds),
        }
    }

    /// Jumps to an absolute time.
    pub fn set(&self, unix_seconds: u64) {
        self.now.store(unix_seconds, Ordering::SeqCst);
    }

    /// Moves forward by `seconds`, wrapping at `u64::MAX`.
    pub fn advance(&self, seconds: u64) {
        self.now.fetch_add(seconds, Ordering::SeqCst);
    }
}

impl Clone for ManualClock {
    fn clone(&self) -> Self {
        Self::new(self.unix_seconds())
    }
}

impl Clock for ManualClock {
    fn unix_seconds(&self) -> u64 {
        self.now.load(Ordering::SeqCst)
    }
}
