//! A cloneable, thread-safe handle serializing access to one exchange.

use std::sync::{Arc, Mutex};

use crate::error::AmmError;

use super::Exchange;

/// Shares one [`Exchange`] between threads.
///
/// Every call to [`SharedExchange::execute`] holds the lock for the whole
/// closure, so a push followed by a mint or swap runs as one unit that
/// no other caller can interleave with.
///
/// # Example
///
/// ```rust
/// use pairwise_amm::config::PoolConfig;
/// use pairwise_amm::domain::Address;
/// use pairwise_amm::exchange::{Exchange, SharedExchange};
/// use pairwise_amm::ledger::{SystemClock, Vault};
///
/// let exchange = Exchange::new(PoolConfig::default(), Vault::new(), SystemClock).expect("valid");
/// let shared = SharedExchange::new(exchange);
/// let pool = shared
///     .execute(|ex| ex.create_pool(Address::from_bytes([1; 32]), Address::from_bytes([2; 32])))
///     .expect("created");
///
/// let other = shared.clone();
/// let count = std::thread::spawn(move || other.execute(|ex| Ok(ex.registry().pool_count())))
///     .join()
///     .expect("thread");
/// assert_eq!(count, Ok(1));
/// assert!(shared.execute(|ex| ex.pool(&pool).map(|p| p.total_shares())).is_ok());
/// ```
#[derive(Debug)]
pub struct SharedExchange<C, K> {
    inner: Arc<Mutex<Exchange<C, K>>>,
}

impl<C, K> Clone for SharedExchange<C, K> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<C, K> SharedExchange<C, K> {
    /// Wraps `exchange` for shared use.
    #[must_use]
    pub fn new(exchange: Exchange<C, K>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(exchange)),
        }
    }

    /// Runs `f` with exclusive access to the exchange.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::StatePoisoned`] if a previous holder of the
    /// lock panicked, otherwise whatever `f` returns.
    pub fn execute<T, F>(&self, f: F) -> Result<T, AmmError>
    where
        F: FnOnce(&mut Exchange<C, K>) -> Result<T, AmmError>,
    {
        let mut guard = self.inner.lock().map_err(|_| {
            tracing::warn!("exchange lock poisoned");
            AmmError::StatePoisoned
        })?;
        f(&mut guard)
    }
}
