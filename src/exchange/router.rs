//! Address-routed facade over a registry, one custody and one clock.

use crate::config::PoolConfig;
use crate::domain::{Address, Amount, PoolCreated, PoolEvent, Shares, SwapResult};
use crate::error::AmmError;
use crate::pool::{Pool, PriceObservation};
use crate::registry::PoolRegistry;
use crate::traits::{AssetCustody, Clock};

/// An entry in the exchange journal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ExchangeEvent {
    /// The registry created a pool.
    PoolCreated(PoolCreated),
    /// A pool committed an operation.
    Pool {
        /// Address of the emitting pool.
        pool: Address,
        /// What happened.
        event: PoolEvent,
    },
}

/// Routes pool operations by address against shared custody and time.
///
/// Pool events are moved into a single journal as each operation
/// commits, in commit order.  Failed operations leave neither state nor
/// journal entries behind.
#[derive(Debug)]
pub struct Exchange<C, K> {
    registry: PoolRegistry,
    custody: C,
    clock: K,
    journal: Vec<ExchangeEvent>,
}

impl<C, K> Exchange<C, K>
where
    C: AssetCustody,
    K: Clock,
{
    /// Creates an exchange with no pools.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidConfiguration`] if `config` is invalid.
    pub fn new(config: PoolConfig, custody: C, clock: K) -> Result<Self, AmmError> {
        Ok(Self {
            registry: PoolRegistry::new(config)?,
            custody,
            clock,
            journal: Vec::new(),
        })
    }

    /// Creates the pool for `(x, y)`.  See [`PoolRegistry::create_pool`].
    ///
    /// # Errors
    ///
    /// Propagates the registry's creation errors.
    pub fn create_pool(&mut self, x: Address, y: Address) -> Result<Address, AmmError> {
        let address = self.registry.create_pool(x, y)?;
        self.journal.extend(
            self.registry
                .take_events()
                .into_iter()
                .map(ExchangeEvent::PoolCreated),
        );
        Ok(address)
    }

    /// Moves `amount` of `asset` from `from` into custody of `pool`.
    ///
    /// This is the "push" half of push-then-call; it does not touch the
    /// pool's reserves.
    ///
    /// # Errors
    ///
    /// - [`AmmError::PoolNotFound`] if no pool lives at `pool`.
    /// - [`AmmError::TransferFailed`] if custody refuses the transfer.
    pub fn push(
        &mut self,
        asset: &Address,
        from: &Address,
        pool: &Address,
        amount: Amount,
    ) -> Result<(), AmmError> {
        if self.registry.pool(pool).is_none() {
            return Err(AmmError::PoolNotFound);
        }
        self.custody.safe_transfer(asset, from, pool, amount)
    }

    /// [`Pool::mint`] on the pool at `pool`.
    ///
    /// # Errors
    ///
    /// [`AmmError::PoolNotFound`], or any error of [`Pool::mint`].
    pub fn mint(&mut self, pool: &Address, depositor: &Address) -> Result<Shares, AmmError> {
        self.route(pool, |p, custody, clock| p.mint(custody, clock, depositor))
    }

    /// [`Pool::burn`] on the pool at `pool`.
    ///
    /// # Errors
    ///
    /// [`AmmError::PoolNotFound`], or any error of [`Pool::burn`].
    pub fn burn(
        &mut self,
        pool: &Address,
        withdrawer: &Address,
    ) -> Result<(Amount, Amount), AmmError> {
        self.route(pool, |p, custody, clock| p.burn(custody, clock, withdrawer))
    }

    /// [`Pool::swap`] on the pool at `pool`.
    ///
    /// # Errors
    ///
    /// [`AmmError::PoolNotFound`], or any error of [`Pool::swap`].
    pub fn swap(
        &mut self,
        pool: &Address,
        amount_a_out: Amount,
        amount_b_out: Amount,
        recipient: &Address,
    ) -> Result<SwapResult, AmmError> {
        self.route(pool, |p, custody, clock| {
            p.swap(custody, clock, amount_a_out, amount_b_out, recipient)
        })
    }

    /// [`Pool::skim`] on the pool at `pool`.
    ///
    /// # Errors
    ///
    /// [`AmmError::PoolNotFound`], or any error of [`Pool::skim`].
    pub fn skim(&mut self, pool: &Address, to: &Address) -> Result<(Amount, Amount), AmmError> {
        self.route(pool, |p, custody, _| p.skim(custody, to))
    }

    /// [`Pool::sync_reserves`] on the pool at `pool`.
    ///
    /// # Errors
    ///
    /// [`AmmError::PoolNotFound`], or any error of [`Pool::sync_reserves`].
    pub fn sync_reserves(&mut self, pool: &Address) -> Result<(), AmmError> {
        self.route(pool, |p, custody, clock| p.sync_reserves(custody, clock))
    }

    /// [`Pool::transfer_shares`] on the pool at `pool`.
    ///
    /// # Errors
    ///
    /// [`AmmError::PoolNotFound`], or any error of [`Pool::transfer_shares`].
    pub fn transfer_shares(
        &mut self,
        pool: &Address,
        from: &Address,
        to: &Address,
        amount: Shares,
    ) -> Result<(), AmmError> {
        self.pool_mut(pool)?.transfer_shares(from, to, amount)
    }

    /// [`Pool::approve_shares`] on the pool at `pool`.
    ///
    /// # Errors
    ///
    /// [`AmmError::PoolNotFound`], or any error of [`Pool::approve_shares`].
    pub fn approve_shares(
        &mut self,
        pool: &Address,
        owner: &Address,
        spender: &Address,
        amount: Shares,
    ) -> Result<(), AmmError> {
        self.pool_mut(pool)?.approve_shares(owner, spender, amount)
    }

    /// [`Pool::transfer_shares_from`] on the pool at `pool`.
    ///
    /// # Errors
    ///
    /// [`AmmError::PoolNotFound`], or any error of
    /// [`Pool::transfer_shares_from`].
    pub fn transfer_shares_from(
        &mut self,
        pool: &Address,
        spender: &Address,
        from: &Address,
        to: &Address,
        amount: Shares,
    ) -> Result<(), AmmError> {
        self.pool_mut(pool)?
            .transfer_shares_from(spender, from, to, amount)
    }

    /// [`Pool::observe`] on the pool at `pool`, at the exchange's clock.
    ///
    /// # Errors
    ///
    /// [`AmmError::PoolNotFound`] if no pool lives at `pool`.
    pub fn observe(&self, pool: &Address) -> Result<PriceObservation, AmmError> {
        self.pool(pool)?.observe(&self.clock)
    }

    /// The pool at `address`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::PoolNotFound`] if none exists.
    pub fn pool(&self, address: &Address) -> Result<&Pool, AmmError> {
        self.registry.pool(address).ok_or(AmmError::PoolNotFound)
    }

    /// The registry.
    #[must_use]
    pub const fn registry(&self) -> &PoolRegistry {
        &self.registry
    }

    /// The custody handle.
    #[must_use]
    pub const fn custody(&self) -> &C {
        &self.custody
    }

    /// Mutable custody handle, for funding accounts outside any pool.
    pub fn custody_mut(&mut self) -> &mut C {
        &mut self.custody
    }

    /// The clock.
    #[must_use]
    pub const fn clock(&self) -> &K {
        &self.clock
    }

    /// Journal entries recorded since the last call.
    pub fn take_journal(&mut self) -> Vec<ExchangeEvent> {
        std::mem::take(&mut self.journal)
    }

    fn pool_mut(&mut self, address: &Address) -> Result<&mut Pool, AmmError> {
        self.registry
            .pool_mut(address)
            .ok_or(AmmError::PoolNotFound)
    }

    fn route<T, F>(&mut self, address: &Address, op: F) -> Result<T, AmmError>
    where
        F: FnOnce(&mut Pool, &mut C, &K) -> Result<T, AmmError>,
    {
        let pool = self
            .registry
            .pool_mut(address)
            .ok_or(AmmError::PoolNotFound)?;
        let out = op(pool, &mut self.custody, &self.clock)?;
        self.journal.extend(
            pool.take_events()
                .into_iter()
                .map(|event| ExchangeEvent::Pool {
                    pool: *address,
                    event,
                }),
        );
        Ok(out)
    }
}
