//! The constant-product pair engine.
//!
//! A [`Pool`] holds the last-synchronized reserves of two assets, issues
//! pool shares against contributed liquidity, and executes swaps whose
//! post-trade reserve product may never fall below the pre-trade product.
//! Every operation ends in a shared synchronization step that overwrites
//! the reserves with observed custody balances and advances the
//! time-weighted price accumulator.
//!
//! # Push-then-call
//!
//! Operations never take input amounts.  Callers first transfer assets
//! into the pool's custody account ([`Pool::address`]) and then call
//! [`Pool::mint`] or [`Pool::swap`]; the engine infers the contribution
//! from `custody_balance − reserve`.
//!
//! # Atomicity
//!
//! Public operations run against a staged copy of the pool, which replaces
//! the original only when the whole operation succeeds.  Custody is never
//! copied: transfers it completes during an operation are logged, and an
//! operation that fails afterwards sends them back in reverse order.  An
//! error at any step (including a custody transfer refused after shares
//! were already burned) therefore leaves no trace, provided custody
//! accepts the compensating transfers.
//!
//! # Re-entrancy
//!
//! Operations borrow the pool and the custody handle mutably for their
//! whole duration, so custody cannot call back into the same pool while
//! one is in flight.  Reserves are synchronized before any outbound
//! swap transfer is requested.
//!
//! # Example
//!
//! ```rust
//! use pairwise_amm::config::PoolConfig;
//! use pairwise_amm::domain::{Address, Amount, AssetPair};
//! use pairwise_amm::ledger::{ManualClock, Vault};
//! use pairwise_amm::pool::Pool;
//!
//! let (x, y) = (Address::from_bytes([1u8; 32]), Address::from_bytes([2u8; 32]));
//! let alice = Address::from_bytes([9u8; 32]);
//! let mut pool: Pool = Pool::new(Address::from_bytes([7u8; 32]), PoolConfig::default());
//! pool.initialize(AssetPair::new(x, y).expect("valid pair")).expect("first init");
//!
//! let mut vault = Vault::new();
//! let clock = ManualClock::new(1_700_000_000);
//! vault.credit(&x, &pool.address(), Amount::new(1_000_000)).expect("push A");
//! vault.credit(&y, &pool.address(), Amount::new(4_000_000)).expect("push B");
//!
//! let shares = pool.mint(&mut vault, &clock, &alice).expect("mint");
//! assert_eq!(shares.get(), 2_000_000 - 1_000);
//! assert_eq!(pool.reserves().0, Amount::new(1_000_000));
//! ```

mod liquidity;
mod oracle;
mod reserves;
mod swap;

#[cfg(test)]
mod proptest_properties;

pub use oracle::PriceObservation;

use crate::config::PoolConfig;
use crate::domain::{Address, Amount, AssetPair, BlockTime, PoolEvent, Shares};
use crate::error::AmmError;
use crate::ledger::ShareBook;
use crate::math::Uq112x112;
use crate::traits::{AssetCustody, ShareLedger, TransferOutcome};

/// One pool: the exclusive record of a pair's reserves, clock and price
/// accumulators, plus the share ledger issuing claims on it.
///
/// # State
///
/// - `pair` — unset until [`Pool::initialize`]; set exactly once.
/// - `reserve_a` / `reserve_b` — last-synchronized balances, always
///   `≤ MAX_RESERVE` (2¹¹² − 1).
/// - `last_sync` — truncated 32-bit time of the last synchronization.
/// - `price_a_cumulative` / `price_b_cumulative` — wrapping integrals of
///   `reserve_b / reserve_a` and `reserve_a / reserve_b` over time.
/// - `shares` — the share ledger collaborator.
/// - `events` — observations not yet collected by [`Pool::take_events`].
#[derive(Debug, Clone, PartialEq)]
pub struct Pool<S = ShareBook> {
    address: Address,
    config: PoolConfig,
    pair: Option<AssetPair>,
    reserve_a: Amount,
    reserve_b: Amount,
    last_sync: BlockTime,
    price_a_cumulative: Uq112x112,
    price_b_cumulative: Uq112x112,
    shares: S,
    events: Vec<PoolEvent>,
}

impl<S: ShareLedger + Default> Pool<S> {
    /// Creates an uninitialized pool with an empty share ledger.
    ///
    /// `address` is the pool's custody account: assets pushed there are
    /// what [`Pool::mint`] and [`Pool::swap`] see as contributions.
    #[must_use]
    pub fn new(address: Address, config: PoolConfig) -> Self {
        Self::with_ledger(address, config, S::default())
    }
}

impl<S: ShareLedger> Pool<S> {
    /// Creates an uninitialized pool backed by the given share ledger.
    #[must_use]
    pub fn with_ledger(address: Address, config: PoolConfig, shares: S) -> Self {
        Self {
            address,
            config,
            pair: None,
            reserve_a: Amount::ZERO,
            reserve_b: Amount::ZERO,
            last_sync: BlockTime::default(),
            price_a_cumulative: Uq112x112::ZERO,
            price_b_cumulative: Uq112x112::ZERO,
            shares,
            events: Vec::new(),
        }
    }

    /// Sets the pool's two assets.  Callable exactly once.
    ///
    /// The pair's canonical order is taken as given: `pair.first()` is
    /// asset A and `pair.second()` is asset B.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::AlreadyInitialized`] on any second call.
    pub fn initialize(&mut self, pair: AssetPair) -> Result<(), AmmError> {
        if self.pair.is_some() {
            return Err(AmmError::AlreadyInitialized);
        }
        self.pair = Some(pair);
        Ok(())
    }

    /// The pool's custody account.
    #[must_use]
    pub const fn address(&self) -> Address {
        self.address
    }

    /// The configuration the pool was created with.
    #[must_use]
    pub const fn config(&self) -> &PoolConfig {
        &self.config
    }

    /// The pool's assets, or `None` before initialization.
    #[must_use]
    pub const fn pair(&self) -> Option<AssetPair> {
        self.pair
    }

    /// Asset A, or the null sentinel before initialization.
    #[must_use]
    pub fn asset_a(&self) -> Address {
        self.pair.map(|p| p.first()).unwrap_or_default()
    }

    /// Asset B, or the null sentinel before initialization.
    #[must_use]
    pub fn asset_b(&self) -> Address {
        self.pair.map(|p| p.second()).unwrap_or_default()
    }

    /// `(reserve_a, reserve_b, last_sync_time)`.
    #[must_use]
    pub const fn reserves(&self) -> (Amount, Amount, BlockTime) {
        (self.reserve_a, self.reserve_b, self.last_sync)
    }

    /// Stored accumulator of the price of A in B.
    #[must_use]
    pub const fn price_a_cumulative(&self) -> Uq112x112 {
        self.price_a_cumulative
    }

    /// Stored accumulator of the price of B in A.
    #[must_use]
    pub const fn price_b_cumulative(&self) -> Uq112x112 {
        self.price_b_cumulative
    }

    /// Total shares outstanding, including the locked minimum.
    #[must_use]
    pub fn total_shares(&self) -> Shares {
        self.shares.total_shares()
    }

    /// Shares held by `owner`.
    #[must_use]
    pub fn share_balance(&self, owner: &Address) -> Shares {
        self.shares.share_balance(owner)
    }

    /// Read access to the share ledger.
    #[must_use]
    pub const fn shares(&self) -> &S {
        &self.shares
    }

    /// Moves `from`'s shares to `to`.  Reserves are unaffected.
    ///
    /// # Errors
    ///
    /// - [`AmmError::LockedShares`] if `from` is the locked-share sink.
    /// - [`AmmError::Underflow`] if `from` holds fewer than `amount`.
    pub fn transfer_shares(
        &mut self,
        from: &Address,
        to: &Address,
        amount: Shares,
    ) -> Result<(), AmmError> {
        self.ensure_unlocked(from)?;
        self.shares.transfer_shares(from, to, amount)
    }

    /// Lets `spender` move up to `amount` of `owner`'s shares.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::LockedShares`] if `owner` is the sink.
    pub fn approve_shares(
        &mut self,
        owner: &Address,
        spender: &Address,
        amount: Shares,
    ) -> Result<(), AmmError> {
        self.ensure_unlocked(owner)?;
        self.shares.approve_shares(owner, spender, amount);
        Ok(())
    }

    /// Remaining allowance of `spender` over `owner`'s shares.
    #[must_use]
    pub fn share_allowance(&self, owner: &Address, spender: &Address) -> Shares {
        self.shares.share_allowance(owner, spender)
    }

    /// Moves `from`'s shares to `to` on `spender`'s allowance.
    ///
    /// # Errors
    ///
    /// - [`AmmError::LockedShares`] if `from` is the locked-share sink.
    /// - [`AmmError::Underflow`] if the allowance or balance is too small.
    pub fn transfer_shares_from(
        &mut self,
        spender: &Address,
        from: &Address,
        to: &Address,
        amount: Shares,
    ) -> Result<(), AmmError> {
        self.ensure_unlocked(from)?;
        self.shares.transfer_shares_from(spender, from, to, amount)
    }

    /// Drains the observations emitted since the last call.
    pub fn take_events(&mut self) -> Vec<PoolEvent> {
        std::mem::take(&mut self.events)
    }

    fn ensure_unlocked(&self, holder: &Address) -> Result<(), AmmError> {
        if *holder == self.config.locked_share_sink() {
            return Err(AmmError::LockedShares);
        }
        Ok(())
    }

    fn assets(&self) -> Result<AssetPair, AmmError> {
        self.pair.ok_or(AmmError::NotInitialized)
    }

    fn custody_balances<C: AssetCustody>(&self, custody: &C, pair: &AssetPair) -> (Amount, Amount) {
        (
            custody.balance_of(&pair.first(), &self.address),
            custody.balance_of(&pair.second(), &self.address),
        )
    }

    fn emit(&mut self, event: PoolEvent) {
        tracing::trace!(pool = %self.address, kind = event.kind(), "pool event");
        self.events.push(event);
    }
}

impl<S: ShareLedger + Clone> Pool<S> {
    /// Runs `op` against a copy of the pool and a logged view of custody.
    ///
    /// The copy replaces the pool only on success.  On failure every
    /// transfer custody completed during `op` is reversed.
    fn transact<C, T, F>(&mut self, custody: &mut C, op: F) -> Result<T, AmmError>
    where
        C: AssetCustody,
        F: FnOnce(&mut Self, &mut CustodyLog<'_, C>) -> Result<T, AmmError>,
    {
        let mut staged = self.clone();
        let mut log = CustodyLog::new(custody);
        match op(&mut staged, &mut log) {
            Ok(out) => {
                *self = staged;
                Ok(out)
            }
            Err(err) => {
                log.unwind();
                Err(err)
            }
        }
    }
}

/// Custody view that records completed transfers so they can be undone.
struct CustodyLog<'a, C> {
    inner: &'a mut C,
    completed: Vec<(Address, Address, Address, Amount)>,
}

impl<'a, C: AssetCustody> CustodyLog<'a, C> {
    fn new(inner: &'a mut C) -> Self {
        Self {
            inner,
            completed: Vec::new(),
        }
    }

    /// Sends every completed transfer back, newest first.
    fn unwind(self) {
        let Self { inner, completed } = self;
        for (asset, from, to, amount) in completed.into_iter().rev() {
            let outcome = inner.transfer(&asset, &to, &from, amount);
            if !outcome.is_completed() {
                tracing::warn!(
                    %asset,
                    %from,
                    %to,
                    %amount,
                    ?outcome,
                    "custody refused compensating transfer"
                );
            }
        }
    }
}

impl<C: AssetCustody> AssetCustody for CustodyLog<'_, C> {
    fn balance_of(&self, asset: &Address, holder: &Address) -> Amount {
        self.inner.balance_of(asset, holder)
    }

    fn transfer(
        &mut self,
        asset: &Address,
        from: &Address,
        to: &Address,
        amount: Amount,
    ) -> TransferOutcome {
        let outcome = self.inner.transfer(asset, from, to, amount);
        if outcome.is_completed() {
            self.completed.push((*asset, *from, *to, amount));
        }
        outcome
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    //! Fixtures shared by the pool unit tests.
    #![allow(clippy::panic)]

    use super::Pool;
    use crate::config::PoolConfig;
    use crate::domain::{Address, Amount, AssetPair};
    use crate::ledger::{ManualClock, Vault};

    pub const E18: u128 = 1_000_000_000_000_000_000;
    pub const START: u64 = 1_700_000_000;

    pub fn asset_a() -> Address {
        Address::from_bytes([1u8; 32])
    }

    pub fn asset_b() -> Address {
        Address::from_bytes([2u8; 32])
    }

    pub fn pool_addr() -> Address {
        Address::from_bytes([0x70u8; 32])
    }

    pub fn alice() -> Address {
        Address::from_bytes([0xa1u8; 32])
    }

    pub fn bob() -> Address {
        Address::from_bytes([0xb0u8; 32])
    }

    pub fn fresh_pool() -> Pool {
        let mut pool = Pool::new(pool_addr(), PoolConfig::default());
        let Ok(pair) = AssetPair::new(asset_a(), asset_b()) else {
            panic!("valid pair");
        };
        let Ok(()) = pool.initialize(pair) else {
            panic!("first initialize");
        };
        pool
    }

    /// Credits the pool's custody account directly (a push).
    pub fn push(vault: &mut Vault, pool: &Pool, a: u128, b: u128) {
        let Ok(()) = vault.credit(&asset_a(), &pool.address(), Amount::new(a)) else {
            panic!("credit A");
        };
        let Ok(()) = vault.credit(&asset_b(), &pool.address(), Amount::new(b)) else {
            panic!("credit B");
        };
    }

    /// A pool seeded by `alice` with `(a, b)`, plus its vault and clock.
    pub fn seeded(a: u128, b: u128) -> (Pool, Vault, ManualClock) {
        let mut pool = fresh_pool();
        let mut vault = Vault::new();
        let clock = ManualClock::new(START);
        push(&mut vault, &pool, a, b);
        let Ok(_) = pool.mint(&mut vault, &clock, &alice()) else {
            panic!("seed mint");
        };
        pool.take_events();
        (pool, vault, clock)
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::test_support::*;
    use super::*;

    #[test]
    fn new_pool_is_unset() {
        let pool: Pool = Pool::new(pool_addr(), PoolConfig::default());
        assert_eq!(pool.pair(), None);
        assert!(pool.asset_a().is_zero());
        assert!(pool.asset_b().is_zero());
        assert_eq!(pool.reserves(), (Amount::ZERO, Amount::ZERO, BlockTime::new(0)));
        assert!(pool.total_shares().is_zero());
    }

    #[test]
    fn initialize_sets_assets_once() {
        let mut pool = fresh_pool();
        assert_eq!(pool.asset_a(), asset_a());
        assert_eq!(pool.asset_b(), asset_b());

        let Ok(other) = AssetPair::new(asset_b(), Address::from_bytes([3u8; 32])) else {
            panic!("valid pair");
        };
        assert_eq!(pool.initialize(other), Err(AmmError::AlreadyInitialized));
        assert_eq!(pool.asset_a(), asset_a());
    }

    #[test]
    fn operations_require_initialization() {
        let mut pool: Pool = Pool::new(pool_addr(), PoolConfig::default());
        let mut vault = crate::ledger::Vault::new();
        let clock = crate::ledger::ManualClock::new(START);
        assert_eq!(
            pool.mint(&mut vault, &clock, &alice()),
            Err(AmmError::NotInitialized)
        );
        assert_eq!(
            pool.burn(&mut vault, &clock, &alice()),
            Err(AmmError::NotInitialized)
        );
        assert_eq!(
            pool.sync_reserves(&mut vault, &clock),
            Err(AmmError::NotInitialized)
        );
    }

    #[test]
    fn take_events_drains() {
        let mut pool = fresh_pool();
        let mut vault = crate::ledger::Vault::new();
        let clock = crate::ledger::ManualClock::new(START);
        push(&mut vault, &pool, 10_000, 10_000);
        let Ok(_) = pool.mint(&mut vault, &clock, &alice()) else {
            panic!("mint");
        };
        assert_eq!(pool.take_events().len(), 2);
        assert!(pool.take_events().is_empty());
    }
}
