//! Deterministic pool registry.

use std::collections::HashMap;

use crate::config::PoolConfig;
use crate::domain::{Address, AssetPair, PoolCreated};
use crate::error::AmmError;
use crate::ledger::ShareBook;
use crate::pool::Pool;
use crate::traits::ShareLedger;

/// Domain separator for pool address derivation.
const POOL_ADDRESS_DOMAIN: &[u8] = b"PAIRWISE_AMM_POOL_V1";

/// Derives the custody address of the pool serving `pair`.
///
/// `blake3(domain || asset_a || asset_b)` over the canonical order, so
/// `(x, y)` and `(y, x)` always land on the same address.
#[must_use]
pub fn derive_pool_address(pair: &AssetPair) -> Address {
    let mut hasher = blake3::Hasher::new();
    hasher.update(POOL_ADDRESS_DOMAIN);
    hasher.update(&pair.first().as_bytes());
    hasher.update(&pair.second().as_bytes());
    Address::from_bytes(*hasher.finalize().as_bytes())
}

/// Owns every pool and indexes them by pair, by address and by creation
/// order.
///
/// # Creation Flow
///
/// 1. Canonicalize `(x, y)` via [`AssetPair::new`], which rejects
///    identical assets and a null lower identifier.
/// 2. Reject a pair that already has a pool.
/// 3. Derive the pool address with [`derive_pool_address`].
/// 4. Build the pool from the registry's [`PoolConfig`] and call
///    [`Pool::initialize`] on it exactly once.
/// 5. Record it and emit [`PoolCreated`].
///
/// # Example
///
/// ```rust
/// use pairwise_amm::config::PoolConfig;
/// use pairwise_amm::domain::Address;
/// use pairwise_amm::registry::PoolRegistry;
///
/// let x = Address::from_bytes([2u8; 32]);
/// let y = Address::from_bytes([1u8; 32]);
///
/// let mut registry: PoolRegistry = PoolRegistry::new(PoolConfig::default()).expect("valid");
/// let pool = registry.create_pool(x, y).expect("created");
/// assert_eq!(registry.pool_for(&y, &x), Some(pool));
/// assert_eq!(registry.pool_at(0), Some(pool));
/// ```
#[derive(Debug, Clone)]
pub struct PoolRegistry<S = ShareBook> {
    config: PoolConfig,
    pools: Vec<Pool<S>>,
    by_address: HashMap<Address, usize>,
    by_pair: HashMap<AssetPair, usize>,
    events: Vec<PoolCreated>,
}

impl<S: ShareLedger + Default> PoolRegistry<S> {
    /// Creates an empty registry handing `config` to every new pool.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidConfiguration`] if `config` fails
    /// [`PoolConfig::validate`].
    pub fn new(config: PoolConfig) -> Result<Self, AmmError> {
        config.validate()?;
        Ok(Self {
            config,
            pools: Vec::new(),
            by_address: HashMap::new(),
            by_pair: HashMap::new(),
            events: Vec::new(),
        })
    }

    /// Creates and initializes the pool for `(x, y)`, in either order.
    ///
    /// # Errors
    ///
    /// - [`AmmError::IdenticalAssets`] if `x == y`.
    /// - [`AmmError::ZeroAddress`] if the lower identifier is null.
    /// - [`AmmError::PoolExists`] if the pair already has a pool.
    pub fn create_pool(&mut self, x: Address, y: Address) -> Result<Address, AmmError> {
        let pair = AssetPair::new(x, y)?;
        if self.by_pair.contains_key(&pair) {
            return Err(AmmError::PoolExists);
        }

        let address = derive_pool_address(&pair);
        let mut pool = Pool::new(address, self.config);
        pool.initialize(pair)?;

        let index = self.pools.len();
        self.pools.push(pool);
        self.by_address.insert(address, index);
        self.by_pair.insert(pair, index);

        let created = PoolCreated {
            pair,
            pool: address,
            pool_count: self.pools.len(),
        };
        tracing::info!(
            asset_a = %pair.first(),
            asset_b = %pair.second(),
            pool = %address,
            pool_count = created.pool_count,
            "pool created"
        );
        self.events.push(created);
        Ok(address)
    }
}

impl<S: ShareLedger> PoolRegistry<S> {
    /// The configuration applied to new pools.
    #[must_use]
    pub const fn config(&self) -> &PoolConfig {
        &self.config
    }

    /// Address of the pool for `(x, y)`, in either order.
    #[must_use]
    pub fn pool_for(&self, x: &Address, y: &Address) -> Option<Address> {
        let pair = AssetPair::new(*x, *y).ok()?;
        self.by_pair
            .get(&pair)
            .and_then(|&i| self.pools.get(i))
            .map(Pool::address)
    }

    /// The pool at `address`.
    #[must_use]
    pub fn pool(&self, address: &Address) -> Option<&Pool<S>> {
        self.by_address.get(address).and_then(|&i| self.pools.get(i))
    }

    /// Mutable access to the pool at `address`.
    pub fn pool_mut(&mut self, address: &Address) -> Option<&mut Pool<S>> {
        let index = *self.by_address.get(address)?;
        self.pools.get_mut(index)
    }

    /// Address of the `index`-th pool created.
    #[must_use]
    pub fn pool_at(&self, index: usize) -> Option<Address> {
        self.pools.get(index).map(Pool::address)
    }

    /// Number of pools created.
    #[must_use]
    pub fn pool_count(&self) -> usize {
        self.pools.len()
    }

    /// Every pool, in creation order.
    pub fn pools(&self) -> impl Iterator<Item = &Pool<S>> {
        self.pools.iter()
    }

    /// Drains creation events emitted since the last call.
    pub fn take_events(&mut self) -> Vec<PoolCreated> {
        std::mem::take(&mut self.events)
    }
}
