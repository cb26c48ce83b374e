//! Configuration shared by every pool a registry creates.

use crate::domain::{Address, Shares};
use crate::error::AmmError;

/// Shares permanently locked on the first deposit into a pool.
pub const MINIMUM_LOCKED_SHARES: Shares = Shares::new(1_000);

/// Immutable parameters of a pool.
///
/// # Fields
///
/// - `minimum_locked_shares` — minted to the sink on the first deposit
///   and subtracted from the depositor's shares, so supply can never
///   return to exactly zero and the sqrt bootstrap cannot be replayed.
/// - `locked_share_sink` — the account credited with the locked shares.
///   Pools refuse to redeem for it.
///
/// # Validation
///
/// - `minimum_locked_shares` must be non-zero.
///
/// # Examples
///
/// ```
/// use pairwise_amm::config::{PoolConfig, MINIMUM_LOCKED_SHARES};
/// use pairwise_amm::domain::{Address, Shares};
///
/// let cfg = PoolConfig::default();
/// assert_eq!(cfg.minimum_locked_shares(), MINIMUM_LOCKED_SHARES);
/// assert!(cfg.locked_share_sink().is_zero());
///
/// assert!(PoolConfig::new(Shares::ZERO, Address::zero()).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PoolConfig {
    minimum_locked_shares: Shares,
    locked_share_sink: Address,
}

impl PoolConfig {
    /// Creates a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidConfiguration`] if
    /// `minimum_locked_shares` is zero.
    pub fn new(minimum_locked_shares: Shares, locked_share_sink: Address) -> Result<Self, AmmError> {
        let config = Self {
            minimum_locked_shares,
            locked_share_sink,
        };
        config.validate()?;
        Ok(config)
    }

    /// Validates all configuration invariants.
    ///
    /// Deserialized configurations bypass [`PoolConfig::new`]; the
    /// registry calls this again before using one.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidConfiguration`] if
    /// `minimum_locked_shares` is zero.
    pub fn validate(&self) -> Result<(), AmmError> {
        if self.minimum_locked_shares.is_zero() {
            return Err(AmmError::InvalidConfiguration(
                "minimum locked shares must be non-zero",
            ));
        }
        Ok(())
    }

    /// Shares locked on the first deposit.
    #[must_use]
    pub const fn minimum_locked_shares(&self) -> Shares {
        self.minimum_locked_shares
    }

    /// Account holding the locked shares.
    #[must_use]
    pub const fn locked_share_sink(&self) -> Address {
        self.locked_share_sink
    }
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            minimum_locked_shares: MINIMUM_LOCKED_SHARES,
            locked_share_sink: Address::zero(),
        }
    }
}
