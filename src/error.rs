//! Unified error types for the pair engine.
//!
//! All fallible operations across the crate return [`AmmError`] as their
//! error type.  Every variant is fatal to the enclosing operation: pool
//! operations stage their changes and commit nothing when an error is
//! returned, so callers never observe a partially applied state delta.

use thiserror::Error;

/// Crate-wide error enum.
///
/// Variants are grouped the way callers usually react to them:
///
/// - **Input validation** — the request itself is malformed.
/// - **Liquidity math** — a deposit or withdrawal rounds to nothing.
/// - **Invariant / solvency** — the pool would become unsound.
/// - **Collaborator failure** — custody or share bookkeeping refused.
/// - **Arithmetic** — checked arithmetic overflowed or underflowed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AmmError {
    // -- input validation ---------------------------------------------------
    /// Both sides of a requested pair are the same asset.
    #[error("identical assets")]
    IdenticalAssets,

    /// The lower asset of a canonically ordered pair is the null sentinel.
    #[error("zero address")]
    ZeroAddress,

    /// A pool for the ordered pair already exists.
    #[error("pool exists")]
    PoolExists,

    /// No pool is registered under the requested address.
    #[error("pool not found")]
    PoolNotFound,

    /// `initialize` was called on a pool whose assets are already set.
    #[error("pool already initialized")]
    AlreadyInitialized,

    /// An operation was attempted before the pool assets were set.
    #[error("pool not initialized")]
    NotInitialized,

    /// A swap requested no output at all.
    #[error("insufficient output amount")]
    InsufficientOutputAmount,

    /// A swap found no input pushed into custody on either side.
    #[error("insufficient input amount")]
    InsufficientInputAmount,

    /// The swap recipient is one of the pool's own asset identifiers.
    #[error("invalid recipient")]
    InvalidRecipient,

    /// The permanently locked share sink cannot redeem.
    #[error("locked shares cannot be redeemed")]
    LockedShares,

    // -- liquidity math -----------------------------------------------------
    /// A deposit would mint zero shares.
    #[error("insufficient liquidity minted")]
    InsufficientLiquidityMinted,

    /// A withdrawal would return zero of at least one asset.
    #[error("insufficient liquidity burned")]
    InsufficientLiquidityBurned,

    // -- invariant / solvency -----------------------------------------------
    /// A requested output is not strictly below its reserve.
    #[error("insufficient liquidity")]
    InsufficientLiquidity,

    /// Post-trade reserve product is below the pre-trade product.
    #[error("constant product invariant violated")]
    InvalidK,

    /// A balance does not fit the bounded reserve width.
    #[error("balance overflow")]
    BalanceOverflow,

    // -- collaborator failure -----------------------------------------------
    /// The custody collaborator rejected or could not confirm a transfer.
    #[error("transfer failed")]
    TransferFailed,

    /// The shared exchange lock was poisoned by a panicking holder.
    #[error("exchange state poisoned")]
    StatePoisoned,

    // -- arithmetic ---------------------------------------------------------
    /// Arithmetic overflow, with context.
    #[error("arithmetic overflow: {0}")]
    Overflow(&'static str),

    /// Arithmetic underflow, with context.
    #[error("arithmetic underflow: {0}")]
    Underflow(&'static str),

    /// Division by zero.
    #[error("division by zero")]
    DivisionByZero,

    /// A configuration value is out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(&'static str),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = core::result::Result<T, AmmError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_context() {
        let err = AmmError::Overflow("share numerator");
        assert_eq!(err.to_string(), "arithmetic overflow: share numerator");
    }

    #[test]
    fn unit_variants_display() {
        assert_eq!(AmmError::InvalidK.to_string(), "constant product invariant violated");
        assert_eq!(AmmError::PoolExists.to_string(), "pool exists");
    }

    #[test]
    fn errors_compare_by_value() {
        assert_eq!(AmmError::Underflow("x"), AmmError::Underflow("x"));
        assert_ne!(AmmError::Underflow("x"), AmmError::Overflow("x"));
    }
}
