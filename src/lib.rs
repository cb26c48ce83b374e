//! # Pairwise AMM
//!
//! Constant-product liquidity pools: a zero-fee pair engine holding two
//! asset reserves, issuing pool shares against deposits, executing swaps
//! that never shrink `reserve_a · reserve_b`, and integrating a
//! time-weighted price accumulator on every synchronization.
//!
//! # Quick Start
//!
//! ```rust
//! use pairwise_amm::prelude::*;
//!
//! let (usdc, weth) = (Address::from_bytes([1u8; 32]), Address::from_bytes([2u8; 32]));
//! let alice = Address::from_bytes([0xa1u8; 32]);
//!
//! let mut vault = Vault::new();
//! vault.credit(&usdc, &alice, Amount::new(10_000_000)).expect("fund");
//! vault.credit(&weth, &alice, Amount::new(10_000_000)).expect("fund");
//!
//! let mut exchange = Exchange::new(PoolConfig::default(), vault, ManualClock::new(1_700_000_000))
//!     .expect("valid config");
//! let pool = exchange.create_pool(usdc, weth).expect("new pair");
//!
//! // push, then call
//! exchange.push(&usdc, &alice, &pool, Amount::new(1_000_000)).expect("push");
//! exchange.push(&weth, &alice, &pool, Amount::new(1_000_000)).expect("push");
//! let shares = exchange.mint(&pool, &alice).expect("mint");
//! assert_eq!(shares, Shares::new(999_000));
//!
//! // sell 100 000 USDC for the most WETH the curve allows
//! exchange.push(&usdc, &alice, &pool, Amount::new(100_000)).expect("push");
//! let result = exchange
//!     .swap(&pool, Amount::ZERO, Amount::new(90_909), &alice)
//!     .expect("k holds");
//! assert_eq!(result.amount_a_in(), Amount::new(100_000));
//! ```
//!
//! # Architecture
//!
//! ```text
//! ┌────────────────┐
//! │ SharedExchange │  Arc<Mutex<Exchange>>: one closure, one critical section
//! └───────┬────────┘
//!         ▼
//! ┌────────────────┐
//! │    Exchange    │  routes by pool address, journals events
//! └───────┬────────┘
//!         ▼
//! ┌────────────────┐
//! │  PoolRegistry  │  canonical pairs, blake3-derived pool addresses
//! └───────┬────────┘
//!         ▼
//! ┌────────────────┐
//! │      Pool      │  mint / burn / swap / skim / sync, price accumulator
//! └───────┬────────┘
//!         │ ShareLedger, AssetCustody, Clock
//!         ▼
//! ┌────────────────┐
//! │     Ledger     │  ShareBook, Vault, SystemClock, ManualClock
//! └────────────────┘
//! ```
//!
//! # Module Guide
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`domain`] | Newtype value types: [`Address`](domain::Address), [`Amount`](domain::Amount), [`Shares`](domain::Shares), events |
//! | [`traits`] | Collaborator seams: [`ShareLedger`](traits::ShareLedger), [`AssetCustody`](traits::AssetCustody), [`Clock`](traits::Clock) |
//! | [`ledger`] | In-memory collaborators |
//! | [`config`] | [`PoolConfig`](config::PoolConfig) |
//! | [`pool`]   | The pair engine and its price oracle |
//! | [`registry`] | [`PoolRegistry`](registry::PoolRegistry) |
//! | [`exchange`] | [`Exchange`](exchange::Exchange) and [`SharedExchange`](exchange::SharedExchange) |
//! | [`math`]   | Checked arithmetic, 256-bit helpers, UQ112x112 |
//! | [`error`]  | [`AmmError`](error::AmmError) unified error enum |
//! | [`prelude`] | Convenience re-exports |
//!
//! # Logging
//!
//! The crate emits [`tracing`] events and installs no subscriber.

pub mod config;
pub mod domain;
pub mod error;
pub mod exchange;
pub mod ledger;
pub mod math;
pub mod pool;
pub mod prelude;
pub mod registry;
pub mod traits;
