//! Declarative pool parameters.
//!
//! A [`PoolConfig`] is handed to the
//! [`PoolRegistry`](crate::registry::PoolRegistry) once and applied to
//! every pool it creates.  Configurations are validated on construction
//! and again by the registry.

mod pool_config;

pub use pool_config::{PoolConfig, MINIMUM_LOCKED_SHARES};
