//! Serialized multi-pool front end.
//!
//! | Type | Role |
//! |------|------|
//! | [`Exchange`] | owns the registry, custody and clock; routes operations by pool address |
//! | [`SharedExchange`] | `Arc<Mutex<Exchange>>` handle; one closure = one critical section |
//! | [`ExchangeEvent`] | journal entry: pool creation or a committed pool event |

mod router;
mod shared;

pub use router::{Exchange, ExchangeEvent};
pub use shared::SharedExchange;
