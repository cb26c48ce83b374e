//! Collaborator seams of the engine.
//!
//! The pool engine is the sole authority over reserves and accumulators,
//! but it delegates three concerns to collaborators: share bookkeeping
//! ([`ShareLedger`]), asset custody ([`AssetCustody`]) and time
//! ([`Clock`]).  In-memory implementations live in [`crate::ledger`].

mod asset_custody;
mod clock;
mod share_ledger;

pub use asset_custody::{AssetCustody, TransferOutcome};
pub use clock::Clock;
pub use share_ledger::ShareLedger;
