//! In-memory implementations of the collaborator traits.
//!
//! | Type | Implements |
//! |------|------------|
//! | [`ShareBook`] | [`ShareLedger`](crate::traits::ShareLedger) |
//! | [`Vault`] | [`AssetCustody`](crate::traits::AssetCustody) |
//! | [`SystemClock`], [`ManualClock`] | [`Clock`](crate::traits::Clock) |

mod clocks;
mod share_book;
mod vault;

pub use clocks::{ManualClock, SystemClock};
pub use share_book::ShareBook;
pub use vault::Vault;
