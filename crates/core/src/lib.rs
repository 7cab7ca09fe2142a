//! Asset Tracker Core - Domain entities, services, and traits.
//!
//! This crate holds the business rules of the asset tracker: users and the
//! banks, Interactive Brokers accounts and holdings they own, the flat
//! ledger, and the summary aggregation over both. It is database-agnostic
//! and defines traits that are implemented by the `storage-sqlite` crate.

pub mod assets;
pub mod banks;
pub mod constants;
pub mod errors;
pub mod ib_accounts;
pub mod ledger;
pub mod summary;
pub mod users;

#[cfg(test)]
mod test_support;

pub use assets::*;
pub use ledger::*;
pub use summary::*;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
