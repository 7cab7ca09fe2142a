//! SQLite storage implementation for the asset tracker.
//!
//! This crate provides all database-related functionality using Diesel ORM with SQLite.
//! It implements the repository traits defined in `asset-tracker-core` and contains:
//! - Database connection pooling and the single-writer actor
//! - Embedded Diesel migrations
//! - Repository implementations for users, banks, IB accounts, assets and the ledger
//! - Database-specific model types (with Diesel derives)
//!
//! This is the only crate in the workspace that depends on Diesel.

pub mod db;
pub mod errors;
pub mod schema;
pub mod utils;

// Repository implementations
pub mod assets;
pub mod banks;
pub mod ib_accounts;
pub mod ledger;
pub mod users;

pub use db::{
    create_pool, get_connection, init, ping, run_migrations, spawn_writer, DbConnection, DbPool,
    WriteHandle,
};

pub use errors::{IntoCore, StorageError};

pub use assets::AssetRepository;
pub use banks::BankRepository;
pub use ib_accounts::IbAccountRepository;
pub use ledger::LedgerRepository;
pub use users::UserRepository;

pub use asset_tracker_core::errors::{DatabaseError, Error, Result};

#[cfg(test)]
pub(crate) mod test_utils;
