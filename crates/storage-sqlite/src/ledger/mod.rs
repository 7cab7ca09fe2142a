//! SQLite-backed ledger records.

mod model;
mod repository;

pub use model::{LedgerAssetDB, NewLedgerAssetDB};
pub use repository::LedgerRepository;
