//! SQLite storage implementation for IB accounts and their import logs.

mod model;
mod repository;

pub use model::{IbAccountDB, ImportLogDB};
pub use repository::IbAccountRepository;
