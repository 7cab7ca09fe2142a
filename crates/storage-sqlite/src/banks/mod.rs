//! SQLite storage implementation for banks.

mod model;
mod repository;

pub use model::BankDB;
pub use repository::BankRepository;
