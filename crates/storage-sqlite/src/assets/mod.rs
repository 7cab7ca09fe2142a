//! SQLite storage implementation for holdings.

mod model;
mod repository;

pub use model::AssetDB;
pub use repository::AssetRepository;
