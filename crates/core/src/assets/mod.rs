//! Assets module - holdings owned by a user, optionally held at a bank or IB account.

mod assets_model;
mod assets_service;
mod assets_traits;


pub use assets_model::{Asset, AssetFilter, AssetType, AssetUpdate, NewAsset};
pub use assets_service::AssetService;
pub use assets_traits::{AssetRepositoryTrait, AssetServiceTrait};
