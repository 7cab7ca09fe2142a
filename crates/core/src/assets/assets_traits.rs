use super::assets_model::{Asset, AssetFilter, AssetUpdate, NewAsset};
use crate::errors::Result;

/// Trait defining the contract for Asset repository operations.
#[async_trait::async_trait]
pub trait AssetRepositoryTrait: Send + Sync {
    async fn create(&self, new_asset: NewAsset) -> Result<Asset>;
    /// Replaces the mutable fields and refreshes `updated_at`.
    async fn update(&self, asset_id: &str, update: AssetUpdate) -> Result<Asset>;
    fn get_by_id(&self, asset_id: &str) -> Result<Asset>;
    fn list_by_user(&self, user_id: &str, filter: &AssetFilter) -> Result<Vec<Asset>>;
    async fn delete(&self, asset_id: &str) -> Result<usize>;
}

/// Trait defining the contract for Asset service operations.
#[async_trait::async_trait]
pub trait AssetServiceTrait: Send + Sync {
    /// Creates an asset after checking that any linked bank or IB account
    /// belongs to the same user.
    async fn create_asset(&self, new_asset: NewAsset) -> Result<Asset>;
    async fn update_asset(&self, asset_id: &str, update: AssetUpdate) -> Result<Asset>;
    fn get_asset(&self, asset_id: &str) -> Result<Asset>;
    fn list_assets(&self, user_id: &str, filter: &AssetFilter) -> Result<Vec<Asset>>;
    async fn delete_asset(&self, asset_id: &str) -> Result<()>;
}
