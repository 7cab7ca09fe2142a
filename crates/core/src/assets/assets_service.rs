use log::debug;
use std::sync::Arc;

use super::assets_model::{Asset, AssetFilter, AssetUpdate, NewAsset};
use super::assets_traits::{AssetRepositoryTrait, AssetServiceTrait};
use crate::banks::BankRepositoryTrait;
use crate::errors::{Error, Result};
use crate::ib_accounts::IbAccountRepositoryTrait;
use crate::users::UserRepositoryTrait;

/// Service for managing assets
pub struct AssetService {
    asset_repository: Arc<dyn AssetRepositoryTrait>,
    user_repository: Arc<dyn UserRepositoryTrait>,
    bank_repository: Arc<dyn BankRepositoryTrait>,
    ib_account_repository: Arc<dyn IbAccountRepositoryTrait>,
}

impl AssetService {
    pub fn new(
        asset_repository: Arc<dyn AssetRepositoryTrait>,
        user_repository: Arc<dyn UserRepositoryTrait>,
        bank_repository: Arc<dyn BankRepositoryTrait>,
        ib_account_repository: Arc<dyn IbAccountRepositoryTrait>,
    ) -> Self {
        Self {
            asset_repository,
            user_repository,
            bank_repository,
            ib_account_repository,
        }
    }

    /// Rejects bank / IB account links that point at another user's records.
    fn ensure_links_owned_by(
        &self,
        user_id: &str,
        bank_id: Option<&str>,
        ib_account_id: Option<&str>,
    ) -> Result<()> {
        if let Some(bank_id) = bank_id {
            let bank = self.bank_repository.get_by_id(bank_id)?;
            if bank.user_id != user_id {
                return Err(Error::ConstraintViolation(format!(
                    "Bank {} does not belong to user {}",
                    bank_id, user_id
                )));
            }
        }
        if let Some(ib_account_id) = ib_account_id {
            let account = self.ib_account_repository.get_by_id(ib_account_id)?;
            if account.user_id != user_id {
                return Err(Error::ConstraintViolation(format!(
                    "IB account {} does not belong to user {}",
                    ib_account_id, user_id
                )));
            }
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl AssetServiceTrait for AssetService {
    async fn create_asset(&self, new_asset: NewAsset) -> Result<Asset> {
        new_asset.validate()?;
        self.user_repository.get_by_id(&new_asset.user_id)?;
        self.ensure_links_owned_by(
            &new_asset.user_id,
            new_asset.bank_id.as_deref(),
            new_asset.ib_account_id.as_deref(),
        )?;
        debug!(
            "Creating asset {} ({}) for user {}",
            new_asset.symbol, new_asset.asset_type, new_asset.user_id
        );
        self.asset_repository.create(new_asset).await
    }

    async fn update_asset(&self, asset_id: &str, update: AssetUpdate) -> Result<Asset> {
        update.validate()?;
        let existing = self.asset_repository.get_by_id(asset_id)?;
        self.ensure_links_owned_by(
            &existing.user_id,
            update.bank_id.as_deref(),
            update.ib_account_id.as_deref(),
        )?;
        self.asset_repository.update(asset_id, update).await
    }

    fn get_asset(&self, asset_id: &str) -> Result<Asset> {
        self.asset_repository.get_by_id(asset_id)
    }

    fn list_assets(&self, user_id: &str, filter: &AssetFilter) -> Result<Vec<Asset>> {
        self.asset_repository.list_by_user(user_id, filter)
    }

    async fn delete_asset(&self, asset_id: &str) -> Result<()> {
        if self.asset_repository.delete(asset_id).await? == 0 {
            return Err(Error::not_found("Asset", asset_id));
        }
        Ok(())
    }
}
