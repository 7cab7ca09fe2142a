use async_trait::async_trait;
use chrono::Utc;
use diesel::prelude::*;
use diesel::r2d2::{self, Pool};
use diesel::SqliteConnection;
use std::sync::Arc;
use uuid::Uuid;

use asset_tracker_core::assets::{
    Asset, AssetFilter, AssetRepositoryTrait, AssetUpdate, NewAsset,
};
use asset_tracker_core::{Error, Result};

use super::model::AssetDB;
use crate::db::{get_connection, WriteHandle};
use crate::errors::StorageError;
use crate::schema::assets;
use crate::utils::decimal_to_text;

pub struct AssetRepository {
    pool: Arc<Pool<r2d2::ConnectionManager<SqliteConnection>>>,
    writer: WriteHandle,
}

impl AssetRepository {
    pub fn new(
        pool: Arc<Pool<r2d2::ConnectionManager<SqliteConnection>>>,
        writer: WriteHandle,
    ) -> Self {
        AssetRepository { pool, writer }
    }
}

#[async_trait]
impl AssetRepositoryTrait for AssetRepository {
    async fn create(&self, new_asset: NewAsset) -> Result<Asset> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Asset> {
                let asset_db =
                    AssetDB::from_new(Uuid::new_v4().to_string(), new_asset, Utc::now().naive_utc());
                let result_db = diesel::insert_into(assets::table)
                    .values(&asset_db)
                    .returning(AssetDB::as_returning())
                    .get_result(conn)
                    .map_err(StorageError::from)?;
                Ok(Asset::from(result_db))
            })
            .await
    }

    async fn update(&self, asset_id: &str, update: AssetUpdate) -> Result<Asset> {
        let asset_id = asset_id.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Asset> {
                let existing = assets::table
                    .find(asset_id.as_str())
                    .select(AssetDB::as_select())
                    .first(conn)
                    .optional()
                    .map_err(StorageError::from)?
                    .ok_or_else(|| Error::not_found("Asset", asset_id.as_str()))?;

                // Owner and creation time are carried over untouched.
                let changes = AssetDB {
                    bank_id: update.bank_id,
                    ib_account_id: update.ib_account_id,
                    symbol: update.symbol,
                    name: update.name,
                    asset_type: update.asset_type.as_str().to_string(),
                    source: update.source,
                    currency: update
                        .currency
                        .map(|c| c.trim().to_uppercase())
                        .unwrap_or(existing.currency.clone()),
                    quantity: update.quantity.to_string(),
                    unit_price: decimal_to_text(update.unit_price),
                    current_price: decimal_to_text(update.current_price),
                    cost_basis: decimal_to_text(update.cost_basis),
                    purchase_date: update.purchase_date,
                    updated_at: Utc::now().naive_utc(),
                    ..existing
                };

                let result_db = diesel::update(assets::table.find(asset_id.as_str()))
                    .set(&changes)
                    .returning(AssetDB::as_returning())
                    .get_result(conn)
                    .map_err(StorageError::from)?;
                Ok(Asset::from(result_db))
            })
            .await
    }

    fn get_by_id(&self, asset_id: &str) -> Result<Asset> {
        let mut conn = get_connection(&self.pool)?;
        assets::table
            .find(asset_id)
            .select(AssetDB::as_select())
            .first(&mut conn)
            .optional()
            .map_err(StorageError::from)?
            .map(Asset::from)
            .ok_or_else(|| Error::not_found("Asset", asset_id))
    }

    fn list_by_user(&self, user_id: &str, filter: &AssetFilter) -> Result<Vec<Asset>> {
        let mut conn = get_connection(&self.pool)?;
        let mut query = assets::table
            .filter(assets::user_id.eq(user_id))
            .select(AssetDB::as_select())
            .into_boxed();
        if let Some(bank_id) = &filter.bank_id {
            query = query.filter(assets::bank_id.eq(bank_id.as_str()));
        }
        if let Some(ib_account_id) = &filter.ib_account_id {
            query = query.filter(assets::ib_account_id.eq(ib_account_id.as_str()));
        }
        let assets_db = query
            .order((assets::symbol.asc(), assets::created_at.asc()))
            .load(&mut conn)
            .map_err(StorageError::from)?;
        Ok(assets_db.into_iter().map(Asset::from).collect())
    }

    async fn delete(&self, asset_id: &str) -> Result<usize> {
        let asset_id = asset_id.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<usize> {
                Ok(diesel::delete(assets::table.find(asset_id))
                    .execute(conn)
                    .map_err(StorageError::from)?)
            })
            .await
    }
}
