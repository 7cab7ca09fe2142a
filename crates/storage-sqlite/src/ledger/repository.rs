use async_trait::async_trait;
use diesel::prelude::*;
use diesel::r2d2::{self, Pool};
use diesel::SqliteConnection;
use log::debug;
use std::sync::Arc;

use asset_tracker_core::ledger::{AssetLedgerTrait, LedgerAsset, NewLedgerAsset};
use asset_tracker_core::Result;

use super::model::{LedgerAssetDB, NewLedgerAssetDB};
use crate::db::{get_connection, WriteHandle};
use crate::errors::StorageError;
use crate::schema::ledger_assets;

/// Ledger persisted in the `ledger_assets` table. Inserts go through the
/// writer actor, so id allocation and the insert commit together.
pub struct LedgerRepository {
    pool: Arc<Pool<r2d2::ConnectionManager<SqliteConnection>>>,
    writer: WriteHandle,
}

impl LedgerRepository {
    pub fn new(
        pool: Arc<Pool<r2d2::ConnectionManager<SqliteConnection>>>,
        writer: WriteHandle,
    ) -> Self {
        LedgerRepository { pool, writer }
    }
}

#[async_trait]
impl AssetLedgerTrait for LedgerRepository {
    async fn create(&self, new_asset: NewLedgerAsset) -> Result<LedgerAsset> {
        new_asset.validate()?;
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<LedgerAsset> {
                let record_db = diesel::insert_into(ledger_assets::table)
                    .values(NewLedgerAssetDB::from(new_asset))
                    .returning(LedgerAssetDB::as_returning())
                    .get_result(conn)
                    .map_err(StorageError::from)?;
                debug!("Ledger record {} created ({})", record_db.id, record_db.name);
                Ok(LedgerAsset::from(record_db))
            })
            .await
    }

    fn list(&self) -> Result<Vec<LedgerAsset>> {
        let mut conn = get_connection(&self.pool)?;
        let records = ledger_assets::table
            .select(LedgerAssetDB::as_select())
            .order(ledger_assets::id.asc())
            .load(&mut conn)
            .map_err(StorageError::from)?;
        Ok(records.into_iter().map(LedgerAsset::from).collect())
    }
}
