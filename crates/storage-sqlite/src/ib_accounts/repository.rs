use async_trait::async_trait;
use chrono::Utc;
use diesel::prelude::*;
use diesel::r2d2::{self, Pool};
use diesel::SqliteConnection;
use log::debug;
use std::sync::Arc;
use uuid::Uuid;

use asset_tracker_core::ib_accounts::{
    IbAccount, IbAccountRepositoryTrait, IbAccountUpdate, ImportLog, NewIbAccount, NewImportLog,
};
use asset_tracker_core::{Error, Result};

use super::model::{IbAccountDB, ImportLogDB};
use crate::db::{get_connection, WriteHandle};
use crate::errors::StorageError;
use crate::schema::{ib_accounts, ib_import_logs};

pub struct IbAccountRepository {
    pool: Arc<Pool<r2d2::ConnectionManager<SqliteConnection>>>,
    writer: WriteHandle,
}

impl IbAccountRepository {
    pub fn new(
        pool: Arc<Pool<r2d2::ConnectionManager<SqliteConnection>>>,
        writer: WriteHandle,
    ) -> Self {
        IbAccountRepository { pool, writer }
    }
}

#[async_trait]
impl IbAccountRepositoryTrait for IbAccountRepository {
    async fn create(&self, new_account: NewIbAccount) -> Result<IbAccount> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<IbAccount> {
                let now = Utc::now().naive_utc();
                let account_db = IbAccountDB {
                    id: Uuid::new_v4().to_string(),
                    user_id: new_account.user_id,
                    account_id: new_account.account_id,
                    account_name: new_account.account_name,
                    last_import_date: None,
                    created_at: now,
                    updated_at: now,
                };
                let result_db = diesel::insert_into(ib_accounts::table)
                    .values(&account_db)
                    .returning(IbAccountDB::as_returning())
                    .get_result(conn)
                    .map_err(StorageError::from)?;
                Ok(IbAccount::from(result_db))
            })
            .await
    }

    async fn update(&self, ib_account_id: &str, update: IbAccountUpdate) -> Result<IbAccount> {
        let ib_account_id = ib_account_id.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<IbAccount> {
                let updated = diesel::update(ib_accounts::table.find(ib_account_id.as_str()))
                    .set((
                        ib_accounts::account_name.eq(update.account_name),
                        ib_accounts::updated_at.eq(Utc::now().naive_utc()),
                    ))
                    .returning(IbAccountDB::as_returning())
                    .get_result(conn)
                    .optional()
                    .map_err(StorageError::from)?;
                updated
                    .map(IbAccount::from)
                    .ok_or_else(|| Error::not_found("IB account", ib_account_id))
            })
            .await
    }

    fn get_by_id(&self, ib_account_id: &str) -> Result<IbAccount> {
        let mut conn = get_connection(&self.pool)?;
        ib_accounts::table
            .find(ib_account_id)
            .select(IbAccountDB::as_select())
            .first(&mut conn)
            .optional()
            .map_err(StorageError::from)?
            .map(IbAccount::from)
            .ok_or_else(|| Error::not_found("IB account", ib_account_id))
    }

    fn list_by_user(&self, user_id: &str) -> Result<Vec<IbAccount>> {
        let mut conn = get_connection(&self.pool)?;
        let accounts_db = ib_accounts::table
            .filter(ib_accounts::user_id.eq(user_id))
            .select(IbAccountDB::as_select())
            .order(ib_accounts::account_id.asc())
            .load(&mut conn)
            .map_err(StorageError::from)?;
        Ok(accounts_db.into_iter().map(IbAccount::from).collect())
    }

    async fn delete(&self, ib_account_id: &str) -> Result<usize> {
        let ib_account_id = ib_account_id.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<usize> {
                Ok(diesel::delete(ib_accounts::table.find(ib_account_id))
                    .execute(conn)
                    .map_err(StorageError::from)?)
            })
            .await
    }

    async fn record_import(&self, ib_account_id: &str, log: NewImportLog) -> Result<ImportLog> {
        let ib_account_id = ib_account_id.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<ImportLog> {
                let now = Utc::now().naive_utc();
                let import_date = log.import_date.unwrap_or(now);
                let log_db = ImportLogDB {
                    id: Uuid::new_v4().to_string(),
                    ib_account_id: ib_account_id.clone(),
                    import_date,
                    status: log.status.as_str().to_string(),
                    file_name: log.file_name,
                    rows_imported: log.rows_imported,
                    error_message: log.error_message,
                };
                let result_db = diesel::insert_into(ib_import_logs::table)
                    .values(&log_db)
                    .returning(ImportLogDB::as_returning())
                    .get_result(conn)
                    .map_err(StorageError::from)?;

                // Same transaction as the insert: both land or neither does.
                if log.status.updates_last_import() {
                    diesel::update(ib_accounts::table.find(ib_account_id.as_str()))
                        .set((
                            ib_accounts::last_import_date.eq(Some(import_date)),
                            ib_accounts::updated_at.eq(now),
                        ))
                        .execute(conn)
                        .map_err(StorageError::from)?;
                    debug!("last_import_date of {} set to {}", ib_account_id, import_date);
                }
                Ok(ImportLog::from(result_db))
            })
            .await
    }

    fn list_import_logs(&self, ib_account_id: &str, limit: i64) -> Result<Vec<ImportLog>> {
        let mut conn = get_connection(&self.pool)?;
        let logs_db = ib_import_logs::table
            .filter(ib_import_logs::ib_account_id.eq(ib_account_id))
            .select(ImportLogDB::as_select())
            .order(ib_import_logs::import_date.desc())
            .limit(limit)
            .load(&mut conn)
            .map_err(StorageError::from)?;
        Ok(logs_db.into_iter().map(ImportLog::from).collect())
    }
}
