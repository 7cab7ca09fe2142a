use async_trait::async_trait;
use chrono::Utc;
use diesel::prelude::*;
use diesel::r2d2::{self, Pool};
use diesel::SqliteConnection;
use std::sync::Arc;
use uuid::Uuid;

use asset_tracker_core::banks::{Bank, BankRepositoryTrait, BankUpdate, NewBank};
use asset_tracker_core::{Error, Result};

use super::model::BankDB;
use crate::db::{get_connection, WriteHandle};
use crate::errors::StorageError;
use crate::schema::banks;

pub struct BankRepository {
    pool: Arc<Pool<r2d2::ConnectionManager<SqliteConnection>>>,
    writer: WriteHandle,
}

impl BankRepository {
    pub fn new(
        pool: Arc<Pool<r2d2::ConnectionManager<SqliteConnection>>>,
        writer: WriteHandle,
    ) -> Self {
        BankRepository { pool, writer }
    }
}

#[async_trait]
impl BankRepositoryTrait for BankRepository {
    async fn create(&self, new_bank: NewBank) -> Result<Bank> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Bank> {
                let now = Utc::now().naive_utc();
                let bank_db = BankDB {
                    id: Uuid::new_v4().to_string(),
                    user_id: new_bank.user_id,
                    bank_name: new_bank.bank_name,
                    account_name: new_bank.account_name,
                    account_id: new_bank.account_id,
                    notes: new_bank.notes,
                    created_at: now,
                    updated_at: now,
                };
                let result_db = diesel::insert_into(banks::table)
                    .values(&bank_db)
                    .returning(BankDB::as_returning())
                    .get_result(conn)
                    .map_err(StorageError::from)?;
                Ok(Bank::from(result_db))
            })
            .await
    }

    async fn update(&self, bank_id: &str, update: BankUpdate) -> Result<Bank> {
        let bank_id = bank_id.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Bank> {
                let updated = diesel::update(banks::table.find(bank_id.as_str()))
                    .set((
                        banks::bank_name.eq(update.bank_name),
                        banks::account_name.eq(update.account_name),
                        banks::account_id.eq(update.account_id),
                        banks::notes.eq(update.notes),
                        banks::updated_at.eq(Utc::now().naive_utc()),
                    ))
                    .returning(BankDB::as_returning())
                    .get_result(conn)
                    .optional()
                    .map_err(StorageError::from)?;
                updated
                    .map(Bank::from)
                    .ok_or_else(|| Error::not_found("Bank", bank_id))
            })
            .await
    }

    fn get_by_id(&self, bank_id: &str) -> Result<Bank> {
        let mut conn = get_connection(&self.pool)?;
        banks::table
            .find(bank_id)
            .select(BankDB::as_select())
            .first(&mut conn)
            .optional()
            .map_err(StorageError::from)?
            .map(Bank::from)
            .ok_or_else(|| Error::not_found("Bank", bank_id))
    }

    fn list_by_user(&self, user_id: &str) -> Result<Vec<Bank>> {
        let mut conn = get_connection(&self.pool)?;
        let banks_db = banks::table
            .filter(banks::user_id.eq(user_id))
            .select(BankDB::as_select())
            .order((banks::bank_name.asc(), banks::created_at.asc()))
            .load(&mut conn)
            .map_err(StorageError::from)?;
        Ok(banks_db.into_iter().map(Bank::from).collect())
    }

    async fn delete(&self, bank_id: &str) -> Result<usize> {
        let bank_id = bank_id.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<usize> {
                Ok(diesel::delete(banks::table.find(bank_id))
                    .execute(conn)
                    .map_err(StorageError::from)?)
            })
            .await
    }
}
