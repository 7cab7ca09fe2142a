//! Database models for banks.

use chrono::NaiveDateTime;
use diesel::prelude::*;

use asset_tracker_core::banks::Bank;

#[derive(
    Queryable, Identifiable, Insertable, Selectable, AsChangeset, PartialEq, Debug, Clone,
)]
#[diesel(table_name = crate::schema::banks)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct BankDB {
    pub id: String,
    pub user_id: String,
    pub bank_name: String,
    pub account_name: String,
    pub account_id: String,
    pub notes: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl From<BankDB> for Bank {
    fn from(db: BankDB) -> Self {
        Self {
            id: db.id,
            user_id: db.user_id,
            bank_name: db.bank_name,
            account_name: db.account_name,
            account_id: db.account_id,
            notes: db.notes,
            created_at: db.created_at,
            updated_at: db.updated_at,
        }
    }
}
