//! Database models for IB accounts and import logs.

use chrono::NaiveDateTime;
use diesel::prelude::*;
use std::str::FromStr;

use asset_tracker_core::ib_accounts::{IbAccount, ImportLog, ImportStatus};

#[derive(Queryable, Identifiable, Insertable, Selectable, PartialEq, Debug, Clone)]
#[diesel(table_name = crate::schema::ib_accounts)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct IbAccountDB {
    pub id: String,
    pub user_id: String,
    pub account_id: String,
    pub account_name: String,
    pub last_import_date: Option<NaiveDateTime>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(
    Queryable, Identifiable, Insertable, Selectable, Associations, PartialEq, Debug, Clone,
)]
#[diesel(belongs_to(IbAccountDB, foreign_key = ib_account_id))]
#[diesel(table_name = crate::schema::ib_import_logs)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct ImportLogDB {
    pub id: String,
    pub ib_account_id: String,
    pub import_date: NaiveDateTime,
    pub status: String,
    pub file_name: String,
    pub rows_imported: i32,
    pub error_message: Option<String>,
}

impl From<IbAccountDB> for IbAccount {
    fn from(db: IbAccountDB) -> Self {
        Self {
            id: db.id,
            user_id: db.user_id,
            account_id: db.account_id,
            account_name: db.account_name,
            last_import_date: db.last_import_date,
            created_at: db.created_at,
            updated_at: db.updated_at,
        }
    }
}

impl From<ImportLogDB> for ImportLog {
    fn from(db: ImportLogDB) -> Self {
        let status = ImportStatus::from_str(&db.status).unwrap_or_else(|e| {
            log::error!("Import log {} has unreadable status: {}", db.id, e);
            ImportStatus::Failed
        });
        Self {
            id: db.id,
            ib_account_id: db.ib_account_id,
            import_date: db.import_date,
            status,
            file_name: db.file_name,
            rows_imported: db.rows_imported,
            error_message: db.error_message,
        }
    }
}
