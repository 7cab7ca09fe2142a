use diesel::prelude::*;

use asset_tracker_core::ledger::{LedgerAsset, NewLedgerAsset};

#[derive(Queryable, Identifiable, Selectable, PartialEq, Debug, Clone)]
#[diesel(table_name = crate::schema::ledger_assets)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct LedgerAssetDB {
    pub id: i64,
    pub name: String,
    pub quantity: f64,
    pub value: f64,
    pub source: String,
    pub total: f64,
}

/// Insert model; the id comes from SQLite's AUTOINCREMENT.
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::ledger_assets)]
pub struct NewLedgerAssetDB {
    pub name: String,
    pub quantity: f64,
    pub value: f64,
    pub source: String,
    pub total: f64,
}

impl From<NewLedgerAsset> for NewLedgerAssetDB {
    fn from(domain: NewLedgerAsset) -> Self {
        Self {
            total: domain.total(),
            name: domain.name,
            quantity: domain.quantity,
            value: domain.value,
            source: domain.source,
        }
    }
}

impl From<LedgerAssetDB> for LedgerAsset {
    fn from(db: LedgerAssetDB) -> Self {
        Self {
            id: db.id,
            name: db.name,
            quantity: db.quantity,
            value: db.value,
            source: db.source,
            total: db.total,
        }
    }
}
