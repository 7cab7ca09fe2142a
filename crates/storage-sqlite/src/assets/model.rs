//! Database models for holdings.

use chrono::NaiveDateTime;
use diesel::prelude::*;
use std::str::FromStr;

use asset_tracker_core::assets::{Asset, AssetType, NewAsset};

use crate::utils::{decimal_to_text, parse_decimal_tolerant, parse_optional_decimal};

/// Database model for holdings. Decimal columns are stored as text.
#[derive(
    Queryable, Identifiable, Insertable, Selectable, AsChangeset, PartialEq, Debug, Clone,
)]
#[diesel(table_name = crate::schema::assets)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[diesel(treat_none_as_null = true)]
pub struct AssetDB {
    pub id: String,
    pub user_id: String,
    pub bank_id: Option<String>,
    pub ib_account_id: Option<String>,
    pub symbol: String,
    pub name: String,
    pub asset_type: String,
    pub source: String,
    pub currency: String,
    pub quantity: String,
    pub unit_price: Option<String>,
    pub current_price: Option<String>,
    pub cost_basis: Option<String>,
    pub purchase_date: Option<NaiveDateTime>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl AssetDB {
    pub fn from_new(id: String, new_asset: NewAsset, now: NaiveDateTime) -> Self {
        let currency = new_asset.resolved_currency();
        Self {
            id,
            user_id: new_asset.user_id,
            bank_id: new_asset.bank_id,
            ib_account_id: new_asset.ib_account_id,
            symbol: new_asset.symbol,
            name: new_asset.name,
            asset_type: new_asset.asset_type.as_str().to_string(),
            source: new_asset.source,
            currency,
            quantity: new_asset.quantity.to_string(),
            unit_price: decimal_to_text(new_asset.unit_price),
            current_price: decimal_to_text(new_asset.current_price),
            cost_basis: decimal_to_text(new_asset.cost_basis),
            purchase_date: new_asset.purchase_date,
            created_at: now,
            updated_at: now,
        }
    }
}

impl From<AssetDB> for Asset {
    fn from(db: AssetDB) -> Self {
        let asset_type = AssetType::from_str(&db.asset_type).unwrap_or_else(|e| {
            log::error!("Asset {} has unreadable type: {}", db.id, e);
            AssetType::Stock
        });
        Self {
            quantity: parse_decimal_tolerant(&db.quantity, "quantity"),
            unit_price: parse_optional_decimal(db.unit_price, "unit_price"),
            current_price: parse_optional_decimal(db.current_price, "current_price"),
            cost_basis: parse_optional_decimal(db.cost_basis, "cost_basis"),
            id: db.id,
            user_id: db.user_id,
            bank_id: db.bank_id,
            ib_account_id: db.ib_account_id,
            symbol: db.symbol,
            name: db.name,
            asset_type,
            source: db.source,
            currency: db.currency,
            purchase_date: db.purchase_date,
            created_at: db.created_at,
            updated_at: db.updated_at,
        }
    }
}
