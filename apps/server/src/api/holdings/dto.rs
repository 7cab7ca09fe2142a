use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use asset_tracker_core::assets::{Asset, AssetFilter, AssetType, NewAsset};

#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct HoldingsQuery {
    pub bank_id: Option<String>,
    pub ib_account_id: Option<String>,
}

impl From<HoldingsQuery> for AssetFilter {
    fn from(q: HoldingsQuery) -> Self {
        AssetFilter {
            bank_id: q.bank_id,
            ib_account_id: q.ib_account_id,
        }
    }
}

/// Body of a holding creation; the owner comes from the path.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateHoldingRequest {
    pub bank_id: Option<String>,
    pub ib_account_id: Option<String>,
    pub symbol: String,
    #[serde(default)]
    pub name: String,
    pub asset_type: AssetType,
    pub source: String,
    pub currency: Option<String>,
    pub quantity: Decimal,
    pub unit_price: Option<Decimal>,
    pub current_price: Option<Decimal>,
    pub cost_basis: Option<Decimal>,
    pub purchase_date: Option<NaiveDateTime>,
}

impl CreateHoldingRequest {
    pub fn into_new_asset(self, user_id: String) -> NewAsset {
        NewAsset {
            user_id,
            bank_id: self.bank_id,
            ib_account_id: self.ib_account_id,
            symbol: self.symbol,
            name: self.name,
            asset_type: self.asset_type,
            source: self.source,
            currency: self.currency,
            quantity: self.quantity,
            unit_price: self.unit_price,
            current_price: self.current_price,
            cost_basis: self.cost_basis,
            purchase_date: self.purchase_date,
        }
    }
}

/// A holding with its derived valuation figures.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HoldingResponse {
    #[serde(flatten)]
    pub asset: Asset,
    pub market_value: Decimal,
    pub unrealized_pnl: Decimal,
}

impl From<Asset> for HoldingResponse {
    fn from(asset: Asset) -> Self {
        Self {
            market_value: asset.market_value(),
            unrealized_pnl: asset.unrealized_pnl(),
            asset,
        }
    }
}
