use log::debug;
use rust_decimal::Decimal;
use std::collections::BTreeMap;
use std::sync::Arc;

use super::summary_model::{LedgerSummary, PortfolioSummary};
use crate::assets::{Asset, AssetFilter, AssetRepositoryTrait};
use crate::errors::Result;
use crate::ledger::LedgerAsset;
use crate::users::UserRepositoryTrait;

pub fn summarize_ledger(records: &[LedgerAsset]) -> LedgerSummary {
    let mut summary = LedgerSummary::default();
    for record in records {
        summary.total += record.total;
        *summary.by_source.entry(record.source.clone()).or_insert(0.0) += record.total;
    }
    summary.count = records.len();
    summary
}

/// Cost basis is summed only where present; market value and P&L follow
/// the per-asset rules on [`Asset`]. Sums saturate at the decimal range.
pub fn summarize_holdings(assets: &[Asset]) -> PortfolioSummary {
    let mut summary = PortfolioSummary::default();
    for asset in assets {
        let market_value = asset.market_value();
        summary.total_market_value = summary.total_market_value.saturating_add(market_value);
        summary.total_cost_basis = summary
            .total_cost_basis
            .saturating_add(asset.cost_basis.unwrap_or(Decimal::ZERO));
        summary.total_unrealized_pnl = summary
            .total_unrealized_pnl
            .saturating_add(asset.unrealized_pnl());
        add_to_bucket(&mut summary.by_source, &asset.source, market_value);
        add_to_bucket(&mut summary.by_type, asset.asset_type.as_str(), market_value);
    }
    summary.count = assets.len();
    summary
}

fn add_to_bucket(buckets: &mut BTreeMap<String, Decimal>, key: &str, amount: Decimal) {
    let bucket = buckets.entry(key.to_string()).or_insert(Decimal::ZERO);
    *bucket = bucket.saturating_add(amount);
}

pub trait PortfolioSummaryServiceTrait: Send + Sync {
    fn get_portfolio_summary(&self, user_id: &str) -> Result<PortfolioSummary>;
}

pub struct PortfolioSummaryService {
    asset_repository: Arc<dyn AssetRepositoryTrait>,
    user_repository: Arc<dyn UserRepositoryTrait>,
}

impl PortfolioSummaryService {
    pub fn new(
        asset_repository: Arc<dyn AssetRepositoryTrait>,
        user_repository: Arc<dyn UserRepositoryTrait>,
    ) -> Self {
        Self {
            asset_repository,
            user_repository,
        }
    }
}

impl PortfolioSummaryServiceTrait for PortfolioSummaryService {
    fn get_portfolio_summary(&self, user_id: &str) -> Result<PortfolioSummary> {
        self.user_repository.get_by_id(user_id)?;
        let assets = self
            .asset_repository
            .list_by_user(user_id, &AssetFilter::default())?;
        debug!("Summarizing {} holdings for user {}", assets.len(), user_id);
        Ok(summarize_holdings(&assets))
    }
}
