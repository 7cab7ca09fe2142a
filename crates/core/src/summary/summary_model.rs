use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Totals over the flat ledger.
///
/// `by_source` only holds sources that appear in the ledger.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LedgerSummary {
    pub total: f64,
    pub by_source: BTreeMap<String, f64>,
    pub count: usize,
}

/// Per-user totals over typed holdings. Both maps group market value.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioSummary {
    pub total_market_value: Decimal,
    pub total_cost_basis: Decimal,
    pub total_unrealized_pnl: Decimal,
    pub by_source: BTreeMap<String, Decimal>,
    pub by_type: BTreeMap<String, Decimal>,
    pub count: usize,
}
