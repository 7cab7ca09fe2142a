//! Aggregate totals over ledger records and typed holdings.

mod summary_model;
mod summary_service;


pub use summary_model::{LedgerSummary, PortfolioSummary};
pub use summary_service::{
    summarize_holdings, summarize_ledger, PortfolioSummaryService, PortfolioSummaryServiceTrait,
};
