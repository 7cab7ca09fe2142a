//! Flat, integer-keyed asset records served at `/api/assets`.

mod ledger_model;
mod ledger_traits;
mod memory_ledger;

pub use ledger_model::{LedgerAsset, NewLedgerAsset};
pub use ledger_traits::AssetLedgerTrait;
pub use memory_ledger::InMemoryAssetLedger;
