use async_trait::async_trait;

use super::ledger_model::{LedgerAsset, NewLedgerAsset};
use crate::errors::Result;

/// Storage for ledger records.
///
/// Implementations must allocate ids and insert the record as one atomic
/// step: ids start at 1, increase by exactly 1 and are never reused.
#[async_trait]
pub trait AssetLedgerTrait: Send + Sync {
    async fn create(&self, new_asset: NewLedgerAsset) -> Result<LedgerAsset>;

    /// All records in ascending id order.
    fn list(&self) -> Result<Vec<LedgerAsset>>;
}
