use async_trait::async_trait;
use log::debug;
use std::collections::BTreeMap;
use std::sync::Mutex;

use super::ledger_model::{LedgerAsset, NewLedgerAsset};
use super::ledger_traits::AssetLedgerTrait;
use crate::errors::{Error, Result};

struct LedgerState {
    records: BTreeMap<i64, LedgerAsset>,
    next_id: i64,
}

/// Process-local ledger. Contents are lost on restart.
pub struct InMemoryAssetLedger {
    state: Mutex<LedgerState>,
}

impl InMemoryAssetLedger {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(LedgerState {
                records: BTreeMap::new(),
                next_id: 1,
            }),
        }
    }
}

impl Default for InMemoryAssetLedger {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AssetLedgerTrait for InMemoryAssetLedger {
    async fn create(&self, new_asset: NewLedgerAsset) -> Result<LedgerAsset> {
        new_asset.validate()?;
        let mut state = self
            .state
            .lock()
            .map_err(|e| Error::Unexpected(format!("Ledger lock poisoned: {}", e)))?;
        let id = state.next_id;
        state.next_id += 1;
        let record = new_asset.into_record(id);
        state.records.insert(id, record.clone());
        debug!("Ledger record {} created ({})", id, record.name);
        Ok(record)
    }

    fn list(&self) -> Result<Vec<LedgerAsset>> {
        let state = self
            .state
            .lock()
            .map_err(|e| Error::Unexpected(format!("Ledger lock poisoned: {}", e)))?;
        Ok(state.records.values().cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::HashSet;
    use std::sync::Arc;

    fn input(name: &str, quantity: f64, value: f64, source: &str) -> NewLedgerAsset {
        NewLedgerAsset {
            name: name.to_string(),
            quantity,
            value,
            source: source.to_string(),
        }
    }

    #[tokio::test]
    async fn test_first_record_gets_id_one() {
        let ledger = InMemoryAssetLedger::new();
        let record = ledger.create(input("TSMC", 10.0, 5.0, "bank")).await.unwrap();
        assert_eq!(record.id, 1);
        assert_eq!(record.total, 50.0);
        assert_eq!(ledger.list().unwrap(), vec![record]);
    }

    #[tokio::test]
    async fn test_list_preserves_creation_order() {
        let ledger = InMemoryAssetLedger::new();
        for (i, name) in ["a", "b", "c"].iter().enumerate() {
            ledger.create(input(name, i as f64, 1.0, "x")).await.unwrap();
        }
        let names: Vec<String> = ledger.list().unwrap().into_iter().map(|r| r.name).collect();
        assert_eq!(names, vec!["a", "b", "c"]);
    }

    #[tokio::test]
    async fn test_accepts_zero_and_negative_values() {
        let ledger = InMemoryAssetLedger::new();
        let zero = ledger.create(input("Cash", 0.0, 100.0, "bank")).await.unwrap();
        let negative = ledger.create(input("Short", -2.0, 10.0, "ib")).await.unwrap();
        assert_eq!(zero.total, 0.0);
        assert_eq!(negative.total, -20.0);
    }

    #[tokio::test]
    async fn test_non_finite_values_are_rejected_without_using_an_id() {
        let ledger = InMemoryAssetLedger::new();
        let err = ledger
            .create(input("Bad", f64::INFINITY, 0.0, "ib"))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
        let next = ledger.create(input("Good", 1.0, 1.0, "ib")).await.unwrap();
        assert_eq!(next.id, 1);
        assert_eq!(ledger.list().unwrap().len(), 1);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_creates_get_unique_consecutive_ids() {
        let ledger = Arc::new(InMemoryAssetLedger::new());
        let mut handles = Vec::new();
        for i in 0..64 {
            let ledger = ledger.clone();
            handles.push(tokio::spawn(async move {
                ledger
                    .create(input(&format!("asset-{}", i), 1.0, 1.0, "bank"))
                    .await
                    .unwrap()
                    .id
            }));
        }
        let mut ids = HashSet::new();
        for handle in handles {
            ids.insert(handle.await.unwrap());
        }
        assert_eq!(ids, (1..=64).collect::<HashSet<i64>>());
        assert_eq!(ledger.list().unwrap().len(), 64);
    }

    proptest! {
        #[test]
        fn prop_ids_consecutive_and_totals_exact(
            rows in prop::collection::vec((-1e6f64..1e6, -1e6f64..1e6), 0..20)
        ) {
            let runtime = tokio::runtime::Builder::new_current_thread().build().unwrap();
            let ledger = InMemoryAssetLedger::new();
            for (quantity, value) in &rows {
                runtime
                    .block_on(ledger.create(input("p", *quantity, *value, "s")))
                    .unwrap();
            }
            let listed = ledger.list().unwrap();
            prop_assert_eq!(listed.len(), rows.len());
            for (i, record) in listed.iter().enumerate() {
                prop_assert_eq!(record.id, i as i64 + 1);
                prop_assert_eq!(record.total, rows[i].0 * rows[i].1);
            }
        }
    }
}
