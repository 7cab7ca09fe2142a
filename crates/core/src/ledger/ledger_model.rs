use serde::{Deserialize, Serialize};

use crate::{errors::ValidationError, Error, Result};

/// A single ledger record. `total` is fixed when the record is created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LedgerAsset {
    pub id: i64,
    pub name: String,
    pub quantity: f64,
    pub value: f64,
    pub source: String,
    pub total: f64,
}

/// Input for a ledger record. Values are taken as-is, including zero and
/// negative numbers, as long as they and their product are finite.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NewLedgerAsset {
    pub name: String,
    pub quantity: f64,
    pub value: f64,
    pub source: String,
}

impl NewLedgerAsset {
    pub fn total(&self) -> f64 {
        self.quantity * self.value
    }

    pub fn validate(&self) -> Result<()> {
        for (field, number) in [
            ("quantity", self.quantity),
            ("value", self.value),
            ("total", self.total()),
        ] {
            if !number.is_finite() {
                return Err(Error::Validation(ValidationError::InvalidInput(format!(
                    "{} must be a finite number, got {}",
                    field, number
                ))));
            }
        }
        Ok(())
    }

    pub fn into_record(self, id: i64) -> LedgerAsset {
        let total = self.total();
        LedgerAsset {
            id,
            name: self.name,
            quantity: self.quantity,
            value: self.value,
            source: self.source,
            total,
        }
    }
}
