//! Bank domain models.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::{errors::ValidationError, Error, Result};

/// A bank or securities account held by a user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Bank {
    pub id: String,
    pub user_id: String,
    pub bank_name: String,
    /// Display name of the account at the bank
    pub account_name: String,
    /// Account number
    pub account_id: String,
    pub notes: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewBank {
    pub user_id: String,
    pub bank_name: String,
    pub account_name: String,
    pub account_id: String,
    pub notes: Option<String>,
}

impl NewBank {
    pub fn validate(&self) -> Result<()> {
        validate_bank_name(&self.bank_name)
    }
}

/// Mutable fields of a bank. The owner cannot change.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BankUpdate {
    pub bank_name: String,
    pub account_name: String,
    pub account_id: String,
    pub notes: Option<String>,
}

impl BankUpdate {
    pub fn validate(&self) -> Result<()> {
        validate_bank_name(&self.bank_name)
    }
}

fn validate_bank_name(bank_name: &str) -> Result<()> {
    if bank_name.trim().is_empty() {
        return Err(Error::Validation(ValidationError::InvalidInput(
            "Bank name cannot be empty".to_string(),
        )));
    }
    Ok(())
}
