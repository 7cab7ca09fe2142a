//! IB account and import log domain models.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::{errors::ValidationError, Error, Result};

/// A brokerage account at Interactive Brokers.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct IbAccount {
    pub id: String,
    pub user_id: String,
    /// External IB account identifier, unique across all users
    pub account_id: String,
    pub account_name: String,
    /// Timestamp of the last import that applied at least some rows
    pub last_import_date: Option<NaiveDateTime>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewIbAccount {
    pub user_id: String,
    pub account_id: String,
    pub account_name: String,
}

impl NewIbAccount {
    pub fn validate(&self) -> Result<()> {
        if self.account_id.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "accountId".to_string(),
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IbAccountUpdate {
    pub account_name: String,
}

/// Outcome of one import attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImportStatus {
    Success,
    Failed,
    Partial,
}

impl ImportStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ImportStatus::Success => "success",
            ImportStatus::Failed => "failed",
            ImportStatus::Partial => "partial",
        }
    }

    /// Whether an import with this status moves the account's `last_import_date`.
    pub fn updates_last_import(&self) -> bool {
        !matches!(self, ImportStatus::Failed)
    }
}

impl fmt::Display for ImportStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ImportStatus {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "success" => Ok(ImportStatus::Success),
            "failed" => Ok(ImportStatus::Failed),
            "partial" => Ok(ImportStatus::Partial),
            other => Err(Error::Validation(ValidationError::InvalidInput(format!(
                "Unknown import status '{}'",
                other
            )))),
        }
    }
}

/// Audit record of one import attempt into an IB account.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ImportLog {
    pub id: String,
    pub ib_account_id: String,
    pub import_date: NaiveDateTime,
    pub status: ImportStatus,
    pub file_name: String,
    pub rows_imported: i32,
    pub error_message: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewImportLog {
    /// Defaults to now when absent
    pub import_date: Option<NaiveDateTime>,
    pub status: ImportStatus,
    pub file_name: String,
    pub rows_imported: i32,
    pub error_message: Option<String>,
}

impl NewImportLog {
    pub fn validate(&self) -> Result<()> {
        if self.rows_imported < 0 {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "rowsImported cannot be negative".to_string(),
            )));
        }
        Ok(())
    }
}
