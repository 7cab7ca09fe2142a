//! Asset domain models.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::constants::DEFAULT_CURRENCY;
use crate::{errors::ValidationError, Error, Result};

/// Broad instrument category of a holding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetType {
    Stock,
    Etf,
    Fund,
    Bond,
    Cash,
}

impl AssetType {
    pub const fn as_str(&self) -> &'static str {
        match self {
            AssetType::Stock => "stock",
            AssetType::Etf => "etf",
            AssetType::Fund => "fund",
            AssetType::Bond => "bond",
            AssetType::Cash => "cash",
        }
    }
}

impl fmt::Display for AssetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AssetType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "stock" => Ok(AssetType::Stock),
            "etf" => Ok(AssetType::Etf),
            "fund" => Ok(AssetType::Fund),
            "bond" => Ok(AssetType::Bond),
            "cash" => Ok(AssetType::Cash),
            other => Err(Error::Validation(ValidationError::InvalidInput(format!(
                "Unknown asset type '{}'",
                other
            )))),
        }
    }
}

/// A single holding belonging to exactly one user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Asset {
    pub id: String,
    pub user_id: String,
    pub bank_id: Option<String>,
    pub ib_account_id: Option<String>,
    /// Ticker or fund code (AAPL, 0050, ...)
    pub symbol: String,
    pub name: String,
    pub asset_type: AssetType,
    /// Channel the holding came from (ib, bank, fund_company, ...)
    pub source: String,
    pub currency: String,
    pub quantity: Decimal,
    /// Price at purchase or at last manual update
    pub unit_price: Option<Decimal>,
    pub current_price: Option<Decimal>,
    /// Original total purchase cost
    pub cost_basis: Option<Decimal>,
    pub purchase_date: Option<NaiveDateTime>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl Asset {
    /// `quantity * current_price`, or zero while the asset has no current price.
    /// Saturates at the decimal range instead of overflowing.
    pub fn market_value(&self) -> Decimal {
        match self.current_price {
            Some(price) => self.quantity.saturating_mul(price),
            None => Decimal::ZERO,
        }
    }

    /// `market_value - cost_basis`, or zero unless both a cost basis and a
    /// current price are known.
    pub fn unrealized_pnl(&self) -> Decimal {
        match (self.cost_basis, self.current_price) {
            (Some(cost_basis), Some(_)) => self.market_value().saturating_sub(cost_basis),
            _ => Decimal::ZERO,
        }
    }
}

/// Input model for creating an asset.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAsset {
    pub user_id: String,
    pub bank_id: Option<String>,
    pub ib_account_id: Option<String>,
    pub symbol: String,
    pub name: String,
    pub asset_type: AssetType,
    pub source: String,
    /// Defaults to TWD
    pub currency: Option<String>,
    pub quantity: Decimal,
    pub unit_price: Option<Decimal>,
    pub current_price: Option<Decimal>,
    pub cost_basis: Option<Decimal>,
    pub purchase_date: Option<NaiveDateTime>,
}

impl NewAsset {
    pub fn validate(&self) -> Result<()> {
        validate_symbol(&self.symbol)?;
        validate_currency(self.currency.as_deref())?;
        validate_valuation(self.quantity, self.current_price, self.cost_basis)
    }

    /// Currency to persist, falling back to the default.
    pub fn resolved_currency(&self) -> String {
        resolve_currency(self.currency.as_deref())
    }
}

/// Replacement values for an existing asset. The owner cannot change.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetUpdate {
    pub bank_id: Option<String>,
    pub ib_account_id: Option<String>,
    pub symbol: String,
    pub name: String,
    pub asset_type: AssetType,
    pub source: String,
    /// Keeps the stored currency when absent
    pub currency: Option<String>,
    pub quantity: Decimal,
    pub unit_price: Option<Decimal>,
    pub current_price: Option<Decimal>,
    pub cost_basis: Option<Decimal>,
    pub purchase_date: Option<NaiveDateTime>,
}

impl AssetUpdate {
    pub fn validate(&self) -> Result<()> {
        validate_symbol(&self.symbol)?;
        validate_currency(self.currency.as_deref())?;
        validate_valuation(self.quantity, self.current_price, self.cost_basis)
    }
}

/// Narrows a user's asset listing to one bank and/or one IB account.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetFilter {
    pub bank_id: Option<String>,
    pub ib_account_id: Option<String>,
}

fn validate_symbol(symbol: &str) -> Result<()> {
    if symbol.trim().is_empty() {
        return Err(Error::Validation(ValidationError::MissingField(
            "symbol".to_string(),
        )));
    }
    Ok(())
}

fn validate_currency(currency: Option<&str>) -> Result<()> {
    match currency {
        Some(c) if c.trim().is_empty() => Err(Error::Validation(
            ValidationError::InvalidInput("Currency cannot be empty".to_string()),
        )),
        _ => Ok(()),
    }
}

/// Market value and unrealized P&L must fit in a `Decimal`.
fn validate_valuation(
    quantity: Decimal,
    current_price: Option<Decimal>,
    cost_basis: Option<Decimal>,
) -> Result<()> {
    let Some(price) = current_price else {
        return Ok(());
    };
    let market_value = quantity.checked_mul(price);
    let pnl = match (market_value, cost_basis) {
        (Some(value), Some(cost)) => value.checked_sub(cost),
        (value, None) => value,
        (None, Some(_)) => None,
    };
    if pnl.is_none() {
        return Err(Error::Validation(ValidationError::InvalidInput(format!(
            "Market value of {} x {} is out of range",
            quantity, price
        ))));
    }
    Ok(())
}

fn resolve_currency(currency: Option<&str>) -> String {
    currency
        .map(|c| c.trim().to_uppercase())
        .unwrap_or_else(|| DEFAULT_CURRENCY.to_string())
}
