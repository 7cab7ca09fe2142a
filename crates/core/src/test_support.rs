//! In-memory repository doubles shared by the service tests.

use async_trait::async_trait;
use chrono::{NaiveDateTime, Utc};
use std::sync::Mutex;

use crate::assets::{Asset, AssetFilter, AssetRepositoryTrait, AssetUpdate, NewAsset};
use crate::banks::{Bank, BankRepositoryTrait, BankUpdate, NewBank};
use crate::errors::{Error, Result};
use crate::ib_accounts::{
    IbAccount, IbAccountRepositoryTrait, IbAccountUpdate, ImportLog, NewIbAccount, NewImportLog,
};
use crate::users::{NewUser, User, UserRepositoryTrait};

fn now() -> NaiveDateTime {
    Utc::now().naive_utc()
}

#[derive(Default)]
pub struct MockUserRepository {
    pub users: Mutex<Vec<User>>,
}

impl MockUserRepository {
    pub fn with_users(ids: &[&str]) -> Self {
        let users = ids
            .iter()
            .map(|id| User {
                id: id.to_string(),
                username: id.to_string(),
                email: format!("{}@example.com", id),
                password_hash: "hash".to_string(),
                created_at: now(),
                updated_at: now(),
            })
            .collect();
        Self {
            users: Mutex::new(users),
        }
    }
}

#[async_trait]
impl UserRepositoryTrait for MockUserRepository {
    async fn create(&self, new_user: NewUser) -> Result<User> {
        let user = User {
            id: new_user.username.clone(),
            username: new_user.username,
            email: new_user.email,
            password_hash: new_user.password_hash,
            created_at: now(),
            updated_at: now(),
        };
        self.users.lock().unwrap().push(user.clone());
        Ok(user)
    }

    fn get_by_id(&self, user_id: &str) -> Result<User> {
        self.users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.id == user_id)
            .cloned()
            .ok_or_else(|| Error::not_found("User", user_id))
    }

    fn list(&self) -> Result<Vec<User>> {
        Ok(self.users.lock().unwrap().clone())
    }

    async fn delete(&self, user_id: &str) -> Result<usize> {
        let mut users = self.users.lock().unwrap();
        let before = users.len();
        users.retain(|u| u.id != user_id);
        Ok(before - users.len())
    }
}

#[derive(Default)]
pub struct MockBankRepository {
    pub banks: Mutex<Vec<Bank>>,
}

impl MockBankRepository {
    pub fn with_bank(id: &str, user_id: &str) -> Self {
        let repo = Self::default();
        repo.banks.lock().unwrap().push(Bank {
            id: id.to_string(),
            user_id: user_id.to_string(),
            bank_name: "CTBC".to_string(),
            account_name: "Securities".to_string(),
            account_id: "123-456".to_string(),
            notes: None,
            created_at: now(),
            updated_at: now(),
        });
        repo
    }
}

#[async_trait]
impl BankRepositoryTrait for MockBankRepository {
    async fn create(&self, new_bank: NewBank) -> Result<Bank> {
        let mut banks = self.banks.lock().unwrap();
        let bank = Bank {
            id: format!("bank-{}", banks.len() + 1),
            user_id: new_bank.user_id,
            bank_name: new_bank.bank_name,
            account_name: new_bank.account_name,
            account_id: new_bank.account_id,
            notes: new_bank.notes,
            created_at: now(),
            updated_at: now(),
        };
        banks.push(bank.clone());
        Ok(bank)
    }

    async fn update(&self, bank_id: &str, update: BankUpdate) -> Result<Bank> {
        let mut banks = self.banks.lock().unwrap();
        let bank = banks
            .iter_mut()
            .find(|b| b.id == bank_id)
            .ok_or_else(|| Error::not_found("Bank", bank_id))?;
        bank.bank_name = update.bank_name;
        bank.account_name = update.account_name;
        bank.account_id = update.account_id;
        bank.notes = update.notes;
        bank.updated_at = now();
        Ok(bank.clone())
    }

    fn get_by_id(&self, bank_id: &str) -> Result<Bank> {
        self.banks
            .lock()
            .unwrap()
            .iter()
            .find(|b| b.id == bank_id)
            .cloned()
            .ok_or_else(|| Error::not_found("Bank", bank_id))
    }

    fn list_by_user(&self, user_id: &str) -> Result<Vec<Bank>> {
        Ok(self
            .banks
            .lock()
            .unwrap()
            .iter()
            .filter(|b| b.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn delete(&self, bank_id: &str) -> Result<usize> {
        let mut banks = self.banks.lock().unwrap();
        let before = banks.len();
        banks.retain(|b| b.id != bank_id);
        Ok(before - banks.len())
    }
}

#[derive(Default)]
pub struct MockIbAccountRepository {
    pub accounts: Mutex<Vec<IbAccount>>,
    pub logs: Mutex<Vec<ImportLog>>,
}

impl MockIbAccountRepository {
    pub fn with_account(id: &str, user_id: &str) -> Self {
        let repo = Self::default();
        repo.accounts.lock().unwrap().push(IbAccount {
            id: id.to_string(),
            user_id: user_id.to_string(),
            account_id: format!("U{}", id),
            account_name: "IB".to_string(),
            last_import_date: None,
            created_at: now(),
            updated_at: now(),
        });
        repo
    }
}

#[async_trait]
impl IbAccountRepositoryTrait for MockIbAccountRepository {
    async fn create(&self, new_account: NewIbAccount) -> Result<IbAccount> {
        let mut accounts = self.accounts.lock().unwrap();
        let account = IbAccount {
            id: format!("ib-{}", accounts.len() + 1),
            user_id: new_account.user_id,
            account_id: new_account.account_id,
            account_name: new_account.account_name,
            last_import_date: None,
            created_at: now(),
            updated_at: now(),
        };
        accounts.push(account.clone());
        Ok(account)
    }

    async fn update(&self, ib_account_id: &str, update: IbAccountUpdate) -> Result<IbAccount> {
        let mut accounts = self.accounts.lock().unwrap();
        let account = accounts
            .iter_mut()
            .find(|a| a.id == ib_account_id)
            .ok_or_else(|| Error::not_found("IB account", ib_account_id))?;
        account.account_name = update.account_name;
        account.updated_at = now();
        Ok(account.clone())
    }

    fn get_by_id(&self, ib_account_id: &str) -> Result<IbAccount> {
        self.accounts
            .lock()
            .unwrap()
            .iter()
            .find(|a| a.id == ib_account_id)
            .cloned()
            .ok_or_else(|| Error::not_found("IB account", ib_account_id))
    }

    fn list_by_user(&self, user_id: &str) -> Result<Vec<IbAccount>> {
        Ok(self
            .accounts
            .lock()
            .unwrap()
            .iter()
            .filter(|a| a.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn delete(&self, ib_account_id: &str) -> Result<usize> {
        let mut accounts = self.accounts.lock().unwrap();
        let before = accounts.len();
        accounts.retain(|a| a.id != ib_account_id);
        Ok(before - accounts.len())
    }

    async fn record_import(&self, ib_account_id: &str, log: NewImportLog) -> Result<ImportLog> {
        let import_date = log.import_date.unwrap_or_else(now);
        let mut logs = self.logs.lock().unwrap();
        let recorded = ImportLog {
            id: format!("log-{}", logs.len() + 1),
            ib_account_id: ib_account_id.to_string(),
            import_date,
            status: log.status,
            file_name: log.file_name,
            rows_imported: log.rows_imported,
            error_message: log.error_message,
        };
        logs.push(recorded.clone());
        if recorded.status.updates_last_import() {
            if let Some(account) = self
                .accounts
                .lock()
                .unwrap()
                .iter_mut()
                .find(|a| a.id == ib_account_id)
            {
                account.last_import_date = Some(import_date);
            }
        }
        Ok(recorded)
    }

    fn list_import_logs(&self, ib_account_id: &str, limit: i64) -> Result<Vec<ImportLog>> {
        let mut logs: Vec<ImportLog> = self
            .logs
            .lock()
            .unwrap()
            .iter()
            .filter(|l| l.ib_account_id == ib_account_id)
            .cloned()
            .collect();
        logs.sort_by(|a, b| b.import_date.cmp(&a.import_date));
        logs.truncate(limit.max(0) as usize);
        Ok(logs)
    }
}

#[derive(Default)]
pub struct MockAssetRepository {
    pub assets: Mutex<Vec<Asset>>,
}

#[async_trait]
impl AssetRepositoryTrait for MockAssetRepository {
    async fn create(&self, new_asset: NewAsset) -> Result<Asset> {
        let mut assets = self.assets.lock().unwrap();
        let currency = new_asset.resolved_currency();
        let asset = Asset {
            id: format!("asset-{}", assets.len() + 1),
            user_id: new_asset.user_id,
            bank_id: new_asset.bank_id,
            ib_account_id: new_asset.ib_account_id,
            symbol: new_asset.symbol,
            name: new_asset.name,
            asset_type: new_asset.asset_type,
            source: new_asset.source,
            currency,
            quantity: new_asset.quantity,
            unit_price: new_asset.unit_price,
            current_price: new_asset.current_price,
            cost_basis: new_asset.cost_basis,
            purchase_date: new_asset.purchase_date,
            created_at: now(),
            updated_at: now(),
        };
        assets.push(asset.clone());
        Ok(asset)
    }

    async fn update(&self, asset_id: &str, update: AssetUpdate) -> Result<Asset> {
        let mut assets = self.assets.lock().unwrap();
        let asset = assets
            .iter_mut()
            .find(|a| a.id == asset_id)
            .ok_or_else(|| Error::not_found("Asset", asset_id))?;
        asset.bank_id = update.bank_id;
        asset.ib_account_id = update.ib_account_id;
        asset.symbol = update.symbol;
        asset.name = update.name;
        asset.asset_type = update.asset_type;
        asset.source = update.source;
        if let Some(currency) = update.currency {
            asset.currency = currency;
        }
        asset.quantity = update.quantity;
        asset.unit_price = update.unit_price;
        asset.current_price = update.current_price;
        asset.cost_basis = update.cost_basis;
        asset.purchase_date = update.purchase_date;
        asset.updated_at = now();
        Ok(asset.clone())
    }

    fn get_by_id(&self, asset_id: &str) -> Result<Asset> {
        self.assets
            .lock()
            .unwrap()
            .iter()
            .find(|a| a.id == asset_id)
            .cloned()
            .ok_or_else(|| Error::not_found("Asset", asset_id))
    }

    fn list_by_user(&self, user_id: &str, filter: &AssetFilter) -> Result<Vec<Asset>> {
        Ok(self
            .assets
            .lock()
            .unwrap()
            .iter()
            .filter(|a| a.user_id == user_id)
            .filter(|a| filter.bank_id.is_none() || a.bank_id == filter.bank_id)
            .filter(|a| filter.ib_account_id.is_none() || a.ib_account_id == filter.ib_account_id)
            .cloned()
            .collect())
    }

    async fn delete(&self, asset_id: &str) -> Result<usize> {
        let mut assets = self.assets.lock().unwrap();
        let before = assets.len();
        assets.retain(|a| a.id != asset_id);
        Ok(before - assets.len())
    }
}
