use async_trait::async_trait;

use super::ib_accounts_model::{IbAccount, IbAccountUpdate, ImportLog, NewIbAccount, NewImportLog};
use crate::errors::Result;

/// Storage contract for IB accounts and import logs.
#[async_trait]
pub trait IbAccountRepositoryTrait: Send + Sync {
    async fn create(&self, new_account: NewIbAccount) -> Result<IbAccount>;

    async fn update(&self, ib_account_id: &str, update: IbAccountUpdate) -> Result<IbAccount>;

    fn get_by_id(&self, ib_account_id: &str) -> Result<IbAccount>;

    fn list_by_user(&self, user_id: &str) -> Result<Vec<IbAccount>>;

    /// Deletes the account, its assets and its import logs.
    async fn delete(&self, ib_account_id: &str) -> Result<usize>;

    /// Inserts the log and, when the status calls for it, moves the account's
    /// `last_import_date` in the same transaction.
    async fn record_import(&self, ib_account_id: &str, log: NewImportLog) -> Result<ImportLog>;

    /// Most recent first.
    fn list_import_logs(&self, ib_account_id: &str, limit: i64) -> Result<Vec<ImportLog>>;
}

#[async_trait]
pub trait IbAccountServiceTrait: Send + Sync {
    async fn create_ib_account(&self, new_account: NewIbAccount) -> Result<IbAccount>;

    async fn update_ib_account(
        &self,
        ib_account_id: &str,
        update: IbAccountUpdate,
    ) -> Result<IbAccount>;

    fn get_ib_account(&self, ib_account_id: &str) -> Result<IbAccount>;

    fn list_ib_accounts(&self, user_id: &str) -> Result<Vec<IbAccount>>;

    async fn delete_ib_account(&self, ib_account_id: &str) -> Result<()>;

    async fn record_import(&self, ib_account_id: &str, log: NewImportLog) -> Result<ImportLog>;

    fn list_import_logs(&self, ib_account_id: &str, limit: Option<i64>) -> Result<Vec<ImportLog>>;
}
