use log::{debug, warn};
use std::sync::Arc;

use super::ib_accounts_model::{IbAccount, IbAccountUpdate, ImportLog, NewIbAccount, NewImportLog};
use super::ib_accounts_traits::{IbAccountRepositoryTrait, IbAccountServiceTrait};
use crate::constants::DEFAULT_IMPORT_LOG_LIMIT;
use crate::errors::{Error, Result};
use crate::users::UserRepositoryTrait;

/// Service for managing IB accounts
pub struct IbAccountService {
    repository: Arc<dyn IbAccountRepositoryTrait>,
    user_repository: Arc<dyn UserRepositoryTrait>,
}

impl IbAccountService {
    pub fn new(
        repository: Arc<dyn IbAccountRepositoryTrait>,
        user_repository: Arc<dyn UserRepositoryTrait>,
    ) -> Self {
        Self {
            repository,
            user_repository,
        }
    }
}

#[async_trait::async_trait]
impl IbAccountServiceTrait for IbAccountService {
    async fn create_ib_account(&self, new_account: NewIbAccount) -> Result<IbAccount> {
        new_account.validate()?;
        self.user_repository.get_by_id(&new_account.user_id)?;
        let new_account = NewIbAccount {
            account_id: new_account.account_id.trim().to_string(),
            ..new_account
        };
        debug!(
            "Creating IB account {} for user {}",
            new_account.account_id, new_account.user_id
        );
        self.repository.create(new_account).await
    }

    async fn update_ib_account(
        &self,
        ib_account_id: &str,
        update: IbAccountUpdate,
    ) -> Result<IbAccount> {
        self.repository.update(ib_account_id, update).await
    }

    fn get_ib_account(&self, ib_account_id: &str) -> Result<IbAccount> {
        self.repository.get_by_id(ib_account_id)
    }

    fn list_ib_accounts(&self, user_id: &str) -> Result<Vec<IbAccount>> {
        self.repository.list_by_user(user_id)
    }

    async fn delete_ib_account(&self, ib_account_id: &str) -> Result<()> {
        if self.repository.delete(ib_account_id).await? == 0 {
            return Err(Error::not_found("IB account", ib_account_id));
        }
        Ok(())
    }

    async fn record_import(&self, ib_account_id: &str, log: NewImportLog) -> Result<ImportLog> {
        log.validate()?;
        self.repository.get_by_id(ib_account_id)?;
        let recorded = self.repository.record_import(ib_account_id, log).await?;
        if recorded.status.updates_last_import() {
            debug!(
                "Import {} into {} recorded ({} rows)",
                recorded.file_name, ib_account_id, recorded.rows_imported
            );
        } else {
            warn!(
                "Import {} into {} failed: {}",
                recorded.file_name,
                ib_account_id,
                recorded.error_message.as_deref().unwrap_or("no error message")
            );
        }
        Ok(recorded)
    }

    fn list_import_logs(&self, ib_account_id: &str, limit: Option<i64>) -> Result<Vec<ImportLog>> {
        let limit = limit
            .filter(|l| *l > 0)
            .unwrap_or(DEFAULT_IMPORT_LOG_LIMIT);
        self.repository.list_import_logs(ib_account_id, limit)
    }
}
