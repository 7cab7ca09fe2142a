use log::debug;
use std::sync::Arc;

use super::banks_model::{Bank, BankUpdate, NewBank};
use super::banks_traits::{BankRepositoryTrait, BankServiceTrait};
use crate::errors::{Error, Result};
use crate::users::UserRepositoryTrait;

/// Service for managing banks
pub struct BankService {
    repository: Arc<dyn BankRepositoryTrait>,
    user_repository: Arc<dyn UserRepositoryTrait>,
}

impl BankService {
    pub fn new(
        repository: Arc<dyn BankRepositoryTrait>,
        user_repository: Arc<dyn UserRepositoryTrait>,
    ) -> Self {
        Self {
            repository,
            user_repository,
        }
    }
}

#[async_trait::async_trait]
impl BankServiceTrait for BankService {
    async fn create_bank(&self, new_bank: NewBank) -> Result<Bank> {
        new_bank.validate()?;
        // Surface a missing owner as NotFound rather than a foreign key error
        self.user_repository.get_by_id(&new_bank.user_id)?;
        debug!(
            "Creating bank '{}' for user {}",
            new_bank.bank_name, new_bank.user_id
        );
        self.repository.create(new_bank).await
    }

    async fn update_bank(&self, bank_id: &str, update: BankUpdate) -> Result<Bank> {
        update.validate()?;
        self.repository.update(bank_id, update).await
    }

    fn get_bank(&self, bank_id: &str) -> Result<Bank> {
        self.repository.get_by_id(bank_id)
    }

    fn list_banks(&self, user_id: &str) -> Result<Vec<Bank>> {
        self.repository.list_by_user(user_id)
    }

    async fn delete_bank(&self, bank_id: &str) -> Result<()> {
        if self.repository.delete(bank_id).await? == 0 {
            return Err(Error::not_found("Bank", bank_id));
        }
        Ok(())
    }
}
