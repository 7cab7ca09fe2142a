use async_trait::async_trait;

use super::banks_model::{Bank, BankUpdate, NewBank};
use crate::errors::Result;

/// Storage contract for banks.
#[async_trait]
pub trait BankRepositoryTrait: Send + Sync {
    async fn create(&self, new_bank: NewBank) -> Result<Bank>;

    /// Applies the update and refreshes `updated_at`.
    async fn update(&self, bank_id: &str, update: BankUpdate) -> Result<Bank>;

    fn get_by_id(&self, bank_id: &str) -> Result<Bank>;

    fn list_by_user(&self, user_id: &str) -> Result<Vec<Bank>>;

    /// Deletes the bank and every asset held at it.
    async fn delete(&self, bank_id: &str) -> Result<usize>;
}

#[async_trait]
pub trait BankServiceTrait: Send + Sync {
    async fn create_bank(&self, new_bank: NewBank) -> Result<Bank>;

    async fn update_bank(&self, bank_id: &str, update: BankUpdate) -> Result<Bank>;

    fn get_bank(&self, bank_id: &str) -> Result<Bank>;

    fn list_banks(&self, user_id: &str) -> Result<Vec<Bank>>;

    async fn delete_bank(&self, bank_id: &str) -> Result<()>;
}
