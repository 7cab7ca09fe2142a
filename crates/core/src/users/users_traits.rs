//! User repository and service traits.

use async_trait::async_trait;

use super::users_model::{NewUser, User};
use crate::errors::Result;

/// Storage contract for users.
#[async_trait]
pub trait UserRepositoryTrait: Send + Sync {
    async fn create(&self, new_user: NewUser) -> Result<User>;

    fn get_by_id(&self, user_id: &str) -> Result<User>;

    fn list(&self) -> Result<Vec<User>>;

    /// Deletes a user together with every bank, IB account and asset it owns.
    ///
    /// Returns the number of deleted user rows.
    async fn delete(&self, user_id: &str) -> Result<usize>;
}

#[async_trait]
pub trait UserServiceTrait: Send + Sync {
    async fn create_user(&self, new_user: NewUser) -> Result<User>;

    fn get_user(&self, user_id: &str) -> Result<User>;

    fn list_users(&self) -> Result<Vec<User>>;

    async fn delete_user(&self, user_id: &str) -> Result<()>;
}
