use log::debug;
use std::sync::Arc;

use super::users_model::{NewUser, User};
use super::users_traits::{UserRepositoryTrait, UserServiceTrait};
use crate::errors::{Error, Result};

/// Service for managing users
pub struct UserService {
    repository: Arc<dyn UserRepositoryTrait>,
}

impl UserService {
    pub fn new(repository: Arc<dyn UserRepositoryTrait>) -> Self {
        Self { repository }
    }
}

#[async_trait::async_trait]
impl UserServiceTrait for UserService {
    async fn create_user(&self, new_user: NewUser) -> Result<User> {
        new_user.validate()?;
        let new_user = NewUser {
            username: new_user.username.trim().to_string(),
            email: new_user.email.trim().to_lowercase(),
            password_hash: new_user.password_hash,
        };
        debug!("Creating user '{}'", new_user.username);
        self.repository.create(new_user).await
    }

    fn get_user(&self, user_id: &str) -> Result<User> {
        self.repository.get_by_id(user_id)
    }

    fn list_users(&self) -> Result<Vec<User>> {
        self.repository.list()
    }

    async fn delete_user(&self, user_id: &str) -> Result<()> {
        let deleted = self.repository.delete(user_id).await?;
        if deleted == 0 {
            return Err(Error::not_found("User", user_id));
        }
        debug!("Deleted user {} and everything it owned", user_id);
        Ok(())
    }
}
