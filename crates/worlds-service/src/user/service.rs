//! User registration service.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use worlds_core::result::AppResult;
use worlds_database::repositories::user::UserStore;
use worlds_entity::user::model::User;

/// Manages user records.
#[derive(Debug, Clone)]
pub struct UserService {
    user_store: Arc<dyn UserStore>,
}

impl UserService {
    /// Creates a new user service.
    pub fn new(user_store: Arc<dyn UserStore>) -> Self {
        Self { user_store }
    }

    /// Registers a user with a caller-supplied identifier.
    pub async fn create_user(&self, id: Uuid) -> AppResult<User> {
        let user = User::new(id);
        self.user_store.create(&user).await?;

        info!(user_id = %id, "User created");
        Ok(user)
    }
}
