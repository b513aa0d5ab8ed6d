//! User store trait and PostgreSQL repository.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use worlds_core::error::{AppError, ErrorKind};
use worlds_core::result::AppResult;
use worlds_entity::user::model::User;

/// Read/write access to user records.
#[async_trait]
pub trait UserStore: Send + Sync + std::fmt::Debug {
    /// Persist a new user.
    async fn create(&self, user: &User) -> AppResult<()>;

    /// Find a user by its identifier.
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>>;
}

/// PostgreSQL-backed user repository.
#[derive(Debug, Clone)]
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    /// Create a new user repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserStore for UserRepository {
    async fn create(&self, user: &User) -> AppResult<()> {
        sqlx::query("INSERT INTO users (id, created_at, updated_at) VALUES ($1, $2, $3)")
            .bind(user.id)
            .bind(user.created_at)
            .bind(user.updated_at)
            .execute(&self.pool)
            .await
            .map_err(|e| match e {
                sqlx::Error::Database(ref db_err) if db_err.constraint() == Some("users_pkey") => {
                    AppError::conflict(format!("User {} already exists", user.id))
                }
                _ => AppError::with_source(ErrorKind::Database, "Failed to create user", e),
            })?;
        Ok(())
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find user", e))
    }
}
