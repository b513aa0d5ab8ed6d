//! World store trait and PostgreSQL repository.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use worlds_core::error::{AppError, ErrorKind};
use worlds_core::result::AppResult;
use worlds_entity::world::model::World;

/// Read/write access to world records.
#[async_trait]
pub trait WorldStore: Send + Sync + std::fmt::Debug {
    /// List all worlds.
    async fn find_all(&self) -> AppResult<Vec<World>>;

    /// Find a world by its identifier.
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<World>>;

    /// List worlds belonging to an owner.
    async fn find_by_owner(&self, owner_id: Uuid) -> AppResult<Vec<World>>;

    /// Persist a new world.
    async fn create(&self, world: &World) -> AppResult<()>;

    /// Persist changes to an existing world.
    async fn update(&self, world: &World) -> AppResult<()>;
}

/// PostgreSQL-backed world repository.
#[derive(Debug, Clone)]
pub struct WorldRepository {
    pool: PgPool,
}

impl WorldRepository {
    /// Create a new world repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl WorldStore for WorldRepository {
    async fn find_all(&self) -> AppResult<Vec<World>> {
        sqlx::query_as::<_, World>("SELECT * FROM worlds ORDER BY created_at DESC")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list worlds", e))
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<World>> {
        sqlx::query_as::<_, World>("SELECT * FROM worlds WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find world", e))
    }

    async fn find_by_owner(&self, owner_id: Uuid) -> AppResult<Vec<World>> {
        sqlx::query_as::<_, World>(
            "SELECT * FROM worlds WHERE owner_id = $1 ORDER BY created_at DESC",
        )
        .bind(owner_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list worlds by owner", e)
        })
    }

    async fn create(&self, world: &World) -> AppResult<()> {
        sqlx::query(
            "INSERT INTO worlds (id, owner_id, name, description, version, created_at, updated_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7)",
        )
        .bind(world.id)
        .bind(world.owner_id)
        .bind(&world.name)
        .bind(&world.description)
        .bind(world.version)
        .bind(world.created_at)
        .bind(world.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create world", e))?;
        Ok(())
    }

    async fn update(&self, world: &World) -> AppResult<()> {
        let result = sqlx::query(
            "UPDATE worlds SET name = $2, description = $3, version = $4, updated_at = NOW() \
             WHERE id = $1",
        )
        .bind(world.id)
        .bind(&world.name)
        .bind(&world.description)
        .bind(world.version)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update world", e))?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(format!("World {} not found", world.id)));
        }
        Ok(())
    }
}
