//! Transfer-job store trait and PostgreSQL repository.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use worlds_core::error::{AppError, ErrorKind};
use worlds_core::result::AppResult;
use worlds_entity::transfer::model::{TransferJob, WorldTransfer};

/// Persistence for transfer jobs and their per-world records.
#[async_trait]
pub trait TransferStore: Send + Sync + std::fmt::Debug {
    /// Insert or update a job row, keyed by id.
    async fn upsert_job(&self, job: &TransferJob) -> AppResult<()>;

    /// Find a job by its identifier.
    async fn find_job(&self, job_id: Uuid) -> AppResult<Option<TransferJob>>;

    /// Insert or update a batch of per-world records atomically.
    ///
    /// All rows are committed in one transaction so an aborted call never
    /// leaves a partially-visible job behind.
    async fn upsert_transfers(&self, transfers: &[WorldTransfer]) -> AppResult<()>;

    /// List all per-world records belonging to a job.
    async fn transfers_by_job(&self, job_id: Uuid) -> AppResult<Vec<WorldTransfer>>;
}

/// PostgreSQL-backed transfer-job repository.
#[derive(Debug, Clone)]
pub struct TransferJobRepository {
    pool: PgPool,
}

impl TransferJobRepository {
    /// Create a new transfer-job repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TransferStore for TransferJobRepository {
    async fn upsert_job(&self, job: &TransferJob) -> AppResult<()> {
        sqlx::query(
            "INSERT INTO transfer_jobs (id, target_environment, requester_id, status, created_at, updated_at) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             ON CONFLICT (id) DO UPDATE SET status = EXCLUDED.status, updated_at = EXCLUDED.updated_at",
        )
        .bind(job.id)
        .bind(&job.target_environment)
        .bind(job.requester_id)
        .bind(job.status)
        .bind(job.created_at)
        .bind(job.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to upsert transfer job", e))?;
        Ok(())
    }

    async fn find_job(&self, job_id: Uuid) -> AppResult<Option<TransferJob>> {
        sqlx::query_as::<_, TransferJob>("SELECT * FROM transfer_jobs WHERE id = $1")
            .bind(job_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find transfer job", e)
            })
    }

    async fn upsert_transfers(&self, transfers: &[WorldTransfer]) -> AppResult<()> {
        let mut tx = self.pool.begin().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to begin transaction", e)
        })?;

        for transfer in transfers {
            sqlx::query(
                "INSERT INTO world_transfers (job_id, world_id, world_version, status, created_at, updated_at) \
                 VALUES ($1, $2, $3, $4, $5, $6) \
                 ON CONFLICT (job_id, world_id) DO UPDATE \
                 SET status = EXCLUDED.status, updated_at = EXCLUDED.updated_at",
            )
            .bind(transfer.job_id)
            .bind(transfer.world_id)
            .bind(transfer.world_version)
            .bind(transfer.status)
            .bind(transfer.created_at)
            .bind(transfer.updated_at)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to upsert world transfer", e)
            })?;
        }

        tx.commit().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to commit transfer batch", e)
        })
    }

    async fn transfers_by_job(&self, job_id: Uuid) -> AppResult<Vec<WorldTransfer>> {
        sqlx::query_as::<_, WorldTransfer>(
            "SELECT * FROM world_transfers WHERE job_id = $1 ORDER BY created_at ASC",
        )
        .bind(job_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list world transfers", e)
        })
    }
}
