//! Transfer-job aggregation: job creation and idempotent status polling.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, warn};
use uuid::Uuid;

use worlds_core::error::AppError;
use worlds_core::events::{DomainEvent, EventPayload, TransferEvent};
use worlds_core::result::AppResult;
use worlds_core::traits::prober::EnvironmentProber;
use worlds_core::traits::publisher::EventPublisher;
use worlds_database::repositories::transfer::TransferStore;
use worlds_database::repositories::world::WorldStore;
use worlds_entity::transfer::model::{TransferJob, WorldTransfer};
use worlds_entity::transfer::status::TransferStatus;

use crate::context::RequestContext;

/// View of a transfer job returned to callers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransferJobStatus {
    /// The job identifier.
    pub job_id: Uuid,
    /// Aggregate job-level status.
    pub status: TransferStatus,
    /// Per-world statuses; empty when the job was already complete.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub status_by_world: HashMap<Uuid, TransferStatus>,
}

/// Orchestrates world-transfer jobs against remote target environments.
///
/// A job fans out over the requested worlds: each is compared against the
/// target environment's version of it, already-current worlds complete
/// immediately, and the rest are tracked until polling observes the target
/// catching up. Per-job and per-world statuses only ever advance
/// `created -> completed`.
#[derive(Debug, Clone)]
pub struct ImporterService {
    /// World store (source side).
    world_store: Arc<dyn WorldStore>,
    /// Job and per-world transfer persistence.
    transfer_store: Arc<dyn TransferStore>,
    /// Remote environment prober.
    prober: Arc<dyn EnvironmentProber>,
    /// Fire-and-forget event publisher.
    publisher: Arc<dyn EventPublisher>,
}

impl ImporterService {
    /// Creates a new importer service.
    pub fn new(
        world_store: Arc<dyn WorldStore>,
        transfer_store: Arc<dyn TransferStore>,
        prober: Arc<dyn EnvironmentProber>,
        publisher: Arc<dyn EventPublisher>,
    ) -> Self {
        Self {
            world_store,
            transfer_store,
            prober,
            publisher,
        }
    }

    /// Creates a transfer job for the given worlds.
    ///
    /// Every world is loaded and probed before anything is persisted, so a
    /// failing world or probe aborts the call without leaving partial rows
    /// behind. Worlds whose remote version already matches or exceeds the
    /// source version complete immediately and emit no notification; for
    /// the rest a transfer-requested event is published and a pending row
    /// is tracked. If nothing needs transferring the job itself completes
    /// at once and no per-world rows are written.
    pub async fn create_transfer_job(
        &self,
        ctx: &RequestContext,
        world_ids: &[Uuid],
        target_environment: &str,
    ) -> AppResult<TransferJobStatus> {
        if world_ids.is_empty() {
            return Err(AppError::validation("At least one world id is required"));
        }
        if target_environment.is_empty() {
            return Err(AppError::validation("Target environment must not be empty"));
        }

        // Repeated ids describe the same transfer; keep the first occurrence.
        let mut seen = HashSet::new();
        let world_ids: Vec<Uuid> = world_ids
            .iter()
            .copied()
            .filter(|id| seen.insert(*id))
            .collect();

        let mut job = TransferJob::new(ctx.user_id, target_environment);

        let mut decisions: Vec<(Uuid, i32, TransferStatus)> = Vec::with_capacity(world_ids.len());
        for world_id in world_ids {
            let world = self
                .world_store
                .find_by_id(world_id)
                .await?
                .ok_or_else(|| AppError::not_found(format!("World {world_id} not found")))?;

            let remote_version = self
                .prober
                .remote_version(world_id, target_environment)
                .await?;

            if remote_version >= world.version {
                debug!(world_id = %world_id, "World already up to date at target environment");
                decisions.push((world_id, world.version, TransferStatus::Completed));
                continue;
            }

            self.publisher.publish(DomainEvent::new(
                Some(ctx.user_id),
                EventPayload::Transfer(TransferEvent::Requested {
                    world_id,
                    requester_id: ctx.user_id,
                    world_version: world.version,
                    target_environment: target_environment.to_string(),
                }),
            ));
            decisions.push((world_id, world.version, TransferStatus::Created));
        }

        let all_current = decisions
            .iter()
            .all(|(_, _, status)| status.is_completed());

        if all_current {
            job.status = TransferStatus::Completed;
        } else {
            // The batch goes in before the job row: a job must never become
            // visible without its transfers.
            let transfers: Vec<WorldTransfer> = decisions
                .iter()
                .map(|&(world_id, version, status)| {
                    WorldTransfer::new(job.id, world_id, version, status)
                })
                .collect();
            self.transfer_store.upsert_transfers(&transfers).await?;
        }

        self.transfer_store.upsert_job(&job).await?;

        info!(
            job_id = %job.id,
            requester_id = %ctx.user_id,
            worlds = decisions.len(),
            status = %job.status,
            "Transfer job created"
        );

        Ok(TransferJobStatus {
            job_id: job.id,
            status: job.status,
            status_by_world: decisions
                .into_iter()
                .map(|(world_id, _, status)| (world_id, status))
                .collect(),
        })
    }

    /// Returns the current status of a job, re-evaluating pending worlds.
    ///
    /// A completed job is returned as-is with no probing. Otherwise every
    /// still-pending world is probed; a probe failure aborts the whole poll
    /// without mutating anything. When the last pending world catches up,
    /// the completion is persisted best-effort and the completed view is
    /// returned either way.
    pub async fn job_status(&self, job_id: Uuid) -> AppResult<TransferJobStatus> {
        let job = self
            .transfer_store
            .find_job(job_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Transfer job {job_id} not found")))?;

        // Completion is terminal; skip probing entirely.
        if job.status.is_completed() {
            return Ok(TransferJobStatus {
                job_id,
                status: job.status,
                status_by_world: HashMap::new(),
            });
        }

        let transfers = self.transfer_store.transfers_by_job(job_id).await?;

        let mut status_by_world = HashMap::with_capacity(transfers.len());
        let mut advanced: Vec<WorldTransfer> = Vec::new();
        for transfer in &transfers {
            if transfer.status.is_completed() {
                status_by_world.insert(transfer.world_id, transfer.status);
                continue;
            }

            let remote_version = match self
                .prober
                .remote_version(transfer.world_id, &job.target_environment)
                .await
            {
                Ok(version) => version,
                Err(e) => {
                    error!(
                        job_id = %job_id,
                        world_id = %transfer.world_id,
                        target_environment = %job.target_environment,
                        "Remote environment probe failed"
                    );
                    return Err(e);
                }
            };

            if remote_version >= transfer.world_version {
                status_by_world.insert(transfer.world_id, TransferStatus::Completed);
                let mut row = transfer.clone();
                row.status = TransferStatus::Completed;
                advanced.push(row);
            } else {
                status_by_world.insert(transfer.world_id, TransferStatus::Created);
            }
        }

        let all_completed = status_by_world.values().all(|s| s.is_completed());

        let status = if all_completed {
            self.persist_completion(&job, advanced).await;
            TransferStatus::Completed
        } else {
            job.status
        };

        Ok(TransferJobStatus {
            job_id,
            status,
            status_by_world,
        })
    }

    /// Best-effort promotion of the job and its newly-finished rows to
    /// `completed`. Failures are logged; the next poll recomputes and
    /// retries. The job row is only flipped after the rows are stored so
    /// the two never disagree about a completed job.
    async fn persist_completion(&self, job: &TransferJob, mut advanced: Vec<WorldTransfer>) {
        let now = Utc::now();
        for row in &mut advanced {
            row.updated_at = now;
        }

        if let Err(e) = self.transfer_store.upsert_transfers(&advanced).await {
            warn!(job_id = %job.id, error = %e, "Failed to persist completed world transfers");
            return;
        }

        let mut completed_job = job.clone();
        completed_job.status = TransferStatus::Completed;
        completed_job.updated_at = now;

        match self.transfer_store.upsert_job(&completed_job).await {
            Ok(()) => info!(job_id = %job.id, "Transfer job completed"),
            Err(e) => {
                warn!(job_id = %job.id, error = %e, "Failed to persist completed job status");
            }
        }
    }
}
