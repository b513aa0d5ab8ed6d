//! HTTP prober for remote target environments.

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use uuid::Uuid;

use worlds_core::config::importer::ImporterConfig;
use worlds_core::error::{AppError, ErrorKind};
use worlds_core::result::AppResult;
use worlds_core::traits::prober::EnvironmentProber;

/// Queries a target environment's worlds API for its version of a world.
///
/// Each configured environment runs the same read API this service exposes,
/// so a probe is `GET {base_url}/worlds/{id}` and reads `data.version`
/// from the response envelope.
#[derive(Debug, Clone)]
pub struct HttpEnvironmentProber {
    client: reqwest::Client,
    config: ImporterConfig,
}

#[derive(Debug, Deserialize)]
struct RemoteWorldEnvelope {
    data: RemoteWorld,
}

#[derive(Debug, Deserialize)]
struct RemoteWorld {
    version: i32,
}

impl HttpEnvironmentProber {
    /// Creates a prober from importer configuration.
    pub fn new(config: ImporterConfig) -> AppResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_seconds))
            .build()
            .map_err(|e| {
                AppError::with_source(ErrorKind::Internal, "Failed to build probe HTTP client", e)
            })?;

        Ok(Self { client, config })
    }
}

#[async_trait]
impl EnvironmentProber for HttpEnvironmentProber {
    async fn remote_version(&self, world_id: Uuid, target_environment: &str) -> AppResult<i32> {
        let base_url = self
            .config
            .environment_url(target_environment)
            .ok_or_else(|| {
                AppError::validation(format!(
                    "Unknown target environment '{target_environment}'"
                ))
            })?;

        let url = format!("{base_url}/worlds/{world_id}");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| {
                AppError::with_source(
                    ErrorKind::ExternalService,
                    format!("Probe of world {world_id} at '{target_environment}' failed"),
                    e,
                )
            })?;

        let envelope: RemoteWorldEnvelope = response.json().await.map_err(|e| {
            AppError::with_source(
                ErrorKind::ExternalService,
                format!("Invalid probe response for world {world_id} from '{target_environment}'"),
                e,
            )
        })?;

        Ok(envelope.data.version)
    }
}
