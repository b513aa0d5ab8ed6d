//! Shared test helpers: a test application over in-memory stores.
//!
//! The router under test is the real one; only the infrastructure edges
//! (Postgres, Redis, the remote environment) are replaced with in-memory
//! implementations, so the suite runs without external services.
#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;
use uuid::Uuid;

use worlds_cache::memory::MemoryMembershipStore;
use worlds_core::config::cache::CacheConfig;
use worlds_core::config::database::DatabaseConfig;
use worlds_core::config::importer::ImporterConfig;
use worlds_core::config::logging::LoggingConfig;
use worlds_core::config::server::{CorsConfig, ServerConfig};
use worlds_core::config::{AppConfig, EventsConfig};
use worlds_core::error::AppError;
use worlds_core::result::AppResult;
use worlds_core::traits::prober::EnvironmentProber;
use worlds_database::repositories::transfer::TransferStore;
use worlds_database::repositories::user::UserStore;
use worlds_database::repositories::world::WorldStore;
use worlds_entity::transfer::model::{TransferJob, WorldTransfer};
use worlds_entity::user::model::User;
use worlds_entity::world::model::World;
use worlds_notify::publisher::LogEventPublisher;
use worlds_service::importer::service::ImporterService;
use worlds_service::user::service::UserService;
use worlds_service::world::service::WorldService;

/// Test application context.
pub struct TestApp {
    /// The Axum router for making test requests.
    pub router: Router,
    /// Handle for scripting remote environment versions.
    pub prober: Arc<ScriptedProber>,
}

/// Response from a test request.
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code.
    pub status: StatusCode,
    /// Parsed JSON body.
    pub body: Value,
}

impl TestApp {
    /// Create a new test application over in-memory stores.
    pub fn new() -> Self {
        let prober = Arc::new(ScriptedProber::default());
        let publisher = Arc::new(LogEventPublisher::new());

        let world_store = Arc::new(MemoryWorldStore::default());
        let user_store = Arc::new(MemoryUserStore::default());
        let transfer_store = Arc::new(MemoryTransferStore::default());
        let membership = Arc::new(MemoryMembershipStore::new());

        let state = worlds_api::AppState {
            config: Arc::new(test_config()),
            user_service: Arc::new(UserService::new(user_store)),
            world_service: Arc::new(WorldService::new(
                world_store.clone(),
                membership,
                publisher.clone(),
            )),
            importer_service: Arc::new(ImporterService::new(
                world_store,
                transfer_store,
                prober.clone(),
                publisher,
            )),
        };

        Self {
            router: worlds_api::router::build_router(state),
            prober,
        }
    }

    /// Make an HTTP request to the test app.
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();

        let mut req = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/json");

        if let Some(token) = token {
            req = req.header("Authorization", format!("Bearer {}", token));
        }

        let req = req
            .body(Body::from(body_str))
            .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse { status, body }
    }

    /// Create a world via the API and return its id.
    pub async fn create_world(&self, owner: Uuid, name: &str) -> Uuid {
        let response = self
            .request(
                "POST",
                "/worlds",
                Some(serde_json::json!({
                    "name": name,
                    "description": "integration test world",
                })),
                Some(&owner.to_string()),
            )
            .await;

        assert_eq!(
            response.status,
            StatusCode::CREATED,
            "World creation failed: {:?}",
            response.body
        );

        response.body["data"]["id"]
            .as_str()
            .expect("No world id in response")
            .parse()
            .expect("Invalid world id")
    }
}

fn test_config() -> AppConfig {
    AppConfig {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
            cors: CorsConfig::default(),
        },
        database: DatabaseConfig {
            url: "postgres://localhost:5432/worlds_test".to_string(),
            max_connections: 5,
            min_connections: 1,
            connect_timeout_seconds: 5,
            idle_timeout_seconds: 60,
        },
        cache: CacheConfig::default(),
        events: EventsConfig::default(),
        importer: ImporterConfig {
            environments: HashMap::new(),
            request_timeout_seconds: 5,
        },
        logging: LoggingConfig::default(),
    }
}

// ── In-memory stores ───────────────────────────────────────

#[derive(Debug, Default)]
pub struct MemoryWorldStore {
    worlds: Mutex<HashMap<Uuid, World>>,
}

#[async_trait]
impl WorldStore for MemoryWorldStore {
    async fn find_all(&self) -> AppResult<Vec<World>> {
        Ok(self.worlds.lock().unwrap().values().cloned().collect())
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<World>> {
        Ok(self.worlds.lock().unwrap().get(&id).cloned())
    }

    async fn find_by_owner(&self, owner_id: Uuid) -> AppResult<Vec<World>> {
        Ok(self
            .worlds
            .lock()
            .unwrap()
            .values()
            .filter(|w| w.owner_id == owner_id)
            .cloned()
            .collect())
    }

    async fn create(&self, world: &World) -> AppResult<()> {
        self.worlds.lock().unwrap().insert(world.id, world.clone());
        Ok(())
    }

    async fn update(&self, world: &World) -> AppResult<()> {
        self.worlds.lock().unwrap().insert(world.id, world.clone());
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct MemoryUserStore {
    users: Mutex<HashMap<Uuid, User>>,
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn create(&self, user: &User) -> AppResult<()> {
        let mut users = self.users.lock().unwrap();
        if users.contains_key(&user.id) {
            return Err(AppError::conflict(format!(
                "User {} already exists",
                user.id
            )));
        }
        users.insert(user.id, user.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>> {
        Ok(self.users.lock().unwrap().get(&id).cloned())
    }
}

#[derive(Debug, Default)]
pub struct MemoryTransferStore {
    jobs: Mutex<HashMap<Uuid, TransferJob>>,
    transfers: Mutex<HashMap<(Uuid, Uuid), WorldTransfer>>,
}

#[async_trait]
impl TransferStore for MemoryTransferStore {
    async fn upsert_job(&self, job: &TransferJob) -> AppResult<()> {
        self.jobs.lock().unwrap().insert(job.id, job.clone());
        Ok(())
    }

    async fn find_job(&self, job_id: Uuid) -> AppResult<Option<TransferJob>> {
        Ok(self.jobs.lock().unwrap().get(&job_id).cloned())
    }

    async fn upsert_transfers(&self, transfers: &[WorldTransfer]) -> AppResult<()> {
        let mut map = self.transfers.lock().unwrap();
        for t in transfers {
            map.insert((t.job_id, t.world_id), t.clone());
        }
        Ok(())
    }

    async fn transfers_by_job(&self, job_id: Uuid) -> AppResult<Vec<WorldTransfer>> {
        Ok(self
            .transfers
            .lock()
            .unwrap()
            .values()
            .filter(|t| t.job_id == job_id)
            .cloned()
            .collect())
    }
}

/// Prober returning scripted versions per world id.
#[derive(Debug, Default)]
pub struct ScriptedProber {
    versions: Mutex<HashMap<Uuid, i32>>,
}

impl ScriptedProber {
    /// Set the remote version reported for a world.
    pub fn set(&self, world_id: Uuid, version: i32) {
        self.versions.lock().unwrap().insert(world_id, version);
    }
}

#[async_trait]
impl EnvironmentProber for ScriptedProber {
    async fn remote_version(&self, world_id: Uuid, _env: &str) -> AppResult<i32> {
        self.versions
            .lock()
            .unwrap()
            .get(&world_id)
            .copied()
            .ok_or_else(|| AppError::external(format!("Probe of world {world_id} failed")))
    }
}
