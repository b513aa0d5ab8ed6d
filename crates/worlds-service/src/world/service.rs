//! World CRUD operations with ownership checks and membership tracking.

use std::sync::Arc;

use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use worlds_core::error::AppError;
use worlds_core::events::{DomainEvent, EventPayload, WorldEvent};
use worlds_core::result::AppResult;
use worlds_core::traits::membership::MembershipStore;
use worlds_core::traits::publisher::EventPublisher;
use worlds_database::repositories::world::WorldStore;
use worlds_entity::world::model::World;

use crate::context::RequestContext;

/// Manages world CRUD, ownership, and membership.
#[derive(Debug, Clone)]
pub struct WorldService {
    /// World store.
    world_store: Arc<dyn WorldStore>,
    /// Membership store (current world per user).
    membership: Arc<dyn MembershipStore>,
    /// Fire-and-forget event publisher.
    publisher: Arc<dyn EventPublisher>,
}

impl WorldService {
    /// Creates a new world service.
    pub fn new(
        world_store: Arc<dyn WorldStore>,
        membership: Arc<dyn MembershipStore>,
        publisher: Arc<dyn EventPublisher>,
    ) -> Self {
        Self {
            world_store,
            membership,
            publisher,
        }
    }

    /// Lists all worlds.
    pub async fn list_worlds(&self) -> AppResult<Vec<World>> {
        self.world_store.find_all().await
    }

    /// Lists worlds belonging to an owner.
    pub async fn list_worlds_by_owner(&self, owner_id: Uuid) -> AppResult<Vec<World>> {
        self.world_store.find_by_owner(owner_id).await
    }

    /// Gets a world by ID.
    pub async fn get_world(&self, world_id: Uuid) -> AppResult<World> {
        self.world_store
            .find_by_id(world_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("World {world_id} not found")))
    }

    /// Creates a new world owned by the requester.
    pub async fn create_world(
        &self,
        ctx: &RequestContext,
        name: String,
        description: String,
    ) -> AppResult<World> {
        let world = World::new(ctx.user_id, name, description);
        self.world_store.create(&world).await?;

        self.publisher.publish(DomainEvent::new(
            Some(ctx.user_id),
            EventPayload::World(WorldEvent::Created {
                world_id: world.id,
                owner_id: world.owner_id,
                name: world.name.clone(),
                version: world.version,
            }),
        ));

        info!(user_id = %ctx.user_id, world_id = %world.id, "World created");
        Ok(world)
    }

    /// Updates a world's metadata, bumping its version.
    ///
    /// Only the owner may update a world.
    pub async fn update_world(
        &self,
        ctx: &RequestContext,
        world_id: Uuid,
        name: String,
        description: String,
    ) -> AppResult<World> {
        let mut world = self.get_world(world_id).await?;

        if !world.is_owned_by(ctx.user_id) {
            return Err(AppError::authorization("Only the owner may update a world"));
        }

        world.name = name;
        world.description = description;
        world.version += 1;
        world.updated_at = Utc::now();

        self.world_store.update(&world).await?;

        self.publisher.publish(DomainEvent::new(
            Some(ctx.user_id),
            EventPayload::World(WorldEvent::Updated {
                world_id: world.id,
                owner_id: world.owner_id,
                name: world.name.clone(),
                version: world.version,
            }),
        ));

        info!(user_id = %ctx.user_id, world_id = %world_id, version = world.version, "World updated");
        Ok(world)
    }

    /// Records the requester joining a world.
    pub async fn join_world(&self, ctx: &RequestContext, world_id: Uuid) -> AppResult<()> {
        // Verify the world exists before touching membership.
        self.get_world(world_id).await?;

        self.membership.join_world(ctx.user_id, world_id).await?;

        info!(user_id = %ctx.user_id, world_id = %world_id, "User joined world");
        Ok(())
    }

    /// Returns the world the requester is currently in, if any.
    pub async fn current_world(&self, ctx: &RequestContext) -> AppResult<Option<Uuid>> {
        self.membership.current_world(ctx.user_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::collections::HashMap;
    use std::sync::Mutex;

    use async_trait::async_trait;
    use worlds_cache::memory::MemoryMembershipStore;
    use worlds_core::error::ErrorKind;

    #[derive(Debug, Default)]
    struct MemoryWorldStore {
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
    struct RecordingPublisher {
        events: Mutex<Vec<DomainEvent>>,
    }

    impl RecordingPublisher {
        fn event_types(&self) -> Vec<&'static str> {
            self.events
                .lock()
                .unwrap()
                .iter()
                .map(|e| e.event_type())
                .collect()
        }
    }

    impl EventPublisher for RecordingPublisher {
        fn publish(&self, event: DomainEvent) {
            self.events.lock().unwrap().push(event);
        }
    }

    fn service() -> (WorldService, Arc<RecordingPublisher>) {
        let publisher = Arc::new(RecordingPublisher::default());
        let service = WorldService::new(
            Arc::new(MemoryWorldStore::default()),
            Arc::new(MemoryMembershipStore::new()),
            publisher.clone(),
        );
        (service, publisher)
    }

    #[tokio::test]
    async fn test_create_world_publishes_event() {
        let (service, publisher) = service();
        let ctx = RequestContext::new(Uuid::new_v4());

        let world = service
            .create_world(&ctx, "azeroth".into(), "a place".into())
            .await
            .unwrap();

        assert_eq!(world.owner_id, ctx.user_id);
        assert_eq!(world.version, 1);
        assert_eq!(publisher.event_types(), vec!["world.created"]);
    }

    #[tokio::test]
    async fn test_update_bumps_version_and_requires_ownership() {
        let (service, publisher) = service();
        let owner = RequestContext::new(Uuid::new_v4());
        let stranger = RequestContext::new(Uuid::new_v4());

        let world = service
            .create_world(&owner, "azeroth".into(), "a place".into())
            .await
            .unwrap();

        let err = service
            .update_world(&stranger, world.id, "mine now".into(), "nope".into())
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Authorization);

        let updated = service
            .update_world(&owner, world.id, "azeroth 2".into(), "still mine".into())
            .await
            .unwrap();
        assert_eq!(updated.version, 2);
        assert_eq!(
            publisher.event_types(),
            vec!["world.created", "world.updated"]
        );
    }

    #[tokio::test]
    async fn test_join_requires_existing_world_and_rejects_rejoin() {
        let (service, _) = service();
        let ctx = RequestContext::new(Uuid::new_v4());

        let err = service.join_world(&ctx, Uuid::new_v4()).await.unwrap_err();
        assert!(err.is_not_found());

        let world = service
            .create_world(&ctx, "azeroth".into(), "a place".into())
            .await
            .unwrap();

        service.join_world(&ctx, world.id).await.unwrap();
        assert_eq!(service.current_world(&ctx).await.unwrap(), Some(world.id));

        let err = service.join_world(&ctx, world.id).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::Conflict);
    }
}
