// In memory implementation of the EventStore port.
//
// Purpose
// - Back the running service and the tests without a database.
//
// Responsibilities
// - Keep events in insertion order behind a single lock.
// - Apply updates in place so an event keeps its position.

use crate::modules::events::adapters::outbound::event_store::{EventStore, EventStoreError};
use crate::modules::events::core::event::{Event, EventPatch};
use tokio::sync::RwLock;

#[derive(Default)]
pub struct InMemoryEventStore {
    events: RwLock<Vec<Event>>,
    is_offline: bool,
}

impl InMemoryEventStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    fn ensure_online(&self) -> Result<(), EventStoreError> {
        if self.is_offline {
            return Err(EventStoreError::Backend("Event store offline".into()));
        }
        Ok(())
    }
}

fn not_found(id: &str) -> EventStoreError {
    EventStoreError::NotFound { id: id.to_string() }
}

#[async_trait::async_trait]
impl EventStore for InMemoryEventStore {
    async fn list(&self) -> Result<Vec<Event>, EventStoreError> {
        self.ensure_online()?;
        Ok(self.events.read().await.clone())
    }

    async fn get(&self, id: &str) -> Result<Event, EventStoreError> {
        self.ensure_online()?;
        self.events
            .read()
            .await
            .iter()
            .find(|event| event.id == id)
            .cloned()
            .ok_or_else(|| not_found(id))
    }

    async fn append(&self, event: Event) -> Result<(), EventStoreError> {
        self.ensure_online()?;
        self.events.write().await.push(event);
        Ok(())
    }

    async fn update(&self, id: &str, patch: EventPatch) -> Result<Event, EventStoreError> {
        self.ensure_online()?;
        let mut guard = self.events.write().await;
        let event = guard
            .iter_mut()
            .find(|event| event.id == id)
            .ok_or_else(|| not_found(id))?;
        event.apply(patch);
        Ok(event.clone())
    }

    async fn remove(&self, id: &str) -> Result<Event, EventStoreError> {
        self.ensure_online()?;
        let mut guard = self.events.write().await;
        let index = guard
            .iter()
            .position(|event| event.id == id)
            .ok_or_else(|| not_found(id))?;
        Ok(guard.remove(index))
    }

    async fn count(&self) -> Result<usize, EventStoreError> {
        self.ensure_online()?;
        Ok(self.events.read().await.len())
    }
}
