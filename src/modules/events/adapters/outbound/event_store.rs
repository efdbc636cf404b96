// Port for the ordered collection of events.
//
// Responsibilities
// - Keep the use case handlers independent of where events live.
// - Every operation is atomic with respect to the collection.
//
// Boundaries
// - No uniqueness checks on identifiers. Lookups resolve to the first match in collection order.

use crate::modules::events::core::event::{Event, EventPatch};
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EventStoreError {
    #[error("event not found: {id}")]
    NotFound { id: String },

    #[error("backend error: {0}")]
    Backend(String),
}

#[async_trait]
pub trait EventStore: Send + Sync {
    async fn list(&self) -> Result<Vec<Event>, EventStoreError>;
    async fn get(&self, id: &str) -> Result<Event, EventStoreError>;
    async fn append(&self, event: Event) -> Result<(), EventStoreError>;
    async fn update(&self, id: &str, patch: EventPatch) -> Result<Event, EventStoreError>;
    async fn remove(&self, id: &str) -> Result<Event, EventStoreError>;
    async fn count(&self) -> Result<usize, EventStoreError>;
}
