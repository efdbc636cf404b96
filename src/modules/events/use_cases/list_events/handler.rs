use crate::modules::events::adapters::outbound::event_store::EventStore;
use crate::modules::events::core::errors::ApplicationError;
use crate::modules::events::core::event::Event;
use std::sync::Arc;

pub struct ListEventsHandler<TEventStore>
where
    TEventStore: EventStore + 'static,
{
    event_store: Arc<TEventStore>,
}

impl<TEventStore> ListEventsHandler<TEventStore>
where
    TEventStore: EventStore + 'static,
{
    pub fn new(event_store: Arc<TEventStore>) -> Self {
        Self { event_store }
    }

    #[tracing::instrument(skip(self))]
    pub async fn handle(&self) -> Result<Vec<Event>, ApplicationError> {
        let events = self.event_store.list().await?;
        tracing::debug!(count = events.len(), "listed events");
        Ok(events)
    }
}
