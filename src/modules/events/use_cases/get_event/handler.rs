use crate::modules::events::adapters::outbound::event_store::EventStore;
use crate::modules::events::core::errors::ApplicationError;
use crate::modules::events::core::event::Event;
use std::sync::Arc;

pub struct GetEventHandler<TEventStore>
where
    TEventStore: EventStore + 'static,
{
    event_store: Arc<TEventStore>,
}

impl<TEventStore> GetEventHandler<TEventStore>
where
    TEventStore: EventStore + 'static,
{
    pub fn new(event_store: Arc<TEventStore>) -> Self {
        Self { event_store }
    }

    #[tracing::instrument(skip(self))]
    pub async fn handle(&self, id: &str) -> Result<Event, ApplicationError> {
        Ok(self.event_store.get(id).await?)
    }
}
