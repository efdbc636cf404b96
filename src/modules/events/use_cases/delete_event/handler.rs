use crate::modules::events::adapters::outbound::event_store::EventStore;
use crate::modules::events::core::errors::ApplicationError;
use crate::modules::events::core::event::Event;
use std::sync::Arc;

pub struct DeleteEventHandler<TEventStore>
where
    TEventStore: EventStore + 'static,
{
    event_store: Arc<TEventStore>,
}

impl<TEventStore> DeleteEventHandler<TEventStore>
where
    TEventStore: EventStore + 'static,
{
    pub fn new(event_store: Arc<TEventStore>) -> Self {
        Self { event_store }
    }

    /// Removes the first event with `id` and returns it.
    #[tracing::instrument(skip(self))]
    pub async fn handle(&self, id: &str) -> Result<Event, ApplicationError> {
        let removed = self.event_store.remove(id).await?;
        tracing::info!("event deleted");
        Ok(removed)
    }
}
