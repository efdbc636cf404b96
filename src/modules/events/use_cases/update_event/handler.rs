use crate::modules::events::adapters::outbound::event_store::EventStore;
use crate::modules::events::core::errors::ApplicationError;
use crate::modules::events::core::event::Event;
use crate::modules::events::use_cases::update_event::command::UpdateEvent;
use std::sync::Arc;

pub struct UpdateEventHandler<TEventStore>
where
    TEventStore: EventStore + 'static,
{
    event_store: Arc<TEventStore>,
}

impl<TEventStore> UpdateEventHandler<TEventStore>
where
    TEventStore: EventStore + 'static,
{
    pub fn new(event_store: Arc<TEventStore>) -> Self {
        Self { event_store }
    }

    #[tracing::instrument(skip(self, command), fields(event_id = %command.id))]
    pub async fn handle(&self, command: UpdateEvent) -> Result<Event, ApplicationError> {
        let event = self
            .event_store
            .update(&command.id, command.changes)
            .await?;
        tracing::info!("event updated");
        Ok(event)
    }
}
