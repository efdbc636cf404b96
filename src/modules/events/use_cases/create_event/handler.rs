use crate::modules::events::adapters::outbound::event_store::EventStore;
use crate::modules::events::core::errors::ApplicationError;
use crate::modules::events::core::event::Event;
use crate::modules::events::use_cases::create_event::command::CreateEvent;
use std::sync::Arc;

pub struct CreateEventHandler<TEventStore>
where
    TEventStore: EventStore + 'static,
{
    event_store: Arc<TEventStore>,
}

impl<TEventStore> CreateEventHandler<TEventStore>
where
    TEventStore: EventStore + 'static,
{
    pub fn new(event_store: Arc<TEventStore>) -> Self {
        Self { event_store }
    }

    /// Appends the event as given. Identifiers are not checked for
    /// uniqueness, so a second create with the same id adds a second entry.
    #[tracing::instrument(skip(self, command), fields(event_id = %command.id))]
    pub async fn handle(&self, command: CreateEvent) -> Result<Event, ApplicationError> {
        let event = Event::from(command);
        self.event_store.append(event.clone()).await?;
        tracing::info!("event created");
        Ok(event)
    }
}
