use crate::modules::events::adapters::outbound::event_store_in_memory::InMemoryEventStore;
use crate::modules::events::use_cases::create_event::handler::CreateEventHandler;
use crate::modules::events::use_cases::delete_event::handler::DeleteEventHandler;
use crate::modules::events::use_cases::get_event::handler::GetEventHandler;
use crate::modules::events::use_cases::list_events::handler::ListEventsHandler;
use crate::modules::events::use_cases::update_event::handler::UpdateEventHandler;
use std::sync::Arc;

/// Shared by every front-end. All handlers point at the same store.
#[derive(Clone)]
pub struct AppState {
    pub event_store: Arc<InMemoryEventStore>,
    pub list_events: Arc<ListEventsHandler<InMemoryEventStore>>,
    pub get_event: Arc<GetEventHandler<InMemoryEventStore>>,
    pub create_event: Arc<CreateEventHandler<InMemoryEventStore>>,
    pub update_event: Arc<UpdateEventHandler<InMemoryEventStore>>,
    pub delete_event: Arc<DeleteEventHandler<InMemoryEventStore>>,
}

impl AppState {
    pub fn new(event_store: Arc<InMemoryEventStore>) -> Self {
        Self {
            list_events: Arc::new(ListEventsHandler::new(event_store.clone())),
            get_event: Arc::new(GetEventHandler::new(event_store.clone())),
            create_event: Arc::new(CreateEventHandler::new(event_store.clone())),
            update_event: Arc::new(UpdateEventHandler::new(event_store.clone())),
            delete_event: Arc::new(DeleteEventHandler::new(event_store.clone())),
            event_store,
        }
    }

    pub fn in_memory() -> Self {
        Self::new(Arc::new(InMemoryEventStore::new()))
    }
}
