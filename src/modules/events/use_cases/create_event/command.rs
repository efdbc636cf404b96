use crate::modules::events::core::event::Event;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateEvent {
    pub id: String,
    pub title: String,
    pub description: String,
    pub date: DateTime<Utc>,
}

impl From<CreateEvent> for Event {
    fn from(command: CreateEvent) -> Self {
        Self {
            id: command.id,
            title: command.title,
            description: command.description,
            date: command.date,
        }
    }
}
