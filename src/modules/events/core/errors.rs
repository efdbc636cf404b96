use crate::modules::events::adapters::outbound::event_store::EventStoreError;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ApplicationError {
    #[error("Event not found")]
    NotFound { id: String },

    #[error("invalid payload: {0}")]
    InvalidPayload(String),

    #[error("invalid date {input:?}, expected YYYY-MM-DD HH:MM")]
    InvalidDate { input: String },

    #[error(transparent)]
    Store(EventStoreError),
}

impl From<EventStoreError> for ApplicationError {
    fn from(error: EventStoreError) -> Self {
        match error {
            EventStoreError::NotFound { id } => ApplicationError::NotFound { id },
            other => ApplicationError::Store(other),
        }
    }
}
