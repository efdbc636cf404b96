use crate::modules::events::core::event::EventPatch;

/// Targets the first event with `id`. The id itself is never changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateEvent {
    pub id: String,
    pub changes: EventPatch,
}
