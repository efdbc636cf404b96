use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    response::IntoResponse,
};
use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::modules::events::core::errors::ApplicationError;
use crate::modules::events::core::event::EventPatch;
use crate::modules::events::use_cases::update_event::command::UpdateEvent;
use crate::shell::state::AppState;

// Any `id` in the body is ignored, the path decides which event changes.
#[derive(Deserialize)]
pub struct UpdateEventBody {
    pub title: Option<String>,
    pub description: Option<String>,
    pub date: Option<DateTime<Utc>>,
}

pub async fn handle(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<UpdateEventBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(rejection) => {
            tracing::warn!(event_id = %id, reason = %rejection.body_text(), "rejected event payload");
            return ApplicationError::InvalidPayload(rejection.body_text()).into_response();
        }
    };

    let command = UpdateEvent {
        id,
        changes: EventPatch {
            title: body.title,
            description: body.description,
            date: body.date,
        },
    };

    match state.update_event.handle(command).await {
        Ok(event) => Json(event).into_response(),
        Err(error) => error.into_response(),
    }
}
