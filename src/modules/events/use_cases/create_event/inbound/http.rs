use axum::{
    Json, extract::State, extract::rejection::JsonRejection, response::IntoResponse,
};
use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::modules::events::core::errors::ApplicationError;
use crate::modules::events::use_cases::create_event::command::CreateEvent;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct CreateEventBody {
    pub id: String,
    pub title: String,
    pub description: String,
    pub date: DateTime<Utc>,
}

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<CreateEventBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(rejection) => {
            tracing::warn!(reason = %rejection.body_text(), "rejected event payload");
            return ApplicationError::InvalidPayload(rejection.body_text()).into_response();
        }
    };

    let command = CreateEvent {
        id: body.id,
        title: body.title,
        description: body.description,
        date: body.date,
    };

    match state.create_event.handle(command).await {
        Ok(event) => Json(event).into_response(),
        Err(error) => error.into_response(),
    }
}
