use axum::{Json, extract::State, response::IntoResponse};

use crate::shell::state::AppState;

pub async fn handle(State(state): State<AppState>) -> impl IntoResponse {
    match state.list_events.handle().await {
        Ok(events) => Json(events).into_response(),
        Err(error) => error.into_response(),
    }
}
