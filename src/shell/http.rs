use axum::{
    Router,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};

use crate::modules::events::core::errors::ApplicationError;
use crate::modules::events::use_cases::create_event::inbound::http as create_http;
use crate::modules::events::use_cases::delete_event::inbound::http as delete_http;
use crate::modules::events::use_cases::get_event::inbound::http as get_http;
use crate::modules::events::use_cases::list_events::inbound::http as list_http;
use crate::modules::events::use_cases::update_event::inbound::http as update_http;
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route(
            "/events",
            get(list_http::handle).post(create_http::handle),
        )
        .route(
            "/events/{id}",
            get(get_http::handle)
                .put(update_http::handle)
                .delete(delete_http::handle),
        )
        .with_state(state)
}

impl IntoResponse for ApplicationError {
    fn into_response(self) -> Response {
        match self {
            ApplicationError::NotFound { .. } => {
                (StatusCode::NOT_FOUND, "Event not found").into_response()
            }
            error @ (ApplicationError::InvalidPayload(_) | ApplicationError::InvalidDate { .. }) => {
                (StatusCode::UNPROCESSABLE_ENTITY, error.to_string()).into_response()
            }
            ApplicationError::Store(error) => {
                tracing::error!(%error, "event store failure");
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
        }
    }
}
