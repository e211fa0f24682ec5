//! Event handlers: list and get by slug.

use axum::extract::{Path, State};
use axum::routing::get;
use axum::{Json, Router};

use crate::app_state::AppState;
use crate::domain::{Event, EventsEnvelope};
use crate::error::{ApiError, ErrorResponse};

/// `GET /events` — All events, newest first.
///
/// # Errors
///
/// Returns [`ApiError::NotFound`] when no events are available.
#[utoipa::path(
    get,
    path = "/api/events",
    tag = "Events",
    summary = "List events",
    description = "Returns every event, newest first. Events without a parseable date follow in source order.",
    responses(
        (status = 200, description = "Event list", body = EventsEnvelope),
        (status = 404, description = "No events available", body = ErrorResponse),
    )
)]
pub async fn list_events(State(state): State<AppState>) -> Result<Json<EventsEnvelope>, ApiError> {
    let events = state.content.events().await;
    if events.is_empty() {
        return Err(ApiError::NotFound("Events not found".to_string()));
    }
    Ok(Json(EventsEnvelope { events }))
}

/// `GET /events/{slug}` — One event.
///
/// # Errors
///
/// Returns [`ApiError::NotFound`] if no event has this slug.
#[utoipa::path(
    get,
    path = "/api/events/{slug}",
    tag = "Events",
    summary = "Get event",
    params(
        ("slug" = String, Path, description = "Event slug"),
    ),
    responses(
        (status = 200, description = "Event details", body = Event),
        (status = 404, description = "Event not found", body = ErrorResponse),
    )
)]
pub async fn get_event(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<Event>, ApiError> {
    state
        .content
        .event(&slug)
        .await
        .map(Json)
        .ok_or_else(|| ApiError::NotFound("Event not found".to_string()))
}

/// Event routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/events", get(list_events))
        .route("/events/{slug}", get(get_event))
}
