use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post, put},
    Json, Router,
};
use tracing::{info, instrument};
use uuid::Uuid;

use crate::error::ApiError;
use crate::events::{dto::EventRequest, repo::Event, services};
use crate::state::AppState;

pub fn read_routes() -> Router<AppState> {
    Router::new()
        .route("/events", get(list_events))
        .route("/events/approved", get(list_approved))
        .route("/events/pending", get(list_pending))
        .route("/events/organizer/:organizer_id", get(list_by_organizer))
        .route("/events/:id", get(get_event))
}

pub fn write_routes() -> Router<AppState> {
    Router::new()
        .route("/events", post(create_event))
        .route("/events/:id", put(update_event).delete(delete_event))
        .route("/events/:id/approve", put(approve_event))
        .route("/events/:id/reject", put(reject_event))
}

#[instrument(skip(state, payload))]
pub async fn create_event(
    State(state): State<AppState>,
    Json(payload): Json<EventRequest>,
) -> Result<(StatusCode, Json<Event>), ApiError> {
    let event = services::create_event(&state.db, payload).await?;
    info!(event_id = %event.id, organizer_id = %event.organizer_id, "event created");
    Ok((StatusCode::CREATED, Json(event)))
}

#[instrument(skip(state))]
pub async fn list_events(State(state): State<AppState>) -> Result<Json<Vec<Event>>, ApiError> {
    let events = services::get_all_events(&state.db).await?;
    Ok(Json(events))
}

#[instrument(skip(state))]
pub async fn list_approved(State(state): State<AppState>) -> Result<Json<Vec<Event>>, ApiError> {
    let events = services::get_approved_events(&state.db).await?;
    Ok(Json(events))
}

#[instrument(skip(state))]
pub async fn list_pending(State(state): State<AppState>) -> Result<Json<Vec<Event>>, ApiError> {
    let events = services::get_pending_events(&state.db).await?;
    Ok(Json(events))
}

#[instrument(skip(state))]
pub async fn list_by_organizer(
    State(state): State<AppState>,
    Path(organizer_id): Path<Uuid>,
) -> Result<Json<Vec<Event>>, ApiError> {
    let events = services::get_events_by_organizer(&state.db, organizer_id).await?;
    Ok(Json(events))
}

#[instrument(skip(state))]
pub async fn get_event(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Event>, ApiError> {
    let event = services::get_event(&state.db, id).await?;
    Ok(Json(event))
}

#[instrument(skip(state, payload))]
pub async fn update_event(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<EventRequest>,
) -> Result<Json<Event>, ApiError> {
    let event = services::update_event(&state.db, id, payload).await?;
    info!(event_id = %event.id, "event updated");
    Ok(Json(event))
}

#[instrument(skip(state))]
pub async fn approve_event(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Event>, ApiError> {
    let event = services::approve_event(&state.db, id).await?;
    info!(event_id = %event.id, "event approved");
    Ok(Json(event))
}

#[instrument(skip(state))]
pub async fn reject_event(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Event>, ApiError> {
    let event = services::reject_event(&state.db, id).await?;
    info!(event_id = %event.id, "event rejected");
    Ok(Json(event))
}

#[instrument(skip(state))]
pub async fn delete_event(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    services::delete_event(&state.db, id).await?;
    info!(event_id = %id, "event deleted");
    Ok(StatusCode::NO_CONTENT)
}
