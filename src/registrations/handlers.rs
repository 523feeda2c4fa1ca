use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post, put},
    Json, Router,
};
use tracing::{info, instrument};
use uuid::Uuid;

use crate::error::ApiError;
use crate::registrations::{
    dto::{AttendanceRequest, RegistrationRequest},
    repo::Registration,
    services,
};
use crate::state::AppState;

pub fn read_routes() -> Router<AppState> {
    Router::new()
        .route("/registrations/event/:event_id", get(list_for_event))
        .route(
            "/registrations/participant/:participant_id",
            get(list_for_participant),
        )
        .route(
            "/registrations/participant/:participant_id/approved",
            get(list_approved_for_participant),
        )
}

pub fn write_routes() -> Router<AppState> {
    Router::new()
        .route("/registrations", post(register_for_event))
        .route("/registrations/:id/attendance", put(mark_attendance))
}

#[instrument(skip(state, payload))]
pub async fn register_for_event(
    State(state): State<AppState>,
    Json(payload): Json<RegistrationRequest>,
) -> Result<(StatusCode, Json<Registration>), ApiError> {
    let registration =
        services::register_for_event(&state.db, payload.event_id, payload.participant_id).await?;
    info!(
        registration_id = %registration.id,
        event_id = %registration.event_id,
        participant_id = %registration.participant_id,
        "participant registered"
    );
    Ok((StatusCode::CREATED, Json(registration)))
}

#[instrument(skip(state))]
pub async fn list_for_event(
    State(state): State<AppState>,
    Path(event_id): Path<Uuid>,
) -> Result<Json<Vec<Registration>>, ApiError> {
    let registrations = services::get_event_registrations(&state.db, event_id).await?;
    Ok(Json(registrations))
}

#[instrument(skip(state))]
pub async fn list_for_participant(
    State(state): State<AppState>,
    Path(participant_id): Path<Uuid>,
) -> Result<Json<Vec<Registration>>, ApiError> {
    let registrations = services::get_user_registrations(&state.db, participant_id).await?;
    Ok(Json(registrations))
}

#[instrument(skip(state))]
pub async fn list_approved_for_participant(
    State(state): State<AppState>,
    Path(participant_id): Path<Uuid>,
) -> Result<Json<Vec<Registration>>, ApiError> {
    let registrations = services::get_approved_registrations(&state.db, participant_id).await?;
    Ok(Json(registrations))
}

#[instrument(skip(state, payload))]
pub async fn mark_attendance(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<AttendanceRequest>,
) -> Result<Json<Registration>, ApiError> {
    let registration = services::mark_attendance(&state.db, id, payload.attended).await?;
    info!(registration_id = %registration.id, attended = registration.attended, "attendance marked");
    Ok(Json(registration))
}
