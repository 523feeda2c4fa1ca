use sqlx::PgPool;
use uuid::Uuid;

use crate::error::ApiError;
use crate::events::services as events;
use crate::registrations::repo::Registration;
use crate::users::services as users;

/// Registers a participant for an event, at most once per pair. Both
/// references are resolved first; the duplicate check is backed by the
/// unique index, so a concurrent double-submit still ends up as a conflict.
pub async fn register_for_event(
    db: &PgPool,
    event_id: Uuid,
    participant_id: Uuid,
) -> Result<Registration, ApiError> {
    events::get_event(db, event_id).await?;
    users::get_user(db, participant_id).await?;

    if Registration::find_by_event_and_participant(db, event_id, participant_id)
        .await?
        .is_some()
    {
        return Err(ApiError::conflict("Already registered for this event"));
    }

    Registration::create(db, event_id, participant_id)
        .await
        .map_err(|e| ApiError::unique_violation(e, "Already registered for this event"))
}

pub async fn get_event_registrations(
    db: &PgPool,
    event_id: Uuid,
) -> Result<Vec<Registration>, ApiError> {
    Ok(Registration::list_by_event(db, event_id).await?)
}

pub async fn get_user_registrations(
    db: &PgPool,
    participant_id: Uuid,
) -> Result<Vec<Registration>, ApiError> {
    Ok(Registration::list_by_participant(db, participant_id).await?)
}

/// The subset of the participant's registrations whose event is APPROVED.
pub async fn get_approved_registrations(
    db: &PgPool,
    participant_id: Uuid,
) -> Result<Vec<Registration>, ApiError> {
    Ok(Registration::list_approved_by_participant(db, participant_id).await?)
}

/// Overwrites the attended flag. No rule ties this to the event date or
/// status; the flag can be set or cleared at any time.
pub async fn mark_attendance(
    db: &PgPool,
    registration_id: Uuid,
    attended: bool,
) -> Result<Registration, ApiError> {
    Registration::set_attended(db, registration_id, attended)
        .await?
        .ok_or_else(|| ApiError::not_found("Registration not found"))
}
