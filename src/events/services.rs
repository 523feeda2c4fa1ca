use sqlx::PgPool;
use uuid::Uuid;

use crate::error::ApiError;
use crate::events::dto::EventRequest;
use crate::events::repo::{Event, EventStatus};
use crate::users::repo::User;

/// Matches the description column width in the schema.
const MAX_DESCRIPTION_LEN: usize = 2000;

fn validate_request(req: &EventRequest) -> Result<(), ApiError> {
    if req.title.trim().is_empty() {
        return Err(ApiError::validation("Title is required"));
    }
    if let Some(description) = &req.description {
        if description.chars().count() > MAX_DESCRIPTION_LEN {
            return Err(ApiError::validation("Description too long"));
        }
    }
    if req.location.trim().is_empty() {
        return Err(ApiError::validation("Location is required"));
    }
    Ok(())
}

/// Creates an event owned by an existing organizer. New events always start
/// out PENDING, whatever the caller sent.
pub async fn create_event(db: &PgPool, req: EventRequest) -> Result<Event, ApiError> {
    validate_request(&req)?;

    let organizer = User::find_by_id(db, req.organizer_id)
        .await?
        .ok_or_else(|| ApiError::not_found("Organizer not found"))?;

    let event = Event::create(
        db,
        &req.title,
        req.description.as_deref(),
        req.event_date,
        &req.location,
        organizer.id,
    )
    .await?;
    Ok(event)
}

/// Overwrites title, description, date and location. Status and organizer
/// are not editable through this operation.
pub async fn update_event(db: &PgPool, id: Uuid, req: EventRequest) -> Result<Event, ApiError> {
    validate_request(&req)?;

    Event::update_details(
        db,
        id,
        &req.title,
        req.description.as_deref(),
        req.event_date,
        &req.location,
    )
    .await?
    .ok_or_else(|| ApiError::not_found("Event not found"))
}

/// Sets the status to APPROVED. Re-approving an already approved or
/// rejected event is allowed.
pub async fn approve_event(db: &PgPool, id: Uuid) -> Result<Event, ApiError> {
    Event::set_status(db, id, EventStatus::Approved)
        .await?
        .ok_or_else(|| ApiError::not_found("Event not found"))
}

/// Sets the status to REJECTED, with the same free-transition rule as
/// approval.
pub async fn reject_event(db: &PgPool, id: Uuid) -> Result<Event, ApiError> {
    Event::set_status(db, id, EventStatus::Rejected)
        .await?
        .ok_or_else(|| ApiError::not_found("Event not found"))
}

/// Deleting an unknown id is an error, not a silent no-op.
pub async fn delete_event(db: &PgPool, id: Uuid) -> Result<(), ApiError> {
    if Event::delete(db, id).await? {
        Ok(())
    } else {
        Err(ApiError::not_found("Event not found"))
    }
}

pub async fn get_event(db: &PgPool, id: Uuid) -> Result<Event, ApiError> {
    Event::find_by_id(db, id)
        .await?
        .ok_or_else(|| ApiError::not_found("Event not found"))
}

pub async fn get_all_events(db: &PgPool) -> Result<Vec<Event>, ApiError> {
    Ok(Event::list_all(db).await?)
}

pub async fn get_approved_events(db: &PgPool) -> Result<Vec<Event>, ApiError> {
    Ok(Event::list_by_status(db, EventStatus::Approved).await?)
}

pub async fn get_pending_events(db: &PgPool) -> Result<Vec<Event>, ApiError> {
    Ok(Event::list_by_status(db, EventStatus::Pending).await?)
}

pub async fn get_events_by_organizer(
    db: &PgPool,
    organizer_id: Uuid,
) -> Result<Vec<Event>, ApiError> {
    Ok(Event::list_by_organizer(db, organizer_id).await?)
}

#[cfg(test)]
mod validation_tests {
    use super::*;
    use time::OffsetDateTime;

    fn request(title: &str, description: Option<String>, location: &str) -> EventRequest {
        EventRequest {
            title: title.to_string(),
            description,
            event_date: OffsetDateTime::UNIX_EPOCH,
            location: location.to_string(),
            organizer_id: uuid::Uuid::new_v4(),
        }
    }

    #[test]
    fn rejects_blank_title() {
        let err = validate_request(&request("   ", None, "Berlin")).unwrap_err();
        assert!(matches!(err, ApiError::Validation(_)));
    }

    #[test]
    fn rejects_oversized_description() {
        let long = "x".repeat(MAX_DESCRIPTION_LEN + 1);
        let err = validate_request(&request("Meetup", Some(long), "Berlin")).unwrap_err();
        assert!(matches!(err, ApiError::Validation(_)));
    }

    #[test]
    fn accepts_description_at_the_limit() {
        let exact = "x".repeat(MAX_DESCRIPTION_LEN);
        assert!(validate_request(&request("Meetup", Some(exact), "Berlin")).is_ok());
    }

    #[test]
    fn rejects_blank_location() {
        let err = validate_request(&request("Meetup", None, "")).unwrap_err();
        assert!(matches!(err, ApiError::Validation(_)));
    }
}
