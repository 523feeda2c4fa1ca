use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use time::OffsetDateTime;
use uuid::Uuid;

/// Event lifecycle state. Only approved events are visible to participants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "event_status", rename_all = "UPPERCASE")]
#[serde(rename_all = "UPPERCASE")]
pub enum EventStatus {
    Pending,
    Approved,
    Rejected,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Event {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub event_date: OffsetDateTime,
    pub location: String,
    pub status: EventStatus,
    pub organizer_id: Uuid,
    pub created_at: OffsetDateTime,
}

impl Event {
    /// Inserts a new event. The status column defaults to PENDING in the
    /// schema and is deliberately not part of the insert.
    pub async fn create(
        db: &PgPool,
        title: &str,
        description: Option<&str>,
        event_date: OffsetDateTime,
        location: &str,
        organizer_id: Uuid,
    ) -> anyhow::Result<Event> {
        let event = sqlx::query_as::<_, Event>(
            r#"
            INSERT INTO events (title, description, event_date, location, organizer_id)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, title, description, event_date, location, status, organizer_id, created_at
            "#,
        )
        .bind(title)
        .bind(description)
        .bind(event_date)
        .bind(location)
        .bind(organizer_id)
        .fetch_one(db)
        .await?;
        Ok(event)
    }

    pub async fn find_by_id(db: &PgPool, id: Uuid) -> anyhow::Result<Option<Event>> {
        let event = sqlx::query_as::<_, Event>(
            r#"
            SELECT id, title, description, event_date, location, status, organizer_id, created_at
            FROM events
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(db)
        .await?;
        Ok(event)
    }

    /// Overwrites the editable fields. Status and organizer are untouched.
    pub async fn update_details(
        db: &PgPool,
        id: Uuid,
        title: &str,
        description: Option<&str>,
        event_date: OffsetDateTime,
        location: &str,
    ) -> anyhow::Result<Option<Event>> {
        let event = sqlx::query_as::<_, Event>(
            r#"
            UPDATE events
            SET title = $2, description = $3, event_date = $4, location = $5
            WHERE id = $1
            RETURNING id, title, description, event_date, location, status, organizer_id, created_at
            "#,
        )
        .bind(id)
        .bind(title)
        .bind(description)
        .bind(event_date)
        .bind(location)
        .fetch_optional(db)
        .await?;
        Ok(event)
    }

    pub async fn set_status(
        db: &PgPool,
        id: Uuid,
        status: EventStatus,
    ) -> anyhow::Result<Option<Event>> {
        let event = sqlx::query_as::<_, Event>(
            r#"
            UPDATE events
            SET status = $2
            WHERE id = $1
            RETURNING id, title, description, event_date, location, status, organizer_id, created_at
            "#,
        )
        .bind(id)
        .bind(status)
        .fetch_optional(db)
        .await?;
        Ok(event)
    }

    /// Deletes the event; its registrations go with it via the cascade.
    /// Returns whether a row was actually removed.
    pub async fn delete(db: &PgPool, id: Uuid) -> anyhow::Result<bool> {
        let result = sqlx::query("DELETE FROM events WHERE id = $1")
            .bind(id)
            .execute(db)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    pub async fn list_all(db: &PgPool) -> anyhow::Result<Vec<Event>> {
        let rows = sqlx::query_as::<_, Event>(
            r#"
            SELECT id, title, description, event_date, location, status, organizer_id, created_at
            FROM events
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(db)
        .await?;
        Ok(rows)
    }

    pub async fn list_by_status(db: &PgPool, status: EventStatus) -> anyhow::Result<Vec<Event>> {
        let rows = sqlx::query_as::<_, Event>(
            r#"
            SELECT id, title, description, event_date, location, status, organizer_id, created_at
            FROM events
            WHERE status = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(status)
        .fetch_all(db)
        .await?;
        Ok(rows)
    }

    pub async fn list_by_organizer(db: &PgPool, organizer_id: Uuid) -> anyhow::Result<Vec<Event>> {
        let rows = sqlx::query_as::<_, Event>(
            r#"
            SELECT id, title, description, event_date, location, status, organizer_id, created_at
            FROM events
            WHERE organizer_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(organizer_id)
        .fetch_all(db)
        .await?;
        Ok(rows)
    }
}

#[cfg(test)]
mod status_tests {
    use super::*;

    #[test]
    fn serializes_uppercase() {
        assert_eq!(
            serde_json::to_string(&EventStatus::Pending).unwrap(),
            "\"PENDING\""
        );
        assert_eq!(
            serde_json::to_string(&EventStatus::Approved).unwrap(),
            "\"APPROVED\""
        );
        assert_eq!(
            serde_json::to_string(&EventStatus::Rejected).unwrap(),
            "\"REJECTED\""
        );
    }

    #[test]
    fn deserializes_uppercase() {
        let status: EventStatus = serde_json::from_str("\"REJECTED\"").unwrap();
        assert_eq!(status, EventStatus::Rejected);
    }
}
