use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use time::OffsetDateTime;
use uuid::Uuid;

use crate::events::repo::EventStatus;

/// A participant's registration for an event. Holds plain foreign keys;
/// event and participant details are fetched separately when needed.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Registration {
    pub id: Uuid,
    pub event_id: Uuid,
    pub participant_id: Uuid,
    pub attended: bool,
    pub registered_at: OffsetDateTime,
}

impl Registration {
    /// Inserts a registration; `attended` starts false via the schema
    /// default. The unique index on (event_id, participant_id) rejects
    /// duplicates that race past the service-level check.
    pub async fn create(
        db: &PgPool,
        event_id: Uuid,
        participant_id: Uuid,
    ) -> anyhow::Result<Registration> {
        let registration = sqlx::query_as::<_, Registration>(
            r#"
            INSERT INTO registrations (event_id, participant_id)
            VALUES ($1, $2)
            RETURNING id, event_id, participant_id, attended, registered_at
            "#,
        )
        .bind(event_id)
        .bind(participant_id)
        .fetch_one(db)
        .await?;
        Ok(registration)
    }

    pub async fn find_by_id(db: &PgPool, id: Uuid) -> anyhow::Result<Option<Registration>> {
        let registration = sqlx::query_as::<_, Registration>(
            r#"
            SELECT id, event_id, participant_id, attended, registered_at
            FROM registrations
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(db)
        .await?;
        Ok(registration)
    }

    pub async fn find_by_event_and_participant(
        db: &PgPool,
        event_id: Uuid,
        participant_id: Uuid,
    ) -> anyhow::Result<Option<Registration>> {
        let registration = sqlx::query_as::<_, Registration>(
            r#"
            SELECT id, event_id, participant_id, attended, registered_at
            FROM registrations
            WHERE event_id = $1 AND participant_id = $2
            "#,
        )
        .bind(event_id)
        .bind(participant_id)
        .fetch_optional(db)
        .await?;
        Ok(registration)
    }

    pub async fn list_by_event(db: &PgPool, event_id: Uuid) -> anyhow::Result<Vec<Registration>> {
        let rows = sqlx::query_as::<_, Registration>(
            r#"
            SELECT id, event_id, participant_id, attended, registered_at
            FROM registrations
            WHERE event_id = $1
            ORDER BY registered_at DESC
            "#,
        )
        .bind(event_id)
        .fetch_all(db)
        .await?;
        Ok(rows)
    }

    pub async fn list_by_participant(
        db: &PgPool,
        participant_id: Uuid,
    ) -> anyhow::Result<Vec<Registration>> {
        let rows = sqlx::query_as::<_, Registration>(
            r#"
            SELECT id, event_id, participant_id, attended, registered_at
            FROM registrations
            WHERE participant_id = $1
            ORDER BY registered_at DESC
            "#,
        )
        .bind(participant_id)
        .fetch_all(db)
        .await?;
        Ok(rows)
    }

    /// The participant's registrations restricted to approved events.
    pub async fn list_approved_by_participant(
        db: &PgPool,
        participant_id: Uuid,
    ) -> anyhow::Result<Vec<Registration>> {
        let rows = sqlx::query_as::<_, Registration>(
            r#"
            SELECT r.id, r.event_id, r.participant_id, r.attended, r.registered_at
            FROM registrations r
            JOIN events e ON e.id = r.event_id
            WHERE r.participant_id = $1 AND e.status = $2
            ORDER BY r.registered_at DESC
            "#,
        )
        .bind(participant_id)
        .bind(EventStatus::Approved)
        .fetch_all(db)
        .await?;
        Ok(rows)
    }

    pub async fn set_attended(
        db: &PgPool,
        id: Uuid,
        attended: bool,
    ) -> anyhow::Result<Option<Registration>> {
        let registration = sqlx::query_as::<_, Registration>(
            r#"
            UPDATE registrations
            SET attended = $2
            WHERE id = $1
            RETURNING id, event_id, participant_id, attended, registered_at
            "#,
        )
        .bind(id)
        .bind(attended)
        .fetch_optional(db)
        .await?;
        Ok(registration)
    }
}
