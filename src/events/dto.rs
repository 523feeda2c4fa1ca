use serde::Deserialize;
use time::OffsetDateTime;
use uuid::Uuid;

/// Request body for creating or updating an event. A `status` key in the
/// payload is ignored: the lifecycle state only moves through the
/// approve/reject operations. `name` is accepted as an alias for `title`.
#[derive(Debug, Deserialize)]
pub struct EventRequest {
    #[serde(alias = "name")]
    pub title: String,
    pub description: Option<String>,
    #[serde(with = "time::serde::rfc3339")]
    pub event_date: OffsetDateTime,
    pub location: String,
    pub organizer_id: Uuid,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_name_as_alias_for_title() {
        let req: EventRequest = serde_json::from_str(
            r#"{
                "name": "RustConf",
                "description": "annual conference",
                "event_date": "2026-09-12T09:00:00Z",
                "location": "Montreal",
                "organizer_id": "7f4df4c2-9c3b-44f5-a9d8-2f6a1f1f3b11"
            }"#,
        )
        .unwrap();
        assert_eq!(req.title, "RustConf");
    }

    #[test]
    fn caller_supplied_status_is_dropped() {
        let req: EventRequest = serde_json::from_str(
            r#"{
                "title": "Meetup",
                "description": null,
                "event_date": "2026-10-01T18:30:00Z",
                "location": "Berlin",
                "organizer_id": "7f4df4c2-9c3b-44f5-a9d8-2f6a1f1f3b11",
                "status": "APPROVED"
            }"#,
        )
        .unwrap();
        // The request type has no status field to smuggle a state through.
        assert_eq!(req.title, "Meetup");
        assert_eq!(req.location, "Berlin");
    }

    #[test]
    fn event_date_parses_rfc3339_with_offset() {
        let req: EventRequest = serde_json::from_str(
            r#"{
                "title": "Workshop",
                "event_date": "2026-11-05T10:00:00+02:00",
                "location": "Vienna",
                "organizer_id": "7f4df4c2-9c3b-44f5-a9d8-2f6a1f1f3b11"
            }"#,
        )
        .unwrap();
        assert_eq!(req.event_date.offset().whole_hours(), 2);
        assert!(req.description.is_none());
    }
}
