use serde::Deserialize;
use uuid::Uuid;

/// Request body for registering a participant for an event.
#[derive(Debug, Deserialize)]
pub struct RegistrationRequest {
    pub event_id: Uuid,
    pub participant_id: Uuid,
}

/// Request body for marking attendance.
#[derive(Debug, Deserialize)]
pub struct AttendanceRequest {
    pub attended: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attendance_request_requires_the_flag() {
        let req: AttendanceRequest = serde_json::from_str(r#"{"attended": true}"#).unwrap();
        assert!(req.attended);

        assert!(serde_json::from_str::<AttendanceRequest>("{}").is_err());
    }
}
