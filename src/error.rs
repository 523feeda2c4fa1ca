use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// Failure kinds surfaced by the workflow operations. `NotFound` and
/// `Conflict` are business-rule failures; `Validation` rejects malformed
/// input before any lookup; `Internal` wraps storage or runtime faults.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Conflict(String),
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    Unauthorized(String),
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl ApiError {
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn unauthorized(msg: impl Into<String>) -> Self {
        Self::Unauthorized(msg.into())
    }

    /// Remaps a storage error to `Conflict` when a unique index rejected the
    /// insert. The index, not the service-level pre-check, is what holds
    /// under concurrent requests for the same key.
    pub fn unique_violation(err: anyhow::Error, conflict: &str) -> Self {
        match err.downcast_ref::<sqlx::Error>() {
            Some(sqlx::Error::Database(db)) if db.is_unique_violation() => {
                Self::Conflict(conflict.to_string())
            }
            _ => Self::Internal(err),
        }
    }

    fn status(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Conflict(_) => StatusCode::CONFLICT,
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match &self {
            Self::Internal(e) => {
                tracing::error!(error = %e, "internal error");
                "Internal server error".to_string()
            }
            other => other.to_string(),
        };
        (status, Json(ErrorBody { error: message })).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_error_kinds_to_status_codes() {
        assert_eq!(
            ApiError::not_found("Event not found").status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::conflict("Email already exists").status(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            ApiError::validation("Invalid email").status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::unauthorized("Invalid credentials").status(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            ApiError::Internal(anyhow::anyhow!("boom")).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn displays_the_business_message() {
        let err = ApiError::conflict("Already registered for this event");
        assert_eq!(err.to_string(), "Already registered for this event");
    }

    #[test]
    fn non_unique_storage_errors_stay_internal() {
        let err = ApiError::unique_violation(anyhow::anyhow!("connection reset"), "duplicate");
        assert!(matches!(err, ApiError::Internal(_)));
    }
}
