use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use tracing::{info, instrument, warn};
use uuid::Uuid;

use crate::error::ApiError;
use crate::state::AppState;
use crate::users::{
    dto::{LoginRequest, PublicUser, RegisterRequest},
    services,
};

pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users/register", post(register))
        .route("/users/login", post(login))
        .route("/users/:id", get(get_user))
}

#[instrument(skip(state, payload))]
pub async fn register(
    State(state): State<AppState>,
    Json(mut payload): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<PublicUser>), ApiError> {
    payload.email = payload.email.trim().to_string();

    let user = services::register_user(&state.db, &payload.email, &payload.password).await?;

    info!(user_id = %user.id, email = %user.email, "user registered");
    Ok((StatusCode::CREATED, Json(user.into())))
}

#[instrument(skip(state, payload))]
pub async fn login(
    State(state): State<AppState>,
    Json(mut payload): Json<LoginRequest>,
) -> Result<Json<PublicUser>, ApiError> {
    payload.email = payload.email.trim().to_string();

    match services::login(&state.db, &payload.email, &payload.password).await? {
        Some(user) => {
            info!(user_id = %user.id, "user logged in");
            Ok(Json(user.into()))
        }
        None => {
            warn!(email = %payload.email, "login failed");
            Err(ApiError::unauthorized("Invalid credentials"))
        }
    }
}

#[instrument(skip(state))]
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<PublicUser>, ApiError> {
    let user = services::get_user(&state.db, id).await?;
    Ok(Json(user.into()))
}

#[cfg(test)]
mod serialization_tests {
    use crate::users::dto::PublicUser;
    use time::OffsetDateTime;

    #[test]
    fn public_user_serializes_without_password_hash() {
        let response = PublicUser {
            id: uuid::Uuid::new_v4(),
            email: "test@example.com".to_string(),
            created_at: OffsetDateTime::UNIX_EPOCH,
        };

        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("test@example.com"));
        assert!(json.contains("id"));
        assert!(!json.contains("password"));
    }
}
