/// Account endpoints
///
/// - `POST /signup` - Register a user
/// - `POST /login` - Exchange email and password for a session id

use crate::{
    app::AppState,
    error::{ApiError, ApiResult},
    extract::JsonBody,
};
use axum::{extract::State, http::StatusCode, Json};
use notekeep_shared::models::user::{CreateUser, User};
use serde::{Deserialize, Serialize};

/// Signup request
///
/// Missing fields decode as empty strings.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct SignupRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Login request
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Login response
#[derive(Debug, Serialize, Deserialize)]
pub struct LoginResponse {
    /// Session id to present on every notes request
    pub sid: String,
}

/// Register a new user
///
/// ```text
/// POST /signup
///
/// {"name": "Ann", "email": "a@x.com", "password": "p"}
/// ```
///
/// Responds `200` with an empty body. The same email may be registered
/// more than once.
///
/// # Errors
///
/// - `400 Bad Request`: Body is not a JSON object of strings
/// - `500 Internal Server Error`: The store rejected the insert
pub async fn signup(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<SignupRequest>,
) -> ApiResult<StatusCode> {
    let user_id = User::create(
        &state.db,
        CreateUser {
            name: req.name,
            email: req.email,
            password: req.password,
        },
    )
    .await?;

    tracing::info!(user_id, "User registered");
    Ok(StatusCode::OK)
}

/// Log in and obtain a session id
///
/// ```text
/// POST /login
///
/// {"email": "a@x.com", "password": "p"}
/// ```
///
/// Response:
///
/// ```json
/// {"sid": "9f2c…"}
/// ```
///
/// # Errors
///
/// - `400 Bad Request`: Body is not a JSON object of strings
/// - `401 Unauthorized`: No user with that email and password
pub async fn login(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<LoginRequest>,
) -> ApiResult<Json<LoginResponse>> {
    let user = User::find_by_email_and_password(&state.db, &req.email, &req.password)
        .await
        .map_err(|e| {
            tracing::warn!(error = %e, "Login lookup failed");
            ApiError::Unauthorized("Unauthorized".to_string())
        })?
        .ok_or_else(|| ApiError::Unauthorized("Unauthorized".to_string()))?;

    let sid = state.sessions.create(&req.email).await;

    tracing::info!(user_id = user.id, "User logged in");
    Ok(Json(LoginResponse { sid }))
}
