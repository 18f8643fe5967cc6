//! Authentication API handlers

use axum::{extract::State, http::StatusCode, Json};
use taskboard_domain::{User, UserRepository};

use crate::{
    auth,
    error::{ApiError, ApiResult},
    models::{AuthRequest, AuthResponse, RegisterRequest, UserInfo},
    state::AppState,
};

const MIN_PASSWORD_LENGTH: usize = 8;

/// Register a new user
#[utoipa::path(
    post,
    path = "/api/v1/auth/register",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "User registered", body = AuthResponse),
        (status = 400, description = "Invalid username, email, or password"),
        (status = 409, description = "Username or email already taken"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn register(
    State(state): State<AppState>,
    Json(request): Json<RegisterRequest>,
) -> ApiResult<(StatusCode, Json<AuthResponse>)> {
    if request.password.len() < MIN_PASSWORD_LENGTH {
        return Err(ApiError::BadRequest(format!(
            "Password must be at least {} characters",
            MIN_PASSWORD_LENGTH
        )));
    }

    let password_hash = auth::hash_password(&request.password)?;
    let user = User::new(request.username, request.email, password_hash)?;
    // The repository enforces username and email uniqueness atomically;
    // a taken value surfaces as DuplicateEntity and maps to 409.
    state.users.create(&user).await?;

    tracing::info!(username = %user.username(), "user registered");

    let (token, expires_at) = auth::issue_token(&user, &state.auth)?;
    let response = AuthResponse {
        token,
        expires_at,
        user: UserInfo::from(&user),
    };

    Ok((StatusCode::CREATED, Json(response)))
}

/// Authenticate user
#[utoipa::path(
    post,
    path = "/api/v1/auth/login",
    request_body = AuthRequest,
    responses(
        (status = 200, description = "Authentication successful", body = AuthResponse),
        (status = 401, description = "Authentication failed"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<AuthRequest>,
) -> ApiResult<Json<AuthResponse>> {
    // Same error for unknown user and wrong password
    let user = state
        .users
        .find_by_username(request.username.trim())
        .await?
        .ok_or_else(|| ApiError::Authentication("Invalid credentials".to_string()))?;

    if !auth::verify_password(&request.password, user.password_hash())? {
        return Err(ApiError::Authentication("Invalid credentials".to_string()));
    }

    let (token, expires_at) = auth::issue_token(&user, &state.auth)?;
    tracing::info!(username = %user.username(), "user logged in");

    Ok(Json(AuthResponse {
        token,
        expires_at,
        user: UserInfo::from(&user),
    }))
}

/// Logout user
///
/// Tokens are stateless; the session ends when the client discards the
/// token or it expires. No server-side revocation list is kept.
#[utoipa::path(
    post,
    path = "/api/v1/auth/logout",
    responses(
        (status = 204, description = "Logout successful")
    )
)]
pub async fn logout() -> StatusCode {
    StatusCode::NO_CONTENT
}
