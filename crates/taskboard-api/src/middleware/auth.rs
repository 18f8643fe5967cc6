//! Bearer-token authentication middleware

use axum::{
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::Response,
};
use taskboard_domain::UserId;

use crate::{
    auth::{self, AuthSession},
    error::ApiError,
    state::AppState,
};

/// Require a valid `Authorization: Bearer <JWT>` header.
///
/// On success an [`AuthSession`] is inserted into request extensions for
/// downstream handlers; the session lives only for this request.
pub async fn require_auth(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .ok_or_else(|| ApiError::Authentication("missing bearer token".to_string()))?;

    let claims = auth::verify_token(token, &state.auth)?;
    let user_id = UserId::from_string(&claims.sub)
        .map_err(|_| ApiError::Authentication("malformed token subject".to_string()))?;

    request.extensions_mut().insert(AuthSession {
        user_id,
        username: claims.username,
        expires_at: claims.exp,
    });

    Ok(next.run(request).await)
}
