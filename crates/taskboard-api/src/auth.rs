//! JWT issuance/verification and password hashing

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use taskboard_domain::{User, UserId};

use crate::error::{ApiError, ApiResult};

/// Authentication configuration shared with handlers and middleware
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// HS256 signing secret
    pub jwt_secret: String,
    /// Token lifetime in hours
    pub token_ttl_hours: i64,
}

/// JWT claims carried by issued tokens
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject: the user ID
    pub sub: String,
    /// Username at issue time
    pub username: String,
    /// Issued-at (unix seconds)
    pub iat: i64,
    /// Expiration (unix seconds)
    pub exp: i64,
}

/// Per-request authenticated session, extracted from the bearer token by
/// the auth middleware and inserted into request extensions.
///
/// Created on successful login (token issue) and invalidated by expiry or
/// the client discarding the token; never stored globally.
#[derive(Debug, Clone)]
pub struct AuthSession {
    /// Authenticated user ID
    pub user_id: UserId,
    /// Username from the token claims
    pub username: String,
    /// Token expiration (unix seconds)
    pub expires_at: i64,
}

/// Issue a signed token for `user`; returns the token and its expiry
pub fn issue_token(user: &User, config: &AuthConfig) -> ApiResult<(String, i64)> {
    let now = Utc::now();
    let expires_at = (now + Duration::hours(config.token_ttl_hours)).timestamp();
    let claims = Claims {
        sub: user.id().to_string(),
        username: user.username().to_string(),
        iat: now.timestamp(),
        exp: expires_at,
    };

    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(config.jwt_secret.as_bytes()),
    )
    .map_err(|e| ApiError::Internal(format!("token issue failed: {}", e)))?;

    Ok((token, expires_at))
}

/// Verify a token's signature and expiry, returning its claims
pub fn verify_token(token: &str, config: &AuthConfig) -> ApiResult<Claims> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(config.jwt_secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(|e| ApiError::Authentication(format!("invalid token: {}", e)))
}

/// Hash a plaintext password with bcrypt
pub fn hash_password(password: &str) -> ApiResult<String> {
    bcrypt::hash(password, bcrypt::DEFAULT_COST)
        .map_err(|e| ApiError::Internal(format!("password hashing failed: {}", e)))
}

/// Check a plaintext password against a stored bcrypt hash
pub fn verify_password(password: &str, hash: &str) -> ApiResult<bool> {
    bcrypt::verify(password, hash)
        .map_err(|e| ApiError::Internal(format!("password verification failed: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> AuthConfig {
        AuthConfig {
            jwt_secret: "test-secret".to_string(),
            token_ttl_hours: 24,
        }
    }

    fn test_user() -> User {
        User::new(
            "alice".to_string(),
            "alice@example.com".to_string(),
            "hash".to_string(),
        )
        .unwrap()
    }

    #[test]
    fn test_issue_and_verify_round_trip() {
        let config = test_config();
        let user = test_user();

        let (token, expires_at) = issue_token(&user, &config).unwrap();
        let claims = verify_token(&token, &config).unwrap();

        assert_eq!(claims.sub, user.id().to_string());
        assert_eq!(claims.username, "alice");
        assert_eq!(claims.exp, expires_at);
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn test_verify_rejects_wrong_secret() {
        let config = test_config();
        let (token, _) = issue_token(&test_user(), &config).unwrap();

        let other = AuthConfig {
            jwt_secret: "other-secret".to_string(),
            token_ttl_hours: 24,
        };
        assert!(matches!(
            verify_token(&token, &other),
            Err(ApiError::Authentication(_))
        ));
    }

    #[test]
    fn test_verify_rejects_expired_token() {
        let config = AuthConfig {
            jwt_secret: "test-secret".to_string(),
            token_ttl_hours: -2,
        };
        let (token, _) = issue_token(&test_user(), &config).unwrap();
        assert!(verify_token(&token, &config).is_err());
    }

    #[test]
    fn test_verify_rejects_garbage() {
        assert!(verify_token("not-a-token", &test_config()).is_err());
    }

    #[test]
    fn test_password_hash_round_trip() {
        let hash = hash_password("hunter2hunter2").unwrap();
        assert!(verify_password("hunter2hunter2", &hash).unwrap());
        assert!(!verify_password("wrong-password", &hash).unwrap());
    }
}
