//! Bearer 토큰 인증.
//!
//! `Caller` 추출기가 `Authorization: Bearer <token>` 헤더를 검증하고,
//! 실패하면 핸들러 본문(=저장소 접근) 전에 `UNAUTHORIZED`로 응답합니다.

use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
    response::{IntoResponse, Response},
};
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::{error::AppError, models::Caller, routes::AppState};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenKind {
    Access,
    Refresh,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    pub sub: String, // user id
    pub exp: i64,
    pub iat: i64,
    /// 같은 초에 발급된 토큰도 서로 다르게 (리프레시 토큰 해시는 UNIQUE)
    pub jti: String,
    pub typ: TokenKind,
}

impl FromRequestParts<AppState> for Caller {
    type Rejection = AuthError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .ok_or(AuthError::MissingToken)?;

        let token = auth_header
            .strip_prefix("Bearer ")
            .ok_or(AuthError::InvalidToken)?;

        let claims = verify_token(token, &state.jwt_secret, TokenKind::Access)?;

        Ok(Caller::new(claims.sub))
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum AuthError {
    MissingToken,
    InvalidToken,
    ExpiredToken,
}

impl AuthError {
    fn message(&self) -> &'static str {
        match self {
            AuthError::MissingToken => "Authorization token is required",
            AuthError::InvalidToken => "Invalid authorization token",
            AuthError::ExpiredToken => "Authorization token has expired",
        }
    }
}

impl From<AuthError> for AppError {
    fn from(err: AuthError) -> Self {
        AppError::Unauthorized(err.message().to_string())
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        AppError::from(self).into_response()
    }
}

pub fn create_token(
    user_id: &str,
    secret: &str,
    kind: TokenKind,
    ttl: Duration,
) -> Result<String, jsonwebtoken::errors::Error> {
    let now = Utc::now();
    let claims = Claims {
        sub: user_id.to_string(),
        iat: now.timestamp(),
        exp: (now + ttl).timestamp(),
        jti: uuid::Uuid::now_v7().to_string(),
        typ: kind,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
}

/// 서명·만료를 검증하고, 토큰 종류가 `expected`와 다르면 거절합니다.
/// (리프레시 토큰을 액세스 토큰처럼 쓸 수 없게)
pub fn verify_token(token: &str, secret: &str, expected: TokenKind) -> Result<Claims, AuthError> {
    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .map_err(|e| match e.kind() {
        jsonwebtoken::errors::ErrorKind::ExpiredSignature => AuthError::ExpiredToken,
        _ => AuthError::InvalidToken,
    })?;

    if token_data.claims.typ != expected {
        return Err(AuthError::InvalidToken);
    }

    Ok(token_data.claims)
}

pub fn hash_token(token: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(token.as_bytes());
    format!("{:x}", hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Request;

    const SECRET: &str = "test-secret";

    async fn extract(header: Option<&str>) -> Result<Caller, AuthError> {
        let state = crate::testing::state().await;
        let mut builder = Request::builder().uri("/api/v1/translation-sessions");
        if let Some(value) = header {
            builder = builder.header(AUTHORIZATION, value);
        }
        let (mut parts, _) = builder.body(()).unwrap().into_parts();
        Caller::from_request_parts(&mut parts, &state).await
    }

    #[tokio::test]
    async fn valid_access_token_yields_caller() {
        let token =
            create_token("user-1", SECRET, TokenKind::Access, Duration::minutes(5)).unwrap();
        let caller = extract(Some(&format!("Bearer {token}"))).await.unwrap();
        assert_eq!(caller, Caller::new("user-1"));
    }

    #[tokio::test]
    async fn missing_header_is_rejected() {
        assert_eq!(extract(None).await.unwrap_err(), AuthError::MissingToken);
    }

    #[tokio::test]
    async fn non_bearer_scheme_is_rejected() {
        assert_eq!(
            extract(Some("Basic dXNlcjpwYXNz")).await.unwrap_err(),
            AuthError::InvalidToken
        );
    }

    #[tokio::test]
    async fn refresh_token_cannot_authenticate_requests() {
        let token = create_token("user-1", SECRET, TokenKind::Refresh, Duration::days(1)).unwrap();
        assert_eq!(
            extract(Some(&format!("Bearer {token}"))).await.unwrap_err(),
            AuthError::InvalidToken
        );
    }

    #[test]
    fn expired_token_is_reported_as_expired() {
        // jsonwebtoken 기본 leeway(60초)보다 충분히 과거
        let token =
            create_token("user-1", SECRET, TokenKind::Access, Duration::minutes(-10)).unwrap();
        assert_eq!(
            verify_token(&token, SECRET, TokenKind::Access).unwrap_err(),
            AuthError::ExpiredToken
        );
    }

    #[test]
    fn wrong_secret_is_invalid() {
        let token =
            create_token("user-1", SECRET, TokenKind::Access, Duration::minutes(5)).unwrap();
        assert_eq!(
            verify_token(&token, "other", TokenKind::Access).unwrap_err(),
            AuthError::InvalidToken
        );
    }

    #[test]
    fn hash_is_stable_hex_sha256() {
        let hash = hash_token("abc");
        assert_eq!(hash.len(), 64);
        assert_eq!(hash, hash_token("abc"));
        assert_ne!(hash, hash_token("abd"));
    }
}
