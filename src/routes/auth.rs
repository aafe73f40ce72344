//! 계정 라우트: 회원가입, 로그인, 토큰 갱신, 로그아웃, 내 정보.
//!
//! 번역 API가 쓰는 `Caller`의 출처입니다. 액세스 토큰은 짧게, 리프레시 토큰은
//! 길게 발급하고 리프레시 토큰은 SHA-256 해시로만 저장합니다. 갱신 시 이전 토큰은 폐기됩니다.

use crate::{
    db::users as db_users,
    error::AppError,
    middleware::{
        auth::{create_token, hash_token, verify_token, TokenKind},
        ApiJson,
    },
    models::*,
    routes::AppState,
    services::timestamps::{format_timestamp, parse_timestamp},
};
use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use axum::{extract::State, http::StatusCode, Json};
use chrono::Utc;

fn validate_registration(req: &RegisterRequest) -> Result<(), AppError> {
    if req.username.trim().chars().count() < 3 {
        return Err(AppError::Validation(
            "Username must be at least 3 characters".to_string(),
        ));
    }
    if req.password.chars().count() < 8 {
        return Err(AppError::Validation(
            "Password must be at least 8 characters".to_string(),
        ));
    }
    if let Some(email) = &req.email {
        if !email.contains('@') {
            return Err(AppError::Validation("Invalid email address".to_string()));
        }
    }
    Ok(())
}

/// 액세스/리프레시 토큰 쌍을 발급하고 리프레시 토큰 해시를 저장합니다.
async fn issue_tokens(state: &AppState, user: User) -> Result<AuthResponse, AppError> {
    let token_error = |e: jsonwebtoken::errors::Error| {
        AppError::Internal(format!("Token generation failed: {}", e))
    };
    let access_token = create_token(
        &user.id,
        &state.jwt_secret,
        TokenKind::Access,
        state.access_token_ttl,
    )
    .map_err(token_error)?;
    let refresh_token = create_token(
        &user.id,
        &state.jwt_secret,
        TokenKind::Refresh,
        state.refresh_token_ttl,
    )
    .map_err(token_error)?;

    let token_id = uuid::Uuid::now_v7().to_string();
    let expires_at = format_timestamp(Utc::now() + state.refresh_token_ttl);
    db_users::store_refresh_token(
        &state.pool,
        &token_id,
        &user.id,
        &hash_token(&refresh_token),
        &expires_at,
    )
    .await?;

    Ok(AuthResponse {
        user: user.into(),
        access_token,
        refresh_token,
    })
}

pub async fn register(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<RegisterRequest>,
) -> Result<(StatusCode, Json<ApiResponse<AuthResponse>>), AppError> {
    validate_registration(&req)?;
    let username = req.username.trim();

    if db_users::find_by_username(&state.pool, username).await?.is_some() {
        return Err(AppError::Conflict("Username already exists".to_string()));
    }
    if let Some(email) = &req.email {
        if db_users::find_by_email(&state.pool, email).await?.is_some() {
            return Err(AppError::Conflict("Email already exists".to_string()));
        }
    }

    let salt = SaltString::generate(&mut OsRng);
    let password_hash = Argon2::default()
        .hash_password(req.password.as_bytes(), &salt)
        .map_err(|e| AppError::Internal(format!("Password hashing failed: {}", e)))?
        .to_string();

    let user_id = uuid::Uuid::now_v7().to_string();
    let user = db_users::create_user(
        &state.pool,
        &user_id,
        username,
        req.email.as_deref(),
        &password_hash,
    )
    .await?;
    tracing::info!(user_id = %user.id, "Registered user");

    let response = issue_tokens(&state, user).await?;
    Ok((StatusCode::CREATED, ApiResponse::ok(response)))
}

pub async fn login(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<LoginRequest>,
) -> Result<Json<ApiResponse<AuthResponse>>, AppError> {
    let invalid = || AppError::Unauthorized("Invalid username or password".to_string());

    let user = db_users::find_by_username(&state.pool, req.username.trim())
        .await?
        .ok_or_else(invalid)?;

    let parsed_hash = PasswordHash::new(&user.password_hash)
        .map_err(|e| AppError::Internal(format!("Password hash parse error: {}", e)))?;
    Argon2::default()
        .verify_password(req.password.as_bytes(), &parsed_hash)
        .map_err(|_| invalid())?;

    Ok(ApiResponse::ok(issue_tokens(&state, user).await?))
}

pub async fn refresh(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<RefreshRequest>,
) -> Result<Json<ApiResponse<AuthResponse>>, AppError> {
    let revoked = || AppError::Unauthorized("Refresh token not found or revoked".to_string());

    verify_token(&req.refresh_token, &state.jwt_secret, TokenKind::Refresh)
        .map_err(|_| AppError::Unauthorized("Invalid refresh token".to_string()))?;

    let token_hash = hash_token(&req.refresh_token);
    let stored = db_users::find_refresh_token(&state.pool, &token_hash)
        .await?
        .ok_or_else(revoked)?;

    let expires = parse_timestamp(&stored.expires_at).ok_or_else(|| {
        AppError::Internal(format!("Bad refresh token expiry: {}", stored.expires_at))
    })?;
    // 한 번 쓴 리프레시 토큰은 만료 여부와 관계없이 폐기합니다.
    // 삭제에 성공한 요청 하나만 새 토큰을 받습니다.
    if db_users::delete_refresh_token(&state.pool, &token_hash).await? == 0 {
        return Err(revoked());
    }
    if expires < Utc::now() {
        return Err(AppError::Unauthorized("Refresh token expired".to_string()));
    }

    let user = db_users::find_by_id(&state.pool, &stored.user_id)
        .await?
        .ok_or(AppError::Unauthorized("User not found".to_string()))?;

    Ok(ApiResponse::ok(issue_tokens(&state, user).await?))
}

pub async fn logout(
    State(state): State<AppState>,
    caller: Caller,
) -> Result<Json<ApiResponse<serde_json::Value>>, AppError> {
    let revoked = db_users::delete_user_refresh_tokens(&state.pool, &caller.user_id).await?;
    tracing::info!(user_id = %caller.user_id, revoked, "Logged out");

    Ok(ApiResponse::ok(serde_json::json!({ "revokedTokens": revoked })))
}

pub async fn me(
    State(state): State<AppState>,
    caller: Caller,
) -> Result<Json<ApiResponse<UserResponse>>, AppError> {
    let user = db_users::find_by_id(&state.pool, &caller.user_id)
        .await?
        .ok_or(AppError::NotFound("User"))?;

    Ok(ApiResponse::ok(user.into()))
}
