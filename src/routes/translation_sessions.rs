//! # 번역 세션 라우트 핸들러
//!
//! ## 엔드포인트
//! | 메서드 | 경로 | 핸들러 |
//! |--------|------|--------|
//! | GET | /api/v1/translation-sessions | `list_translation_sessions` |
//! | POST | /api/v1/translation-sessions | `create_translation_session` |
//! | GET | /api/v1/translation-sessions/{id} | `get_translation_session` |
//! | PATCH | /api/v1/translation-sessions/{id} | `update_translation_session` |
//!
//! 모든 핸들러는 `Caller` 추출기를 먼저 거칩니다. 인증에 실패하면 본문 파싱이나
//! DB 접근 없이 401로 끝납니다. 세션 삭제 API는 없습니다.

use crate::{
    error::AppError,
    middleware::ApiJson,
    models::*,
    routes::AppState,
    services::session_store,
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

/// `GET /translation-sessions` → `{ success, data: { items, total } }`
pub async fn list_translation_sessions(
    State(state): State<AppState>,
    caller: Caller,
) -> Result<Json<ApiResponse<Listing<TranslationSession>>>, AppError> {
    let listing = session_store::list_sessions(&state.pool, &caller).await?;
    Ok(ApiResponse::ok(listing))
}

/// `POST /translation-sessions` → 201 + 생성된 세션
pub async fn create_translation_session(
    State(state): State<AppState>,
    caller: Caller,
    ApiJson(req): ApiJson<CreateTranslationSessionRequest>,
) -> Result<(StatusCode, Json<ApiResponse<TranslationSession>>), AppError> {
    let session = session_store::create_session(&state.pool, &caller, req).await?;
    Ok((StatusCode::CREATED, ApiResponse::ok(session)))
}

/// `GET /translation-sessions/{id}`: 호출자 소유가 아니면 404
pub async fn get_translation_session(
    State(state): State<AppState>,
    caller: Caller,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<TranslationSession>>, AppError> {
    let session = session_store::get_owned_session(&state.pool, &id, &caller).await?;
    Ok(ApiResponse::ok(session))
}

/// `PATCH /translation-sessions/{id}`
///
/// 본문에 있는 필드만 바뀝니다. `null`은 선택 필드를 비우고, 빈 객체 `{}`는 400입니다.
pub async fn update_translation_session(
    State(state): State<AppState>,
    caller: Caller,
    Path(id): Path<String>,
    ApiJson(patch): ApiJson<UpdateTranslationSessionRequest>,
) -> Result<Json<ApiResponse<TranslationSession>>, AppError> {
    let session = session_store::update_session(&state.pool, &id, &caller, patch).await?;
    Ok(ApiResponse::ok(session))
}
