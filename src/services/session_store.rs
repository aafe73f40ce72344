//! # 세션 저장소 (Session Store)
//!
//! 번역 세션의 생성, 부분 수정, 목록 조회, 그리고 소유권 확인(`get_owned_session`)을 담당합니다.
//!
//! ## 규칙
//! - 모든 연산은 명시적인 `Caller`를 받습니다.
//! - 입력 검증은 저장소 접근보다 먼저 끝납니다. 검증에 실패하면 DB는 건드리지 않습니다.
//! - 남의 세션은 "없는 세션"과 똑같이 `NotFound`입니다.
//! - `get_owned_session`은 변형(variant) 연산의 유일한 권한 관문입니다.

use crate::{
    db,
    error::AppError,
    models::{
        normalize_optional_text, Caller, CreateTranslationSessionRequest, Listing, Patch,
        TranslationSession, UpdateTranslationSessionRequest,
    },
    services::{
        timestamps::{next_updated_at, now_timestamp},
        validation::{empty_update, require_patch_text, require_text},
    },
};
use sqlx::SqlitePool;

const RESOURCE: &str = "Translation session";

/// 동시 업데이트 경합 시 다시 읽고 쓰는 최대 횟수. 한 라운드마다 적어도 하나는 반영됩니다.
const MAX_UPDATE_ATTEMPTS: u32 = 16;

/// 새 세션을 만듭니다. `created_at = updated_at = now`.
pub async fn create_session(
    pool: &SqlitePool,
    caller: &Caller,
    req: CreateTranslationSessionRequest,
) -> Result<TranslationSession, AppError> {
    let original_text = require_text("originalText", req.original_text)?;

    let now = now_timestamp();
    let session = TranslationSession {
        id: uuid::Uuid::now_v7().to_string(),
        user_id: caller.user_id.clone(),
        source_language: normalize_optional_text(req.source_language),
        target_language: normalize_optional_text(req.target_language),
        context: normalize_optional_text(req.context),
        original_text,
        created_at: now.clone(),
        updated_at: now,
    };

    db::insert_session(pool, &session).await?;
    tracing::info!(
        session_id = %session.id,
        user_id = %caller.user_id,
        "Created translation session"
    );

    Ok(session)
}

/// 호출자 소유의 세션을 돌려줍니다. 없거나 남의 것이면 `NotFound`.
pub async fn get_owned_session(
    pool: &SqlitePool,
    id: &str,
    caller: &Caller,
) -> Result<TranslationSession, AppError> {
    let session = db::find_owned_session(pool, id, &caller.user_id)
        .await?
        .ok_or(AppError::NotFound(RESOURCE))?;

    // WHERE 절이 이미 user_id로 걸러내지만, 관문 함수이므로 한 번 더 확인합니다.
    if !caller.owns(&session.user_id) {
        return Err(AppError::NotFound(RESOURCE));
    }

    Ok(session)
}

/// 패치에 있는 필드만 바꾸고 `updated_at`을 이전 값보다 크게 갱신합니다.
pub async fn update_session(
    pool: &SqlitePool,
    id: &str,
    caller: &Caller,
    patch: UpdateTranslationSessionRequest,
) -> Result<TranslationSession, AppError> {
    let patch = prepare_patch(patch)?;

    for attempt in 1..=MAX_UPDATE_ATTEMPTS {
        let existing = get_owned_session(pool, id, caller).await?;
        let updated_at = next_updated_at(&existing.updated_at);

        // 읽은 뒤 다른 업데이트가 먼저 들어왔으면 0행이 바뀝니다. 다시 읽고 재시도합니다.
        let applied = db::update_session(
            pool,
            id,
            &caller.user_id,
            &patch,
            &existing.updated_at,
            &updated_at,
        )
        .await?;
        if applied {
            tracing::debug!(
                session_id = %id,
                user_id = %caller.user_id,
                attempt,
                "Updated translation session"
            );
            return Ok(TranslationSession {
                source_language: applied_value(&patch.source_language, existing.source_language),
                target_language: applied_value(&patch.target_language, existing.target_language),
                context: applied_value(&patch.context, existing.context),
                original_text: match &patch.original_text {
                    Patch::Set(text) => text.clone(),
                    _ => existing.original_text,
                },
                updated_at,
                ..existing
            });
        }
        tracing::debug!(session_id = %id, attempt, "Concurrent session update, retrying");
    }

    Err(AppError::Conflict(
        "Translation session is being modified concurrently".to_string(),
    ))
}

/// 패치 한 필드를 기존 값에 적용한 결과.
fn applied_value(patch: &Patch<String>, current: Option<String>) -> Option<String> {
    match patch {
        Patch::Unchanged => current,
        Patch::Clear => None,
        Patch::Set(value) => Some(value.clone()),
    }
}

/// 호출자가 소유한 모든 세션 (최신순) 과 전체 개수.
pub async fn list_sessions(
    pool: &SqlitePool,
    caller: &Caller,
) -> Result<Listing<TranslationSession>, AppError> {
    let sessions = db::list_sessions_for_user(pool, &caller.user_id).await?;
    Ok(Listing::from(sessions))
}

fn prepare_patch(
    patch: UpdateTranslationSessionRequest,
) -> Result<UpdateTranslationSessionRequest, AppError> {
    if patch.is_empty() {
        return Err(empty_update());
    }
    require_patch_text("originalText", &patch.original_text)?;

    Ok(UpdateTranslationSessionRequest {
        source_language: patch.source_language.normalized(),
        target_language: patch.target_language.normalized(),
        context: patch.context.normalized(),
        original_text: patch.original_text,
    })
}
