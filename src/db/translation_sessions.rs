//! # 번역 세션 데이터베이스 쿼리 모듈
//!
//! `translation_sessions` 테이블에 대한 SQL만 담당합니다.
//! 검증과 소유권 규칙은 `services::session_store`에 있고,
//! 여기서는 모든 조회/수정 쿼리의 WHERE 절에 `user_id`를 함께 걸어
//! 다른 사용자의 행이 절대 선택되거나 바뀌지 않게 합니다.

use crate::error::AppError;
use crate::models::{TranslationSession, UpdateTranslationSessionRequest};
use sqlx::{QueryBuilder, Sqlite, SqlitePool};

/// 완성된 세션 레코드를 삽입합니다. (ID와 타임스탬프는 호출 측에서 채웁니다)
pub async fn insert_session(
    pool: &SqlitePool,
    session: &TranslationSession,
) -> Result<(), AppError> {
    sqlx::query(
        r#"
        INSERT INTO translation_sessions
            (id, user_id, source_language, target_language, context,
             original_text, created_at, updated_at)
        VALUES (?, ?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(&session.id)
    .bind(&session.user_id)
    .bind(&session.source_language) // None이면 SQL NULL
    .bind(&session.target_language)
    .bind(&session.context)
    .bind(&session.original_text)
    .bind(&session.created_at)
    .bind(&session.updated_at)
    .execute(pool)
    .await?;

    Ok(())
}

/// `id`이면서 `user_id` 소유인 세션을 조회합니다. 둘 중 하나라도 안 맞으면 `None`.
pub async fn find_owned_session(
    pool: &SqlitePool,
    id: &str,
    user_id: &str,
) -> Result<Option<TranslationSession>, AppError> {
    let session = sqlx::query_as::<_, TranslationSession>(
        r#"
        SELECT id, user_id, source_language, target_language, context,
               original_text, created_at, updated_at
        FROM translation_sessions
        WHERE id = ? AND user_id = ?
        "#,
    )
    .bind(id)
    .bind(user_id)
    .fetch_optional(pool)
    .await?;

    Ok(session)
}

/// 사용자의 모든 세션을 최신순으로 조회합니다.
///
/// 정렬: `created_at DESC, id DESC`. ID가 UUIDv7이라 같은 밀리초에 만든 세션도
/// 생성 순서대로 결정적으로 정렬됩니다.
pub async fn list_sessions_for_user(
    pool: &SqlitePool,
    user_id: &str,
) -> Result<Vec<TranslationSession>, AppError> {
    let sessions = sqlx::query_as::<_, TranslationSession>(
        r#"
        SELECT id, user_id, source_language, target_language, context,
               original_text, created_at, updated_at
        FROM translation_sessions
        WHERE user_id = ?
        ORDER BY created_at DESC, id DESC
        "#,
    )
    .bind(user_id)
    .fetch_all(pool)
    .await?;

    Ok(sessions)
}

/// 패치에 들어 있는 필드만 바꾸고 `updated_at`을 갱신합니다.
///
/// `QueryBuilder`로 `SET` 절을 동적으로 만들되, 값은 모두 `push_bind`로 바인딩합니다.
///
/// `expected_updated_at`은 호출 측이 읽어 둔 `updated_at`입니다. 그 사이 다른 업데이트가
/// 먼저 반영됐다면 행이 매칭되지 않아 아무것도 바뀌지 않습니다.
///
/// ## 반환값
/// - `Ok(true)`: 한 행이 갱신됨
/// - `Ok(false)`: `(id, user_id, expected_updated_at)`에 맞는 행이 없음
pub async fn update_session(
    pool: &SqlitePool,
    id: &str,
    user_id: &str,
    patch: &UpdateTranslationSessionRequest,
    expected_updated_at: &str,
    updated_at: &str,
) -> Result<bool, AppError> {
    let mut builder =
        QueryBuilder::<Sqlite>::new("UPDATE translation_sessions SET updated_at = ");
    builder.push_bind(updated_at.to_string());

    if let Some(value) = patch.source_language.as_update() {
        builder.push(", source_language = ").push_bind(value.cloned());
    }
    if let Some(value) = patch.target_language.as_update() {
        builder.push(", target_language = ").push_bind(value.cloned());
    }
    if let Some(value) = patch.context.as_update() {
        builder.push(", context = ").push_bind(value.cloned());
    }
    if let Some(value) = patch.original_text.as_update() {
        builder.push(", original_text = ").push_bind(value.cloned());
    }

    builder
        .push(" WHERE id = ")
        .push_bind(id.to_string())
        .push(" AND user_id = ")
        .push_bind(user_id.to_string())
        .push(" AND updated_at = ")
        .push_bind(expected_updated_at.to_string());

    let result = builder.build().execute(pool).await?;
    Ok(result.rows_affected() > 0)
}
