//! # 번역 변형 데이터베이스 쿼리 모듈
//!
//! `translation_variants` 테이블 쿼리입니다.
//! 변형은 항상 `(id, session_id)` 쌍으로 찾습니다. 다른 세션에 속한 변형 ID를
//! 넘겨도 매칭되지 않으므로, 세션 소유권 검사가 변형까지 그대로 이어집니다.

use crate::error::AppError;
use crate::models::{TranslationVariant, UpdateVariantRequest};
use sqlx::{QueryBuilder, Sqlite, SqlitePool};

pub async fn insert_variant(
    pool: &SqlitePool,
    variant: &TranslationVariant,
) -> Result<(), AppError> {
    sqlx::query(
        r#"
        INSERT INTO translation_variants
            (id, session_id, tone, politeness_level, style_hint,
             translated_text, is_favorite, created_at)
        VALUES (?, ?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(&variant.id)
    .bind(&variant.session_id)
    .bind(&variant.tone)
    .bind(&variant.politeness_level)
    .bind(&variant.style_hint)
    .bind(&variant.translated_text)
    .bind(variant.is_favorite)
    .bind(&variant.created_at)
    .execute(pool)
    .await?;

    Ok(())
}

pub async fn find_variant(
    pool: &SqlitePool,
    id: &str,
    session_id: &str,
) -> Result<Option<TranslationVariant>, AppError> {
    let variant = sqlx::query_as::<_, TranslationVariant>(
        r#"
        SELECT id, session_id, tone, politeness_level, style_hint,
               translated_text, is_favorite, created_at
        FROM translation_variants
        WHERE id = ? AND session_id = ?
        "#,
    )
    .bind(id)
    .bind(session_id)
    .fetch_optional(pool)
    .await?;

    Ok(variant)
}

/// 세션의 변형 목록을 생성 순서대로 조회합니다.
/// `favorites_only`가 true면 `is_favorite = 1`인 행만 돌려줍니다.
pub async fn list_variants_for_session(
    pool: &SqlitePool,
    session_id: &str,
    favorites_only: bool,
) -> Result<Vec<TranslationVariant>, AppError> {
    let variants = sqlx::query_as::<_, TranslationVariant>(
        r#"
        SELECT id, session_id, tone, politeness_level, style_hint,
               translated_text, is_favorite, created_at
        FROM translation_variants
        WHERE session_id = ? AND (? = 0 OR is_favorite = 1)
        ORDER BY created_at ASC, id ASC
        "#,
    )
    .bind(session_id)
    .bind(favorites_only)
    .fetch_all(pool)
    .await?;

    Ok(variants)
}

/// 패치에 있는 필드만 갱신합니다. 빈 패치는 호출 전에 걸러져야 합니다.
pub async fn update_variant(
    pool: &SqlitePool,
    id: &str,
    session_id: &str,
    patch: &UpdateVariantRequest,
) -> Result<bool, AppError> {
    let mut builder = QueryBuilder::<Sqlite>::new("UPDATE translation_variants SET ");
    let mut fields = builder.separated(", ");

    if let Some(value) = patch.tone.as_update() {
        fields.push("tone = ").push_bind_unseparated(value.cloned());
    }
    if let Some(value) = patch.politeness_level.as_update() {
        fields
            .push("politeness_level = ")
            .push_bind_unseparated(value.cloned());
    }
    if let Some(value) = patch.style_hint.as_update() {
        fields.push("style_hint = ").push_bind_unseparated(value.cloned());
    }
    if let Some(value) = patch.translated_text.as_update() {
        fields
            .push("translated_text = ")
            .push_bind_unseparated(value.cloned());
    }
    if let Some(value) = patch.is_favorite.as_update() {
        fields
            .push("is_favorite = ")
            .push_bind_unseparated(value.copied().unwrap_or(false));
    }

    builder
        .push(" WHERE id = ")
        .push_bind(id.to_string())
        .push(" AND session_id = ")
        .push_bind(session_id.to_string());

    let result = builder.build().execute(pool).await?;
    Ok(result.rows_affected() > 0)
}

/// `(id, session_id)`에 맞는 변형을 삭제합니다. 삭제된 행이 없으면 false.
pub async fn delete_variant(
    pool: &SqlitePool,
    id: &str,
    session_id: &str,
) -> Result<bool, AppError> {
    let result = sqlx::query("DELETE FROM translation_variants WHERE id = ? AND session_id = ?")
        .bind(id)
        .bind(session_id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}
