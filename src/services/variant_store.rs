//! # 변형 저장소 (Variant Store)
//!
//! 번역 변형의 생성, 부분 수정, 삭제, 목록 조회.
//!
//! 모든 연산은 입력 검증 직후 `session_store::get_owned_session`을 호출하고,
//! 거기서 난 에러는 그대로 전파합니다. 소유권 확인이 끝나기 전에는 어떤 쓰기도 하지 않습니다.
//! 변형 자체는 항상 `(variant_id, session_id)` 쌍으로 찾습니다.

use crate::{
    db,
    error::AppError,
    models::{
        normalize_optional_text, Caller, CreateVariantRequest, Listing, TranslationVariant,
        UpdateVariantRequest,
    },
    services::{
        session_store::get_owned_session,
        timestamps::now_timestamp,
        validation::{empty_update, require_patch_text, require_patch_value, require_text},
    },
};
use sqlx::SqlitePool;

const RESOURCE: &str = "Translation variant";

pub async fn create_variant(
    pool: &SqlitePool,
    session_id: &str,
    caller: &Caller,
    req: CreateVariantRequest,
) -> Result<TranslationVariant, AppError> {
    let translated_text = require_text("translatedText", req.translated_text)?;
    let session = get_owned_session(pool, session_id, caller).await?;

    let variant = TranslationVariant {
        id: uuid::Uuid::now_v7().to_string(),
        session_id: session.id,
        tone: normalize_optional_text(req.tone),
        politeness_level: normalize_optional_text(req.politeness_level),
        style_hint: normalize_optional_text(req.style_hint),
        translated_text,
        is_favorite: req.is_favorite,
        created_at: now_timestamp(),
    };

    db::insert_variant(pool, &variant).await?;
    tracing::info!(
        variant_id = %variant.id,
        session_id = %variant.session_id,
        user_id = %caller.user_id,
        "Created translation variant"
    );

    Ok(variant)
}

pub async fn update_variant(
    pool: &SqlitePool,
    id: &str,
    session_id: &str,
    caller: &Caller,
    patch: UpdateVariantRequest,
) -> Result<TranslationVariant, AppError> {
    let patch = prepare_patch(patch)?;
    get_owned_session(pool, session_id, caller).await?;

    if !db::update_variant(pool, id, session_id, &patch).await? {
        return Err(AppError::NotFound(RESOURCE));
    }
    tracing::debug!(variant_id = %id, session_id = %session_id, "Updated translation variant");

    db::find_variant(pool, id, session_id)
        .await?
        .ok_or(AppError::NotFound(RESOURCE))
}

/// 삭제된 행이 없으면 `NotFound`. 다른 세션에 속한 변형 ID도 여기에 해당합니다.
pub async fn delete_variant(
    pool: &SqlitePool,
    id: &str,
    session_id: &str,
    caller: &Caller,
) -> Result<(), AppError> {
    get_owned_session(pool, session_id, caller).await?;

    if !db::delete_variant(pool, id, session_id).await? {
        return Err(AppError::NotFound(RESOURCE));
    }
    tracing::info!(
        variant_id = %id,
        session_id = %session_id,
        user_id = %caller.user_id,
        "Deleted translation variant"
    );

    Ok(())
}

/// 세션의 변형 목록 (생성 순). `favorites_only`면 즐겨찾기만.
pub async fn list_variants(
    pool: &SqlitePool,
    session_id: &str,
    caller: &Caller,
    favorites_only: bool,
) -> Result<Listing<TranslationVariant>, AppError> {
    get_owned_session(pool, session_id, caller).await?;

    let variants = db::list_variants_for_session(pool, session_id, favorites_only).await?;
    Ok(Listing::from(variants))
}

fn prepare_patch(patch: UpdateVariantRequest) -> Result<UpdateVariantRequest, AppError> {
    if patch.is_empty() {
        return Err(empty_update());
    }
    require_patch_text("translatedText", &patch.translated_text)?;
    require_patch_value("isFavorite", &patch.is_favorite)?;

    Ok(UpdateVariantRequest {
        tone: patch.tone.normalized(),
        politeness_level: patch.politeness_level.normalized(),
        style_hint: patch.style_hint.normalized(),
        translated_text: patch.translated_text,
        is_favorite: patch.is_favorite,
    })
}
