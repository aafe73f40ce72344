//! # 번역 변형 라우트 핸들러
//!
//! 변형은 항상 부모 세션 경로 아래에서만 다룹니다.
//!
//! | 메서드 | 경로 | 핸들러 |
//! |--------|------|--------|
//! | GET | /api/v1/translation-sessions/{id}/variants?favoritesOnly=true | `list_variants` |
//! | POST | /api/v1/translation-sessions/{id}/variants | `create_variant` |
//! | PATCH | /api/v1/translation-sessions/{id}/variants/{variant_id} | `update_variant` |
//! | DELETE | /api/v1/translation-sessions/{id}/variants/{variant_id} | `delete_variant` |

use crate::{
    error::AppError,
    middleware::{ApiJson, ApiQuery},
    models::*,
    routes::AppState,
    services::variant_store,
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

pub async fn list_variants(
    State(state): State<AppState>,
    caller: Caller,
    Path(session_id): Path<String>,
    ApiQuery(query): ApiQuery<ListVariantsQuery>,
) -> Result<Json<ApiResponse<Listing<TranslationVariant>>>, AppError> {
    let listing =
        variant_store::list_variants(&state.pool, &session_id, &caller, query.favorites_only)
            .await?;
    Ok(ApiResponse::ok(listing))
}

pub async fn create_variant(
    State(state): State<AppState>,
    caller: Caller,
    Path(session_id): Path<String>,
    ApiJson(req): ApiJson<CreateVariantRequest>,
) -> Result<(StatusCode, Json<ApiResponse<TranslationVariant>>), AppError> {
    let variant = variant_store::create_variant(&state.pool, &session_id, &caller, req).await?;
    Ok((StatusCode::CREATED, ApiResponse::ok(variant)))
}

/// `Path((session_id, variant_id))`: 경로 변수 두 개를 URL 순서대로 튜플로 추출합니다.
pub async fn update_variant(
    State(state): State<AppState>,
    caller: Caller,
    Path((session_id, variant_id)): Path<(String, String)>,
    ApiJson(patch): ApiJson<UpdateVariantRequest>,
) -> Result<Json<ApiResponse<TranslationVariant>>, AppError> {
    let variant =
        variant_store::update_variant(&state.pool, &variant_id, &session_id, &caller, patch)
            .await?;
    Ok(ApiResponse::ok(variant))
}

pub async fn delete_variant(
    State(state): State<AppState>,
    caller: Caller,
    Path((session_id, variant_id)): Path<(String, String)>,
) -> Result<Json<ApiResponse<Deleted>>, AppError> {
    variant_store::delete_variant(&state.pool, &variant_id, &session_id, &caller).await?;
    Ok(ApiResponse::ok(Deleted {
        id: variant_id,
        deleted: true,
    }))
}
