//! # 번역 세션 / 번역 변형 모델
//!
//! - `TranslationSession`: 원문 한 건과 언어/용도 메타데이터. 사용자 한 명이 소유합니다.
//! - `TranslationVariant`: 세션에 속한 어조/스타일별 번역 결과 한 건.
//!
//! API는 camelCase JSON을 사용하므로 모든 구조체에 `rename_all = "camelCase"`를 붙입니다.
//! (DB 컬럼은 snake_case이며 `sqlx::FromRow`는 Rust 필드명 기준으로 매핑합니다.)

use serde::{Deserialize, Serialize};

use super::patch::Patch;

/// `translation_sessions` 테이블 한 행.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct TranslationSession {
    /// UUIDv7 문자열, 생성 후 변경 불가
    pub id: String,
    /// 소유자. 생성 시 인증된 호출자에게서 한 번만 설정됩니다.
    pub user_id: String,
    pub source_language: Option<String>,
    pub target_language: Option<String>,
    /// 사용 용도 라벨 (예: "email")
    pub context: Option<String>,
    pub original_text: String,
    pub created_at: String,
    /// 업데이트가 받아들여질 때마다 이전 값보다 커집니다.
    pub updated_at: String,
}

/// `translation_variants` 테이블 한 행.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct TranslationVariant {
    pub id: String,
    /// 부모 세션 (외래키, 변경 불가)
    pub session_id: String,
    pub tone: Option<String>,
    pub politeness_level: Option<String>,
    pub style_hint: Option<String>,
    pub translated_text: String,
    pub is_favorite: bool,
    pub created_at: String,
}

/// `POST /translation-sessions` 요청 본문.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTranslationSessionRequest {
    pub source_language: Option<String>,
    pub target_language: Option<String>,
    pub context: Option<String>,
    pub original_text: String,
}

/// `PATCH /translation-sessions/{id}` 요청 본문 = 세션 패치.
///
/// 모든 필드가 `Patch`입니다. `originalText`는 필수 컬럼이라 `null`(Clear)이 오면
/// 검증 단계에서 거절됩니다.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTranslationSessionRequest {
    #[serde(default)]
    pub source_language: Patch<String>,
    #[serde(default)]
    pub target_language: Patch<String>,
    #[serde(default)]
    pub context: Patch<String>,
    #[serde(default)]
    pub original_text: Patch<String>,
}

impl UpdateTranslationSessionRequest {
    /// 변경할 필드가 하나도 없으면 true.
    pub fn is_empty(&self) -> bool {
        self.source_language.is_unchanged()
            && self.target_language.is_unchanged()
            && self.context.is_unchanged()
            && self.original_text.is_unchanged()
    }
}

/// `POST /translation-sessions/{id}/variants` 요청 본문.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateVariantRequest {
    pub tone: Option<String>,
    pub politeness_level: Option<String>,
    pub style_hint: Option<String>,
    pub translated_text: String,
    #[serde(default)]
    pub is_favorite: bool,
}

/// `PATCH /translation-sessions/{id}/variants/{variantId}` 요청 본문 = 변형 패치.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateVariantRequest {
    #[serde(default)]
    pub tone: Patch<String>,
    #[serde(default)]
    pub politeness_level: Patch<String>,
    #[serde(default)]
    pub style_hint: Patch<String>,
    #[serde(default)]
    pub translated_text: Patch<String>,
    #[serde(default)]
    pub is_favorite: Patch<bool>,
}

impl UpdateVariantRequest {
    pub fn is_empty(&self) -> bool {
        self.tone.is_unchanged()
            && self.politeness_level.is_unchanged()
            && self.style_hint.is_unchanged()
            && self.translated_text.is_unchanged()
            && self.is_favorite.is_unchanged()
    }
}

/// `GET /translation-sessions/{id}/variants?favoritesOnly=true`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListVariantsQuery {
    #[serde(default)]
    pub favorites_only: bool,
}

/// 목록 조회 결과: 항목과 전체 개수.
#[derive(Debug, Clone, Serialize)]
pub struct Listing<T> {
    pub items: Vec<T>,
    pub total: usize,
}

impl<T> From<Vec<T>> for Listing<T> {
    fn from(items: Vec<T>) -> Self {
        let total = items.len();
        Self { items, total }
    }
}
