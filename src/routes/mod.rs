//! # 라우트 핸들러 모듈
//!
//! HTTP 요청을 받아 서비스 계층을 호출하고 `{ success, data }` 봉투로 응답합니다.
//!
//! - `auth`: 회원가입, 로그인, 토큰 갱신, 로그아웃, 내 정보
//! - `health`: 헬스체크
//! - `translation_sessions`: 번역 세션 CRUD
//! - `variants`: 세션에 속한 번역 변형 CRUD

pub mod auth;
pub mod health;
pub mod translation_sessions;
pub mod variants;

pub use health::*;
pub use translation_sessions::*;
pub use variants::*;

use chrono::Duration;
use sqlx::SqlitePool;

use crate::config::Config;

/// 애플리케이션 공유 상태
///
/// 모든 핸들러가 `State(state): State<AppState>`로 접근합니다.
/// `SqlitePool`은 내부적으로 Arc라서 clone해도 같은 풀을 가리킵니다.
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    /// 토큰 서명용 비밀키
    pub jwt_secret: String,
    pub access_token_ttl: Duration,
    pub refresh_token_ttl: Duration,
}

impl AppState {
    pub fn new(pool: SqlitePool, config: &Config) -> Self {
        Self {
            pool,
            jwt_secret: config.jwt_secret.clone(),
            access_token_ttl: Duration::minutes(config.access_token_minutes),
            refresh_token_ttl: Duration::days(config.refresh_token_days),
        }
    }
}
