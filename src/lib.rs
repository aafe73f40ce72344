//! # lingotone
//!
//! 번역/어조 조정 앱의 데이터 관리 계층입니다.
//! 사용자 소유의 번역 세션(원문 + 언어 정보)과, 세션에 속한 어조/스타일별
//! 번역 변형을 저장하고 소유자에게만 CRUD를 허용합니다.
//!
//! 계층 구조:
//! ```text
//! routes (axum 핸들러, 봉투 응답)
//!   └─ services (검증, 소유권 관문, 타임스탬프)
//!        └─ db (sqlx 쿼리)
//! ```

pub mod config;
pub mod db;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;

use axum::{
    routing::{get, patch, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

pub use routes::AppState;

/// 전체 API 라우터를 만듭니다. 모든 경로는 `/api/v1` 아래에 있습니다.
///
/// axum 0.8부터 경로 변수는 `{id}` 문법을 씁니다.
pub fn build_router(state: AppState) -> Router {
    let auth_routes = Router::new()
        .route("/auth/register", post(routes::auth::register))
        .route("/auth/login", post(routes::auth::login))
        .route("/auth/refresh", post(routes::auth::refresh))
        .route("/auth/logout", post(routes::auth::logout))
        .route("/auth/me", get(routes::auth::me));

    let api_routes = Router::new()
        .merge(auth_routes)
        .route(
            "/translation-sessions",
            get(routes::list_translation_sessions).post(routes::create_translation_session),
        )
        .route(
            "/translation-sessions/{id}",
            get(routes::get_translation_session).patch(routes::update_translation_session),
        )
        .route(
            "/translation-sessions/{id}/variants",
            get(routes::variants::list_variants).post(routes::variants::create_variant),
        )
        .route(
            "/translation-sessions/{id}/variants/{variant_id}",
            patch(routes::variants::update_variant).delete(routes::variants::delete_variant),
        )
        .route("/health", get(routes::health_check))
        .with_state(state);

    // 개발 편의를 위해 모든 출처를 허용합니다. 운영에서는 도메인을 지정해야 합니다.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .nest("/api/v1", api_routes)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

#[cfg(test)]
pub(crate) mod testing {
    use crate::{config::Config, db, models::Caller, routes::AppState};
    use sqlx::SqlitePool;

    pub(crate) fn test_config() -> Config {
        Config {
            database_url: "sqlite::memory:".to_string(),
            jwt_secret: "test-secret".to_string(),
            host: "127.0.0.1".to_string(),
            port: 0,
            max_connections: 1,
            access_token_minutes: 15,
            refresh_token_days: 7,
        }
    }

    pub(crate) async fn state() -> AppState {
        let pool = db::connect_in_memory().await.unwrap();
        AppState::new(pool, &test_config())
    }

    /// 인메모리 DB와, 이름마다 하나씩 만든 사용자 계정의 `Caller` 목록.
    pub(crate) async fn pool_with_callers(names: &[&str]) -> (SqlitePool, Vec<Caller>) {
        let pool = db::connect_in_memory().await.unwrap();
        let mut callers = Vec::new();
        for name in names {
            let id = uuid::Uuid::now_v7().to_string();
            db::users::create_user(&pool, &id, name, None, "not-a-real-hash")
                .await
                .unwrap();
            callers.push(Caller::new(id));
        }
        (pool, callers)
    }
}
