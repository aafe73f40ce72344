//! # 데이터베이스 접근 계층 (Data Access Layer)
//!
//! SQL을 직접 실행하는 함수들을 모아둔 모듈입니다.
//! 서비스 계층(services/)이 이 함수들을 호출합니다.
//!
//! 각 하위 모듈:
//! - `translation_sessions`: 번역 세션 쿼리
//! - `translation_variants`: 번역 변형 쿼리
//! - `users`: 사용자 계정과 리프레시 토큰 쿼리

pub mod translation_sessions;
pub mod translation_variants;
pub mod users;

pub use translation_sessions::*;
pub use translation_variants::*;

use sqlx::{
    migrate::Migrator,
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
    SqlitePool,
};
use std::str::FromStr;

/// `./migrations`의 SQL 파일을 컴파일 시점에 바이너리에 포함시킵니다.
pub static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// SQLite 연결 풀을 만듭니다.
///
/// 파일이 없으면 새로 만들고, 외래키 제약을 켭니다.
/// (변형 → 세션, 세션 → 사용자 참조 무결성을 DB에서도 강제)
pub async fn connect(database_url: &str, max_connections: u32) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .foreign_keys(true);

    SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await
}

/// 마이그레이션까지 끝난 인메모리 풀.
///
/// `sqlite::memory:`는 연결마다 별도의 DB가 생기므로 연결을 하나로 제한합니다.
pub async fn connect_in_memory() -> Result<SqlitePool, sqlx::Error> {
    let pool = connect("sqlite::memory:", 1).await?;
    MIGRATOR.run(&pool).await?;
    Ok(pool)
}
