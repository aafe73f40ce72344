//! # 애플리케이션 설정(Configuration) 모듈
//!
//! 환경변수(또는 `.env` 파일)에서 서버 설정값을 읽어옵니다.
//!
//! 설정 항목:
//! - `DATABASE_URL`: SQLite 데이터베이스 경로 (필수)
//! - `JWT_SECRET`: 토큰 서명 비밀키 (필수)
//! - `HOST`, `PORT`: 바인딩 주소 (기본값 `0.0.0.0:3000`)
//! - `DATABASE_MAX_CONNECTIONS`: 연결 풀 크기 (기본값 5)
//! - `ACCESS_TOKEN_MINUTES`: 액세스 토큰 수명 (기본값 15분)
//! - `REFRESH_TOKEN_DAYS`: 리프레시 토큰 수명 (기본값 7일)

use std::env;
use std::str::FromStr;

/// 애플리케이션 전체 설정
///
/// 서버 시작 시 한 번 읽은 뒤 `AppState`로 필요한 값만 넘겨 공유합니다.
#[derive(Debug, Clone)]
pub struct Config {
    /// 예: "sqlite:data/lingotone.db"
    pub database_url: String,
    pub jwt_secret: String,
    pub host: String,
    pub port: u16,
    pub max_connections: u32,
    pub access_token_minutes: i64,
    pub refresh_token_days: i64,
}

impl Config {
    /// 프로세스 환경변수에서 설정을 읽습니다.
    ///
    /// # 에러
    /// `DATABASE_URL`과 `JWT_SECRET`이 없으면 `VarError`를 반환합니다.
    /// 나머지는 없거나 파싱에 실패하면 기본값을 씁니다.
    pub fn from_env() -> Result<Self, env::VarError> {
        Self::from_source(|key| env::var(key))
    }

    /// 임의의 조회 함수에서 설정을 읽습니다. 테스트에서 환경변수를 건드리지 않기 위한 통로입니다.
    pub fn from_source<F>(lookup: F) -> Result<Self, env::VarError>
    where
        F: Fn(&str) -> Result<String, env::VarError>,
    {
        Ok(Self {
            database_url: lookup("DATABASE_URL")?,
            jwt_secret: lookup("JWT_SECRET")?,
            host: lookup("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: parse_or(&lookup, "PORT", 3000),
            max_connections: parse_or(&lookup, "DATABASE_MAX_CONNECTIONS", 5),
            access_token_minutes: parse_or(&lookup, "ACCESS_TOKEN_MINUTES", 15),
            refresh_token_days: parse_or(&lookup, "REFRESH_TOKEN_DAYS", 7),
        })
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> T
where
    F: Fn(&str) -> Result<String, env::VarError>,
    T: FromStr,
{
    lookup(key)
        .ok()
        .and_then(|raw| raw.trim().parse().ok())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn source(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Result<String, env::VarError> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned().ok_or(env::VarError::NotPresent)
    }

    #[test]
    fn defaults_apply_when_optional_vars_missing() {
        let config = Config::from_source(source(&[
            ("DATABASE_URL", "sqlite::memory:"),
            ("JWT_SECRET", "secret"),
        ]))
        .unwrap();

        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 3000);
        assert_eq!(config.max_connections, 5);
        assert_eq!(config.access_token_minutes, 15);
        assert_eq!(config.refresh_token_days, 7);
    }

    #[test]
    fn unparseable_port_falls_back() {
        let config = Config::from_source(source(&[
            ("DATABASE_URL", "sqlite::memory:"),
            ("JWT_SECRET", "secret"),
            ("PORT", "not-a-port"),
            ("ACCESS_TOKEN_MINUTES", "30"),
        ]))
        .unwrap();

        assert_eq!(config.port, 3000);
        assert_eq!(config.access_token_minutes, 30);
    }

    #[test]
    fn missing_secret_is_an_error() {
        let result = Config::from_source(source(&[("DATABASE_URL", "sqlite::memory:")]));
        assert!(matches!(result, Err(env::VarError::NotPresent)));
    }
}
