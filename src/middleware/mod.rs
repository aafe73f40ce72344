//! # 요청 전처리 모듈
//!
//! - `auth`: Bearer 토큰 검증, `Caller` 추출기, 토큰 발급/해시
//! - `extract`: 검증 에러 봉투를 돌려주는 JSON/쿼리 추출기

pub mod auth;
pub mod extract;

pub use extract::{ApiJson, ApiQuery};
