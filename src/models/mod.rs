//! # 데이터 모델 모듈
//!
//! - `caller`: 인증된 호출자 컨텍스트
//! - `envelope`: `{ success, data }` 응답 봉투
//! - `patch`: 부분 업데이트 값 타입 (`Unchanged` / `Clear` / `Set`)
//! - `translation`: 번역 세션과 번역 변형, 그리고 요청 구조체
//! - `user`: 사용자 계정과 인증 요청/응답
//!
//! 하위 모듈의 공개 항목을 재공개하여 `crate::models::TranslationSession`처럼 짧게 접근합니다.

pub mod caller;
pub mod envelope;
pub mod patch;
pub mod translation;
pub mod user;

pub use caller::*;
pub use envelope::*;
pub use patch::*;
pub use translation::*;
pub use user::*;
