//! # 서비스 계층
//!
//! 검증과 소유권 규칙을 가진 도메인 연산들입니다. 라우트 핸들러는 이 함수들만 호출합니다.
//!
//! - `session_store`: 번역 세션 저장소 (생성/수정/목록/소유 확인)
//! - `variant_store`: 번역 변형 저장소 (생성/수정/삭제/목록)
//! - `timestamps`: 타임스탬프 포맷과 `updated_at` 단조 증가 계산
//! - `validation`: 입력 검증 헬퍼

pub mod session_store;
pub mod timestamps;
pub mod validation;
pub mod variant_store;
