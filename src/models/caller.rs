//! # 호출자(Caller) 컨텍스트
//!
//! 인증된 요청의 주체입니다. 전역 상태에서 "현재 사용자"를 꺼내 쓰지 않고,
//! 모든 저장소 연산에 이 값을 명시적으로 넘깁니다.
//! HTTP 요청에서는 `middleware::auth`의 추출기(extractor)가 Bearer 토큰을 검증해 만들어 줍니다.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Caller {
    pub user_id: String,
}

impl Caller {
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
        }
    }

    /// 소유권 검사: 레코드의 소유자 ID와 호출자 ID가 같은지 확인합니다.
    pub fn owns(&self, owner_id: &str) -> bool {
        self.user_id == owner_id
    }
}
