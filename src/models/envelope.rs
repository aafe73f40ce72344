//! # 응답 봉투(envelope)
//!
//! 성공 응답은 항상 `{ "success": true, "data": ... }` 형태입니다.
//! 실패 응답 형태는 `error.rs`의 `IntoResponse` 구현을 참고하세요.

use axum::Json;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn ok(data: T) -> Json<Self> {
        Json(Self {
            success: true,
            data,
        })
    }
}

/// 삭제 성공 시 돌려주는 데이터
#[derive(Debug, Serialize)]
pub struct Deleted {
    pub id: String,
    pub deleted: bool,
}
