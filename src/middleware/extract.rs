//! 요청 본문/쿼리 추출기.
//!
//! axum의 `Json`, `Query`를 그대로 쓰되, 파싱에 실패하면 평문 응답 대신
//! `AppError::Validation`(= `VALIDATION_ERROR` 봉투)으로 거절합니다.

use axum::extract::{FromRequest, FromRequestParts};

use crate::error::AppError;

#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct ApiJson<T>(pub T);

#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(AppError))]
pub struct ApiQuery<T>(pub T);
