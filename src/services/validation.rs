//! 입력 검증 헬퍼. 모두 순수 함수이며 저장소에 접근하기 전에 호출됩니다.

use crate::error::AppError;
use crate::models::Patch;

/// 필수 텍스트: 공백뿐인 값도 비어 있는 것으로 봅니다. 원문 그대로 돌려줍니다.
pub fn require_text(field: &str, value: String) -> Result<String, AppError> {
    if value.trim().is_empty() {
        return Err(AppError::Validation(format!("{field} must not be empty")));
    }
    Ok(value)
}

/// NOT NULL 컬럼에 대한 패치는 `null`(Clear)을 받을 수 없습니다.
pub fn require_patch_value<T>(field: &str, patch: &Patch<T>) -> Result<(), AppError> {
    if matches!(patch, Patch::Clear) {
        return Err(AppError::Validation(format!("{field} cannot be null")));
    }
    Ok(())
}

pub fn require_patch_text(field: &str, patch: &Patch<String>) -> Result<(), AppError> {
    require_patch_value(field, patch)?;
    if let Patch::Set(value) = patch {
        if value.trim().is_empty() {
            return Err(AppError::Validation(format!("{field} must not be empty")));
        }
    }
    Ok(())
}

pub fn empty_update() -> AppError {
    AppError::Validation("At least one field must be provided".to_string())
}
