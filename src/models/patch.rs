//! # 부분 업데이트(PATCH) 값 타입
//!
//! PATCH 요청에서는 "필드가 아예 없음"과 "필드가 null로 왔음"을 구분해야 합니다.
//!
//! | JSON 입력 | `Patch<T>` | 의미 |
//! |-----------|------------|------|
//! | 필드 누락 | `Unchanged` | 건드리지 않음 |
//! | `null` | `Clear` | 값을 비움 (DB NULL) |
//! | 값 | `Set(v)` | 새 값으로 교체 |
//!
//! serde의 기본 `Option<Option<T>>`는 `null`과 누락을 둘 다 `None`으로 만들어 버리므로,
//! 필드에 `#[serde(default)]`를 붙이고 이 타입의 `Deserialize` 구현을 사용합니다.
//! 필드가 누락되면 `Default`(= `Unchanged`)가, 필드가 있으면 아래 `deserialize`가 호출됩니다.

use serde::{Deserialize, Deserializer};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Patch<T> {
    Unchanged,
    Clear,
    Set(T),
}

impl<T> Default for Patch<T> {
    fn default() -> Self {
        Patch::Unchanged
    }
}

impl<T> Patch<T> {
    pub fn is_unchanged(&self) -> bool {
        matches!(self, Patch::Unchanged)
    }

    /// SQL 바인딩용 값. `None`이면 이 필드는 UPDATE 문에서 빠집니다.
    pub fn as_update(&self) -> Option<Option<&T>> {
        match self {
            Patch::Unchanged => None,
            Patch::Clear => Some(None),
            Patch::Set(value) => Some(Some(value)),
        }
    }
}

impl Patch<String> {
    /// 앞뒤 공백을 제거하고, 공백뿐인 문자열은 `Clear`로 취급합니다.
    pub fn normalized(self) -> Self {
        match self {
            Patch::Set(value) => match normalize_optional_text(Some(value)) {
                Some(trimmed) => Patch::Set(trimmed),
                None => Patch::Clear,
            },
            other => other,
        }
    }
}

impl<'de, T> Deserialize<'de> for Patch<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Option::<T>::deserialize(deserializer)? {
            Some(value) => Patch::Set(value),
            None => Patch::Clear,
        })
    }
}

/// 선택 텍스트 필드 정규화: trim 후 비어 있으면 `None`.
pub fn normalize_optional_text(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize)]
    struct Probe {
        #[serde(default)]
        tone: Patch<String>,
        #[serde(default)]
        is_favorite: Patch<bool>,
    }

    #[test]
    fn missing_field_is_unchanged() {
        let probe: Probe = serde_json::from_str("{}").unwrap();
        assert_eq!(probe.tone, Patch::Unchanged);
        assert_eq!(probe.is_favorite, Patch::Unchanged);
    }

    #[test]
    fn null_field_is_clear() {
        let probe: Probe = serde_json::from_str(r#"{"tone": null}"#).unwrap();
        assert_eq!(probe.tone, Patch::Clear);
        assert!(probe.is_favorite.is_unchanged());
    }

    #[test]
    fn present_value_is_set() {
        let probe: Probe =
            serde_json::from_str(r#"{"tone": "casual", "is_favorite": true}"#).unwrap();
        assert_eq!(probe.tone, Patch::Set("casual".to_string()));
        assert_eq!(probe.is_favorite, Patch::Set(true));
    }

    #[test]
    fn blank_string_normalizes_to_clear() {
        assert_eq!(Patch::Set("   ".to_string()).normalized(), Patch::Clear);
        assert_eq!(
            Patch::Set(" formal ".to_string()).normalized(),
            Patch::Set("formal".to_string())
        );
        assert_eq!(Patch::<String>::Unchanged.normalized(), Patch::Unchanged);
    }

    #[test]
    fn as_update_distinguishes_all_three_states() {
        assert_eq!(Patch::<bool>::Unchanged.as_update(), None);
        assert_eq!(Patch::<bool>::Clear.as_update(), Some(None));
        assert_eq!(Patch::Set(true).as_update(), Some(Some(&true)));
    }
}
