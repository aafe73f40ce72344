//! 타임스탬프 유틸리티.
//!
//! DB에는 밀리초 정밀도의 ISO 8601 UTC 문자열(`2026-03-01T09:30:00.123Z`)로 저장합니다.
//! 자릿수가 고정되어 있어 문자열 비교 순서와 시간 순서가 같습니다.

use chrono::{DateTime, Duration, NaiveDateTime, Utc};

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3fZ";

pub fn format_timestamp(at: DateTime<Utc>) -> String {
    at.format(TIMESTAMP_FORMAT).to_string()
}

pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    NaiveDateTime::parse_from_str(raw, TIMESTAMP_FORMAT)
        .ok()
        .map(|naive| naive.and_utc())
}

pub fn now_timestamp() -> String {
    format_timestamp(Utc::now())
}

/// 다음 `updated_at` 값: `max(now, previous + 1ms)`.
///
/// 같은 밀리초 안에 업데이트가 연달아 와도, 시계가 뒤로 가도 값은 항상 증가합니다.
pub fn next_updated_at(previous: &str) -> String {
    next_updated_at_from(previous, Utc::now())
}

fn next_updated_at_from(previous: &str, now: DateTime<Utc>) -> String {
    match parse_timestamp(previous) {
        Some(prev) => format_timestamp(now.max(prev + Duration::milliseconds(1))),
        None => {
            tracing::warn!("Unparseable updated_at {:?}, using current time", previous);
            format_timestamp(now)
        }
    }
}
