//! # 사용자 계정 모델
//!
//! 번역 세션의 소유자가 되는 계정과, 인증 라우트의 요청/응답 구조체입니다.
//!
//! - `User`: `users` 테이블 한 행 (비밀번호 해시 포함, 밖으로 그대로 내보내지 않음)
//! - `UserResponse`: API로 내보내는 공개 정보
//! - `RegisterRequest` / `LoginRequest` / `RefreshRequest`: 요청 본문
//! - `AuthResponse`: 토큰 쌍과 사용자 정보

use serde::{Deserialize, Serialize};

/// `users` 테이블 한 행.
///
/// `id`는 토큰의 `sub` 클레임이 되고, 그대로 `Caller::user_id`로 쓰입니다.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    pub id: String,
    pub username: String,
    pub email: Option<String>,
    /// Argon2id PHC 문자열. 직렬화에서 빠집니다.
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub created_at: String,
    pub updated_at: String,
}

/// 클라이언트에 보여 줄 사용자 정보 (`/auth/me`, 로그인 응답).
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: String,
    pub username: String,
    pub email: Option<String>,
    pub created_at: String,
}

// 해시와 updated_at을 떨어뜨립니다.
impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            email: user.email,
            created_at: user.created_at,
        }
    }
}

/// `POST /auth/register` 본문. 길이와 이메일 형식은 핸들러에서 검증합니다.
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: Option<String>,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// `POST /auth/refresh` 본문. 이 토큰은 사용과 동시에 폐기됩니다.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshRequest {
    pub refresh_token: String,
}

/// 회원가입/로그인/갱신 응답.
///
/// `accessToken`은 `Authorization: Bearer` 헤더에 싣고, `refreshToken`은
/// 액세스 토큰이 만료됐을 때 `/auth/refresh`로 한 번만 보낼 수 있습니다.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    pub user: UserResponse,
    pub access_token: String,
    pub refresh_token: String,
}
