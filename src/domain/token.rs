//! JWT 클레임 구조

use serde::{Deserialize, Serialize};

/// 발급되는 토큰에 포함되는 클레임
///
/// 사용자 식별 정보와 함께 issuer/audience/만료 시각을 담습니다.
/// issuer와 audience는 검증 시 설정값과 일치해야 합니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenClaims {
    /// 사용자 ID
    pub sub: String,
    /// 사용자 이름
    pub name: String,
    /// 사용자 역할
    pub roles: Vec<String>,
    /// 토큰 발급자
    pub iss: String,
    /// 토큰 대상
    pub aud: String,
    /// 발급 시각 (Unix timestamp)
    pub iat: i64,
    /// 만료 시각 (Unix timestamp)
    pub exp: i64,
}
