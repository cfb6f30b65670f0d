//! 인증된 사용자 표현
//!
//! 미들웨어가 검증을 마친 토큰 클레임에서 추출하여
//! request extension에 저장하는 사용자 정보입니다.

use crate::domain::token::TokenClaims;

/// 검증된 토큰에서 추출한 인증 사용자 정보
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    /// 사용자 ID
    pub user_id: String,
    /// 사용자 이름
    pub name: String,
    /// 사용자 역할
    pub roles: Vec<String>,
}

impl AuthenticatedUser {
    /// 특정 역할 보유 여부 확인
    pub fn has_role(&self, role: &str) -> bool {
        self.roles.iter().any(|r| r == role)
    }
}

impl From<TokenClaims> for AuthenticatedUser {
    fn from(claims: TokenClaims) -> Self {
        Self {
            user_id: claims.sub,
            name: claims.name,
            roles: claims.roles,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_authenticated_user_has_role() {
        let user = AuthenticatedUser {
            user_id: "test_id".to_string(),
            name: "tester".to_string(),
            roles: vec!["user".to_string(), "admin".to_string()],
        };

        assert!(user.has_role("admin"));
        assert!(user.has_role("user"));
        assert!(!user.has_role("moderator"));
    }

    #[test]
    fn test_from_token_claims() {
        let claims = TokenClaims {
            sub: "user-1".to_string(),
            name: "tester".to_string(),
            roles: vec!["user".to_string()],
            iss: "user_api".to_string(),
            aud: "user_api_clients".to_string(),
            iat: 0,
            exp: 0,
        };

        let user = AuthenticatedUser::from(claims);

        assert_eq!(user.user_id, "user-1");
        assert_eq!(user.name, "tester");
        assert!(user.has_role("user"));
    }
}
