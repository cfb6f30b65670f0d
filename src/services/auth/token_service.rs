//! JWT 토큰 관리 서비스 구현
//!
//! JSON Web Token 기반의 인증 시스템을 제공합니다.
//! 액세스 토큰의 생성과 검증을 담당하며, 서명/검증은 부수효과 없는
//! 순수 연산이므로 동기화 없이 동시에 실행해도 안전합니다.

use chrono::{Duration, Utc};
use jsonwebtoken::{Algorithm, Header, Validation, decode, encode};

use crate::{
    config::{SigningConfig, TokenConfig},
    domain::entities::user::UserEntity,
    domain::token::TokenClaims,
    errors::{AppError, AppResult},
};

/// JWT 토큰 관리 서비스
///
/// HMAC-SHA256 서명을 사용하여 토큰을 생성하고 검증합니다.
/// 검증 시 서명, 만료(`exp`), 발급자(`iss`), 대상(`aud`)을 모두 확인하며
/// 시계 오차 허용치(leeway)는 0입니다.
pub struct TokenService {
    signing: SigningConfig,
    token: TokenConfig,
}

impl TokenService {
    /// 새 토큰 서비스 생성
    pub fn new(signing: SigningConfig, token: TokenConfig) -> Self {
        Self { signing, token }
    }

    /// 사용자를 위한 JWT 액세스 토큰 생성
    ///
    /// # Arguments
    ///
    /// * `user` - 토큰을 발급받을 사용자 엔티티
    ///
    /// # Returns
    ///
    /// * `Ok(String)` - 생성된 JWT 액세스 토큰
    ///
    /// # Errors
    ///
    /// * `AppError::InternalError` - 토큰 생성 실패
    pub fn generate_token(&self, user: &UserEntity) -> AppResult<String> {
        let now = Utc::now();
        let expiration = now + Duration::seconds(self.token.seconds);

        let claims = TokenClaims {
            sub: user.id.clone(),
            name: user.name.clone(),
            roles: vec!["user".to_string()],
            iss: self.token.issuer.clone(),
            aud: self.token.audience.clone(),
            iat: now.timestamp(),
            exp: expiration.timestamp(),
        };

        encode(&Header::default(), &claims, self.signing.encoding_key())
            .map_err(|e| AppError::InternalError(format!("JWT 토큰 생성 실패: {}", e)))
    }

    /// 발급되는 토큰의 수명 (초)
    pub fn expires_in(&self) -> i64 {
        self.token.seconds
    }

    /// JWT 토큰 검증 및 클레임 추출
    ///
    /// 서명, 만료 시각, 발급자, 대상을 검증합니다.
    /// 만료 검증에 시계 오차 허용치를 두지 않습니다.
    ///
    /// # Arguments
    ///
    /// * `token` - 검증할 JWT 토큰 문자열 (Bearer 접두사 제외)
    ///
    /// # Returns
    ///
    /// * `Ok(TokenClaims)` - 검증된 토큰의 클레임 정보
    ///
    /// # Errors
    ///
    /// * `AppError::AuthenticationError` - 만료, 잘못된 서명/발급자/대상
    pub fn verify_token(&self, token: &str) -> AppResult<TokenClaims> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        validation.set_issuer(&[self.token.issuer.as_str()]);
        validation.set_audience(&[self.token.audience.as_str()]);

        decode::<TokenClaims>(token, self.signing.decoding_key(), &validation)
            .map(|token_data| token_data.claims)
            .map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                    AppError::AuthenticationError("토큰이 만료되었습니다".to_string())
                }
                jsonwebtoken::errors::ErrorKind::InvalidIssuer => {
                    AppError::AuthenticationError(
                        "토큰 발급자가 올바르지 않습니다".to_string(),
                    )
                }
                jsonwebtoken::errors::ErrorKind::InvalidAudience => {
                    AppError::AuthenticationError(
                        "토큰 대상이 올바르지 않습니다".to_string(),
                    )
                }
                _ => AppError::AuthenticationError("유효하지 않은 토큰입니다".to_string()),
            })
    }

    /// Bearer 토큰에서 실제 토큰 부분 추출
    ///
    /// HTTP Authorization 헤더의 "Bearer {token}" 형식에서 토큰 부분만을 추출합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::AuthenticationError` - 잘못된 헤더 형식
    pub fn extract_bearer_token<'a>(&self, auth_header: &'a str) -> AppResult<&'a str> {
        if auth_header.starts_with("Bearer ") {
            Ok(&auth_header[7..])
        } else {
            Err(AppError::AuthenticationError(
                "유효하지 않은 인증 헤더 형식입니다".to_string(),
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> TokenConfig {
        TokenConfig {
            issuer: "user_api".to_string(),
            audience: "user_api_clients".to_string(),
            seconds: 3600,
        }
    }

    fn test_service() -> TokenService {
        TokenService::new(SigningConfig::from_secret("test-secret"), test_config())
    }

    fn test_user() -> UserEntity {
        UserEntity::new(
            "tester".to_string(),
            "tester@example.com".to_string(),
            "hash".to_string(),
        )
    }

    #[test]
    fn test_generate_and_verify_round_trip() {
        let service = test_service();
        let user = test_user();

        let token = service.generate_token(&user).unwrap();
        let claims = service.verify_token(&token).unwrap();

        assert_eq!(claims.sub, user.id);
        assert_eq!(claims.name, user.name);
        assert_eq!(claims.iss, "user_api");
        assert_eq!(claims.aud, "user_api_clients");
        assert_eq!(claims.exp - claims.iat, 3600);
        assert!(claims.roles.contains(&"user".to_string()));
    }

    #[test]
    fn test_expired_token_rejected_despite_valid_signature() {
        let signing = SigningConfig::from_secret("test-secret");
        let service = TokenService::new(signing.clone(), test_config());
        let user = test_user();

        // 유효한 키로 서명했지만 이미 만료된 토큰
        let now = Utc::now();
        let claims = TokenClaims {
            sub: user.id.clone(),
            name: user.name.clone(),
            roles: vec!["user".to_string()],
            iss: "user_api".to_string(),
            aud: "user_api_clients".to_string(),
            iat: (now - Duration::seconds(7200)).timestamp(),
            exp: (now - Duration::seconds(3600)).timestamp(),
        };
        let token = encode(&Header::default(), &claims, signing.encoding_key()).unwrap();

        let result = service.verify_token(&token);

        assert!(matches!(result, Err(AppError::AuthenticationError(_))));
    }

    #[test]
    fn test_wrong_signing_key_rejected() {
        let issuing = test_service();
        let verifying = TokenService::new(
            SigningConfig::from_secret("a-different-secret"),
            test_config(),
        );

        let token = issuing.generate_token(&test_user()).unwrap();
        let result = verifying.verify_token(&token);

        assert!(matches!(result, Err(AppError::AuthenticationError(_))));
    }

    #[test]
    fn test_wrong_issuer_rejected() {
        let issuing = TokenService::new(
            SigningConfig::from_secret("test-secret"),
            TokenConfig {
                issuer: "another_service".to_string(),
                ..test_config()
            },
        );
        let verifying = test_service();

        let token = issuing.generate_token(&test_user()).unwrap();
        let result = verifying.verify_token(&token);

        assert!(matches!(result, Err(AppError::AuthenticationError(_))));
    }

    #[test]
    fn test_wrong_audience_rejected() {
        let issuing = TokenService::new(
            SigningConfig::from_secret("test-secret"),
            TokenConfig {
                audience: "another_audience".to_string(),
                ..test_config()
            },
        );
        let verifying = test_service();

        let token = issuing.generate_token(&test_user()).unwrap();
        let result = verifying.verify_token(&token);

        assert!(matches!(result, Err(AppError::AuthenticationError(_))));
    }

    #[test]
    fn test_extract_bearer_token() {
        let service = test_service();

        let token = service.extract_bearer_token("Bearer abc.def.ghi").unwrap();
        assert_eq!(token, "abc.def.ghi");
    }

    #[test]
    fn test_extract_bearer_token_rejects_malformed_header() {
        let service = test_service();

        assert!(service.extract_bearer_token("abc.def.ghi").is_err());
        assert!(service.extract_bearer_token("Basic abc").is_err());
    }

    #[test]
    fn test_garbage_token_rejected() {
        let service = test_service();

        let result = service.verify_token("not-a-jwt");

        assert!(matches!(result, Err(AppError::AuthenticationError(_))));
    }
}
