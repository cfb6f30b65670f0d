//! 인증 관련 설정
//!
//! 토큰 서명 키, 토큰 발급 파라미터, 비밀번호 해싱 강도를 관리합니다.
//! 모든 값은 시작 시점에 한 번 로드되며 이후 불변입니다.

use std::fmt;

use jsonwebtoken::{DecodingKey, EncodingKey};
use log::warn;

/// 토큰 서명 설정
///
/// HMAC-SHA256 대칭 키에서 파생된 서명/검증 키 쌍을 보관합니다.
/// 프로세스 전역에서 단 한 번 초기화되고, 토큰 서비스에 복제되어 전달됩니다.
#[derive(Clone)]
pub struct SigningConfig {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl SigningConfig {
    /// 시크릿 문자열에서 서명 키 쌍을 생성합니다
    pub fn from_secret(secret: &str) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
        }
    }

    /// 환경 변수 `TOKEN_SECRET`에서 서명 키를 로드합니다
    ///
    /// 미설정 시 개발용 기본 키를 사용하며 경고를 남깁니다.
    /// 프로덕션에서는 반드시 `TOKEN_SECRET`을 설정해야 합니다.
    pub fn from_env() -> Self {
        let secret = std::env::var("TOKEN_SECRET").unwrap_or_else(|_| {
            warn!("TOKEN_SECRET 미설정: 개발용 기본 키를 사용합니다");
            "dev-only-insecure-token-secret".to_string()
        });

        Self::from_secret(&secret)
    }

    /// 토큰 서명에 사용하는 인코딩 키
    pub fn encoding_key(&self) -> &EncodingKey {
        &self.encoding_key
    }

    /// 토큰 검증에 사용하는 디코딩 키
    pub fn decoding_key(&self) -> &DecodingKey {
        &self.decoding_key
    }
}

impl fmt::Debug for SigningConfig {
    // 키 자료는 로그에 남기지 않는다
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SigningConfig { .. }")
    }
}

/// 토큰 발급 설정
///
/// 발급되는 토큰의 issuer, audience, 수명을 정의합니다.
/// 검증 시에도 동일한 값이 사용됩니다.
#[derive(Debug, Clone)]
pub struct TokenConfig {
    /// 토큰 발급자 (`iss` 클레임)
    pub issuer: String,
    /// 토큰 대상 (`aud` 클레임)
    pub audience: String,
    /// 토큰 수명 (초)
    pub seconds: i64,
}

impl TokenConfig {
    /// 환경 변수에서 토큰 발급 설정을 로드합니다
    ///
    /// * `TOKEN_ISSUER` - 발급자 (기본값: "user_api")
    /// * `TOKEN_AUDIENCE` - 대상 (기본값: "user_api_clients")
    /// * `TOKEN_SECONDS` - 수명 초 (기본값: 3600)
    pub fn from_env() -> Self {
        let issuer =
            std::env::var("TOKEN_ISSUER").unwrap_or_else(|_| "user_api".to_string());
        let audience = std::env::var("TOKEN_AUDIENCE")
            .unwrap_or_else(|_| "user_api_clients".to_string());
        let seconds = std::env::var("TOKEN_SECONDS")
            .unwrap_or_else(|_| "3600".to_string())
            .parse::<i64>()
            .unwrap_or_else(|e| {
                warn!("TOKEN_SECONDS 파싱 실패: {}. 기본값 3600 사용", e);
                3600
            });

        Self {
            issuer,
            audience,
            seconds,
        }
    }
}

/// 비밀번호 해싱 설정
#[derive(Debug, Clone)]
pub struct PasswordConfig {
    /// bcrypt cost 파라미터 (4-15 범위 권장)
    pub bcrypt_cost: u32,
}

impl PasswordConfig {
    /// 환경 변수 `BCRYPT_COST`에서 해싱 강도를 로드합니다 (기본값: bcrypt DEFAULT_COST)
    pub fn from_env() -> Self {
        let bcrypt_cost = std::env::var("BCRYPT_COST")
            .ok()
            .and_then(|v| v.parse::<u32>().ok())
            .unwrap_or(bcrypt::DEFAULT_COST);

        Self { bcrypt_cost }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signing_config_round_trip() {
        use jsonwebtoken::{Algorithm, Header, Validation, decode, encode};
        use serde::{Deserialize, Serialize};

        #[derive(Serialize, Deserialize)]
        struct Claims {
            sub: String,
            exp: i64,
        }

        let signing = SigningConfig::from_secret("test-secret");
        let claims = Claims {
            sub: "abc".to_string(),
            exp: chrono::Utc::now().timestamp() + 60,
        };

        let token = encode(&Header::default(), &claims, signing.encoding_key()).unwrap();
        let decoded = decode::<Claims>(
            &token,
            signing.decoding_key(),
            &Validation::new(Algorithm::HS256),
        )
        .unwrap();

        assert_eq!(decoded.claims.sub, "abc");
    }

    #[test]
    fn test_signing_config_debug_hides_key() {
        let signing = SigningConfig::from_secret("super-secret");
        let printed = format!("{:?}", signing);

        assert!(!printed.contains("super-secret"));
    }
}
