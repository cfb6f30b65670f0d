//! 사용자 응답 DTO
//!
//! API 응답으로 반환되는 데이터 구조를 정의합니다.
//! 엔티티에서 응답 DTO로의 변환은 필드 단위로 명시적으로 수행하며,
//! 비밀번호 해시는 구조적으로 응답에 포함될 수 없습니다.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::entities::user::UserEntity;

/// 사용자 응답 DTO
///
/// 비밀번호 관련 필드가 존재하지 않으므로 어떤 직렬화 경로로도
/// 비밀번호가 노출되지 않습니다.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UserResultDto {
    /// 사용자 ID
    pub id: String,
    /// 사용자 이름
    pub name: String,
    /// 사용자 이메일
    pub email: String,
    /// 생성 시간
    pub created_at: DateTime<Utc>,
    /// 수정 시간
    pub updated_at: DateTime<Utc>,
}

impl From<&UserEntity> for UserResultDto {
    // 명시적 필드 단위 변환. password_hash는 변환 대상이 아니다.
    fn from(user: &UserEntity) -> Self {
        Self {
            id: user.id.clone(),
            name: user.name.clone(),
            email: user.email.clone(),
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

/// 로그인 응답 DTO (JWT 토큰 포함)
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LoginResponse {
    /// 인증된 사용자 정보
    pub user: UserResultDto,
    /// 발급된 액세스 토큰
    pub access_token: String,
    /// 토큰 타입 (항상 "Bearer")
    pub token_type: String,
    /// 토큰 수명 (초)
    pub expires_in: i64,
}

impl LoginResponse {
    /// 새 로그인 응답 생성
    pub fn new(user: UserResultDto, access_token: String, expires_in: i64) -> Self {
        Self {
            user,
            access_token,
            token_type: "Bearer".to_string(),
            expires_in,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_entity() -> UserEntity {
        UserEntity::new(
            "tester".to_string(),
            "tester@example.com".to_string(),
            "bcrypt-hash".to_string(),
        )
    }

    #[test]
    fn test_entity_to_result_dto_mapping() {
        let entity = sample_entity();
        let dto = UserResultDto::from(&entity);

        assert_eq!(dto.id, entity.id);
        assert_eq!(dto.name, entity.name);
        assert_eq!(dto.email, entity.email);
        assert_eq!(dto.created_at, entity.created_at);
        assert_eq!(dto.updated_at, entity.updated_at);
    }

    #[test]
    fn test_result_dto_never_serializes_password() {
        let entity = sample_entity();
        let dto = UserResultDto::from(&entity);

        let value = serde_json::to_value(&dto).unwrap();
        let object = value.as_object().unwrap();

        assert!(!object.contains_key("password"));
        assert!(!object.contains_key("password_hash"));
    }

    #[test]
    fn test_login_response_token_type() {
        let entity = sample_entity();
        let response =
            LoginResponse::new(UserResultDto::from(&entity), "token".to_string(), 3600);

        assert_eq!(response.token_type, "Bearer");
        assert_eq!(response.expires_in, 3600);
    }
}
