//! 사용자 관리 비즈니스 로직 서비스
//!
//! 사용자 리소스에 대한 다섯 가지 CRUD 연산을 제공합니다.
//! 영속 엔티티와 전송 객체 사이의 변환을 담당하며,
//! 각 연산은 단일 저장소 호출과 매핑으로 구성됩니다.

use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use crate::{
    config::PasswordConfig,
    domain::dto::users::request::UserDto,
    domain::dto::users::response::UserResultDto,
    domain::entities::user::UserEntity,
    errors::{AppError, AppResult},
    repositories::UserRepository,
};

/// 사용자 CRUD 서비스
///
/// 리포지토리 트레이트에만 의존하며, 시작 시점에 구현체가 주입됩니다.
pub struct UserService {
    user_repo: Arc<dyn UserRepository>,
    security: PasswordConfig,
}

impl UserService {
    /// 새 사용자 서비스 생성
    pub fn new(user_repo: Arc<dyn UserRepository>, security: PasswordConfig) -> Self {
        Self {
            user_repo,
            security,
        }
    }

    /// ID로 단일 사용자 조회
    ///
    /// # Errors
    ///
    /// * `AppError::ValidationError` - 잘못된 UUID 형식
    /// * `AppError::NotFound` - 해당 ID의 사용자 없음
    pub async fn get(&self, id: &str) -> AppResult<UserResultDto> {
        let id = validate_id(id)?;

        let user = self
            .user_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("사용자를 찾을 수 없습니다".to_string()))?;

        Ok(UserResultDto::from(&user))
    }

    /// 전체 사용자 조회
    ///
    /// 생성 시각 오름차순으로 정렬된 목록을 반환합니다.
    /// 사용자가 없으면 빈 목록을 반환합니다.
    pub async fn get_all(&self) -> AppResult<Vec<UserResultDto>> {
        let users = self.user_repo.find_all().await?;

        Ok(users.iter().map(UserResultDto::from).collect())
    }

    /// 새 사용자 생성
    ///
    /// 비밀번호를 해싱하고 새 UUID 식별자와 생성 타임스탬프를 할당하여
    /// 저장한 뒤 결과 DTO를 반환합니다. 요청에 포함된 `id`는 무시됩니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ConflictError` - 이메일 중복
    /// * `AppError::InternalError` - 비밀번호 해싱 실패
    pub async fn post(&self, user_dto: UserDto) -> AppResult<UserResultDto> {
        let password_hash = self.hash_password(&user_dto.password)?;

        let user = UserEntity::new(user_dto.name, user_dto.email, password_hash);
        let created = self.user_repo.insert(user).await?;

        Ok(UserResultDto::from(&created))
    }

    /// 기존 사용자 수정
    ///
    /// 전달된 식별자로 기존 엔티티를 로드하여 수정 필드를 적용하고,
    /// 수정 타임스탬프를 갱신한 뒤 저장합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ValidationError` - `id` 누락 또는 잘못된 형식
    /// * `AppError::NotFound` - 해당 ID의 사용자 없음
    /// * `AppError::ConflictError` - 변경하려는 이메일이 이미 사용 중
    pub async fn put(&self, user_dto: UserDto) -> AppResult<UserResultDto> {
        let id = user_dto.id.as_deref().ok_or_else(|| {
            AppError::ValidationError("수정할 사용자 ID가 필요합니다".to_string())
        })?;
        let id = validate_id(id)?;

        let mut user = self
            .user_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("사용자를 찾을 수 없습니다".to_string()))?;

        // 이메일 변경 시 중복 확인
        if user.email != user_dto.email {
            if let Some(existing) = self.user_repo.find_by_email(&user_dto.email).await? {
                if existing.id != user.id {
                    return Err(AppError::ConflictError(
                        "이미 사용 중인 이메일입니다".to_string(),
                    ));
                }
            }
        }

        user.name = user_dto.name;
        user.email = user_dto.email;
        user.password_hash = self.hash_password(&user_dto.password)?;
        user.updated_at = Utc::now();

        let updated = self
            .user_repo
            .replace(user)
            .await?
            .ok_or_else(|| AppError::NotFound("사용자를 찾을 수 없습니다".to_string()))?;

        Ok(UserResultDto::from(&updated))
    }

    /// 사용자 삭제
    ///
    /// # Returns
    ///
    /// * `Ok(true)` - 삭제 성공
    ///
    /// # Errors
    ///
    /// * `AppError::ValidationError` - 잘못된 UUID 형식
    /// * `AppError::NotFound` - 해당 ID의 사용자 없음
    pub async fn delete(&self, id: &str) -> AppResult<bool> {
        let id = validate_id(id)?;

        if !self.user_repo.delete(id).await? {
            return Err(AppError::NotFound("사용자를 찾을 수 없습니다".to_string()));
        }

        Ok(true)
    }

    fn hash_password(&self, password: &str) -> AppResult<String> {
        bcrypt::hash(password, self.security.bcrypt_cost)
            .map_err(|e| AppError::InternalError(format!("비밀번호 해싱 실패: {}", e)))
    }
}

/// UUID 형식 검증
fn validate_id(id: &str) -> AppResult<&str> {
    Uuid::parse_str(id)
        .map_err(|_| AppError::ValidationError("유효하지 않은 ID 형식입니다".to_string()))?;

    Ok(id)
}
