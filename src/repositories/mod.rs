//! 리포지토리 모듈
//!
//! 데이터 액세스 계층의 추상화를 제공합니다.
//! 서비스 계층은 [`UserRepository`] 트레이트에만 의존하며,
//! 운영 환경에서는 MongoDB 구현체가 주입됩니다.

pub mod users;

#[cfg(test)]
pub mod memory;

use async_trait::async_trait;

use crate::domain::entities::user::UserEntity;
use crate::errors::AppResult;

pub use users::user_repo::MongoUserRepository;

/// 사용자 엔티티 데이터 액세스 트레이트
///
/// 저장소별 구현체가 사용자 엔티티의 영속화를 담당합니다.
/// 모든 연산은 단일 저장소 호출이며, 동시성 제어는 저장소에 위임됩니다.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// ID로 사용자 조회
    async fn find_by_id(&self, id: &str) -> AppResult<Option<UserEntity>>;

    /// 이메일로 사용자 조회
    async fn find_by_email(&self, email: &str) -> AppResult<Option<UserEntity>>;

    /// 전체 사용자 조회 (생성 시각 오름차순)
    async fn find_all(&self) -> AppResult<Vec<UserEntity>>;

    /// 새 사용자 저장
    ///
    /// 이메일이 이미 사용 중이면 `ConflictError`를 반환합니다.
    async fn insert(&self, user: UserEntity) -> AppResult<UserEntity>;

    /// 기존 사용자 전체 교체
    ///
    /// 해당 ID의 사용자가 없으면 `Ok(None)`을 반환합니다.
    async fn replace(&self, user: UserEntity) -> AppResult<Option<UserEntity>>;

    /// 사용자 삭제
    ///
    /// 삭제된 경우 `true`, 해당 ID가 없으면 `false`를 반환합니다.
    async fn delete(&self, id: &str) -> AppResult<bool>;
}
