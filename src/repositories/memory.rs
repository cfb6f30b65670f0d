//! 테스트용 인메모리 사용자 리포지토리
//!
//! 서비스 계층 테스트에서 MongoDB 없이 [`UserRepository`] 계약을
//! 검증하기 위한 구현체입니다.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use crate::domain::entities::user::UserEntity;
use crate::errors::{AppError, AppResult};
use crate::repositories::UserRepository;

/// HashMap 기반 인메모리 리포지토리
pub struct InMemoryUserRepository {
    users: RwLock<HashMap<String, UserEntity>>,
}

impl InMemoryUserRepository {
    /// 빈 리포지토리 생성
    pub fn new() -> Self {
        Self {
            users: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for InMemoryUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_id(&self, id: &str) -> AppResult<Option<UserEntity>> {
        let users = self
            .users
            .read()
            .map_err(|_| AppError::InternalError("Failed to acquire lock".to_string()))?;

        Ok(users.get(id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<UserEntity>> {
        let users = self
            .users
            .read()
            .map_err(|_| AppError::InternalError("Failed to acquire lock".to_string()))?;

        Ok(users.values().find(|u| u.email == email).cloned())
    }

    async fn find_all(&self) -> AppResult<Vec<UserEntity>> {
        let users = self
            .users
            .read()
            .map_err(|_| AppError::InternalError("Failed to acquire lock".to_string()))?;

        let mut all: Vec<UserEntity> = users.values().cloned().collect();
        all.sort_by(|a, b| a.created_at.cmp(&b.created_at));

        Ok(all)
    }

    async fn insert(&self, user: UserEntity) -> AppResult<UserEntity> {
        let mut users = self
            .users
            .write()
            .map_err(|_| AppError::InternalError("Failed to acquire lock".to_string()))?;

        if users.values().any(|u| u.email == user.email) {
            return Err(AppError::ConflictError(
                "이미 사용 중인 이메일입니다".to_string(),
            ));
        }

        users.insert(user.id.clone(), user.clone());

        Ok(user)
    }

    async fn replace(&self, user: UserEntity) -> AppResult<Option<UserEntity>> {
        let mut users = self
            .users
            .write()
            .map_err(|_| AppError::InternalError("Failed to acquire lock".to_string()))?;

        if !users.contains_key(&user.id) {
            return Ok(None);
        }

        users.insert(user.id.clone(), user.clone());

        Ok(Some(user))
    }

    async fn delete(&self, id: &str) -> AppResult<bool> {
        let mut users = self
            .users
            .write()
            .map_err(|_| AppError::InternalError("Failed to acquire lock".to_string()))?;

        Ok(users.remove(id).is_some())
    }
}
