//! # 사용자 리포지토리 구현
//!
//! 사용자 엔티티의 데이터 액세스 계층을 담당하는 MongoDB 리포지토리입니다.
//!
//! ## 특징
//!
//! - **컬렉션명**: `users`
//! - **인덱스**: email(unique) - 시작 시점에 [`MongoUserRepository::ensure_indexes`]로 생성
//! - **데이터 무결성**: 이메일 유니크 제약 조건 관리

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::{
    Collection, IndexModel,
    bson::doc,
    options::IndexOptions,
};

use crate::{
    db::Database,
    domain::entities::user::UserEntity,
    errors::{AppError, AppResult},
    repositories::UserRepository,
};

/// MongoDB 기반 사용자 리포지토리
///
/// `users` 컬렉션에 대한 CRUD 연산을 담당합니다.
/// 식별자는 UUID 문자열을 `_id`로 그대로 저장합니다.
pub struct MongoUserRepository {
    collection: Collection<UserEntity>,
}

impl MongoUserRepository {
    /// 새 리포지토리 생성
    pub fn new(database: &Database) -> Self {
        Self {
            collection: database.get_database().collection::<UserEntity>("users"),
        }
    }

    /// 데이터베이스 인덱스 생성
    ///
    /// 이메일 유니크 인덱스를 생성합니다.
    /// 애플리케이션 초기화 시점에 한 번 실행합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::DatabaseError` - 인덱스 생성 중 오류 발생
    pub async fn ensure_indexes(&self) -> AppResult<()> {
        let email_index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("email_unique".to_string())
                    .build(),
            )
            .build();

        self.collection
            .create_index(email_index)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}

#[async_trait]
impl UserRepository for MongoUserRepository {
    async fn find_by_id(&self, id: &str) -> AppResult<Option<UserEntity>> {
        self.collection
            .find_one(doc! { "_id": id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<UserEntity>> {
        self.collection
            .find_one(doc! { "email": email })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn find_all(&self) -> AppResult<Vec<UserEntity>> {
        let cursor = self
            .collection
            .find(doc! {})
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        let mut users: Vec<UserEntity> = cursor
            .try_collect()
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        // 타임스탬프는 문자열로 저장되므로 정렬은 역직렬화된 값 기준으로 수행한다
        users.sort_by(|a, b| a.created_at.cmp(&b.created_at));

        Ok(users)
    }

    async fn insert(&self, user: UserEntity) -> AppResult<UserEntity> {
        // 중복 확인
        if self.find_by_email(&user.email).await?.is_some() {
            return Err(AppError::ConflictError(
                "이미 사용 중인 이메일입니다".to_string(),
            ));
        }

        self.collection
            .insert_one(&user)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(user)
    }

    async fn replace(&self, user: UserEntity) -> AppResult<Option<UserEntity>> {
        let result = self
            .collection
            .replace_one(doc! { "_id": &user.id }, &user)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        if result.matched_count > 0 {
            Ok(Some(user))
        } else {
            Ok(None)
        }
    }

    async fn delete(&self, id: &str) -> AppResult<bool> {
        let result = self
            .collection
            .delete_one(doc! { "_id": id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(result.deleted_count > 0)
    }
}
