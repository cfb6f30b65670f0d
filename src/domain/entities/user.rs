//! User Entity Implementation
//!
//! 사용자 엔티티의 핵심 구현체입니다.
//! 영속 계층이 소유하며, 생성 시점에 UUID 식별자와 타임스탬프가 할당됩니다.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 사용자 엔티티
///
/// 시스템의 모든 사용자를 표현하는 핵심 도메인 엔티티입니다.
/// 식별자는 생성 시점에 UUIDv4로 할당되며 이후 재할당되지 않습니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserEntity {
    /// 사용자 ID (UUIDv4 문자열, 생성 시 할당)
    #[serde(rename = "_id")]
    pub id: String,
    /// 사용자 이름
    pub name: String,
    /// 사용자 이메일 (unique)
    pub email: String,
    /// 해시된 비밀번호
    pub password_hash: String,
    /// 생성 시간
    pub created_at: DateTime<Utc>,
    /// 수정 시간
    pub updated_at: DateTime<Utc>,
}

impl UserEntity {
    /// 새 사용자 엔티티 생성
    ///
    /// 새 UUID 식별자를 할당하고 생성/수정 타임스탬프를 현재 시각으로 설정합니다.
    pub fn new(name: String, email: String, password_hash: String) -> Self {
        let now = Utc::now();

        Self {
            id: Uuid::new_v4().to_string(),
            name,
            email,
            password_hash,
            created_at: now,
            updated_at: now,
        }
    }
}
