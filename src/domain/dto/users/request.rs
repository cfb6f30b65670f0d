//! 사용자 요청 DTO
//!
//! 사용자 생성/수정과 로그인을 위한 HTTP 요청 데이터 구조를 정의합니다.
//! JSON 역직렬화와 입력 검증을 자동으로 수행합니다.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// 사용자 생성/수정 요청 DTO
///
/// 생성 시 `id`는 무시되고 서버가 새 식별자를 할당합니다.
/// 수정 시에는 `id`가 필수입니다.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UserDto {
    /// 사용자 ID (생성 시 생략, 수정 시 필수)
    pub id: Option<String>,

    /// 사용자 이름 (1-60자)
    #[validate(length(min = 1, max = 60, message = "이름은 1-60자 사이여야 합니다"))]
    pub name: String,

    /// 사용자 이메일 주소
    #[validate(email(message = "유효한 이메일 주소를 입력해주세요"))]
    pub email: String,

    /// 계정 비밀번호 (최소 8자)
    #[validate(length(min = 8, message = "비밀번호는 최소 8자 이상이어야 합니다"))]
    pub password: String,
}

/// 로그인 요청 DTO
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct LoginRequest {
    /// 사용자 이메일
    #[validate(email(message = "유효한 이메일 주소를 입력해주세요"))]
    pub email: String,

    /// 비밀번호
    #[validate(length(min = 1, message = "비밀번호를 입력해주세요"))]
    pub password: String,
}
