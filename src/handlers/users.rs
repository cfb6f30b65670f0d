//! # User Management HTTP Handlers
//!
//! 사용자 관리와 관련된 HTTP 엔드포인트를 처리하는 핸들러 함수들입니다.
//! CRUD(Create, Read, Update, Delete) 작업을 지원하며,
//! RESTful API 설계 원칙을 따릅니다.
//!
//! ## 엔드포인트
//!
//! | 메서드 | 경로 | 설명 | 상태 코드 |
//! |--------|------|------|-----------|
//! | `GET` | `/users` | 전체 사용자 조회 | 200 OK |
//! | `GET` | `/users/{id}` | 사용자 조회 | 200 OK |
//! | `POST` | `/users` | 새 사용자 생성 | 201 Created |
//! | `PUT` | `/users` | 사용자 수정 (본문의 id 사용) | 200 OK |
//! | `DELETE` | `/users/{id}` | 사용자 삭제 | 200 OK |
//!
//! 모든 엔드포인트는 Bearer 토큰 인증이 필요합니다.

use actix_web::{HttpResponse, delete, get, post, put, web};
use validator::Validate;

use crate::{
    domain::dto::users::request::UserDto,
    errors::AppError,
    services::users::user_service::UserService,
};

/// 전체 사용자 조회 핸들러
///
/// # Endpoint
/// `GET /api/v1/users`
#[utoipa::path(
    get,
    path = "/api/v1/users",
    responses(
        (status = 200, description = "사용자 목록 (생성 시각 오름차순)", body = [crate::domain::dto::users::response::UserResultDto]),
        (status = 401, description = "인증 필요")
    ),
    security(("bearer_auth" = [])),
    tag = "users"
)]
#[get("")]
pub async fn get_all_users(
    user_service: web::Data<UserService>,
) -> Result<HttpResponse, AppError> {
    let users = user_service.get_all().await?;

    Ok(HttpResponse::Ok().json(users))
}

/// 단일 사용자 조회 핸들러
///
/// # Endpoint
/// `GET /api/v1/users/{user_id}`
#[utoipa::path(
    get,
    path = "/api/v1/users/{user_id}",
    params(("user_id" = String, Path, description = "사용자 ID (UUID)")),
    responses(
        (status = 200, description = "사용자 정보", body = crate::domain::dto::users::response::UserResultDto),
        (status = 400, description = "잘못된 ID 형식"),
        (status = 401, description = "인증 필요"),
        (status = 404, description = "사용자 없음")
    ),
    security(("bearer_auth" = [])),
    tag = "users"
)]
#[get("/{user_id}")]
pub async fn get_user(
    user_id: web::Path<String>,
    user_service: web::Data<UserService>,
) -> Result<HttpResponse, AppError> {
    let user = user_service.get(&user_id).await?;

    Ok(HttpResponse::Ok().json(user))
}

/// 사용자 생성 핸들러
///
/// 새로운 사용자 계정을 생성합니다. 요청 본문의 `id`는 무시되고
/// 서버가 새 식별자와 생성 타임스탬프를 할당합니다.
///
/// # Endpoint
/// `POST /api/v1/users`
#[utoipa::path(
    post,
    path = "/api/v1/users",
    request_body = UserDto,
    responses(
        (status = 201, description = "사용자 생성됨", body = crate::domain::dto::users::response::UserResultDto),
        (status = 400, description = "입력값 검증 실패"),
        (status = 401, description = "인증 필요"),
        (status = 409, description = "이메일 중복")
    ),
    security(("bearer_auth" = [])),
    tag = "users"
)]
#[post("")]
pub async fn create_user(
    payload: web::Json<UserDto>,
    user_service: web::Data<UserService>,
) -> Result<HttpResponse, AppError> {
    // 유효성 검사
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let response = user_service.post(payload.into_inner()).await?;

    Ok(HttpResponse::Created().json(response))
}

/// 사용자 수정 핸들러
///
/// 요청 본문의 `id`로 기존 사용자를 로드하여 필드를 갱신합니다.
///
/// # Endpoint
/// `PUT /api/v1/users`
#[utoipa::path(
    put,
    path = "/api/v1/users",
    request_body = UserDto,
    responses(
        (status = 200, description = "수정된 사용자 정보", body = crate::domain::dto::users::response::UserResultDto),
        (status = 400, description = "입력값 검증 실패 또는 id 누락"),
        (status = 401, description = "인증 필요"),
        (status = 404, description = "사용자 없음"),
        (status = 409, description = "이메일 중복")
    ),
    security(("bearer_auth" = [])),
    tag = "users"
)]
#[put("")]
pub async fn update_user(
    payload: web::Json<UserDto>,
    user_service: web::Data<UserService>,
) -> Result<HttpResponse, AppError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let response = user_service.put(payload.into_inner()).await?;

    Ok(HttpResponse::Ok().json(response))
}

/// 사용자 삭제 핸들러
///
/// 삭제 성공 여부를 boolean으로 응답합니다.
///
/// # Endpoint
/// `DELETE /api/v1/users/{user_id}`
#[utoipa::path(
    delete,
    path = "/api/v1/users/{user_id}",
    params(("user_id" = String, Path, description = "사용자 ID (UUID)")),
    responses(
        (status = 200, description = "삭제 성공 여부", body = bool),
        (status = 400, description = "잘못된 ID 형식"),
        (status = 401, description = "인증 필요"),
        (status = 404, description = "사용자 없음")
    ),
    security(("bearer_auth" = [])),
    tag = "users"
)]
#[delete("/{user_id}")]
pub async fn delete_user(
    user_id: web::Path<String>,
    user_service: web::Data<UserService>,
) -> Result<HttpResponse, AppError> {
    let deleted = user_service.delete(&user_id).await?;

    Ok(HttpResponse::Ok().json(deleted))
}
