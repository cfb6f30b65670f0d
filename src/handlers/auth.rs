//! 인증 관련 HTTP 핸들러
//!
//! 로그인, 회원가입, 현재 사용자 조회 엔드포인트를 처리합니다.

use actix_web::{HttpMessage, HttpRequest, HttpResponse, get, post, web};
use validator::Validate;

use crate::{
    domain::auth::AuthenticatedUser,
    domain::dto::users::request::{LoginRequest, UserDto},
    errors::AppError,
    services::auth::login_service::LoginService,
    services::users::user_service::UserService,
};

/// 로그인 핸들러
///
/// 이메일과 비밀번호를 검증하고 액세스 토큰을 발급합니다.
///
/// # Endpoint
/// `POST /api/v1/auth/login`
#[utoipa::path(
    post,
    path = "/api/v1/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "로그인 성공, 토큰 발급", body = crate::domain::dto::users::response::LoginResponse),
        (status = 400, description = "입력값 검증 실패"),
        (status = 401, description = "자격 증명 불일치")
    ),
    tag = "auth"
)]
#[post("/login")]
pub async fn login(
    payload: web::Json<LoginRequest>,
    login_service: web::Data<LoginService>,
) -> Result<HttpResponse, AppError> {
    // 유효성 검사
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let response = login_service.login(&payload).await?;

    Ok(HttpResponse::Ok().json(response))
}

/// 회원가입 핸들러
///
/// 새 사용자 계정을 생성합니다. 인증 없이 접근 가능한 유일한 쓰기 경로입니다.
///
/// # Endpoint
/// `POST /api/v1/auth/register`
#[utoipa::path(
    post,
    path = "/api/v1/auth/register",
    request_body = UserDto,
    responses(
        (status = 201, description = "사용자 생성됨", body = crate::domain::dto::users::response::UserResultDto),
        (status = 400, description = "입력값 검증 실패"),
        (status = 409, description = "이메일 중복")
    ),
    tag = "auth"
)]
#[post("/register")]
pub async fn register(
    payload: web::Json<UserDto>,
    user_service: web::Data<UserService>,
) -> Result<HttpResponse, AppError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let response = user_service.post(payload.into_inner()).await?;

    Ok(HttpResponse::Created().json(response))
}

/// 현재 사용자 조회 핸들러
///
/// 미들웨어가 request extension에 저장한 인증 정보로
/// 토큰 소유자의 사용자 정보를 조회합니다.
///
/// # Endpoint
/// `GET /api/v1/me`
#[utoipa::path(
    get,
    path = "/api/v1/me",
    responses(
        (status = 200, description = "현재 사용자 정보", body = crate::domain::dto::users::response::UserResultDto),
        (status = 401, description = "인증 필요")
    ),
    security(("bearer_auth" = [])),
    tag = "auth"
)]
#[get("")]
pub async fn me(
    req: HttpRequest,
    user_service: web::Data<UserService>,
) -> Result<HttpResponse, AppError> {
    let authenticated = req
        .extensions()
        .get::<AuthenticatedUser>()
        .cloned()
        .ok_or_else(|| {
            AppError::AuthenticationError("인증 정보를 찾을 수 없습니다".to_string())
        })?;

    let user = user_service.get(&authenticated.user_id).await?;

    Ok(HttpResponse::Ok().json(user))
}
