//! API 라우트 설정 모듈
//!
//! RESTful API 엔드포인트들을 기능별로 그룹화하여 제공합니다.
//! 사용자, 인증 관련 라우트와 헬스체크, API 문서 엔드포인트를 포함합니다.
//!
//! # Route Groups
//!
//! ## Public 라우트 (인증 불필요)
//! - `POST /api/v1/auth/login` - 이메일/비밀번호 로그인
//! - `POST /api/v1/auth/register` - 회원가입
//! - `GET /health` - 헬스체크
//! - `GET /swagger-ui/` - 대화형 API 문서
//!
//! ## Protected 라우트 (Bearer 토큰 필요)
//! - `GET /api/v1/users` - 전체 사용자 조회
//! - `GET /api/v1/users/{id}` - 사용자 조회
//! - `POST /api/v1/users` - 사용자 생성
//! - `PUT /api/v1/users` - 사용자 수정
//! - `DELETE /api/v1/users/{id}` - 사용자 삭제
//! - `GET /api/v1/me` - 현재 사용자 조회

use actix_web::web;
use serde_json::json;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::handlers;
use crate::middlewares::AuthMiddleware;
use crate::openapi::ApiDoc;

/// 모든 라우트를 설정합니다
///
/// 기능별로 분할된 라우트들을 통합하여 애플리케이션에 등록합니다.
///
/// # Examples
///
/// ```rust,ignore
/// use actix_web::{App, web};
///
/// let app = App::new().configure(configure_all_routes);
/// ```
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    // Health check endpoint
    cfg.service(health_check);

    // API documentation
    cfg.service(
        SwaggerUi::new("/swagger-ui/{_:.*}")
            .url("/api-docs/openapi.json", ApiDoc::openapi()),
    );

    // Feature-specific routes
    configure_auth_routes(cfg);
    configure_user_routes(cfg);
}

/// 인증 관련 라우트를 설정합니다
///
/// 로그인과 회원가입은 인증을 위한 경로이므로 Public으로 접근 가능합니다.
/// 현재 사용자 조회는 Bearer 토큰이 필요합니다.
fn configure_auth_routes(cfg: &mut web::ServiceConfig) {
    // Public routes
    cfg.service(
        web::scope("/api/v1/auth")
            .service(handlers::auth::login)
            .service(handlers::auth::register),
    );

    // Protected routes
    cfg.service(
        web::scope("/api/v1/me")
            .wrap(AuthMiddleware::required())
            .service(handlers::auth::me),
    );
}

/// 사용자 관련 라우트를 설정합니다
///
/// 다섯 가지 CRUD 엔드포인트 전체에 Bearer 인증을 적용합니다.
fn configure_user_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/users")
            .wrap(AuthMiddleware::required())
            .service(handlers::users::get_all_users)
            .service(handlers::users::get_user)
            .service(handlers::users::create_user)
            .service(handlers::users::update_user)
            .service(handlers::users::delete_user),
    );
}

/// 서비스 상태를 확인하는 헬스체크 엔드포인트
///
/// 로드밸런서나 모니터링 시스템에서 서비스 상태를 확인하는 데 사용됩니다.
///
/// # Examples
///
/// ```bash
/// curl http://localhost:8080/health
/// ```
#[actix_web::get("/health")]
async fn health_check() -> actix_web::HttpResponse {
    actix_web::HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": "user_api",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "features": {
            "database": "MongoDB",
            "authentication": "JWT Bearer"
        }
    }))
}
