//! # OpenAPI Specification Assembly
//!
//! utoipa로 문서화된 라우트들을 하나의 OpenAPI 스펙으로 조립합니다.
//! Swagger UI는 `/swagger-ui`, 원본 스펙은 `/api-docs/openapi.json`에서 제공됩니다.

use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

/// OpenAPI 스펙에 Bearer 토큰 보안 스킴을 추가합니다.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some(
                            "POST /api/v1/auth/login 으로 발급받은 액세스 토큰",
                        ))
                        .build(),
                ),
            );
        }
    }
}

/// 전체 API 표면의 OpenAPI 스펙
#[derive(OpenApi)]
#[openapi(
    info(
        title = "User API",
        description = "JWT Bearer 인증 기반 사용자 관리 REST API"
    ),
    paths(
        crate::handlers::auth::login,
        crate::handlers::auth::register,
        crate::handlers::auth::me,
        crate::handlers::users::get_all_users,
        crate::handlers::users::get_user,
        crate::handlers::users::create_user,
        crate::handlers::users::update_user,
        crate::handlers::users::delete_user,
    ),
    components(schemas(
        crate::domain::dto::users::request::UserDto,
        crate::domain::dto::users::request::LoginRequest,
        crate::domain::dto::users::response::UserResultDto,
        crate::domain::dto::users::response::LoginResponse,
    )),
    modifiers(&SecurityAddon),
    tags(
        (name = "auth", description = "인증 및 토큰 발급"),
        (name = "users", description = "사용자 CRUD")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_document_contains_all_paths() {
        let doc = ApiDoc::openapi();
        let paths = &doc.paths.paths;

        assert!(paths.contains_key("/api/v1/auth/login"));
        assert!(paths.contains_key("/api/v1/auth/register"));
        assert!(paths.contains_key("/api/v1/me"));
        assert!(paths.contains_key("/api/v1/users"));
        assert!(paths.contains_key("/api/v1/users/{user_id}"));
    }

    #[test]
    fn test_openapi_document_has_bearer_scheme() {
        let doc = ApiDoc::openapi();
        let components = doc.components.expect("components missing");

        assert!(components.security_schemes.contains_key("bearer_auth"));
    }
}
