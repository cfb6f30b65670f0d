//! AuthMiddleware 인증 로직의 핵심적인 기능

use std::rc::Rc;

use actix_web::body::EitherBody;
use actix_web::dev::{Service, ServiceRequest, ServiceResponse, forward_ready};
use actix_web::{Error, HttpMessage, HttpResponse, web};
use futures_util::future::LocalBoxFuture;

use crate::domain::auth::AuthenticatedUser;
use crate::errors::{AppError, AppResult};
use crate::services::auth::token_service::TokenService;

/// 실제 인증 로직을 수행하는 서비스
pub struct AuthMiddlewareService<S> {
    pub service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for AuthMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, actix_web::Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = self.service.clone();

        Box::pin(async move {
            // 앱 데이터에 등록된 토큰 서비스 가져오기
            let Some(token_service) = req.app_data::<web::Data<TokenService>>() else {
                log::error!("TokenService가 앱 데이터에 등록되지 않았습니다");
                let response = HttpResponse::InternalServerError().json(serde_json::json!({
                    "error": "configuration_error",
                    "message": "인증 구성이 올바르지 않습니다"
                }));
                let (req, _) = req.into_parts();
                let res = ServiceResponse::new(req, response).map_into_right_body();
                return Ok(res);
            };

            match authenticate_request(&req, token_service) {
                Ok(user) => {
                    log::debug!("인증 성공: 사용자 ID {}", user.user_id);
                    req.extensions_mut().insert(user);
                }
                Err(err) => {
                    log::warn!("인증 실패: {}", err);
                    let response = HttpResponse::Unauthorized().json(serde_json::json!({
                        "error": "authentication_required",
                        "message": "유효한 인증 토큰이 필요합니다"
                    }));
                    let (req, _) = req.into_parts();
                    let res = ServiceResponse::new(req, response).map_into_right_body();
                    return Ok(res);
                }
            }

            // 다음 서비스로 요청 전달
            let res = service.call(req).await?;
            Ok(res.map_into_left_body())
        })
    }
}

/// 요청에서 JWT 토큰을 추출하고 검증
pub(crate) fn authenticate_request(
    req: &ServiceRequest,
    token_service: &TokenService,
) -> AppResult<AuthenticatedUser> {
    // Authorization 헤더 추출
    let auth_header = req
        .headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| {
            AppError::AuthenticationError("Authorization 헤더가 없습니다".to_string())
        })?;

    // Bearer 토큰 추출
    let token = token_service.extract_bearer_token(auth_header)?;

    // 토큰 검증 및 클레임 추출
    let claims = token_service.verify_token(token)?;

    Ok(AuthenticatedUser::from(claims))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{SigningConfig, TokenConfig};
    use crate::domain::entities::user::UserEntity;
    use actix_web::test::TestRequest;

    fn test_token_service() -> TokenService {
        TokenService::new(
            SigningConfig::from_secret("test-secret"),
            TokenConfig {
                issuer: "user_api".to_string(),
                audience: "user_api_clients".to_string(),
                seconds: 3600,
            },
        )
    }

    #[test]
    fn test_authenticate_request_with_valid_token() {
        let token_service = test_token_service();
        let user = UserEntity::new(
            "tester".to_string(),
            "tester@example.com".to_string(),
            "hash".to_string(),
        );
        let token = token_service.generate_token(&user).unwrap();

        let req = TestRequest::default()
            .insert_header(("Authorization", format!("Bearer {}", token)))
            .to_srv_request();

        let authenticated = authenticate_request(&req, &token_service).unwrap();

        assert_eq!(authenticated.user_id, user.id);
        assert_eq!(authenticated.name, "tester");
        assert!(authenticated.has_role("user"));
    }

    #[test]
    fn test_authenticate_request_without_header() {
        let token_service = test_token_service();
        let req = TestRequest::default().to_srv_request();

        let result = authenticate_request(&req, &token_service);

        assert!(matches!(result, Err(AppError::AuthenticationError(_))));
    }

    #[test]
    fn test_authenticate_request_with_malformed_header() {
        let token_service = test_token_service();
        let req = TestRequest::default()
            .insert_header(("Authorization", "Token abc"))
            .to_srv_request();

        let result = authenticate_request(&req, &token_service);

        assert!(matches!(result, Err(AppError::AuthenticationError(_))));
    }

    #[test]
    fn test_authenticate_request_with_invalid_token() {
        let token_service = test_token_service();
        let req = TestRequest::default()
            .insert_header(("Authorization", "Bearer not-a-jwt"))
            .to_srv_request();

        let result = authenticate_request(&req, &token_service);

        assert!(matches!(result, Err(AppError::AuthenticationError(_))));
    }
}
