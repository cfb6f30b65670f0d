//! 로그인 서비스 구현
//!
//! 저장된 사용자 레코드에 대해 자격 증명을 검증하고,
//! 성공 시 서명된 액세스 토큰을 발급합니다.
//! 상태를 갖지 않으며 토큰 발급 외의 부수효과가 없습니다.

use std::sync::Arc;

use log::info;

use crate::{
    domain::dto::users::request::LoginRequest,
    domain::dto::users::response::{LoginResponse, UserResultDto},
    errors::{AppError, AppResult},
    repositories::UserRepository,
    services::auth::token_service::TokenService,
};

/// 자격 증명 검증 및 토큰 발급 서비스
pub struct LoginService {
    user_repo: Arc<dyn UserRepository>,
    token_service: Arc<TokenService>,
}

impl LoginService {
    /// 새 로그인 서비스 생성
    pub fn new(user_repo: Arc<dyn UserRepository>, token_service: Arc<TokenService>) -> Self {
        Self {
            user_repo,
            token_service,
        }
    }

    /// 이메일/비밀번호 자격 증명을 검증하고 액세스 토큰을 발급합니다
    ///
    /// 존재하지 않는 이메일과 틀린 비밀번호는 동일한 에러로 응답합니다.
    /// 계정 존재 여부를 노출하지 않기 위한 의도된 동작입니다.
    ///
    /// # Returns
    ///
    /// * `Ok(LoginResponse)` - 사용자 정보와 발급된 토큰
    ///
    /// # Errors
    ///
    /// * `AppError::AuthenticationError` - 자격 증명 불일치
    /// * `AppError::InternalError` - 비밀번호 해시 검증 실패
    pub async fn login(&self, request: &LoginRequest) -> AppResult<LoginResponse> {
        let user = self
            .user_repo
            .find_by_email(&request.email)
            .await?
            .ok_or_else(|| {
                AppError::AuthenticationError(
                    "이메일 또는 비밀번호가 올바르지 않습니다".to_string(),
                )
            })?;

        let password_matches = bcrypt::verify(&request.password, &user.password_hash)
            .map_err(|e| AppError::InternalError(format!("비밀번호 검증 실패: {}", e)))?;

        if !password_matches {
            return Err(AppError::AuthenticationError(
                "이메일 또는 비밀번호가 올바르지 않습니다".to_string(),
            ));
        }

        let access_token = self.token_service.generate_token(&user)?;

        info!("로그인 성공 - 사용자: {}", user.id);

        Ok(LoginResponse::new(
            UserResultDto::from(&user),
            access_token,
            self.token_service.expires_in(),
        ))
    }
}
