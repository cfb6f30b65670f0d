//! 미들웨어 모듈
//!
//! 요청 처리 파이프라인에서 횡단 관심사를 처리합니다.
//!
//! # 제공 미들웨어
//!
//! ### 인증 미들웨어 (AuthMiddleware)
//! - JWT Bearer 토큰 검증 (서명, 발급자, 대상, 만료)
//! - 검증된 사용자 정보를 request extension에 저장
//! - 실패 시 401과 구조화된 JSON 에러 본문 응답
//!
//! # 사용 방법
//!
//! ```rust,ignore
//! use actix_web::web;
//! use crate::middlewares::AuthMiddleware;
//!
//! cfg.service(
//!     web::scope("/api/v1/users")
//!         .wrap(AuthMiddleware::required())
//!         .service(handlers::users::get_user)
//! );
//! ```

pub mod auth_middleware;
mod auth_inner;

pub use auth_middleware::AuthMiddleware;
