//! 인증 서비스 모듈

pub mod login_service;
pub mod token_service;

pub use login_service::LoginService;
pub use token_service::TokenService;
