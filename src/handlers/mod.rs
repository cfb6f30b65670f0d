//! HTTP 핸들러 모듈
//!
//! 요청/응답 처리 계층입니다. 입력 검증 후 서비스에 위임하고,
//! 서비스 결과를 HTTP 응답으로 변환합니다.
//! 필요한 서비스는 actix 앱 데이터(`web::Data`)로 주입받습니다.

pub mod auth;
pub mod users;
