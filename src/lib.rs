//! 사용자 API 백엔드
//!
//! JWT Bearer 인증 기반의 사용자 관리 REST API 서비스입니다.
//! 컨트롤러 → 서비스 → 리포지토리 → 엔티티로 이어지는 계층 구조를 가지며,
//! 모든 의존성은 프로세스 시작 시점에 명시적으로 생성되어 주입됩니다.
//!
//! # Features
//!
//! - **사용자 CRUD**: 생성, 조회, 목록, 수정, 삭제
//! - **JWT 인증**: HS256 서명, issuer/audience/만료 검증 기반 상태 없는 인증
//! - **명시적 DI**: 시작 시점 생성자 주입, 전역 레지스트리 없음
//! - **MongoDB**: 사용자 데이터 영구 저장
//! - **API 문서**: utoipa 기반 OpenAPI 스펙과 Swagger UI
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청/응답 처리
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 비즈니스 로직
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← 데이터 액세스
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │     MongoDB     │ ← 저장소
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use user_api_backend::config::AppConfig;
//! use user_api_backend::repositories::MongoUserRepository;
//! use user_api_backend::services::{TokenService, UserService};
//!
//! let config = AppConfig::from_env();
//! let repo = Arc::new(MongoUserRepository::new(&database));
//! let token_service = TokenService::new(config.signing.clone(), config.token.clone());
//! let user_service = UserService::new(repo, config.security.clone());
//! ```

pub mod config;
pub mod db;
pub mod domain;
pub mod errors;
pub mod handlers;
pub mod middlewares;
pub mod openapi;
pub mod repositories;
pub mod routes;
pub mod services;
