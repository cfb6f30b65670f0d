//! 서버/데이터베이스/운영 설정
//!
//! HTTP 서버 바인딩, MongoDB 연결, Rate Limiting 관련 설정값을 관리합니다.

use log::warn;

/// HTTP 서버 설정
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// 바인딩 호스트
    pub host: String,
    /// 바인딩 포트
    pub port: u16,
    /// 워커 스레드 수
    pub workers: usize,
}

impl ServerConfig {
    /// 환경 변수에서 서버 설정을 로드합니다
    ///
    /// * `HOST` - 바인딩 호스트 (기본값: "127.0.0.1")
    /// * `PORT` - 바인딩 포트 (기본값: 8080)
    /// * `WORKERS` - 워커 스레드 수 (기본값: 4)
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = std::env::var("PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse::<u16>()
            .unwrap_or_else(|e| {
                warn!("PORT 파싱 실패: {}. 기본값 8080 사용", e);
                8080
            });
        let workers = std::env::var("WORKERS")
            .unwrap_or_else(|_| "4".to_string())
            .parse::<usize>()
            .unwrap_or_else(|e| {
                warn!("WORKERS 파싱 실패: {}. 기본값 4 사용", e);
                4
            });

        Self {
            host,
            port,
            workers,
        }
    }

    /// `host:port` 형태의 바인딩 주소
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// MongoDB 연결 설정
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// MongoDB 연결 URI
    pub uri: String,
    /// 사용할 데이터베이스 이름
    pub database_name: String,
}

impl DatabaseConfig {
    /// 환경 변수에서 데이터베이스 설정을 로드합니다
    ///
    /// * `MONGODB_URI` - 연결 URI (기본값: "mongodb://localhost:27017")
    /// * `DATABASE_NAME` - 데이터베이스 이름 (기본값: "user_api_dev")
    pub fn from_env() -> Self {
        let uri = std::env::var("MONGODB_URI")
            .unwrap_or_else(|_| "mongodb://localhost:27017".to_string());
        let database_name =
            std::env::var("DATABASE_NAME").unwrap_or_else(|_| "user_api_dev".to_string());

        Self { uri, database_name }
    }
}

/// Rate Limiting 설정
#[derive(Debug, Clone)]
pub struct RateLimitConfig {
    /// 초당 허용 요청 수
    pub per_second: u64,
    /// 버스트 허용량
    pub burst_size: u32,
}

impl RateLimitConfig {
    /// 환경 변수에서 Rate Limiting 설정을 로드합니다
    ///
    /// * `RATE_LIMIT_PER_SECOND` - 초당 허용 요청 수 (기본값: 100)
    /// * `RATE_LIMIT_BURST_SIZE` - 버스트 허용량 (기본값: 200)
    pub fn from_env() -> Self {
        let per_second = std::env::var("RATE_LIMIT_PER_SECOND")
            .unwrap_or_else(|_| "100".to_string())
            .parse::<u64>()
            .unwrap_or_else(|e| {
                warn!("RATE_LIMIT_PER_SECOND 파싱 실패: {}. 기본값 100 사용", e);
                100
            });

        let burst_size = std::env::var("RATE_LIMIT_BURST_SIZE")
            .unwrap_or_else(|_| "200".to_string())
            .parse::<u32>()
            .unwrap_or_else(|e| {
                warn!("RATE_LIMIT_BURST_SIZE 파싱 실패: {}. 기본값 200 사용", e);
                200
            });

        Self {
            per_second,
            burst_size,
        }
    }
}
