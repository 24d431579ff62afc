//! 설정 관리.
//!
//! 프로바이더 접속 정보와 로깅 설정을 정의합니다.
//! HTTP 클라이언트는 전역 싱글톤이 아니라 이 설정 값을 받아 생성됩니다.

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

use crate::DateZone;

/// 기본 설정 파일 경로.
pub const DEFAULT_CONFIG_PATH: &str = "config/invest.toml";

/// 애플리케이션 설정.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AppConfig {
    /// 프로바이더 설정
    #[serde(default)]
    pub provider: ProviderConfig,
    /// 로깅 설정
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// investing.com 프로바이더 설정.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ProviderConfig {
    /// 베이스 URL (테스트 시 mock 서버로 교체)
    pub base_url: String,
    /// 요청 타임아웃 (초)
    pub timeout_secs: u64,
    /// 브라우저 User-Agent
    pub user_agent: String,
    /// 과거 시세 요청의 Referer
    pub referer: String,
    /// 과거 시세 요청의 `smlID` 고정값
    pub sml_id: String,
    /// 검색 결과 최대 건수
    pub search_limit: u32,
    /// 날짜 컬럼 렌더링 시간대
    pub date_zone: DateZone,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            base_url: "https://www.investing.com".to_string(),
            timeout_secs: 5,
            user_agent: "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/88.0.4324.150 Safari/537.36".to_string(),
            referer: "https://www.investing.com/equities/abb-ltd-historical-data?cid=482"
                .to_string(),
            sml_id: "1159548".to_string(),
            search_limit: 270,
            date_zone: DateZone::Utc,
        }
    }
}

impl ProviderConfig {
    /// 베이스 URL만 바꾼 설정 (mock 서버용).
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    /// 요청 타임아웃.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// 엔드포인트 경로를 베이스 URL에 붙입니다.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }
}

/// 로깅 설정.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// 로그 레벨
    pub level: String,
    /// 로그 형식 (pretty, json, compact)
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "compact".to_string(),
        }
    }
}

impl AppConfig {
    /// 파일과 환경 변수에서 설정을 로드합니다.
    ///
    /// 파일이 없으면 기본값과 환경 변수만 사용합니다.
    /// 환경 변수 예: `INVEST__PROVIDER__TIMEOUT_SECS=10`
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, config::ConfigError> {
        let builder = config::Config::builder()
            .add_source(config::File::from(path.as_ref()).required(false))
            .add_source(
                config::Environment::with_prefix("INVEST")
                    .separator("__")
                    .try_parsing(true),
            );

        let config = builder.build()?;
        config.try_deserialize()
    }

    /// 기본 경로에서 설정을 로드합니다.
    pub fn load_default() -> Result<Self, config::ConfigError> {
        Self::load(DEFAULT_CONFIG_PATH)
    }
}
