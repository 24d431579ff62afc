//! 코어 에러 타입.

use thiserror::Error;

/// 설정 및 입력 검증 에러.
#[derive(Debug, Error)]
pub enum CoreError {
    /// 설정 로드 에러
    #[error("설정 에러: {0}")]
    Config(#[from] config::ConfigError),

    /// 잘못된 입력
    #[error("잘못된 입력: {0}")]
    InvalidInput(String),

    /// 직렬화 에러
    #[error("직렬화 에러: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// 코어 작업을 위한 Result 타입.
pub type CoreResult<T> = Result<T, CoreError>;
