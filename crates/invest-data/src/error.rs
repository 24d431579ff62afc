//! 데이터 모듈 오류 타입.

use invest_core::CoreError;
use thiserror::Error;

/// 데이터 수집 관련 오류.
#[derive(Debug, Error)]
pub enum DataError {
    /// 네트워크 오류 (타임아웃, 연결 실패, 압축 해제 실패)
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// 2xx가 아닌 응답
    #[error("Unexpected status {status} from {url}")]
    Status { status: u16, url: String },

    /// 잘못된 JSON 응답
    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),

    /// HTML 응답에서 기대한 구조를 찾지 못함
    #[error("Format error: {0}")]
    Format(String),

    /// 조건에 맞는 종목 없음
    #[error("No instrument found for {symbol} (asset type: {asset_type}, country: {country})")]
    NotFound {
        symbol: String,
        asset_type: String,
        country: String,
    },

    /// 파일 입출력 오류
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV 쓰기 오류
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// 설정 오류
    #[error(transparent)]
    Core(#[from] CoreError),
}

impl DataError {
    /// 요청 자체가 실패한 경우인지 확인합니다.
    ///
    /// 호출자가 재시도 여부를 판단할 때 사용합니다.
    pub fn is_transport(&self) -> bool {
        matches!(self, DataError::Transport(_) | DataError::Status { .. })
    }

    /// 종목을 찾지 못한 경우인지 확인합니다.
    pub fn is_not_found(&self) -> bool {
        matches!(self, DataError::NotFound { .. })
    }
}

/// 데이터 작업 결과 타입.
pub type DataResult<T> = Result<T, DataError>;
