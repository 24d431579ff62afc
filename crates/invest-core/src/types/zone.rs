//! epoch 타임스탬프 렌더링 시간대.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::CoreError;

/// 과거 시세 테이블의 날짜 컬럼 형식.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// epoch 초를 `YYYY-MM-DD HH:MM:SS`로 변환할 때 사용할 시간대.
///
/// 같은 응답이 어느 머신에서든 같은 CSV를 만들도록 기본값은 UTC입니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DateZone {
    /// UTC
    #[default]
    Utc,
    /// 실행 머신의 로컬 시간대
    Local,
}

impl DateZone {
    /// epoch 초를 렌더링합니다. 표현 범위를 벗어나면 `None`.
    pub fn format_epoch(&self, secs: i64) -> Option<String> {
        let utc = DateTime::from_timestamp(secs, 0)?;
        let rendered = match self {
            DateZone::Utc => utc.format(TIMESTAMP_FORMAT).to_string(),
            DateZone::Local => utc.with_timezone(&Local).format(TIMESTAMP_FORMAT).to_string(),
        };
        Some(rendered)
    }
}

impl fmt::Display for DateZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DateZone::Utc => write!(f, "utc"),
            DateZone::Local => write!(f, "local"),
        }
    }
}

impl FromStr for DateZone {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "utc" => Ok(DateZone::Utc),
            "local" => Ok(DateZone::Local),
            _ => Err(CoreError::InvalidInput(format!(
                "Invalid date zone: {}. Supported: utc, local",
                s
            ))),
        }
    }
}
