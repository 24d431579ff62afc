//! 과거 시세 요청 간격 및 정렬 순서.
//!
//! investing.com `HistoricalDataAjax` 엔드포인트가 받는 문자열
//! (`Daily`/`Weekly`/`Monthly`, `ASC`/`DESC`)과 1:1로 대응합니다.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::CoreError;

/// 시세 간격.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Interval {
    /// 일봉
    #[default]
    Daily,
    /// 주봉
    Weekly,
    /// 월봉
    Monthly,
}

impl Interval {
    /// 프로바이더 `interval_sec` 필드 값을 반환합니다.
    pub fn as_provider_str(&self) -> &'static str {
        match self {
            Interval::Daily => "Daily",
            Interval::Weekly => "Weekly",
            Interval::Monthly => "Monthly",
        }
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_provider_str())
    }
}

impl FromStr for Interval {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "daily" | "1d" | "d" => Ok(Interval::Daily),
            "weekly" | "1w" | "w" => Ok(Interval::Weekly),
            "monthly" | "1m" | "m" => Ok(Interval::Monthly),
            _ => Err(CoreError::InvalidInput(format!(
                "Invalid interval: {}. Supported: daily, weekly, monthly",
                s
            ))),
        }
    }
}

/// 날짜 정렬 순서.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// 오래된 날짜부터
    #[default]
    Asc,
    /// 최근 날짜부터
    Desc,
}

impl SortOrder {
    /// 프로바이더 `sort_ord` 필드 값을 반환합니다.
    pub fn as_provider_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "ASC",
            SortOrder::Desc => "DESC",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_provider_str())
    }
}

impl FromStr for SortOrder {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "asc" | "ascending" => Ok(SortOrder::Asc),
            "desc" | "descending" => Ok(SortOrder::Desc),
            _ => Err(CoreError::InvalidInput(format!(
                "Invalid sort order: {}. Supported: asc, desc",
                s
            ))),
        }
    }
}
