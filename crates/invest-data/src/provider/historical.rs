//! 과거 시세 (OHLCV) 조회.

use invest_core::{HistoricalTable, Interval, SortOrder};
use tracing::debug;

use super::client::{FormFields, InvestingClient};
use crate::error::DataResult;
use crate::extract::extract;

/// 과거 시세 엔드포인트 경로.
pub const HISTORICAL_PATH: &str = "/instruments/HistoricalDataAjax";

/// 과거 시세 요청 파라미터.
///
/// 날짜는 `dd/mm/yyyy` 문자열로 검증 없이 그대로 전달됩니다.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoricalRequest {
    /// 프로바이더 종목 ID
    pub instrument_id: i64,
    /// 표시명 (`<name> Historical Data` 헤더에 사용)
    pub display_name: String,
    pub from_date: String,
    pub to_date: String,
    pub sort_order: SortOrder,
    pub interval: Interval,
}

impl HistoricalRequest {
    /// 기본 정렬(오름차순)과 간격(일봉)으로 요청을 생성합니다.
    pub fn new(
        instrument_id: i64,
        display_name: impl Into<String>,
        from_date: impl Into<String>,
        to_date: impl Into<String>,
    ) -> Self {
        Self {
            instrument_id,
            display_name: display_name.into(),
            from_date: from_date.into(),
            to_date: to_date.into(),
            sort_order: SortOrder::default(),
            interval: Interval::default(),
        }
    }

    pub fn with_sort_order(mut self, sort_order: SortOrder) -> Self {
        self.sort_order = sort_order;
        self
    }

    pub fn with_interval(mut self, interval: Interval) -> Self {
        self.interval = interval;
        self
    }

    fn form_fields(&self, sml_id: &str) -> FormFields {
        vec![
            ("curr_id", self.instrument_id.to_string()),
            ("smlID", sml_id.to_string()),
            ("header", format!("{} Historical Data", self.display_name)),
            ("st_date", self.from_date.clone()),
            ("end_date", self.to_date.clone()),
            ("interval_sec", self.interval.as_provider_str().to_string()),
            ("sort_col", "date".to_string()),
            ("sort_ord", self.sort_order.as_provider_str().to_string()),
            ("action", "historical_data".to_string()),
        ]
    }
}

/// 과거 시세 조회기.
#[derive(Debug, Clone)]
pub struct HistoricalFetcher {
    client: InvestingClient,
}

impl HistoricalFetcher {
    pub fn new(client: InvestingClient) -> Self {
        Self { client }
    }

    /// 과거 시세를 native 레이아웃 테이블로 가져옵니다.
    pub async fn fetch(&self, request: &HistoricalRequest) -> DataResult<HistoricalTable> {
        let config = self.client.config();
        let form = request.form_fields(&config.sml_id);

        let body = self
            .client
            .post_form(
                HISTORICAL_PATH,
                "text/plain, */*; q=0.01",
                Some(config.referer.as_str()),
                &form,
            )
            .await?;

        let table = extract(&body, config.date_zone)?;
        debug!(
            instrument_id = request.instrument_id,
            rows = table.data_len(),
            "과거 시세 조회 완료"
        );

        Ok(table)
    }
}
