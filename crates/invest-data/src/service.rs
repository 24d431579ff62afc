//! investing.com 데이터 서비스.
//!
//! 종목 검색, instrument id 조회, 과거 시세 조회, 컬럼 재배열, CSV 저장을
//! 하나의 클라이언트로 묶어 제공합니다.

use std::path::{Path, PathBuf};

use invest_core::{HistoricalTable, Interval, ProviderConfig, SortOrder};
use tracing::{debug, info, instrument};

use crate::error::{DataError, DataResult};
use crate::provider::{HistoricalFetcher, HistoricalRequest, InvestingClient, QuoteResolver};
use crate::sink;

/// 과거 시세 조회 조건.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoricalQuery {
    pub symbol: String,
    pub asset_type: String,
    pub country: String,
    /// `dd/mm/yyyy`
    pub from_date: String,
    /// `dd/mm/yyyy`
    pub to_date: String,
    pub sort_order: SortOrder,
    pub interval: Interval,
}

impl HistoricalQuery {
    pub fn new(
        symbol: impl Into<String>,
        asset_type: impl Into<String>,
        country: impl Into<String>,
        from_date: impl Into<String>,
        to_date: impl Into<String>,
    ) -> Self {
        Self {
            symbol: symbol.into(),
            asset_type: asset_type.into(),
            country: country.into(),
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
}

/// 검색과 과거 시세 조회를 묶은 서비스.
#[derive(Debug, Clone)]
pub struct InvestingService {
    resolver: QuoteResolver,
    fetcher: HistoricalFetcher,
}

impl InvestingService {
    /// 설정으로 서비스를 생성합니다.
    pub fn new(config: ProviderConfig) -> DataResult<Self> {
        Ok(Self::with_client(InvestingClient::new(config)?))
    }

    /// 기존 클라이언트를 공유해 서비스를 생성합니다.
    pub fn with_client(client: InvestingClient) -> Self {
        Self {
            resolver: QuoteResolver::new(client.clone()),
            fetcher: HistoricalFetcher::new(client),
        }
    }

    pub fn resolver(&self) -> &QuoteResolver {
        &self.resolver
    }

    pub fn fetcher(&self) -> &HistoricalFetcher {
        &self.fetcher
    }

    /// 필터링된 검색 결과를 들여쓰기 JSON으로 반환합니다.
    #[instrument(skip(self))]
    pub async fn search_json(
        &self,
        symbol: &str,
        asset_type: Option<&str>,
        country: Option<&str>,
    ) -> DataResult<String> {
        let result = self.resolver.resolve(symbol, asset_type, country).await?;
        sink::search_to_json(&result)
    }

    /// 과거 시세를 conventional 레이아웃(Date, Open, High, Low, Close, Vol.)으로 반환합니다.
    ///
    /// 일치하는 종목이 없으면 [`DataError::NotFound`].
    #[instrument(skip(self), fields(symbol = %query.symbol))]
    pub async fn historical_data(&self, query: &HistoricalQuery) -> DataResult<HistoricalTable> {
        let instrument_id = self
            .resolver
            .resolve_id(&query.symbol, &query.asset_type, &query.country)
            .await?
            .ok_or_else(|| DataError::NotFound {
                symbol: query.symbol.clone(),
                asset_type: query.asset_type.clone(),
                country: query.country.clone(),
            })?;
        debug!(instrument_id, "종목 확인");

        let request = HistoricalRequest::new(
            instrument_id,
            query.symbol.as_str(),
            query.from_date.as_str(),
            query.to_date.as_str(),
        )
        .with_sort_order(query.sort_order)
        .with_interval(query.interval);

        let table = self.fetcher.fetch(&request).await?;
        Ok(table.reordered())
    }

    /// 과거 시세를 조회해 `<dir>/<symbol>.csv`로 저장합니다.
    pub async fn historical_to_csv(
        &self,
        query: &HistoricalQuery,
        dir: &Path,
    ) -> DataResult<(PathBuf, usize)> {
        let table = self.historical_data(query).await?;
        let path = sink::write_csv(dir, &query.symbol, &table)?;

        info!(symbol = %query.symbol, rows = table.data_len(), "과거 시세 저장");
        Ok((path, table.data_len()))
    }
}
