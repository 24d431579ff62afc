//! 종목 검색 및 instrument id 조회.

use invest_core::{QuoteFilter, SearchResult};
use tracing::debug;

use super::client::{FormFields, InvestingClient};
use crate::error::DataResult;

/// 검색 엔드포인트 경로.
pub const SEARCH_PATH: &str = "/search/service/SearchInnerPage";

/// 검색 응답을 디코딩합니다.
pub fn decode_search(body: &[u8]) -> DataResult<SearchResult> {
    Ok(serde_json::from_slice(body)?)
}

/// 자유 입력 심볼을 investing.com 종목으로 변환합니다.
#[derive(Debug, Clone)]
pub struct QuoteResolver {
    client: InvestingClient,
}

impl QuoteResolver {
    pub fn new(client: InvestingClient) -> Self {
        Self { client }
    }

    fn search_form(&self, symbol: &str) -> FormFields {
        vec![
            ("search_text", symbol.to_string()),
            ("tab", "quotes".to_string()),
            ("limit", self.client.config().search_limit.to_string()),
            ("offset", "0".to_string()),
        ]
    }

    /// 필터 없이 검색 결과 전체를 가져옵니다. 순서는 프로바이더 관련도 순 그대로입니다.
    pub async fn search(&self, symbol: &str) -> DataResult<SearchResult> {
        let form = self.search_form(symbol);
        let body = self
            .client
            .post_form(SEARCH_PATH, "text/html", None, &form)
            .await?;

        decode_search(&body)
    }

    /// 검색 후 자산 유형/국가로 필터링합니다.
    ///
    /// 빈 문자열 필터는 지정하지 않은 것으로 취급합니다.
    pub async fn resolve(
        &self,
        symbol: &str,
        asset_type: Option<&str>,
        country: Option<&str>,
    ) -> DataResult<SearchResult> {
        let result = self.search(symbol).await?;
        let filter = QuoteFilter::new(asset_type, country);
        let filtered = result.filtered(&filter);

        debug!(
            symbol,
            total = result.quotes.len(),
            matched = filtered.quotes.len(),
            "검색 결과 필터링"
        );

        Ok(filtered)
    }

    /// 자산 유형과 국가가 일치하는 첫 종목의 id를 반환합니다.
    ///
    /// 일치하는 종목이 없으면 `Ok(None)`이며, 요청 실패와 구분됩니다.
    pub async fn resolve_id(
        &self,
        symbol: &str,
        asset_type: &str,
        country: &str,
    ) -> DataResult<Option<i64>> {
        let result = self.search(symbol).await?;
        let id = result
            .first_match(asset_type, country)
            .map(|quote| quote.pair_id);

        debug!(symbol, asset_type, country, id = ?id, "instrument id 조회");

        Ok(id)
    }
}
