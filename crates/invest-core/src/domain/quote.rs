//! 종목 검색 결과 모델.
//!
//! `SearchInnerPage` 엔드포인트의 JSON 응답을 그대로 표현합니다.
//!
//! ```text
//! {"quotes":[{"pairId":1095913,"name":"Apple Inc","flag":"Italy",
//!   "link":"/equities/apple-computer-inc?cid=1095913","symbol":"AAPLE",
//!   "type":"Stock - Milan","pair_type_raw":"Equities","pair_type":"equities",
//!   "countryID":10,"sector":0,"region":6,"industry":0,"isCrypto":false,
//!   "exchange":"Milan","exchangeID":6}],
//!  "total":{"quotes":1,"allResults":1},"filters":[]}
//! ```

use serde::{Deserialize, Deserializer, Serialize};

/// 검색 결과의 종목 한 건.
///
/// 응답에서 누락되거나 `null`인 필드는 기본값으로 채워집니다.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Quote {
    /// 프로바이더 내부 종목 ID
    #[serde(rename = "pairId", deserialize_with = "null_as_default")]
    pub pair_id: i64,
    /// 종목명
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    /// 국가 (예: "Sweden", "United States")
    #[serde(deserialize_with = "null_as_default")]
    pub flag: String,
    /// 상세 페이지 경로
    #[serde(deserialize_with = "null_as_default")]
    pub link: String,
    /// 티커
    #[serde(deserialize_with = "null_as_default")]
    pub symbol: String,
    /// 표시용 유형 (예: "Stock - Milan")
    #[serde(rename = "type", deserialize_with = "null_as_default")]
    pub type_label: String,
    /// 정규화된 자산 유형 (예: "equities", "etf")
    #[serde(deserialize_with = "null_as_default")]
    pub pair_type: String,
    /// 원본 자산 유형 라벨
    #[serde(deserialize_with = "null_as_default")]
    pub pair_type_raw: String,
    #[serde(rename = "countryID", deserialize_with = "null_as_default")]
    pub country_id: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub sector: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub region: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub industry: i64,
    #[serde(rename = "isCrypto", deserialize_with = "null_as_default")]
    pub is_crypto: bool,
    /// 거래소명
    #[serde(deserialize_with = "null_as_default")]
    pub exchange: String,
    #[serde(rename = "exchangeID", deserialize_with = "null_as_default")]
    pub exchange_id: i64,
}

impl Quote {
    /// 자산 유형 일치 여부 (대소문자 무시).
    pub fn matches_asset_type(&self, asset_type: &str) -> bool {
        eq_fold(&self.pair_type, asset_type)
    }

    /// 국가 일치 여부 (대소문자 무시).
    pub fn matches_country(&self, country: &str) -> bool {
        eq_fold(&self.flag, country)
    }
}

/// 검색 결과 건수.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchTotals {
    #[serde(deserialize_with = "null_as_default")]
    pub quotes: i64,
    #[serde(rename = "allResults", deserialize_with = "null_as_default")]
    pub all_results: i64,
}

/// 검색 응답 전체.
///
/// `quotes`는 프로바이더의 관련도 순서를 그대로 유지합니다.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchResult {
    #[serde(deserialize_with = "null_as_default")]
    pub quotes: Vec<Quote>,
    #[serde(deserialize_with = "null_as_default")]
    pub total: SearchTotals,
    /// 필터 facet 목록 (현재 항상 비어 있음)
    #[serde(deserialize_with = "null_as_default")]
    pub filters: Vec<serde_json::Value>,
}

impl SearchResult {
    /// 필터를 적용한 새 결과를 반환합니다. 원본 순서는 유지됩니다.
    pub fn filtered(&self, filter: &QuoteFilter) -> SearchResult {
        SearchResult {
            quotes: self
                .quotes
                .iter()
                .filter(|quote| filter.matches(quote))
                .cloned()
                .collect(),
            total: self.total.clone(),
            filters: self.filters.clone(),
        }
    }

    /// 자산 유형과 국가가 모두 일치하는 첫 번째 종목.
    pub fn first_match(&self, asset_type: &str, country: &str) -> Option<&Quote> {
        self.quotes
            .iter()
            .find(|quote| quote.matches_asset_type(asset_type) && quote.matches_country(country))
    }
}

/// 검색 결과 필터.
///
/// 빈 문자열은 "필터 없음"으로 취급합니다.
/// - 둘 다 지정: 두 조건을 모두 만족하는 종목
/// - 국가만 지정: 국가가 일치하는 종목
/// - 자산 유형만 지정: 자산 유형이 일치하는 종목
/// - 둘 다 없음: 전체
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct QuoteFilter {
    pub asset_type: Option<String>,
    pub country: Option<String>,
}

impl QuoteFilter {
    pub fn new(asset_type: Option<&str>, country: Option<&str>) -> Self {
        Self {
            asset_type: non_blank(asset_type),
            country: non_blank(country),
        }
    }

    /// 조건이 하나도 없는지 여부.
    pub fn is_empty(&self) -> bool {
        self.asset_type.is_none() && self.country.is_none()
    }

    pub fn matches(&self, quote: &Quote) -> bool {
        let asset_ok = self
            .asset_type
            .as_deref()
            .map_or(true, |t| quote.matches_asset_type(t));
        let country_ok = self
            .country
            .as_deref()
            .map_or(true, |c| quote.matches_country(c));
        asset_ok && country_ok
    }
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

/// 유니코드 소문자 변환 기준 비교.
fn eq_fold(a: &str, b: &str) -> bool {
    a.chars()
        .flat_map(char::to_lowercase)
        .eq(b.chars().flat_map(char::to_lowercase))
}

/// `null`을 기본값으로 역직렬화.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
