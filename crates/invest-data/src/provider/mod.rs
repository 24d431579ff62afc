//! investing.com Provider 모듈.
//!
//! ## 전송 계층
//! - `InvestingClient`: 브라우저 헤더와 타임아웃을 가진 POST 클라이언트
//!
//! ## 종목 검색
//! - `QuoteResolver`: 심볼 검색, 국가/자산 유형 필터링, instrument id 조회
//!
//! ## 과거 시세
//! - `HistoricalFetcher`: `HistoricalDataAjax` 요청 및 HTML 테이블 추출

pub mod client;
pub mod historical;
pub mod search;

pub use client::InvestingClient;
pub use historical::{HistoricalFetcher, HistoricalRequest, HISTORICAL_PATH};
pub use search::{decode_search, QuoteResolver, SEARCH_PATH};
