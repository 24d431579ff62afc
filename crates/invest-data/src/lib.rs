//! investing.com 데이터 수집.
//!
//! 이 crate는 다음을 제공합니다:
//! - 검색 엔드포인트 기반 종목 조회 및 instrument id 변환
//! - 과거 시세 AJAX 요청
//! - HTML 토큰 스트림에서 과거 시세 테이블 추출
//! - CSV/JSON/텍스트 테이블 출력
//! - 위 기능을 묶은 `InvestingService`

pub mod error;
pub mod extract;
pub mod provider;
pub mod service;
pub mod sink;

pub use error::{DataError, DataResult};
pub use extract::{extract, HtmlToken, RowAction, RowAssembler};
pub use provider::{HistoricalFetcher, HistoricalRequest, InvestingClient, QuoteResolver};
pub use service::{HistoricalQuery, InvestingService};
pub use sink::{csv_file_name, render_table, search_to_json, write_csv};
