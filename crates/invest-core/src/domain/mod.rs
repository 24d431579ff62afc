//! 도메인 모델 모듈.
//!
//! - `quote`: 종목 검색 응답 및 필터링 정책
//! - `historical`: 과거 시세 테이블 및 컬럼 재배열

pub mod historical;
pub mod quote;

pub use historical::*;
pub use quote::*;
