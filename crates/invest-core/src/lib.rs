//! # Invest Core
//!
//! investing.com 데이터 수집기의 핵심 도메인 모델 및 타입을 제공합니다.
//!
//! 이 크레이트는 수집 파이프라인 전반에서 사용되는 기본 타입을 제공합니다:
//! - 종목 검색 결과 (Quote, SearchResult) 및 필터링 정책
//! - 과거 시세 테이블 (HistoricalRow, HistoricalTable) 및 컬럼 재배열
//! - 요청 파라미터 타입 (Interval, SortOrder, DateZone)
//! - 설정 관리
//! - 로깅 인프라

pub mod config;
pub mod domain;
pub mod error;
pub mod logging;
pub mod types;

pub use self::config::*;
pub use domain::*;
pub use error::*;
pub use logging::*;
pub use types::*;
