//! 과거 시세 조회 명령.

use anyhow::{Context, Result};
use clap::Args;
use invest_core::{Interval, SortOrder};
use invest_data::{render_table, HistoricalQuery, InvestingService};

use super::today;

/// `historical` 인자
#[derive(Debug, Clone, Args)]
pub struct HistoricalArgs {
    /// 심볼 (예: ABB)
    #[arg(short, long)]
    pub symbol: String,

    /// 국가 (예: Sweden)
    #[arg(short, long, default_value = "")]
    pub country: String,

    /// 자산 유형 (예: equities)
    #[arg(short, long, default_value = "")]
    pub asset_type: String,

    /// 시작 날짜 (dd/mm/yyyy)
    #[arg(short, long, default_value = "01/01/2015")]
    pub from_date: String,

    /// 종료 날짜 (dd/mm/yyyy, 기본: 오늘)
    #[arg(short, long)]
    pub to_date: Option<String>,

    /// 간격 (daily, weekly, monthly)
    #[arg(short, long, default_value = "daily")]
    pub interval: Interval,

    /// 정렬 (asc, desc)
    #[arg(short, long, default_value = "asc")]
    pub order: SortOrder,
}

impl HistoricalArgs {
    pub fn to_query(&self) -> HistoricalQuery {
        HistoricalQuery::new(
            self.symbol.as_str(),
            self.asset_type.as_str(),
            self.country.as_str(),
            self.from_date.as_str(),
            self.to_date.clone().unwrap_or_else(today),
        )
        .with_interval(self.interval)
        .with_sort_order(self.order)
    }
}

/// 과거 시세를 정렬된 텍스트 테이블로 출력합니다.
pub async fn run(service: &InvestingService, args: &HistoricalArgs) -> Result<()> {
    let query = args.to_query();
    let table = service
        .historical_data(&query)
        .await
        .with_context(|| format!("과거 시세 조회 실패: {}", args.symbol))?;

    print!("{}", render_table(&table));
    Ok(())
}
