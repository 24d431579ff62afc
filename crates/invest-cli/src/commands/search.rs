//! 종목 검색 명령.

use anyhow::{Context, Result};
use clap::Args;
use invest_data::InvestingService;

/// `search` 인자
#[derive(Debug, Clone, Args)]
pub struct SearchArgs {
    /// 검색할 심볼 (예: ABB)
    #[arg(short, long)]
    pub symbol: String,

    /// 국가 필터 (예: Sweden)
    #[arg(short, long)]
    pub country: Option<String>,

    /// 자산 유형 필터 (예: equities, etf)
    #[arg(short, long)]
    pub asset_type: Option<String>,
}

/// 필터링된 검색 결과를 JSON으로 출력합니다.
pub async fn run(service: &InvestingService, args: &SearchArgs) -> Result<()> {
    let json = service
        .search_json(
            &args.symbol,
            args.asset_type.as_deref(),
            args.country.as_deref(),
        )
        .await
        .with_context(|| format!("검색 실패: {}", args.symbol))?;

    println!("{}", json);
    Ok(())
}
