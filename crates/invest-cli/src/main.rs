//! investing.com 데이터 수집 CLI.
//!
//! # 사용 예시
//!
//! ```bash
//! # 종목 검색 (JSON 출력)
//! invest search -s ABB -c Sweden -a equities
//!
//! # 과거 시세 조회 (테이블 출력)
//! invest historical -s ABB -c Sweden -a equities -f 01/01/2020 -t 31/12/2020
//!
//! # 심볼 목록 파일로 CSV 일괄 저장
//! invest file -s symbols.txt -d CSV --keep-going
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use invest_core::{init_logging, AppConfig, LogConfig, LogFormat};
use invest_data::InvestingService;

mod commands;
mod stats;

use commands::file::FileArgs;
use commands::historical::HistoricalArgs;
use commands::search::SearchArgs;

#[derive(Parser)]
#[command(name = "invest")]
#[command(about = "investing.com 종목 검색 및 과거 시세 다운로드", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// 로그 레벨 (trace, debug, info, warn, error). 기본: 설정 파일 값
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// 로그 형식 (pretty, json, compact). 기본: 설정 파일 값
    #[arg(long, global = true)]
    log_format: Option<String>,

    /// 설정 파일 경로 (기본: config/invest.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// 종목 검색 결과를 JSON으로 출력
    Search(SearchArgs),

    /// 과거 시세를 테이블로 출력
    Historical(HistoricalArgs),

    /// 심볼 목록 파일의 과거 시세를 CSV로 저장
    File(FileArgs),
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    // 설정 로드
    let config = match &cli.config {
        Some(path) => AppConfig::load(path),
        None => AppConfig::load_default(),
    }
    .context("설정 로드 실패")?;

    // 로깅 초기화 (CLI 인자가 설정 파일보다 우선)
    let level = cli
        .log_level
        .clone()
        .unwrap_or_else(|| config.logging.level.clone());
    let format: LogFormat = cli
        .log_format
        .as_deref()
        .unwrap_or(&config.logging.format)
        .parse()
        .map_err(anyhow::Error::msg)?;
    init_logging(LogConfig::new(level).with_format(format))
        .map_err(|e| anyhow::anyhow!("로깅 초기화 실패: {}", e))?;

    tracing::debug!(base_url = %config.provider.base_url, "설정 로드 완료");

    let service = InvestingService::new(config.provider).context("HTTP 클라이언트 생성 실패")?;

    match cli.command {
        Commands::Search(args) => commands::search::run(&service, &args).await?,
        Commands::Historical(args) => commands::historical::run(&service, &args).await?,
        Commands::File(args) => {
            let stats = commands::file::run(&service, &args).await?;
            stats.log_summary("배치 다운로드");
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use invest_core::{Interval, SortOrder};

    #[test]
    fn test_parse_historical_defaults() {
        let cli = Cli::try_parse_from(["invest", "historical", "--symbol", "ABB"]).unwrap();
        match cli.command {
            Commands::Historical(args) => {
                assert_eq!(args.from_date, "01/01/2015");
                assert_eq!(args.interval, Interval::Daily);
                assert_eq!(args.order, SortOrder::Asc);
                assert!(args.to_date.is_none());

                let query = args.to_query();
                assert_eq!(query.symbol, "ABB");
                assert_eq!(query.to_date.len(), 10);
            }
            _ => panic!("expected historical command"),
        }
    }

    #[test]
    fn test_parse_historical_options() {
        let cli = Cli::try_parse_from([
            "invest",
            "--log-level",
            "debug",
            "historical",
            "-s",
            "ABB",
            "-c",
            "Sweden",
            "-a",
            "equities",
            "-i",
            "weekly",
            "-o",
            "desc",
            "-t",
            "31/12/2020",
        ])
        .unwrap();
        assert_eq!(cli.log_level.as_deref(), Some("debug"));
        match cli.command {
            Commands::Historical(args) => {
                let query = args.to_query();
                assert_eq!(query.interval, Interval::Weekly);
                assert_eq!(query.sort_order, SortOrder::Desc);
                assert_eq!(query.to_date, "31/12/2020");
                assert_eq!(query.country, "Sweden");
            }
            _ => panic!("expected historical command"),
        }
    }

    #[test]
    fn test_parse_file_defaults() {
        let cli = Cli::try_parse_from(["invest", "file", "--symbols", "symbols.txt"]).unwrap();
        match cli.command {
            Commands::File(args) => {
                assert_eq!(args.dir, PathBuf::from("CSV"));
                assert_eq!(args.country, "Sweden");
                assert_eq!(args.asset_type, "equities");
                assert_eq!(args.from_date, "01/01/2010");
                assert!(!args.keep_going);
            }
            _ => panic!("expected file command"),
        }
    }

    #[test]
    fn test_parse_search_requires_symbol() {
        assert!(Cli::try_parse_from(["invest", "search"]).is_err());
        assert!(Cli::try_parse_from(["invest", "historical", "-s", "ABB", "-i", "hourly"]).is_err());
    }
}
