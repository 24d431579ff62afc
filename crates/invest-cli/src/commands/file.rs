//! 심볼 목록 파일 기반 배치 다운로드 명령.

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Args;
use invest_data::{HistoricalQuery, InvestingService};

use super::today;
use crate::stats::BatchStats;

/// `file` 인자
#[derive(Debug, Clone, Args)]
pub struct FileArgs {
    /// 심볼 목록 파일 (한 줄에 하나, `#` 주석 허용)
    #[arg(short, long)]
    pub symbols: PathBuf,

    /// CSV 저장 디렉토리
    #[arg(short, long, default_value = "CSV")]
    pub dir: PathBuf,

    /// 국가
    #[arg(short, long, default_value = "Sweden")]
    pub country: String,

    /// 자산 유형
    #[arg(short, long, default_value = "equities")]
    pub asset_type: String,

    /// 시작 날짜 (dd/mm/yyyy)
    #[arg(short, long, default_value = "01/01/2010")]
    pub from_date: String,

    /// 종료 날짜 (dd/mm/yyyy, 기본: 오늘)
    #[arg(short, long)]
    pub to_date: Option<String>,

    /// 실패한 심볼을 건너뛰고 계속 진행
    #[arg(long, default_value = "false")]
    pub keep_going: bool,
}

/// 심볼 목록을 읽습니다. 빈 줄과 `#`으로 시작하는 줄은 건너뜁니다.
pub fn read_symbols(path: &Path) -> Result<Vec<String>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("심볼 파일 읽기 실패: {}", path.display()))?;

    Ok(parse_symbols(&content))
}

fn parse_symbols(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}

/// 심볼마다 과거 시세를 순차 조회해 CSV로 저장합니다.
///
/// `keep_going`이 없으면 첫 실패에서 중단합니다.
pub async fn run(service: &InvestingService, args: &FileArgs) -> Result<BatchStats> {
    let start = Instant::now();
    let mut stats = BatchStats::new();

    let symbols = read_symbols(&args.symbols)?;
    if symbols.is_empty() {
        tracing::warn!(path = %args.symbols.display(), "처리할 심볼이 없습니다");
        stats.elapsed = start.elapsed();
        return Ok(stats);
    }

    let to_date = args.to_date.clone().unwrap_or_else(today);
    tracing::info!(
        symbols = symbols.len(),
        from_date = %args.from_date,
        to_date = %to_date,
        dir = %args.dir.display(),
        "배치 다운로드 시작"
    );

    for (idx, symbol) in symbols.iter().enumerate() {
        stats.total += 1;
        tracing::debug!(
            symbol = %symbol,
            progress = format!("{}/{}", idx + 1, symbols.len()),
            "다운로드 시작"
        );

        let query = HistoricalQuery::new(
            symbol.as_str(),
            args.asset_type.as_str(),
            args.country.as_str(),
            args.from_date.as_str(),
            to_date.as_str(),
        );

        match service.historical_to_csv(&query, &args.dir).await {
            Ok((_, rows)) => {
                stats.success += 1;
                stats.total_rows += rows;
                println!("{}\tOK", symbol);
            }
            Err(e) if args.keep_going => {
                if e.is_not_found() {
                    stats.not_found += 1;
                    println!("{}\tNOT FOUND", symbol);
                } else {
                    stats.errors += 1;
                    println!("{}\tFAILED", symbol);
                }
                tracing::error!(symbol = %symbol, error = %e, "다운로드 실패");
            }
            Err(e) => {
                stats.errors += 1;
                stats.elapsed = start.elapsed();
                stats.log_summary("배치 다운로드");
                return Err(e).with_context(|| format!("다운로드 실패: {}", symbol));
            }
        }
    }

    stats.elapsed = start.elapsed();
    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_symbols_skips_blank_and_comments() {
        let content = "ABB\n\n# large caps\n  VOLV-B  \n\t\nERIC-B\n";
        assert_eq!(parse_symbols(content), vec!["ABB", "VOLV-B", "ERIC-B"]);
    }

    #[test]
    fn test_read_symbols_from_file() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("symbols.txt");
        std::fs::write(&path, "ABB\r\nSAND\r\n").unwrap();

        assert_eq!(read_symbols(&path).unwrap(), vec!["ABB", "SAND"]);
    }

    #[test]
    fn test_read_symbols_missing_file() {
        let err = read_symbols(Path::new("does/not/exist.txt")).unwrap_err();
        assert!(err.to_string().contains("does/not/exist.txt"));
    }
}
