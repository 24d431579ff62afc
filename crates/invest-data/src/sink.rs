//! 결과 출력 (CSV 파일, JSON, 텍스트 테이블).

use std::path::{Path, PathBuf};

use invest_core::{CoreError, HistoricalTable, SearchResult};
use tracing::info;

use crate::error::DataResult;

/// 심볼로 CSV 파일명을 만듭니다.
///
/// 경로 구분자는 `_`로 바꿔 `dir` 밖이나 하위 디렉토리에 쓰지 않도록 합니다 (`BRK/B` → `BRK_B.csv`).
pub fn csv_file_name(symbol: &str) -> DataResult<String> {
    let stem: String = symbol
        .trim()
        .chars()
        .map(|c| if c == '/' || c == '\\' { '_' } else { c })
        .collect();

    if stem.is_empty() || stem == "." || stem == ".." {
        return Err(CoreError::InvalidInput(format!(
            "invalid symbol for file name: {:?}",
            symbol
        ))
        .into());
    }

    Ok(format!("{}.csv", stem))
}

/// 테이블을 `<dir>/<symbol>.csv`로 저장합니다. 디렉토리가 없으면 생성합니다.
///
/// 헤더 행을 포함한 모든 행을 그대로 씁니다.
pub fn write_csv(dir: &Path, symbol: &str, table: &HistoricalTable) -> DataResult<PathBuf> {
    let file_name = csv_file_name(symbol)?;
    std::fs::create_dir_all(dir)?;
    let path = dir.join(file_name);

    let mut writer = csv::Writer::from_path(&path)?;
    for row in table.rows() {
        writer.write_record(row)?;
    }
    writer.flush()?;

    info!(path = %path.display(), rows = table.data_len(), "CSV 저장 완료");
    Ok(path)
}

/// 검색 결과를 들여쓰기된 JSON으로 직렬화합니다.
pub fn search_to_json(result: &SearchResult) -> DataResult<String> {
    Ok(serde_json::to_string_pretty(result)?)
}

/// 컬럼을 정렬한 텍스트 테이블.
pub fn render_table(table: &HistoricalTable) -> String {
    let mut widths = [0usize; invest_core::COLUMN_COUNT];
    for row in table.rows() {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    for row in table.rows() {
        let line: Vec<String> = row
            .iter()
            .zip(widths.iter())
            .map(|(cell, width)| format!("{:<width$}", cell, width = width))
            .collect();
        out.push_str(line.join("  ").trim_end());
        out.push('\n');
    }
    out
}
