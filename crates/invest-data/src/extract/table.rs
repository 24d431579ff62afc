//! 과거 시세 HTML 테이블 추출.
//!
//! 프로바이더는 `data-real-value` 속성 외에는 의미 있는 마크업을 주지 않습니다.
//! 따라서 `<td>`의 속성 존재 여부로 데이터 셀을 판단하고, 행 경계는
//! `</tr>` 종료 태그로만 추론합니다.
//!
//! 1. `<tbody>` 시작 태그까지 모든 토큰을 버립니다. 찾지 못하면 [`DataError::Format`].
//! 2. `<td>`마다 커서를 한 칸 전진시키며 속성 값을 채우고, `</tr>`에서 행을 내보냅니다.
//! 3. `</table>` 또는 스트림 끝에서 종료합니다. 미완성 행은 버립니다.
//!
//! 셀이 부족한 행은 빈 문자열을 채운 채 그대로 추가됩니다.

use invest_core::{DateZone, HistoricalRow, HistoricalTable, COLUMN_COUNT};
use tracing::{debug, trace};

use super::lexer::{tokenize, HtmlToken};
use crate::error::{DataError, DataResult};

/// 데이터 셀 속성.
pub const VALUE_ATTR: &str = "data-real-value";

/// 토큰 처리 결과.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowAction {
    /// 다음 토큰으로
    Continue,
    /// 완성된 행
    EmitRow(HistoricalRow),
    /// 테이블 종료
    Stop,
}

/// 행 조립 상태.
#[derive(Debug, Clone)]
pub struct RowAssembler {
    buffer: HistoricalRow,
    cursor: usize,
    zone: DateZone,
}

impl RowAssembler {
    pub fn new(zone: DateZone) -> Self {
        Self {
            buffer: HistoricalRow::default(),
            cursor: 0,
            zone,
        }
    }

    /// 현재 컬럼 위치.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// 토큰 하나를 처리합니다.
    ///
    /// 날짜 컬럼의 epoch 값을 해석할 수 없으면 전체 추출이 실패합니다.
    pub fn handle(&mut self, token: &HtmlToken) -> DataResult<RowAction> {
        match token {
            HtmlToken::Start { name, .. } if name == "td" => {
                self.push_cell(token.attr(VALUE_ATTR))?;
                Ok(RowAction::Continue)
            }
            HtmlToken::End { name } if name == "tr" => {
                self.cursor = 0;
                Ok(RowAction::EmitRow(std::mem::take(&mut self.buffer)))
            }
            HtmlToken::End { name } if name == "table" => Ok(RowAction::Stop),
            _ => Ok(RowAction::Continue),
        }
    }

    fn push_cell(&mut self, value: Option<&str>) -> DataResult<()> {
        if self.cursor >= COLUMN_COUNT {
            trace!(cursor = self.cursor, "초과 셀 무시");
            return Ok(());
        }

        if let Some(raw) = value {
            let raw = raw.trim();
            let cell = if self.cursor == 0 {
                self.render_date(raw)?
            } else {
                raw.to_string()
            };
            self.buffer[self.cursor] = cell;
        }
        self.cursor += 1;

        Ok(())
    }

    fn render_date(&self, raw: &str) -> DataResult<String> {
        let secs: i64 = raw
            .parse()
            .map_err(|_| DataError::Format(format!("invalid epoch timestamp: {:?}", raw)))?;

        self.zone
            .format_epoch(secs)
            .ok_or_else(|| DataError::Format(format!("epoch timestamp out of range: {}", secs)))
    }
}

/// HTML 본문에서 과거 시세 테이블을 추출합니다.
///
/// 결과의 첫 행은 항상 native 헤더입니다.
pub fn extract(html: &[u8], zone: DateZone) -> DataResult<HistoricalTable> {
    let text = String::from_utf8_lossy(html);
    let tokens = tokenize(&text);
    let mut stream = tokens.iter();

    if !stream.by_ref().any(|token| token.is_start("tbody")) {
        return Err(DataError::Format(
            "<tbody> not found in historical data response".to_string(),
        ));
    }

    let mut table = HistoricalTable::with_native_header();
    let mut assembler = RowAssembler::new(zone);

    for token in stream {
        match assembler.handle(token)? {
            RowAction::Continue => {}
            RowAction::EmitRow(row) => table.push(row),
            RowAction::Stop => break,
        }
    }

    debug!(rows = table.data_len(), "HTML 테이블 추출 완료");
    Ok(table)
}
