//! 과거 시세 테이블 모델 및 컬럼 재배열.
//!
//! 프로바이더는 `Date, Close, Open, High, Low, Vol.` 순서(native)로 데이터를 내려줍니다.
//! CSV 등 일반적인 OHLC 도구는 `Date, Open, High, Low, Close, Vol.` 순서(conventional)를
//! 기대하므로 [`reorder`]로 변환합니다.

/// 한 행의 셀 수.
pub const COLUMN_COUNT: usize = 6;

/// native 레이아웃 헤더.
pub const NATIVE_HEADER: [&str; COLUMN_COUNT] = ["Date", "Close", "Open", "High", "Low", "Vol."];

/// 과거 시세 한 행. 모든 셀은 문자열 그대로 보관합니다.
pub type HistoricalRow = [String; COLUMN_COUNT];

/// 과거 시세 테이블.
///
/// 0번 행은 항상 헤더입니다. 행은 추가만 가능하며 삭제나 순서 변경은 없습니다.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoricalTable {
    rows: Vec<HistoricalRow>,
}

impl HistoricalTable {
    /// native 헤더만 가진 테이블을 생성합니다.
    pub fn with_native_header() -> Self {
        Self {
            rows: vec![NATIVE_HEADER.map(str::to_string)],
        }
    }

    /// 행 추가.
    pub fn push(&mut self, row: HistoricalRow) {
        self.rows.push(row);
    }

    /// 헤더 행.
    pub fn header(&self) -> &HistoricalRow {
        &self.rows[0]
    }

    /// 헤더를 포함한 전체 행.
    pub fn rows(&self) -> &[HistoricalRow] {
        &self.rows
    }

    /// 헤더를 제외한 데이터 행.
    pub fn data_rows(&self) -> &[HistoricalRow] {
        &self.rows[1..]
    }

    /// 데이터 행 수 (헤더 제외).
    pub fn data_len(&self) -> usize {
        self.rows.len() - 1
    }

    pub fn into_rows(self) -> Vec<HistoricalRow> {
        self.rows
    }

    /// [`reorder`]를 적용한 테이블을 반환합니다.
    pub fn reordered(mut self) -> Self {
        reorder(&mut self);
        self
    }
}

/// native(Close, Open, High, Low) → conventional(Open, High, Low, Close) 컬럼 재배열.
///
/// 헤더를 포함한 모든 행의 1~4번 셀을 바꾸며, 날짜(0)와 거래량(5)은 그대로 둡니다.
/// 테이블당 한 번만 호출해야 합니다. 두 번 적용하면 별도 오류 없이 잘못된 순서가 됩니다.
pub fn reorder(table: &mut HistoricalTable) {
    for row in table.rows.iter_mut() {
        row[1..5].rotate_left(1);
    }
}
