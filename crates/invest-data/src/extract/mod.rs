//! HTML 추출 모듈.
//!
//! - `lexer`: html5ever 기반 토큰 스트림
//! - `table`: `<tbody>` 행 조립 상태 머신

pub mod lexer;
pub mod table;

pub use lexer::{tokenize, HtmlToken};
pub use table::{extract, RowAction, RowAssembler, VALUE_ATTR};
