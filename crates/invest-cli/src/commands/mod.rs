//! CLI 명령 모듈.

pub mod file;
pub mod historical;
pub mod search;

/// 오늘 날짜 (`dd/mm/yyyy`).
pub fn today() -> String {
    chrono::Local::now().format("%d/%m/%Y").to_string()
}
