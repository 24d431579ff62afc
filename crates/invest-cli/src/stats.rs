//! 배치 다운로드 통계.

use std::time::Duration;

/// `file` 명령 실행 통계
#[derive(Debug, Clone, Default)]
pub struct BatchStats {
    /// 총 시도 횟수
    pub total: usize,
    /// 성공 횟수
    pub success: usize,
    /// 일치하는 종목 없음
    pub not_found: usize,
    /// 에러 횟수
    pub errors: usize,
    /// 저장된 총 행 수 (헤더 제외)
    pub total_rows: usize,
    /// 소요 시간
    pub elapsed: Duration,
}

impl BatchStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// 성공률 계산 (%)
    pub fn success_rate(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            (self.success as f64 / self.total as f64) * 100.0
        }
    }

    /// 통계 요약 로그 출력
    pub fn log_summary(&self, operation: &str) {
        tracing::info!(
            operation = operation,
            total = self.total,
            success = self.success,
            not_found = self.not_found,
            errors = self.errors,
            total_rows = self.total_rows,
            success_rate = format!("{:.1}%", self.success_rate()),
            elapsed = format!("{:.1}s", self.elapsed.as_secs_f64()),
            "배치 완료"
        );
    }
}
