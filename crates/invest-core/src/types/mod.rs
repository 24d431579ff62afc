//! 요청 파라미터 타입 정의.

mod interval;
mod zone;

pub use interval::{Interval, SortOrder};
pub use zone::{DateZone, TIMESTAMP_FORMAT};
