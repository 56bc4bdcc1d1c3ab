pub mod common;
pub mod courses;
pub mod schedules;
pub mod sections;
pub mod semesters;
pub mod system;
pub mod teachers;

pub use common::error_code::ErrorCode;
pub use common::response::ApiResponse;

/// 程序启动时间，用于计算运行时长
#[derive(Debug, Clone)]
pub struct AppStartTime {
    pub start_datetime: chrono::DateTime<chrono::Utc>,
}
