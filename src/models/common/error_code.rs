use serde::{Deserialize, Serialize};

/// API 业务错误码
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[repr(i32)]
pub enum ErrorCode {
    Success = 0,

    // 通用错误
    BadRequest = 1000,
    NotFound = 1004,
    InternalServerError = 1005,

    // 资源不存在
    SemesterNotFound = 2001,
    CourseNotFound = 2002,
    SectionNotFound = 2003,
    TeacherNotFound = 2004,
}
