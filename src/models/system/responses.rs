use serde::{Deserialize, Serialize};

use crate::models::semesters::Semester;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogCounts {
    pub semesters: u64,
    pub courses: u64,
    pub sections: u64,
    pub teachers: u64,
}

#[derive(Debug, Clone, Serialize)]
pub struct OverviewResponse {
    pub system_name: String,
    pub counts: CatalogCounts,
    // 最近的学期，按开始日期倒序
    pub recent_semesters: Vec<Semester>,
    pub uptime_seconds: i64,
}
