use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Semester {
    pub id: i64,
    // 教务系统学期 ID
    pub jw_id: i64,
    pub name: String,
    // 学期代码，如 2024-2025-1
    pub code: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}
