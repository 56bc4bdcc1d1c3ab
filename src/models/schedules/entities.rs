use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleRoom {
    pub id: i64,
    pub jw_id: i64,
    pub name_cn: String,
    pub name_en: Option<String>,
    pub building_name_cn: Option<String>,
}

/// 一次具体的上课安排
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleItem {
    pub id: i64,
    pub date: Option<NaiveDate>,
    pub weekday: Option<i32>,
    // HHMM 格式，如 1400
    pub start_time: Option<i32>,
    pub end_time: Option<i32>,
    pub start_unit: Option<i32>,
    pub end_unit: Option<i32>,
    pub periods: Option<i32>,
    pub week_index: Option<i32>,
    pub schedule_group_no: Option<i32>,
    pub room: Option<ScheduleRoom>,
    pub teacher_id: i64,
    pub teacher_name_cn: String,
    pub custom_place: Option<String>,
    pub lesson_type: Option<String>,
    pub experiment: Option<String>,
    pub exercise_class: bool,
}
