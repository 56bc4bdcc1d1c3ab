use serde::Serialize;

use super::ScheduleItem;

#[derive(Debug, Clone, Serialize)]
pub struct SectionSchedulesResponse {
    pub section_jw_id: i64,
    pub schedules: Vec<ScheduleItem>,
}
