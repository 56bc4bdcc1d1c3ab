use serde::{Deserialize, Serialize};

use crate::models::common::{Department, LookupName, Teacher};
use crate::models::courses::Course;
use crate::models::semesters::Semester;

/// 列表中的教学班
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionSummary {
    pub id: i64,
    pub jw_id: i64,
    pub code: String,
    pub course_jw_id: i64,
    pub course_name_cn: String,
    pub course_name_en: Option<String>,
    pub credits: Option<f64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SectionDetail {
    pub id: i64,
    pub jw_id: i64,
    pub code: String,
    pub semester: Semester,
    pub course: Course,
    pub open_department: Option<Department>,
    pub campus: Option<LookupName>,
    pub exam_mode: Option<LookupName>,
    pub teach_language: Option<LookupName>,
    pub credits: Option<f64>,
    pub period: Option<i32>,
    pub periods_per_week: Option<f64>,
    pub std_count: Option<i32>,
    pub limit_count: Option<i32>,
    pub graduate_and_postgraduate: bool,
    pub date_time_place_text: Option<String>,
    pub date_time_place_person_text: Option<String>,
    pub teachers: Vec<Teacher>,
    pub admin_classes: Vec<LookupName>,
}
