use serde::{Deserialize, Serialize};

use crate::models::common::LookupName;
use crate::models::sections::SectionSummary;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    pub id: i64,
    pub jw_id: i64,
    pub code: String,
    pub name_cn: String,
    pub name_en: Option<String>,
}

/// 课程详情，维度引用展开为名称
#[derive(Debug, Clone, Serialize)]
pub struct CourseDetail {
    #[serde(flatten)]
    pub course: Course,
    pub education_level: Option<LookupName>,
    pub gradation: Option<LookupName>,
    pub category: Option<LookupName>,
    pub class_type: Option<LookupName>,
    pub course_type: Option<LookupName>,
    pub classify: Option<LookupName>,
    pub sections: Vec<SectionSummary>,
}
