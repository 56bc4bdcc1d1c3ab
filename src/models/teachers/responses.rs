use serde::Serialize;

use crate::models::common::{Department, Teacher};
use crate::models::sections::SectionSummary;

#[derive(Debug, Clone, Serialize)]
pub struct TeacherDetail {
    #[serde(flatten)]
    pub teacher: Teacher,
    pub department: Option<Department>,
    pub sections: Vec<SectionSummary>,
}
