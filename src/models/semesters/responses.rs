use serde::Serialize;

use super::Semester;
use crate::models::sections::SectionSummary;

#[derive(Debug, Clone, Serialize)]
pub struct SemesterListResponse {
    pub items: Vec<Semester>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SemesterSectionsResponse {
    pub semester: Semester,
    pub sections: Vec<SectionSummary>,
}
