use std::sync::Arc;

use crate::models::{
    courses::CourseDetail,
    schedules::ScheduleItem,
    sections::{SectionDetail, SectionSummary},
    semesters::Semester,
    system::CatalogCounts,
    teachers::TeacherDetail,
};

use crate::errors::Result;

pub mod sea_orm_storage;

/// 只读查询接口，供 API 层使用
#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// 概览
    // 各主要实体的行数
    async fn count_catalog(&self) -> Result<CatalogCounts>;
    // 最近的学期（按开始日期倒序）
    async fn list_recent_semesters(&self, limit: u64) -> Result<Vec<Semester>>;

    /// 学期
    async fn list_semesters(&self) -> Result<Vec<Semester>>;
    async fn get_semester_by_jw_id(&self, jw_id: i64) -> Result<Option<Semester>>;
    // 学期不存在时返回 None
    async fn list_semester_sections(&self, jw_id: i64) -> Result<Option<Vec<SectionSummary>>>;

    /// 课程与教学班
    async fn get_course_by_jw_id(&self, jw_id: i64) -> Result<Option<CourseDetail>>;
    async fn get_section_by_jw_id(&self, jw_id: i64) -> Result<Option<SectionDetail>>;
    // 按日期、开始时间排序；教学班不存在时返回 None
    async fn list_section_schedules(&self, jw_id: i64) -> Result<Option<Vec<ScheduleItem>>>;

    /// 教师
    async fn get_teacher_by_id(&self, id: i64) -> Result<Option<TeacherDetail>>;
}

pub async fn create_storage() -> Result<Arc<dyn Storage>> {
    let storage = sea_orm_storage::SeaOrmStorage::new_async().await?;
    Ok(Arc::new(storage))
}
