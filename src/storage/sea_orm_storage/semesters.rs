//! 学期查询

use super::SeaOrmStorage;
use crate::entity::courses::Entity as Courses;
use crate::entity::sections::{Column as SectionColumn, Entity as Sections};
use crate::entity::semesters::{Column, Entity as Semesters};
use crate::errors::{CatalogError, Result};
use crate::models::{sections::SectionSummary, semesters::Semester};
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder};

impl SeaOrmStorage {
    /// 列出所有学期，最新的在前
    pub async fn list_semesters_impl(&self) -> Result<Vec<Semester>> {
        let results = Semesters::find()
            .order_by_desc(Column::StartDate)
            .all(&self.db)
            .await
            .map_err(|e| CatalogError::database_operation(format!("查询学期列表失败: {e}")))?;

        Ok(results.into_iter().map(|m| m.into_semester()).collect())
    }

    /// 通过教务 ID 获取学期
    pub async fn get_semester_by_jw_id_impl(&self, jw_id: i64) -> Result<Option<Semester>> {
        let result = Semesters::find()
            .filter(Column::JwId.eq(jw_id))
            .one(&self.db)
            .await
            .map_err(|e| CatalogError::database_operation(format!("查询学期失败: {e}")))?;

        Ok(result.map(|m| m.into_semester()))
    }

    /// 列出学期内的教学班，按教务 ID 排序
    pub async fn list_semester_sections_impl(
        &self,
        jw_id: i64,
    ) -> Result<Option<Vec<SectionSummary>>> {
        let Some(semester) = self.get_semester_by_jw_id_impl(jw_id).await? else {
            return Ok(None);
        };

        let results = Sections::find()
            .find_also_related(Courses)
            .filter(SectionColumn::SemesterId.eq(semester.id))
            .order_by_asc(SectionColumn::JwId)
            .all(&self.db)
            .await
            .map_err(|e| CatalogError::database_operation(format!("查询教学班列表失败: {e}")))?;

        let sections = results
            .into_iter()
            .filter_map(|(section, course)| course.map(|course| section.into_summary(&course)))
            .collect();

        Ok(Some(sections))
    }
}
